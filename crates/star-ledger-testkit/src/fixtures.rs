//! Test fixtures: wallets and sample star data.

use star_ledger_core::{Keypair, Signature, StarRecord, WalletAddress};

/// A claimant wallet for tests: keypair plus the helpers a real wallet
/// would provide (signing the challenge string).
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Create a wallet with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create a deterministic wallet from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The wallet's address.
    pub fn address(&self) -> WalletAddress {
        self.keypair.address()
    }

    /// Sign a challenge string the way wallet software would.
    pub fn sign_challenge(&self, challenge: &str) -> Signature {
        self.keypair.sign(challenge.as_bytes())
    }

    /// Build a claim record owned by this wallet.
    pub fn claim(&self, star: serde_json::Value) -> StarRecord {
        StarRecord {
            star,
            owner: self.address().to_hex(),
        }
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

/// A sample star, in the shape wallet software submits.
pub fn sample_star() -> serde_json::Value {
    serde_json::json!({
        "dec": "68° 52' 56.9",
        "ra": "16h 29m 1.0s",
        "story": "Testing the story 4"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_determinism() {
        let w1 = Wallet::with_seed([0x11; 32]);
        let w2 = Wallet::with_seed([0x11; 32]);
        assert_eq!(w1.address(), w2.address());
    }

    #[test]
    fn test_sign_challenge_verifies() {
        let wallet = Wallet::new();
        let challenge = format!("{}:1700000000:starRegistry", wallet.address().to_hex());
        let signature = wallet.sign_challenge(&challenge);
        assert!(wallet
            .address()
            .verify(challenge.as_bytes(), &signature)
            .is_ok());
    }
}
