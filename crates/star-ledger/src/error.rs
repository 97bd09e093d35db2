//! Error types for ledger operations.

use star_ledger_core::CoreError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Every kind here is a business-rule violation, not a transient fault;
/// retrying without changing the input is pointless and nothing in the
/// ledger retries automatically.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Post-stamp validation found inconsistencies; the append was rejected
    /// and the chain is unchanged.
    #[error("chain integrity check failed at indices {indices:?}")]
    ChainIntegrity { indices: Vec<u64> },

    /// The challenge string is not `<address>:<unixSeconds>:starRegistry`.
    #[error("malformed challenge: {0}")]
    MalformedChallenge(String),

    /// More than five minutes elapsed since the challenge was issued.
    #[error("challenge expired: {elapsed_secs}s elapsed")]
    ChallengeExpired { elapsed_secs: i64 },

    /// The signature does not verify against the address and challenge.
    #[error("signature verification rejected")]
    SignatureRejected,

    /// A failure outside the protocol steps occurred during claim
    /// submission (e.g. the claim payload could not be encoded).
    #[error("claim submission failed: {0}")]
    ClaimSubmission(String),

    /// Core error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
