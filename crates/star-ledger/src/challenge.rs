//! Ownership challenge: a short-lived string binding an address, an
//! issuance time, and the registry tag.
//!
//! Format: `"<addressHex>:<unixSeconds>:starRegistry"`. The wallet signs
//! the literal string bytes; the ledger checks freshness from the embedded
//! timestamp before verifying the signature.

use star_ledger_core::WalletAddress;

use crate::error::LedgerError;

/// The fixed tag terminating every challenge string.
pub const REGISTRY_TAG: &str = "starRegistry";

/// Maximum age of a challenge at submission time (five minutes).
pub const CHALLENGE_TTL_SECS: i64 = 5 * 60;

/// Compose a challenge for the given address at the given time.
///
/// Pure function of its inputs; never fails.
pub fn issue(address: &WalletAddress, now_secs: i64) -> String {
    format!("{}:{}:{}", address.to_hex(), now_secs, REGISTRY_TAG)
}

/// Extract the issuance timestamp embedded in a challenge.
///
/// The timestamp is the second colon-delimited field.
pub fn embedded_timestamp(challenge: &str) -> Result<i64, LedgerError> {
    let field = challenge
        .split(':')
        .nth(1)
        .ok_or_else(|| LedgerError::MalformedChallenge("missing timestamp field".into()))?;
    field
        .parse::<i64>()
        .map_err(|_| LedgerError::MalformedChallenge(format!("unparsable timestamp: {field}")))
}

/// Check whether a challenge issued at `issued_secs` is stale at `now_secs`.
pub fn is_expired(issued_secs: i64, now_secs: i64) -> bool {
    now_secs - issued_secs > CHALLENGE_TTL_SECS
}
