//! Error types for the star ledger core.

use thiserror::Error;

/// Core errors that can occur during block and payload operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Payload decoding was attempted on the genesis block. The genesis
    /// payload is deliberately inaccessible to callers.
    #[error("the genesis block payload is not accessible")]
    GenesisAccess,

    #[error("payload encoding error: {0}")]
    PayloadEncoding(String),

    #[error("malformed claim record: {0}")]
    MalformedClaim(String),

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature")]
    InvalidSignature,
}
