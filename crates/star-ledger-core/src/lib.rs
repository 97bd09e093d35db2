//! # Star Ledger Core
//!
//! Pure primitives for the star ledger: blocks, canonical hashing, and the
//! claim payload codec.
//!
//! This crate contains no I/O and no locking. It is pure computation over
//! cryptographic data structures; the chain itself lives in `star-ledger`.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable, hash-linked ledger entry
//! - [`BlockHash`] - SHA-256 content address of a sealed block
//! - [`WalletAddress`] - Ed25519 public key identifying a claimant
//! - [`StarRecord`] - The decoded star-ownership claim carried in a payload
//!
//! ## Canonicalization
//!
//! Block hashes are computed over a deterministic CBOR preimage that covers
//! every field except the hash itself. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;
pub mod validation;

pub use block::{Block, GENESIS_DATA};
pub use canonical::hash_preimage;
pub use crypto::{Keypair, Signature, WalletAddress};
pub use error::CoreError;
pub use payload::{decode_record, decode_text, encode_record, encode_text, StarRecord};
pub use types::BlockHash;
pub use validation::chain_errors;
