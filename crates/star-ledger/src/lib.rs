//! # Star Ledger
//!
//! An append-only, hash-linked ledger of signed star ownership claims.
//!
//! ## Overview
//!
//! The ledger holds an ordered sequence of immutable blocks, each bound to
//! its predecessor by a SHA-256 back-link. Writes go through one of two
//! paths:
//!
//! - **Direct append**: the ledger stamps linkage fields onto a candidate
//!   block, seals it, and commits only if the whole chain still validates.
//! - **Claim submission**: a wallet requests a short-lived challenge, signs
//!   it, and submits a star claim; the ledger checks the 5-minute freshness
//!   window and the Ed25519 signature before appending.
//!
//! ## Key Concepts
//!
//! - **Block**: immutable once sealed; changes are new blocks.
//! - **Genesis block**: the distinguished height-0 block created at
//!   initialization, inaccessible for payload decoding.
//! - **Challenge**: `"<address>:<unixSeconds>:starRegistry"`, signed
//!   off-ledger by the claimant's wallet.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use star_ledger::{Ledger, Keypair};
//!
//! async fn example() {
//!     let ledger = Ledger::new();
//!     ledger.initialize().await.unwrap();
//!
//!     let wallet = Keypair::generate();
//!     let challenge = ledger.request_ownership_challenge(&wallet.address());
//!     let signature = wallet.sign(challenge.as_bytes());
//!
//!     let star = serde_json::json!({"ra": "16h 29m 1.0s", "story": "mine"});
//!     let block = ledger
//!         .submit_star_claim(&wallet.address(), &challenge, &signature, star)
//!         .await
//!         .unwrap();
//!     assert!(block.validate());
//! }
//! ```

pub mod challenge;
pub mod error;
pub mod ledger;

// Re-export the core crate
pub use star_ledger_core as core;

pub use challenge::{CHALLENGE_TTL_SECS, REGISTRY_TAG};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;

// Re-export commonly used core types
pub use star_ledger_core::{
    Block, BlockHash, CoreError, Keypair, Signature, StarRecord, WalletAddress,
};
