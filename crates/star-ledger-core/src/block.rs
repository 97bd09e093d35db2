//! Block: one immutable, hash-linked ledger entry.
//!
//! A block starts life as an unsealed candidate carrying only its payload.
//! The ledger stamps height, timestamp, and the back-link, then seals it by
//! computing the hash. Once sealed and appended, a block is never mutated.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::hash_preimage;
use crate::crypto::WalletAddress;
use crate::error::CoreError;
use crate::payload::{self, StarRecord};
use crate::types::BlockHash;

/// The distinguished genesis payload text. It carries no owner and no star
/// content and is never decodable through [`Block::decode_payload`].
pub const GENESIS_DATA: &str = "Genesis Block";

/// One ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; block 0 is the genesis block. Assigned by the
    /// ledger, never by the caller.
    pub height: u64,

    /// Unix seconds, stamped at append time. 0 until sealed.
    pub timestamp: i64,

    /// Hash of the block at `height - 1`; None for genesis.
    pub previous_hash: Option<BlockHash>,

    /// Wallet address of the claimant, duplicated outside the payload so
    /// claims can be filtered without decoding every block.
    pub owner: Option<WalletAddress>,

    /// Opaque hex-encoded payload blob.
    pub payload: Bytes,

    /// SHA-256 of the canonical preimage (all other fields, fixed order).
    /// [`BlockHash::ZERO`] until sealed.
    pub hash: BlockHash,
}

impl Block {
    /// Create an unsealed candidate carrying the given text.
    pub fn new(data: &str) -> Self {
        Self {
            height: 0,
            timestamp: 0,
            previous_hash: None,
            owner: None,
            payload: payload::encode_text(data),
            hash: BlockHash::ZERO,
        }
    }

    /// Create an unsealed candidate carrying a star-ownership claim.
    ///
    /// The owner is stamped from the record so the chain can be filtered by
    /// address without decoding payloads.
    pub fn claim(record: &StarRecord) -> Result<Self, CoreError> {
        let owner = WalletAddress::from_hex(&record.owner)?;
        Ok(Self {
            height: 0,
            timestamp: 0,
            previous_hash: None,
            owner: Some(owner),
            payload: payload::encode_record(record)?,
            hash: BlockHash::ZERO,
        })
    }

    /// Create the unsealed genesis candidate.
    pub fn genesis() -> Self {
        Self::new(GENESIS_DATA)
    }

    /// Seal the candidate: stamp linkage fields and compute the hash.
    ///
    /// Consumes the candidate; the returned block is final.
    pub fn seal(
        mut self,
        height: u64,
        timestamp: i64,
        previous_hash: Option<BlockHash>,
    ) -> Self {
        self.height = height;
        self.timestamp = timestamp;
        self.previous_hash = previous_hash;
        self.hash = self.compute_hash();
        self
    }

    /// Compute the hash of the canonical preimage.
    ///
    /// The hash field itself is excluded from the preimage, so this is a
    /// pure read with no temporary mutation.
    pub fn compute_hash(&self) -> BlockHash {
        BlockHash::hash(&hash_preimage(self))
    }

    /// Check that the stored hash matches a recomputation.
    ///
    /// Returns false for tampered and unsealed blocks alike.
    pub fn validate(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Check whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_none()
    }

    /// Decode the payload back to its original text.
    ///
    /// Fails with [`CoreError::GenesisAccess`] on the genesis block; its
    /// payload is deliberately inaccessible. This is a business rule, not
    /// an encoding failure.
    pub fn decode_payload(&self) -> Result<String, CoreError> {
        if self.height == 0 {
            return Err(CoreError::GenesisAccess);
        }
        payload::decode_text(&self.payload)
    }

    /// Decode the payload as a star-ownership claim.
    pub fn decode_claim(&self) -> Result<StarRecord, CoreError> {
        if self.height == 0 {
            return Err(CoreError::GenesisAccess);
        }
        payload::decode_record(&self.payload)
    }
}
