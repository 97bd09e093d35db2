//! The Ledger: owner of the ordered, hash-linked block sequence.
//!
//! All mutation goes through a single write lock, so two appends can never
//! interleave between reading the tail and committing (the lost-update race
//! a lockless chain would have). Readers take the read lock and never
//! observe a half-appended tail.

use tokio::sync::RwLock;
use tracing::{debug, warn};

use star_ledger_core::{chain_errors, Block, BlockHash, Signature, StarRecord, WalletAddress};

use crate::challenge;
use crate::error::{LedgerError, Result};

/// The append-only ledger of star ownership claims.
///
/// One instance per process, owned by a long-lived context object and
/// shared by reference; there is no process-wide singleton.
pub struct Ledger {
    chain: RwLock<Vec<Block>>,
}

impl Ledger {
    /// Create an empty ledger (height -1, no genesis yet).
    ///
    /// Call [`Ledger::initialize`] once before use.
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Vec::new()),
        }
    }

    /// Synthesize and append the genesis block if the chain is empty.
    ///
    /// Goes through the same append path as any other block. Idempotent:
    /// a second call against a non-empty chain is a no-op.
    pub async fn initialize(&self) -> Result<()> {
        let mut chain = self.chain.write().await;
        if !chain.is_empty() {
            debug!("ledger already initialized");
            return Ok(());
        }
        let genesis = Self::append_locked(&mut chain, Block::genesis())?;
        debug!(hash = %genesis.hash, "genesis block created");
        Ok(())
    }

    /// Append a candidate block.
    ///
    /// Stamps the timestamp, the next height, and the back-link to the
    /// current tail, seals the candidate, and commits only if the whole
    /// resulting chain validates. A rejected append leaves no trace.
    pub async fn append_block(&self, block: Block) -> Result<Block> {
        let mut chain = self.chain.write().await;
        Self::append_locked(&mut chain, block)
    }

    /// Append under an already-held write lock.
    fn append_locked(chain: &mut Vec<Block>, block: Block) -> Result<Block> {
        let height = chain.len() as u64;
        let previous_hash = chain.last().map(|tail| tail.hash);
        let sealed = block.seal(height, now_secs(), previous_hash);

        // Full-chain scan before the append becomes visible. The write lock
        // is held throughout, so push + pop is atomic to every reader.
        chain.push(sealed.clone());
        let indices = chain_errors(chain);
        if !indices.is_empty() {
            chain.pop();
            warn!(?indices, height, "append rejected by integrity check");
            return Err(LedgerError::ChainIntegrity { indices });
        }

        debug!(height, hash = %sealed.hash, "block appended");
        Ok(sealed)
    }

    /// Current chain height: `blocks.len() - 1`, or -1 before genesis.
    pub async fn chain_height(&self) -> i64 {
        let chain = self.chain.read().await;
        chain.len() as i64 - 1
    }

    /// Issue an ownership challenge for the given address.
    ///
    /// Pure function of the current time and the address; touches no chain
    /// state and never fails. The wallet signs the returned string bytes.
    pub fn request_ownership_challenge(&self, address: &WalletAddress) -> String {
        challenge::issue(address, now_secs())
    }

    /// Submit a signed star ownership claim.
    ///
    /// Protocol, in order:
    /// 1. the timestamp embedded in `challenge` must parse;
    /// 2. the challenge must be no older than five minutes;
    /// 3. `signature` must verify over the literal challenge bytes against
    ///    `address`;
    /// 4. the claim block is built and appended.
    pub async fn submit_star_claim(
        &self,
        address: &WalletAddress,
        challenge: &str,
        signature: &Signature,
        star: serde_json::Value,
    ) -> Result<Block> {
        let issued = challenge::embedded_timestamp(challenge)?;

        let now = now_secs();
        if challenge::is_expired(issued, now) {
            warn!(%address, elapsed_secs = now - issued, "claim rejected: challenge expired");
            return Err(LedgerError::ChallengeExpired {
                elapsed_secs: now - issued,
            });
        }

        if address.verify(challenge.as_bytes(), signature).is_err() {
            warn!(%address, "claim rejected: signature verification failed");
            return Err(LedgerError::SignatureRejected);
        }

        let record = StarRecord {
            star,
            owner: address.to_hex(),
        };
        let block = Block::claim(&record)
            .map_err(|e| LedgerError::ClaimSubmission(e.to_string()))?;

        self.append_block(block).await
    }

    /// Find the first block with the given hash, if any.
    pub async fn block_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        let chain = self.chain.read().await;
        chain.iter().find(|block| block.hash == *hash).cloned()
    }

    /// Find the first block at the given height, if any.
    pub async fn block_by_height(&self, height: u64) -> Option<Block> {
        let chain = self.chain.read().await;
        chain.iter().find(|block| block.height == height).cloned()
    }

    /// Decode every claim owned by the given address, in chain order.
    ///
    /// Filters on the out-of-payload owner field, so non-matching blocks
    /// are never decoded. Returns an empty vec when the address owns
    /// nothing.
    pub async fn claims_by_address(&self, address: &WalletAddress) -> Result<Vec<StarRecord>> {
        let chain = self.chain.read().await;
        chain
            .iter()
            .filter(|block| block.owner.as_ref() == Some(address))
            .map(|block| block.decode_claim().map_err(LedgerError::from))
            .collect()
    }

    /// Scan the whole chain and return the indices of offending blocks.
    ///
    /// Empty means the chain is valid. An index can appear twice, once per
    /// distinct violation; see [`chain_errors`].
    pub async fn validate_chain(&self) -> Vec<u64> {
        let chain = self.chain.read().await;
        chain_errors(&chain)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time in Unix seconds.
fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_creates_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.chain_height().await, -1);

        ledger.initialize().await.unwrap();
        assert_eq!(ledger.chain_height().await, 0);

        let genesis = ledger.block_by_height(0).await.unwrap();
        assert!(genesis.is_genesis());
        assert!(genesis.validate());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let ledger = Ledger::new();
        ledger.initialize().await.unwrap();
        ledger.initialize().await.unwrap();
        assert_eq!(ledger.chain_height().await, 0);
    }

    #[tokio::test]
    async fn test_append_stamps_linkage() {
        let ledger = Ledger::new();
        ledger.initialize().await.unwrap();

        let genesis_hash = ledger.block_by_height(0).await.unwrap().hash;
        let block = ledger.append_block(Block::new("First Block")).await.unwrap();

        assert_eq!(block.height, 1);
        assert_eq!(block.previous_hash, Some(genesis_hash));
        assert!(block.validate());
        assert!(ledger.validate_chain().await.is_empty());
    }

    #[tokio::test]
    async fn test_block_by_hash() {
        let ledger = Ledger::new();
        ledger.initialize().await.unwrap();
        let block = ledger.append_block(Block::new("findable")).await.unwrap();

        let found = ledger.block_by_hash(&block.hash).await.unwrap();
        assert_eq!(found, block);

        let missing = BlockHash::from_bytes([0x77; 32]);
        assert!(ledger.block_by_hash(&missing).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_appends_stay_contiguous() {
        use std::sync::Arc;

        let ledger = Arc::new(Ledger::new());
        ledger.initialize().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                ledger.append_block(Block::new(&format!("block {i}"))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(ledger.chain_height().await, 8);
        assert!(ledger.validate_chain().await.is_empty());
    }
}
