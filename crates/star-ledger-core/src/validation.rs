//! Chain validation: the whole-chain integrity scan.

use crate::block::Block;

/// Scan a chain and report the indices of offending blocks.
///
/// For each index `i` in `0..len-1`:
/// - `i` is recorded if `blocks[i]` fails self-validation (stored hash does
///   not match a recomputation);
/// - `i` is recorded again if `blocks[i].hash` does not equal
///   `blocks[i+1].previous_hash`.
///
/// An index can therefore appear twice, once per distinct violation; the
/// result is not deduped. An empty result means the chain is valid. This
/// function never fails; structural problems are reported as data.
pub fn chain_errors(blocks: &[Block]) -> Vec<u64> {
    let mut errors = Vec::new();

    for i in 0..blocks.len().saturating_sub(1) {
        if !blocks[i].validate() {
            errors.push(i as u64);
        }
        if Some(blocks[i].hash) != blocks[i + 1].previous_hash {
            errors.push(i as u64);
        }
    }

    errors
}
