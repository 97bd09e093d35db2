//! Testing utilities for the star ledger.
//!
//! Shared fixtures (deterministic wallets, sample star records) and
//! proptest generators used across the workspace's tests.

pub mod fixtures;
pub mod generators;

pub use fixtures::{sample_star, Wallet};
