// src/miner/algorithm/mod.rs
//! Digest algorithm implementations
//!
//! This module contains the supported block digest algorithms and their common
//! interface. Currently implements:
//! - SHA-256 (the default, 32-byte output)

/// SHA-256 algorithm implementation
pub mod sha256;

/// A fixed-length block digest
pub type Digest = [u8; 32];

/// Common interface for all digest algorithms
///
/// Implementations must be pure: hashing the same input and nonce always
/// yields the same bytes, and the method may be called concurrently from any
/// number of worker threads without coordination.
pub trait Algorithm: Send + Sync {
    /// Compute the digest for the given encoded input and nonce
    ///
    /// # Arguments
    /// * `input` - The encoded transaction prefix of a block
    /// * `nonce` - The nonce value appended to the input
    fn hash(&self, input: &[u8], nonce: u64) -> Digest;

    /// Short human readable name, used in log output
    fn name(&self) -> &'static str;
}
