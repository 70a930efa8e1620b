// src/miner/mod.rs
//! Core mining functionality
//!
//! This module contains all components related to the mining process:
//! - Digest algorithms and block encoding
//! - Difficulty targets
//! - Work partitioning and scheduling
//! - Worker nonce search

/// Digest algorithm implementations
pub mod algorithm;

/// Fixed-width block encoding and block digests
pub mod block;

/// Leading-zero-bit difficulty targets
pub mod difficulty;

/// Splitting the transaction range across workers
pub mod partition;

/// Mining scheduler
///
/// Runs one worker thread per partition and collects results in transaction
/// order.
pub mod scheduler;

/// Worker nonce search
pub mod worker;

// Re-export main components for cleaner imports
pub use self::algorithm::{Algorithm, Digest};
pub use self::block::Block;
pub use self::difficulty::Difficulty;
pub use self::scheduler::{MiningResult, Scheduler};
pub use self::worker::Worker;
