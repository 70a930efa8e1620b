//! Ledger Miner - proof-of-work over a list of transactions
//!
//! This crate reads financial transactions, mines a block for each one by
//! searching for a nonce whose SHA-256 block digest has enough leading zero
//! bits, and reports the credit each recipient has pending:
//! - Parallel mining across a fixed pool of worker threads
//! - Results emitted in transaction order regardless of completion order
//! - Pending credit and balance ledgers
//! - CSV and JSON reports

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Miner core implementation including digest, partitioning and scheduling
pub mod miner;

/// Pending credit and balance ledgers
pub mod ledger;

/// Transaction file reader
pub mod input;

/// End-to-end mining run
pub mod pipeline;

/// Report rendering
pub mod report;

/// Statistics collection and reporting functionality
pub mod stats;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Configuration management
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::Config;
pub use ledger::{CreditLedger, LeadingRow, calculate_pending_credit, compute_balances};
pub use miner::{Algorithm, Block, Difficulty, MiningResult, Scheduler, Worker};
pub use pipeline::mine_and_report;
pub use report::Report;
pub use stats::{HardwareStats, MiningStats, StatsReporter};
pub use types::{OutputFormat, Transaction};
pub use utils::{MinerError, init_logging};
