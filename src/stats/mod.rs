//! Statistics collection and reporting module
//!
//! This module provides functionality for tracking and reporting mining
//! progress, including:
//! - Hash counts and hashrate
//! - Hardware monitoring (CPU, memory, temperature)
//!
//! The main component is [`StatsReporter`] which collects data and can
//! periodically report statistics to the log.

/// Submodule containing the statistics reporter implementation
pub mod reporter;

// Re-export main components
pub use reporter::{HardwareStats, MiningStats, StatsReporter};
