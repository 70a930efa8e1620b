// src/pipeline.rs
//! End-to-end mining run
//!
//! Mines every transaction, waits for all workers, then aggregates pending
//! credit over the same transaction list.

use crate::config::Config;
use crate::ledger::{CreditLedger, LeadingRow, calculate_pending_credit};
use crate::miner::algorithm::sha256::Sha256Algo;
use crate::miner::{Scheduler, Worker};
use crate::report::Report;
use crate::stats::StatsReporter;
use crate::types::Transaction;
use crate::utils::error::MinerError;
use std::sync::Arc;
use std::time::Duration;

/// Runs the miner and credit ledger over `transactions`
///
/// # Arguments
/// * `transactions` - Input transactions, in file order
/// * `config` - Worker count, difficulty and ledger policy
///
/// # Returns
/// A [`Report`] with one mining result per transaction in input order and
/// one credit entry per recipient.
pub fn mine_and_report(transactions: &[Transaction], config: &Config) -> Result<Report, MinerError> {
    config.validate()?;

    let mut reporter = StatsReporter::new(Duration::from_secs(config.report_interval_secs));
    let worker = Worker::new(Arc::new(Sha256Algo::new()), config.difficulty()?)
        .with_nonce_limit(config.max_nonce)
        .with_hash_sender(reporter.hash_sender());
    let scheduler = Scheduler::new(worker, config.worker_threads);

    reporter.start_reporting();
    let mined = scheduler.mine(transactions);
    // Drops the last hash sender so the reporter can drain.
    drop(scheduler);
    let hw = reporter.get_hardware_stats();
    log::debug!(
        "CPU: {:.1}% | Memory: {} MiB | Temp: {:.1}°C",
        hw.cpu_usage,
        hw.memory_used / (1024 * 1024),
        hw.temperature
    );
    let stats = reporter.finish();
    let results = mined?;

    log::info!(
        "Computed {} hashes ({:.2} H/s)",
        stats.hashes_total,
        stats.avg_hashrate
    );

    let leading = if config.skip_leading_row {
        LeadingRow::Skip
    } else {
        LeadingRow::Include
    };
    let credits = calculate_pending_credit(transactions, CreditLedger::new(), leading).drain();

    Ok(Report { results, credits })
}
