// src/miner/scheduler.rs
//! Mining scheduler implementation
//!
//! Partitions the transaction list across a fixed pool of worker threads and
//! collects one result per transaction into a pre-sized slot arena. Each
//! worker receives an exclusive `&mut` window of the arena covering its own
//! partition, so results need no locking and always come back in
//! transaction order.

use crate::miner::algorithm::Digest;
use crate::miner::partition::partition;
use crate::miner::worker::Worker;
use crate::types::Transaction;
use crate::utils::error::MinerError;
use std::fmt;
use std::ops::Range;
use std::time::Instant;

/// Outcome of mining a single transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiningResult {
    /// A nonce meeting the difficulty target was found
    Success {
        /// Smallest nonce meeting the target
        nonce: u64,
        /// Digest of the block built from the transaction and nonce
        digest: Digest,
        /// The mined transaction
        transaction: Transaction,
    },
    /// The nonce space was searched without meeting the target
    Exhausted {
        /// The transaction that could not be mined
        transaction: Transaction,
    },
}

impl MiningResult {
    /// The transaction this result belongs to
    pub fn transaction(&self) -> &Transaction {
        match self {
            MiningResult::Success { transaction, .. } => transaction,
            MiningResult::Exhausted { transaction } => transaction,
        }
    }

    /// Whether a valid nonce was found
    pub fn is_success(&self) -> bool {
        matches!(self, MiningResult::Success { .. })
    }
}

/// Renders the result as a single report line
///
/// Success: `timestamp,sender,recipient,amount,nonce,digest_hex`.
/// Failure: a sentinel sentence followed by the transaction fields.
impl fmt::Display for MiningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiningResult::Success {
                nonce,
                digest,
                transaction,
            } => write!(f, "{},{},{}", transaction, nonce, hex::encode(digest)),
            MiningResult::Exhausted { transaction } => {
                write!(f, "block mining unsuccessful for transaction: {}", transaction)
            }
        }
    }
}

/// Coordinates mining across worker threads
pub struct Scheduler {
    /// Worker logic shared by every thread
    worker: Worker,
    /// Requested number of worker threads
    workers: usize,
}

impl Scheduler {
    /// Creates a new Scheduler instance
    ///
    /// # Arguments
    /// * `worker` - The configured worker every thread runs
    /// * `workers` - Requested thread count; clamped to the transaction count
    pub fn new(worker: Worker, workers: usize) -> Self {
        Scheduler { worker, workers }
    }

    /// Mines every transaction and returns the results in input order
    ///
    /// Spawns one thread per partition and blocks until all of them finish.
    /// Individual transactions never fail the run; an unsuccessful search is
    /// reported as [`MiningResult::Exhausted`].
    ///
    /// # Errors
    /// Returns `MinerError::ThreadPoolError` if the worker threads cannot be
    /// created.
    pub fn mine(&self, transactions: &[Transaction]) -> Result<Vec<MiningResult>, MinerError> {
        let parts = partition(transactions.len(), self.workers);
        if parts.is_empty() {
            log::info!("No transactions to mine");
            return Ok(Vec::new());
        }

        log::info!(
            "Mining {} transactions on {} threads ({}, {}, ~{:.0} hashes per block)",
            transactions.len(),
            parts.len(),
            self.worker.algorithm_name(),
            self.worker.difficulty(),
            self.worker.difficulty().estimated_attempts()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parts.len())
            .thread_name(|rank| format!("miner-{}", rank))
            .build()?;

        let started = Instant::now();
        let mut slots: Vec<Option<MiningResult>> = vec![None; transactions.len()];
        let shards = split_slots(&mut slots, &parts);

        pool.scope(|scope| {
            for (range, shard) in shards {
                let worker = &self.worker;
                let assigned = &transactions[range.clone()];
                scope.spawn(move |_| {
                    log::debug!("Worker started on transactions {:?}", range);
                    worker.run(assigned, shard);
                    log::debug!("Worker finished transactions {:?}", range);
                });
            }
        });

        let results = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    MinerError::TaskError(format!("no result recorded for transaction {}", index))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mined = results.iter().filter(|r| r.is_success()).count();
        log::info!(
            "Mined {} blocks, {} exhausted in {:.2?}",
            mined,
            results.len() - mined,
            started.elapsed()
        );

        Ok(results)
    }
}

/// Splits the slot arena into one exclusive window per partition
fn split_slots<'a>(
    mut slots: &'a mut [Option<MiningResult>],
    parts: &[Range<usize>],
) -> Vec<(Range<usize>, &'a mut [Option<MiningResult>])> {
    let mut shards = Vec::with_capacity(parts.len());
    for range in parts {
        let (head, tail) = std::mem::take(&mut slots).split_at_mut(range.len());
        shards.push((range.clone(), head));
        slots = tail;
    }
    shards
}
