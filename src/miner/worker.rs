// src/miner/worker.rs
//! Worker implementation
//!
//! Handles the actual mining work: for every transaction in its assigned
//! range, a worker brute-forces the nonce space from zero upwards until the
//! block digest meets the difficulty target or the nonce space runs out.

use crate::miner::algorithm::Algorithm;
use crate::miner::block::encode_transaction;
use crate::miner::difficulty::Difficulty;
use crate::miner::scheduler::MiningResult;
use crate::types::Transaction;
use crossbeam_channel::Sender;
use std::sync::Arc;

/// Number of hashes a worker accumulates before reporting them
const REPORT_BATCH: u64 = 1 << 16;

/// Performs the nonce search for individual transactions
///
/// A worker holds no per-transaction state, so one instance can be shared by
/// reference across all mining threads.
#[derive(Clone)]
pub struct Worker {
    /// The digest algorithm to use
    algorithm: Arc<dyn Algorithm>,
    /// Target every successful digest must meet
    difficulty: Difficulty,
    /// Largest nonce tried before giving up (inclusive)
    max_nonce: u64,
    /// Optional channel for reporting hash counts
    hash_sender: Option<Sender<u64>>,
}

impl Worker {
    /// Creates a new Worker searching the full 64-bit nonce space
    ///
    /// # Arguments
    /// * `algorithm` - The digest algorithm to use
    /// * `difficulty` - Target a digest must meet
    pub fn new(algorithm: Arc<dyn Algorithm>, difficulty: Difficulty) -> Self {
        Worker {
            algorithm,
            difficulty,
            max_nonce: u64::MAX,
            hash_sender: None,
        }
    }

    /// Caps the nonce search at `max_nonce` (inclusive)
    pub fn with_nonce_limit(mut self, max_nonce: u64) -> Self {
        self.max_nonce = max_nonce;
        self
    }

    /// Reports completed hash counts through `sender`
    pub fn with_hash_sender(mut self, sender: Sender<u64>) -> Self {
        self.hash_sender = Some(sender);
        self
    }

    /// The target this worker mines against
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Name of the digest algorithm in use
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Searches for the smallest nonce whose block digest meets the target
    ///
    /// Nonces are tried in increasing order starting at zero. If no nonce up
    /// to the limit works the transaction is reported as exhausted.
    pub fn mine(&self, transaction: &Transaction) -> MiningResult {
        let prefix = encode_transaction(transaction);
        let mut unreported = 0u64;

        for nonce in 0..=self.max_nonce {
            let digest = self.algorithm.hash(&prefix, nonce);
            unreported += 1;

            if self.difficulty.is_met_by(&digest) {
                self.report_hashes(unreported);
                return MiningResult::Success {
                    nonce,
                    digest,
                    transaction: transaction.clone(),
                };
            }

            if unreported == REPORT_BATCH {
                self.report_hashes(unreported);
                unreported = 0;
            }
        }

        self.report_hashes(unreported);
        log::warn!(
            "Nonce space exhausted for transaction {} (limit {})",
            transaction,
            self.max_nonce
        );
        MiningResult::Exhausted {
            transaction: transaction.clone(),
        }
    }

    /// Mines every transaction in `transactions`, writing one result per slot
    ///
    /// `slots` is this worker's exclusive window of the result arena and must
    /// be the same length as `transactions`.
    pub fn run(&self, transactions: &[Transaction], slots: &mut [Option<MiningResult>]) {
        debug_assert_eq!(transactions.len(), slots.len());

        for (tx, slot) in transactions.iter().zip(slots.iter_mut()) {
            *slot = Some(self.mine(tx));
        }
    }

    fn report_hashes(&self, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(sender) = &self.hash_sender {
            // The reporter going away must not stop mining.
            let _ = sender.send(count);
        }
    }
}
