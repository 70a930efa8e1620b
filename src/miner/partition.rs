// src/miner/partition.rs
//! Work partitioning
//!
//! Splits the transaction index range into contiguous, non-overlapping slices,
//! one per worker. The last slice absorbs the remainder.

use std::ops::Range;

/// Number of workers that will actually run for `total` transactions
///
/// Clamped into `[1, total]` so that no partition is empty. Zero
/// transactions need zero workers.
pub fn effective_workers(total: usize, requested: usize) -> usize {
    if total == 0 {
        0
    } else {
        requested.clamp(1, total)
    }
}

/// Divides `[0, total)` into contiguous ranges, one per worker
///
/// Ranges are returned in index order and cover every index exactly once.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = effective_workers(total, workers);
    if workers == 0 {
        return Vec::new();
    }

    let size = total / workers;
    (0..workers)
        .map(|rank| {
            let start = rank * size;
            let end = if rank == workers - 1 {
                total
            } else {
                start + size
            };
            start..end
        })
        .collect()
}
