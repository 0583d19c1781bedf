//! Batch distribution for parallel trial execution.
//!
//! Splits a trial count into contiguous index ranges for progress reporting;
//! each range runs as one parallel batch and its results are appended in
//! trial order, so batching never changes the output.

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use safeguard::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run a full Monte Carlo batch on `pool`. This is a convenience that calls
/// [crate::engine::monte_carlo::run_monte_carlo_parallel] inside
/// [crate::parallel::pool::WorkerPool::install] when a custom worker count is
/// set.
pub fn run_trial_batches(
    config: &crate::engine::config::SimulationConfig,
    pool: &crate::parallel::pool::WorkerPool,
) -> crate::engine::monte_carlo::MonteCarloRun {
    pool.install(|| crate::engine::monte_carlo::run_monte_carlo_parallel(config))
}
