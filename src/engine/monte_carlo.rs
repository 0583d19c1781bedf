//! Monte Carlo aggregation: repeat the trial runner across independent
//! trials and reduce the per-trial counters to distributional statistics.
//!
//! Every trial gets its own PRNG stream derived from the base seed, so a
//! pinned seed makes the whole run reproducible and sequential and parallel
//! execution produce identical output.

use rayon::prelude::*;
use serde::Serialize;

use crate::engine::config::SimulationConfig;
use crate::engine::rng::Rng;
use crate::engine::stats::{mean, percentile};
use crate::engine::trial::{run_trial, TrialResult};
use crate::parallel::{batch_ranges, WorkerPool};

/// Number of progress-reporting batches for progress-driven runs (UI jobs).
const PROGRESS_BATCH_COUNT: usize = 40;

/// Aggregated statistics over all trials. Percentiles are reported for the
/// headline metric (penetrated real warheads); everything else is a mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloSummary {
    pub trials: u32,
    /// Constant across trials: missiles x MIRVs per missile.
    pub real_warheads: u32,
    pub mean_penetrated: f64,
    pub penetrated_p10: f64,
    pub penetrated_p50: f64,
    pub penetrated_p90: f64,
    /// Mean penetrated over the constant real-warhead count; 0 when the
    /// population is empty.
    pub penetration_rate: f64,
    pub mean_intercepted: f64,
    pub mean_detected_objects: f64,
    pub mean_detected_warheads: f64,
    pub mean_true_positives: f64,
    pub mean_false_negatives: f64,
    pub mean_false_positives: f64,
    pub mean_shots_total: f64,
    pub mean_shots_at_warheads: f64,
    pub mean_shots_at_decoys: f64,
    pub mean_inventory_remaining: f64,
    pub system_up_rate: f64,
}

/// Full run output: the summary plus the raw per-trial sequences, kept in
/// trial order for downstream histogram rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloRun {
    pub summary: MonteCarloSummary,
    pub penetrated_per_trial: Vec<u32>,
    pub shots_per_trial: Vec<u32>,
}

pub fn run_monte_carlo(config: &SimulationConfig) -> MonteCarloRun {
    run_monte_carlo_with_parallelism(config, false)
}

/// Like [run_monte_carlo] but fans trials out across all CPU cores via Rayon.
/// Same seed, same output: per-trial seed derivation makes the two paths
/// bit-identical.
pub fn run_monte_carlo_parallel(config: &SimulationConfig) -> MonteCarloRun {
    run_monte_carlo_with_parallelism(config, true)
}

fn run_monte_carlo_with_parallelism(config: &SimulationConfig, parallel: bool) -> MonteCarloRun {
    let base_seed = base_seed_for(config);
    let trials = config.trials as usize;

    let run_one = |trial: usize| {
        let mut rng = Rng::new(base_seed.wrapping_add(trial as u64));
        run_trial(config, &mut rng)
    };

    let results: Vec<TrialResult> = if parallel {
        (0..trials).into_par_iter().map(run_one).collect()
    } else {
        (0..trials).map(run_one).collect()
    };

    summarize(config, &results)
}

/// Like [run_monte_carlo_parallel] but runs trials in batches on `pool` and
/// invokes `on_progress(done, total)` after each batch. Batch boundaries do
/// not affect the result: trial seeds depend only on the trial index.
pub fn run_monte_carlo_with_progress<F>(
    config: &SimulationConfig,
    pool: &WorkerPool,
    mut on_progress: F,
) -> MonteCarloRun
where
    F: FnMut(u32, u32),
{
    let base_seed = base_seed_for(config);
    let trials = config.trials as usize;

    let run_one = |trial: usize| {
        let mut rng = Rng::new(base_seed.wrapping_add(trial as u64));
        run_trial(config, &mut rng)
    };

    // Report total immediately so a UI shows "0 / total" while the first
    // batch runs.
    on_progress(0, trials as u32);

    let num_batches = PROGRESS_BATCH_COUNT.min(trials.max(1));
    let mut results: Vec<TrialResult> = Vec::with_capacity(trials);
    for (start, end) in batch_ranges(trials, num_batches) {
        let batch: Vec<TrialResult> =
            pool.install(|| (start..end).into_par_iter().map(run_one).collect());
        results.extend(batch);
        on_progress(end as u32, trials as u32);
    }

    summarize(config, &results)
}

/// Base seed for the run: the configured seed when pinned, OS entropy
/// otherwise.
fn base_seed_for(config: &SimulationConfig) -> u64 {
    match config.seed {
        Some(seed) => seed,
        None => {
            let mut buf = [0u8; 8];
            getrandom::getrandom(&mut buf).expect("OS entropy for base seed");
            u64::from_le_bytes(buf)
        }
    }
}

fn mean_of(results: &[TrialResult], field: impl Fn(&TrialResult) -> f64) -> f64 {
    let samples: Vec<f64> = results.iter().map(field).collect();
    mean(&samples)
}

fn summarize(config: &SimulationConfig, results: &[TrialResult]) -> MonteCarloRun {
    let penetrated: Vec<f64> = results.iter().map(|r| f64::from(r.penetrated)).collect();
    let real_warheads = config.real_warheads();

    let mean_penetrated = mean(&penetrated);
    let penetration_rate = if real_warheads == 0 {
        0.0
    } else {
        mean_penetrated / f64::from(real_warheads)
    };

    let summary = MonteCarloSummary {
        trials: results.len() as u32,
        real_warheads,
        mean_penetrated,
        penetrated_p10: percentile(&penetrated, 10.0),
        penetrated_p50: percentile(&penetrated, 50.0),
        penetrated_p90: percentile(&penetrated, 90.0),
        penetration_rate,
        mean_intercepted: mean_of(results, |r| f64::from(r.intercepted)),
        mean_detected_objects: mean_of(results, |r| f64::from(r.detected_objects)),
        mean_detected_warheads: mean_of(results, |r| f64::from(r.detected_warheads)),
        mean_true_positives: mean_of(results, |r| f64::from(r.true_positives)),
        mean_false_negatives: mean_of(results, |r| f64::from(r.false_negatives)),
        mean_false_positives: mean_of(results, |r| f64::from(r.false_positives)),
        mean_shots_total: mean_of(results, |r| f64::from(r.shots_total)),
        mean_shots_at_warheads: mean_of(results, |r| f64::from(r.shots_at_warheads)),
        mean_shots_at_decoys: mean_of(results, |r| f64::from(r.shots_at_decoys)),
        mean_inventory_remaining: mean_of(results, |r| f64::from(r.inventory_remaining)),
        system_up_rate: mean_of(results, |r| if r.system_up { 1.0 } else { 0.0 }),
    };

    MonteCarloRun {
        summary,
        penetrated_per_trial: results.iter().map(|r| r.penetrated).collect(),
        shots_per_trial: results.iter().map(|r| r.shots_total).collect(),
    }
}
