//! Run Monte Carlo once sequentially and once in parallel, then print timings
//! and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup

use std::time::Instant;

use safeguard::engine::config::SimulationConfig;
use safeguard::engine::monte_carlo::{run_monte_carlo, run_monte_carlo_parallel};

fn main() {
    let config = SimulationConfig {
        missiles: 20,
        mirvs_per_missile: 4,
        decoys_per_warhead: 5,
        inventory: 400,
        trials: 20_000,
        seed: Some(12345),
        ..SimulationConfig::default()
    }
    .normalized();

    println!(
        "Monte Carlo: {} trials x {} objects per salvo",
        config.trials,
        config.real_warheads() * (1 + config.decoys_per_warhead)
    );
    println!();

    let t0 = Instant::now();
    let run_seq = run_monte_carlo(&config);
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!(
        "Sequential:  {:.2} ms  ({:.1} trials/s)",
        seq_ms,
        config.trials as f64 / elapsed_seq.as_secs_f64()
    );

    let t0 = Instant::now();
    let run_par = run_monte_carlo_parallel(&config);
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!(
        "Parallel:    {:.2} ms  ({:.1} trials/s)",
        par_ms,
        config.trials as f64 / elapsed_par.as_secs_f64()
    );

    let speedup = seq_ms / par_ms;
    println!();
    println!("Speedup:     {speedup:.2}x faster (parallel vs sequential)");

    // Per-trial seed derivation makes the two paths bit-identical.
    assert_eq!(run_seq, run_par, "sequential and parallel runs diverged");
    println!("(Results match sequential vs parallel)");
}
