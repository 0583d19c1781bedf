use std::env;

use crate::engine::config::{load_config, SimulationConfig};
use crate::engine::export_csv::write_trial_sequences;
use crate::engine::monte_carlo::run_monte_carlo_with_progress;
use crate::parallel::{run_trial_batches, WorkerPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Export) => handle_export(args),
        None => {
            eprintln!("usage: safeguard <simulate|export>");
            2
        }
    }
}

/// Worker count override for parallel runs, 0 = all cores.
fn worker_pool_from_env() -> WorkerPool {
    let workers = env::var("SAFEGUARD_WORKERS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    WorkerPool::with_workers(workers)
}

fn config_from_args(args: &[String]) -> Result<SimulationConfig, i32> {
    match args.get(2).filter(|arg| !arg.starts_with("--")) {
        Some(path) => match load_config(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                eprintln!("{err}");
                Err(1)
            }
        },
        None => Ok(SimulationConfig::default().normalized()),
    }
}

fn handle_simulate(args: &[String]) -> i32 {
    let as_table = args.iter().any(|arg| arg == "--table");
    let config = match config_from_args(args) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let run = run_trial_batches(&config, &worker_pool_from_env());

    if as_table {
        let s = &run.summary;
        println!("trials\treal_warheads\tmean_penetrated\tp10\tp50\tp90\tpenetration_rate\tmean_shots");
        println!(
            "{}\t{}\t{:.4}\t{:.1}\t{:.1}\t{:.1}\t{:.4}\t{:.2}",
            s.trials,
            s.real_warheads,
            s.mean_penetrated,
            s.penetrated_p10,
            s.penetrated_p50,
            s.penetrated_p90,
            s.penetration_rate,
            s.mean_shots_total
        );
        return 0;
    }

    match serde_json::to_string_pretty(&run) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize run output: {err}");
            1
        }
    }
}

fn handle_export(args: &[String]) -> i32 {
    let (Some(config_path), Some(output_path)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: safeguard export <config.json> <out.csv>");
        return 2;
    };

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    let pool = worker_pool_from_env();
    let run = run_monte_carlo_with_progress(&config, &pool, |done, total| {
        if done > 0 && done == total {
            eprintln!("completed {done}/{total} trials");
        }
    });

    match write_trial_sequences(output_path, &run) {
        Ok(()) => {
            println!(
                "export complete: trials={}, output='{}'",
                run.summary.trials, output_path
            );
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
