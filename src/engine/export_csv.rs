//! CSV export of the raw per-trial sequences for downstream histogram
//! tooling. One row per trial; no binning or rendering here, since bin counts
//! and display units are the consumer's call.

use std::fmt;
use std::path::Path;

use crate::engine::monte_carlo::MonteCarloRun;

#[derive(Debug)]
pub enum ExportError {
    Write(csv::Error),
    Flush(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(err) => write!(f, "failed to write CSV export: {err}"),
            Self::Flush(err) => write!(f, "failed to flush CSV export: {err}"),
        }
    }
}

/// Write `trial, penetrated, shots_total` rows in trial order.
pub fn write_trial_sequences<P: AsRef<Path>>(
    path: P,
    run: &MonteCarloRun,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(ExportError::Write)?;
    writer
        .write_record(["trial", "penetrated", "shots_total"])
        .map_err(ExportError::Write)?;

    for (trial, (penetrated, shots)) in run
        .penetrated_per_trial
        .iter()
        .zip(run.shots_per_trial.iter())
        .enumerate()
    {
        writer
            .write_record([
                trial.to_string(),
                penetrated.to_string(),
                shots.to_string(),
            ])
            .map_err(ExportError::Write)?;
    }

    writer.flush().map_err(ExportError::Flush)
}
