pub mod config;
pub mod degradation;
pub mod doctrine;
pub mod export_csv;
pub mod monte_carlo;
pub mod rng;
pub mod salvo;
pub mod screening;
pub mod stats;
pub mod trial;

pub use config::{load_config, ConfigError, Doctrine, SimulationConfig};
pub use degradation::TrialDegradation;
pub use doctrine::{resolve_engagement, EngagementOutcome};
pub use export_csv::{write_trial_sequences, ExportError};
pub use monte_carlo::{
    run_monte_carlo, run_monte_carlo_parallel, run_monte_carlo_with_progress, MonteCarloRun,
    MonteCarloSummary,
};
pub use rng::{clamp01, Rng};
pub use salvo::{generate_salvo, Salvo, Target, TargetKind};
pub use screening::{screen_target, TrackCall};
pub use stats::{mean, percentile};
pub use trial::{run_trial, TrialResult};
