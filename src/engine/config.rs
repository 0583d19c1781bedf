//! Run configuration: one immutable record supplied by the caller (CLI, test
//! harness, or embedding application). The engine reads no ambient state.
//!
//! All probability fields are clamped into [0, 1] by [SimulationConfig::normalized]
//! before they reach the engine; counts are trusted per the documented
//! precondition and only the structural minimums (MIRVs >= 1, trials >= 1) are
//! enforced here.

use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::engine::rng::clamp01;

/// Shot-allocation policy for an engaged warhead track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Doctrine {
    /// Commit a full salvo at once; unused shots in the salvo are still spent.
    Barrage,
    /// Fire one shot, assess, re-engage if feasible, up to a per-target cap.
    ShootLookShoot,
}

impl Default for Doctrine {
    fn default() -> Self {
        Self::Barrage
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub missiles: u32,
    pub mirvs_per_missile: u32,
    pub decoys_per_warhead: u32,
    /// Per-object detection probability before any degradation.
    pub p_detect: f64,
    /// Probability a detected true warhead is classified as a warhead track.
    pub classifier_tpr: f64,
    /// Probability a detected true decoy is classified as a warhead track.
    pub classifier_fpr: f64,
    pub doctrine: Doctrine,
    pub barrage_shots_per_target: u32,
    pub sls_max_shots_per_target: u32,
    /// Feasibility of another shot after a miss (geometry/time-to-go proxy).
    pub sls_reengage_prob: f64,
    /// Per-shot kill probability against a true warhead.
    pub pk_warhead: f64,
    /// Per-shot kill probability against a true decoy.
    pub pk_decoy: f64,
    /// Interceptor inventory shared by every engagement in a trial.
    pub inventory: u32,
    pub trials: u32,
    /// Probability the system is free of common-mode faults for a trial.
    pub p_system_up: f64,
    /// Multiplier applied to detection probability when the system is down.
    pub detect_degrade: f64,
    /// Multiplier applied to both kill probabilities when the system is down.
    pub pk_degrade: f64,
    /// Base seed for the run. When absent, one is drawn from OS entropy, so
    /// pin this to make a run reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            missiles: 10,
            mirvs_per_missile: 3,
            decoys_per_warhead: 4,
            p_detect: 0.9,
            classifier_tpr: 0.85,
            classifier_fpr: 0.15,
            doctrine: Doctrine::Barrage,
            barrage_shots_per_target: 2,
            sls_max_shots_per_target: 3,
            sls_reengage_prob: 0.75,
            pk_warhead: 0.8,
            pk_decoy: 0.8,
            inventory: 120,
            trials: 1_000,
            p_system_up: 0.95,
            detect_degrade: 0.6,
            pk_degrade: 0.5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Boundary normalization: clamp every probability into [0, 1] and enforce
    /// the structural minimums. Not an error path.
    pub fn normalized(mut self) -> Self {
        self.p_detect = clamp01(self.p_detect);
        self.classifier_tpr = clamp01(self.classifier_tpr);
        self.classifier_fpr = clamp01(self.classifier_fpr);
        self.sls_reengage_prob = clamp01(self.sls_reengage_prob);
        self.pk_warhead = clamp01(self.pk_warhead);
        self.pk_decoy = clamp01(self.pk_decoy);
        self.p_system_up = clamp01(self.p_system_up);
        self.detect_degrade = clamp01(self.detect_degrade);
        self.pk_degrade = clamp01(self.pk_degrade);
        self.mirvs_per_missile = self.mirvs_per_missile.max(1);
        self.trials = self.trials.max(1);
        self
    }

    /// Deterministic given the configuration, identical across every trial.
    pub fn real_warheads(&self) -> u32 {
        self.missiles * self.mirvs_per_missile
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read config file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config JSON: {err}"),
        }
    }
}

/// Load a config from a JSON file. Missing fields take their defaults; the
/// result is normalized before it is returned.
pub fn load_config(path: &str) -> Result<SimulationConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(ConfigError::Read)?;
    let config: SimulationConfig = serde_json::from_str(&raw).map_err(ConfigError::Parse)?;
    Ok(config.normalized())
}
