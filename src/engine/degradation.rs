//! Common-mode reliability degradation: one Bernoulli draw per trial decides
//! whether detection and kill probabilities run at their configured values or
//! scaled down by the degrade factors. The draw models a systemic fault
//! (sensor/C2 disruption), not per-object noise, so it is shared by every
//! object in the trial.

use crate::engine::config::SimulationConfig;
use crate::engine::rng::{clamp01, Rng};
use crate::engine::salvo::TargetKind;

/// The three operative probabilities for one trial, fixed before any
/// per-object processing.
#[derive(Debug, Clone, Copy)]
pub struct TrialDegradation {
    pub system_up: bool,
    pub p_detect: f64,
    pub pk_warhead: f64,
    pub pk_decoy: f64,
}

impl TrialDegradation {
    /// Draw the trial-wide state. Must be called exactly once per trial.
    pub fn draw(config: &SimulationConfig, rng: &mut Rng) -> Self {
        let system_up = rng.chance(config.p_system_up);
        if system_up {
            Self {
                system_up,
                p_detect: config.p_detect,
                pk_warhead: config.pk_warhead,
                pk_decoy: config.pk_decoy,
            }
        } else {
            Self {
                system_up,
                p_detect: clamp01(config.p_detect * config.detect_degrade),
                pk_warhead: clamp01(config.pk_warhead * config.pk_degrade),
                pk_decoy: clamp01(config.pk_decoy * config.pk_degrade),
            }
        }
    }

    /// Kill probability conditioned on the target's TRUE kind, never on the
    /// classifier's call.
    pub fn pk_for(&self, kind: TargetKind) -> f64 {
        match kind {
            TargetKind::Warhead => self.pk_warhead,
            TargetKind::Decoy => self.pk_decoy,
        }
    }
}
