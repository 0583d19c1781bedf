//! Detection and classification of a single object: a Bernoulli detection
//! draw at the trial's operative detection probability, then a Bernoulli
//! classification draw whose probability depends on the object's true kind
//! (TPR for warheads, FPR for decoys).

use crate::engine::config::SimulationConfig;
use crate::engine::degradation::TrialDegradation;
use crate::engine::rng::Rng;
use crate::engine::salvo::TargetKind;

/// The defense's call on one object after the sensor and classifier stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCall {
    /// Never seen. An undetected warhead penetrates; an undetected decoy
    /// vanishes from the diagnostics entirely.
    Undetected,
    /// Detected but classified as non-threatening; never engaged.
    ClearedTrack,
    /// Detected and classified as a warhead track; eligible for engagement.
    WarheadTrack,
}

pub fn screen_target(
    kind: TargetKind,
    degradation: &TrialDegradation,
    config: &SimulationConfig,
    rng: &mut Rng,
) -> TrackCall {
    if !rng.chance(degradation.p_detect) {
        return TrackCall::Undetected;
    }
    let p_warhead_call = match kind {
        TargetKind::Warhead => config.classifier_tpr,
        TargetKind::Decoy => config.classifier_fpr,
    };
    if rng.chance(p_warhead_call) {
        TrackCall::WarheadTrack
    } else {
        TrackCall::ClearedTrack
    }
}
