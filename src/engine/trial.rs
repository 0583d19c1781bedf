//! One full trial: generate the salvo, draw the common-mode degradation,
//! then walk the shuffled population screening and engaging each object
//! against the shared inventory.
//!
//! Inventory is read and mutated strictly in iteration order. Each object's
//! engagement depends on the inventory left by every object before it; that
//! sequential dependency is the central ordering invariant of the simulation
//! and is why a trial is never parallelized internally.

use serde::Serialize;

use crate::engine::config::SimulationConfig;
use crate::engine::degradation::TrialDegradation;
use crate::engine::doctrine::resolve_engagement;
use crate::engine::rng::Rng;
use crate::engine::salvo::{generate_salvo, TargetKind};
use crate::engine::screening::{screen_target, TrackCall};

/// Diagnostic counters for one trial. Every real warhead ends up in exactly
/// one of `penetrated` or `intercepted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub real_warheads: u32,
    pub penetrated: u32,
    pub intercepted: u32,
    pub detected_objects: u32,
    pub detected_warheads: u32,
    pub true_positives: u32,
    pub false_negatives: u32,
    pub false_positives: u32,
    pub shots_total: u32,
    pub shots_at_warheads: u32,
    pub shots_at_decoys: u32,
    pub inventory_remaining: u32,
    pub system_up: bool,
}

pub fn run_trial(config: &SimulationConfig, rng: &mut Rng) -> TrialResult {
    let salvo = generate_salvo(
        config.missiles,
        config.mirvs_per_missile,
        config.decoys_per_warhead,
        rng,
    );
    let degradation = TrialDegradation::draw(config, rng);

    let mut inventory = config.inventory;
    let mut result = TrialResult {
        real_warheads: salvo.real_warheads,
        system_up: degradation.system_up,
        ..TrialResult::default()
    };

    for target in &salvo.targets {
        let is_warhead = target.kind == TargetKind::Warhead;

        match screen_target(target.kind, &degradation, config, rng) {
            TrackCall::Undetected => {
                // Undetected decoys are not tracked anywhere; only
                // real-warhead penetration is the scored outcome.
                if is_warhead {
                    result.penetrated += 1;
                }
            }
            TrackCall::ClearedTrack => {
                result.detected_objects += 1;
                if is_warhead {
                    result.detected_warheads += 1;
                    result.false_negatives += 1;
                    result.penetrated += 1;
                }
            }
            TrackCall::WarheadTrack => {
                result.detected_objects += 1;
                if is_warhead {
                    result.detected_warheads += 1;
                    result.true_positives += 1;
                } else {
                    result.false_positives += 1;
                }

                if inventory == 0 {
                    if is_warhead {
                        result.penetrated += 1;
                    }
                    continue;
                }

                let outcome =
                    resolve_engagement(config, degradation.pk_for(target.kind), inventory, rng);
                inventory = outcome.inventory_remaining;
                result.shots_total += outcome.shots_fired;
                if is_warhead {
                    result.shots_at_warheads += outcome.shots_fired;
                    if outcome.killed {
                        result.intercepted += 1;
                    } else {
                        result.penetrated += 1;
                    }
                } else {
                    result.shots_at_decoys += outcome.shots_fired;
                }
            }
        }
    }

    result.inventory_remaining = inventory;
    result
}
