//! Engagement resolution for one warhead-track object against the shared
//! interceptor inventory. Two doctrines share one contract: resolve an
//! engagement given a kill probability and the inventory available, and
//! report the new inventory level back to the trial runner.

use crate::engine::config::{Doctrine, SimulationConfig};
use crate::engine::rng::Rng;

/// Result of resolving one engaged object. `shots_fired` is the count charged
/// against inventory: the full allocation under barrage, the actual shot
/// count under shoot-look-shoot.
#[derive(Debug, Clone, Copy)]
pub struct EngagementOutcome {
    pub killed: bool,
    pub shots_fired: u32,
    pub inventory_remaining: u32,
}

/// Dispatch on the configured doctrine. `pk` is the operative kill
/// probability for the target's TRUE kind.
pub fn resolve_engagement(
    config: &SimulationConfig,
    pk: f64,
    inventory: u32,
    rng: &mut Rng,
) -> EngagementOutcome {
    match config.doctrine {
        Doctrine::Barrage => barrage(config.barrage_shots_per_target, pk, inventory, rng),
        Doctrine::ShootLookShoot => shoot_look_shoot(
            config.sls_max_shots_per_target,
            config.sls_reengage_prob,
            pk,
            inventory,
            rng,
        ),
    }
}

/// Commit min(shots_per_target, inventory) interceptors as one salvo. Draws
/// stop at the first success, but the object is charged the full allocation
/// either way: the salvo is committed atomically, not metered shot-by-shot.
fn barrage(shots_per_target: u32, pk: f64, inventory: u32, rng: &mut Rng) -> EngagementOutcome {
    let alloc = shots_per_target.min(inventory);
    if alloc == 0 {
        return EngagementOutcome {
            killed: false,
            shots_fired: 0,
            inventory_remaining: inventory,
        };
    }

    let mut killed = false;
    for _ in 0..alloc {
        if rng.chance(pk) {
            killed = true;
            break;
        }
    }

    EngagementOutcome {
        killed,
        shots_fired: alloc,
        inventory_remaining: inventory - alloc,
    }
}

/// Fire one shot at a time up to min(max_shots, inventory). A kill stops the
/// sequence immediately; after each miss a feasibility draw decides whether
/// another shot is geometrically possible. Shots are charged as fired.
fn shoot_look_shoot(
    max_shots: u32,
    reengage_prob: f64,
    pk: f64,
    inventory: u32,
    rng: &mut Rng,
) -> EngagementOutcome {
    let cap = max_shots.min(inventory);
    let mut shots_fired = 0;
    let mut killed = false;

    for _ in 0..cap {
        shots_fired += 1;
        if rng.chance(pk) {
            killed = true;
            break;
        }
        if !rng.chance(reengage_prob) {
            break;
        }
    }

    EngagementOutcome {
        killed,
        shots_fired,
        inventory_remaining: inventory - shots_fired,
    }
}
