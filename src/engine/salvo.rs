//! Salvo generation: expand missile/MIRV/decoy counts into the trackable
//! object population for one trial.

use crate::engine::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Warhead,
    Decoy,
}

/// One trackable object. `id` is for traceability only and has no semantic
/// effect on the simulation.
#[derive(Debug, Clone)]
pub struct Target {
    pub kind: TargetKind,
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct Salvo {
    pub targets: Vec<Target>,
    pub real_warheads: u32,
    pub decoys: u32,
}

/// Build the full object population for one trial and randomize its order.
///
/// The shuffle matters: warheads are generated before decoys, and without it
/// the shared interceptor inventory would be drained by whichever kind comes
/// first in generation order.
pub fn generate_salvo(
    missiles: u32,
    mirvs_per_missile: u32,
    decoys_per_warhead: u32,
    rng: &mut Rng,
) -> Salvo {
    let real_warheads = missiles * mirvs_per_missile;
    let decoys = real_warheads * decoys_per_warhead;

    let mut targets = Vec::with_capacity((real_warheads + decoys) as usize);
    for i in 0..real_warheads {
        targets.push(Target {
            kind: TargetKind::Warhead,
            id: format!("rv-{i}"),
        });
    }
    for i in 0..decoys {
        targets.push(Target {
            kind: TargetKind::Decoy,
            id: format!("decoy-{i}"),
        });
    }
    rng.shuffle(&mut targets);

    Salvo {
        targets,
        real_warheads,
        decoys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_counts_follow_the_multipliers() {
        let mut rng = Rng::new(1);
        let salvo = generate_salvo(4, 3, 2, &mut rng);

        assert_eq!(salvo.real_warheads, 12);
        assert_eq!(salvo.decoys, 24);
        assert_eq!(salvo.targets.len(), 36);

        let warheads = salvo
            .targets
            .iter()
            .filter(|t| t.kind == TargetKind::Warhead)
            .count();
        assert_eq!(warheads, 12);
    }

    #[test]
    fn identifiers_are_unique_within_kind() {
        let mut rng = Rng::new(2);
        let salvo = generate_salvo(3, 2, 3, &mut rng);

        let mut ids: Vec<&str> = salvo.targets.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), salvo.targets.len());
    }

    #[test]
    fn zero_missiles_yields_empty_population() {
        let mut rng = Rng::new(3);
        let salvo = generate_salvo(0, 5, 9, &mut rng);
        assert_eq!(salvo.real_warheads, 0);
        assert_eq!(salvo.decoys, 0);
        assert!(salvo.targets.is_empty());
    }

    #[test]
    fn order_is_randomized_not_warheads_first() {
        let mut rng = Rng::new(4);
        let salvo = generate_salvo(10, 2, 3, &mut rng);
        let leading_warheads = salvo
            .targets
            .iter()
            .take_while(|t| t.kind == TargetKind::Warhead)
            .count();
        // 20 warheads, 60 decoys: generation order would put all 20 first.
        assert!(leading_warheads < 20, "population was not shuffled");
    }
}
