//! Scorpion pursuit system.
//!
//! Each scorpion decides independently every tick. Close to the player it
//! usually closes in on both axes at once; otherwise it wanders.

use rand::Rng;

use crate::config::game::{PURSUIT_BIAS, PURSUIT_RANGE};
use crate::game::grid::WorldGrid;
use crate::game::systems::movement::move_entity;
use crate::game::types::{Hazard, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Direct step toward the player.
    Pursue,
    /// Uniform random step.
    Wander,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
    pub kind: StepKind,
}

fn wander(rng: &mut impl Rng) -> Step {
    Step {
        dx: rng.random_range(-1..=1),
        dy: rng.random_range(-1..=1),
        kind: StepKind::Wander,
    }
}

/// Decide the next step of a scorpion at `from` hunting a player at `target`.
pub fn choose_step(from: Position, target: Position, rng: &mut impl Rng) -> Step {
    if from.manhattan(target) <= PURSUIT_RANGE && rng.random_bool(PURSUIT_BIAS) {
        Step {
            dx: (target.x - from.x).signum(),
            dy: (target.y - from.y).signum(),
            kind: StepKind::Pursue,
        }
    } else {
        wander(rng)
    }
}

/// Run one pursuit step for every scorpion.
pub fn move_hazards(hazards: &mut [Hazard], target: Position, grid: &WorldGrid, rng: &mut impl Rng) {
    for hazard in hazards.iter_mut() {
        let step = choose_step(hazard.pos, target, &mut *rng);
        move_entity(hazard, step.dx, step.dy, grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TRIALS: usize = 20_000;

    #[test]
    fn test_out_of_range_always_wanders() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let player = Position::new(5, 5);
        let hazard = Position::new(5, 11);
        let mut seen = [[0usize; 3]; 3];

        for _ in 0..TRIALS {
            let step = choose_step(hazard, player, &mut rng);
            assert_eq!(step.kind, StepKind::Wander);
            seen[(step.dx + 1) as usize][(step.dy + 1) as usize] += 1;
        }

        // Every one of the nine steps shows up close to 1/9 of the time.
        for count in seen.iter().flatten() {
            let share = *count as f64 / TRIALS as f64;
            assert!((share - 1.0 / 9.0).abs() < 0.02, "share={share}");
        }
    }

    #[test]
    fn test_pursuit_bias_at_range_limit() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let player = Position::new(5, 5);
        let hazard = Position::new(2, 3);
        assert_eq!(hazard.manhattan(player), PURSUIT_RANGE);

        let pursued = (0..TRIALS)
            .map(|_| choose_step(hazard, player, &mut rng))
            .filter(|step| step.kind == StepKind::Pursue)
            .inspect(|step| assert_eq!((step.dx, step.dy), (1, 1)))
            .count();

        let share = pursued as f64 / TRIALS as f64;
        assert!((share - PURSUIT_BIAS).abs() < 0.02, "share={share}");
    }

    #[test]
    fn test_pursue_step_is_zero_on_aligned_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let player = Position::new(5, 5);
        let hazard = Position::new(5, 8);
        let step = (0..100)
            .map(|_| choose_step(hazard, player, &mut rng))
            .find(|step| step.kind == StepKind::Pursue)
            .unwrap();
        assert_eq!((step.dx, step.dy), (0, -1));
    }
}
