//! Scorpion entity logic.
//!
//! Scorpions start far from the player so the first ticks are safe.

use rand::Rng;

use crate::config::game::MIN_SPAWN_DISTANCE;
use crate::game::error::GameError;
use crate::game::grid::WorldGrid;
use crate::game::types::{Hazard, Position};

/// Spawn `count` scorpions on open cells at least `MIN_SPAWN_DISTANCE` away from
/// `player` on both axes. Scorpions may share a cell.
pub fn spawn_hazards(
    grid: &WorldGrid,
    player: Position,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Hazard>, GameError> {
    (0..count)
        .map(|_| {
            grid.random_walkable_where(&mut *rng, |pos| pos.far_on_both_axes(player, MIN_SPAWN_DISTANCE))
                .map(|pos| Hazard { pos })
        })
        .collect()
}
