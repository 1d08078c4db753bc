//! Water jug entity logic.

use log::warn;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::error::GameError;
use crate::game::grid::WorldGrid;
use crate::game::types::{Pickup, Position};

/// Spawn `count` water jugs on distinct open cells, never on `player`.
pub fn spawn_pickups(
    grid: &WorldGrid,
    player: Position,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Pickup>, GameError> {
    let free_positions: Vec<Position> = grid
        .walkable_cells()
        .filter(|pos| *pos != player)
        .collect();

    if free_positions.len() < count {
        warn!(
            "[Pickup] Only {} free tiles for {} water jugs",
            free_positions.len(),
            count
        );
        return Err(GameError::NoWalkableCells);
    }

    Ok(free_positions
        .into_iter()
        .choose_multiple(rng, count)
        .into_iter()
        .map(Pickup::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_pickups_are_distinct_and_off_start() {
        let start = Position::new(1, 1);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = WorldGrid::generate(20, 15, start, &mut rng).unwrap();
            let pickups = spawn_pickups(&grid, start, 8, &mut rng).unwrap();

            assert_eq!(pickups.len(), 8);
            let unique: HashSet<Position> = pickups.iter().map(|p| p.pos).collect();
            assert_eq!(unique.len(), 8);
            assert!(pickups.iter().all(|p| !p.consumed));
            assert!(pickups.iter().all(|p| grid.is_walkable(p.pos) && p.pos != start));
        }
    }

    #[test]
    fn test_pickup_spawn_no_space() {
        let start = Position::new(1, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let grid = WorldGrid::generate(3, 3, start, &mut rng).unwrap();
        let result = spawn_pickups(&grid, start, 1, &mut rng);
        assert!(matches!(result, Err(GameError::NoWalkableCells)));
    }
}
