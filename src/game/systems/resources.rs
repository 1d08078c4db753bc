//! Water jug collection and artifact activation.

use log::{debug, info, warn};
use rand::Rng;

use crate::config::game::MIN_SPAWN_DISTANCE;
use crate::game::error::GameError;
use crate::game::grid::WorldGrid;
use crate::game::types::{Goal, Pickup, Player};

/// Consume every water jug under the player. Returns how many were drunk.
pub fn collect_pickups(player: &mut Player, pickups: &mut [Pickup]) -> usize {
    let here = player.pos;
    let mut collected = 0;
    for pickup in pickups.iter_mut().filter(|p| !p.consumed && p.pos == here) {
        pickup.consumed = true;
        player.hydrate();
        collected += 1;
        debug!(
            "[Resources] Water jug at ({}, {}) collected, score={}",
            pickup.pos.x, pickup.pos.y, player.score
        );
    }
    collected
}

/// Reveal the artifact once every jug is gone. Returns true on the tick it activates.
///
/// The artifact lands on an open cell at least `MIN_SPAWN_DISTANCE` from the
/// player on both axes; if no such cell exists it stays hidden until a later tick.
pub fn try_activate_goal(
    goal: &mut Goal,
    pickups: &[Pickup],
    player: &Player,
    grid: &WorldGrid,
    rng: &mut impl Rng,
) -> bool {
    if goal.active || !pickups.iter().all(|p| p.consumed) {
        return false;
    }

    match grid.random_walkable_where(rng, |pos| pos.far_on_both_axes(player.pos, MIN_SPAWN_DISTANCE)) {
        Ok(pos) => {
            goal.pos = pos;
            goal.active = true;
            info!("[Resources] Artifact revealed at ({}, {})", pos.x, pos.y);
            true
        }
        Err(GameError::NoWalkableCells) => {
            warn!(
                "[Resources] No cell far enough from player at ({}, {}) for the artifact",
                player.pos.x, player.pos.y
            );
            false
        }
        Err(err) => {
            warn!("[Resources] Artifact placement failed: {}", err);
            false
        }
    }
}

/// True when the player stands on the revealed artifact.
pub fn goal_reached(goal: &Goal, player: &Player) -> bool {
    goal.active && goal.pos == player.pos
}
