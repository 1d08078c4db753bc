//! Entity movement system.
//!
//! One collision rule for everything that walks the grid: step onto the
//! candidate cell if it is open, otherwise stay put.

use crate::game::grid::WorldGrid;
use crate::game::types::{Direction, Hazard, Player, Position};

/// Anything with a grid position.
pub trait Mobile {
    fn position(&self) -> Position;
    fn set_position(&mut self, pos: Position);
}

impl Mobile for Player {
    fn position(&self) -> Position {
        self.pos
    }

    fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }
}

impl Mobile for Hazard {
    fn position(&self) -> Position {
        self.pos
    }

    fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }
}

/// Move `entity` by (dx, dy). Returns whether the move was committed.
/// A blocked or out-of-bounds candidate leaves the entity where it is.
pub fn move_entity<E: Mobile + ?Sized>(entity: &mut E, dx: i32, dy: i32, grid: &WorldGrid) -> bool {
    let candidate = entity.position().offset(dx, dy);
    if grid.is_walkable(candidate) {
        entity.set_position(candidate);
        true
    } else {
        false
    }
}

/// Move the player one tile in the given direction.
pub fn move_player(player: &mut Player, direction: Direction, grid: &WorldGrid) -> Position {
    let (dx, dy) = direction.delta();
    move_entity(player, dx, dy, grid);
    player.pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    /// 5x5, open interior except a rock at (2, 1).
    fn small_grid() -> WorldGrid {
        let mut cells = vec![vec![Cell::Blocked; 5]; 5];
        for row in cells.iter_mut().take(4).skip(1) {
            for cell in row.iter_mut().take(4).skip(1) {
                *cell = Cell::Open;
            }
        }
        cells[1][2] = Cell::Blocked;
        WorldGrid::from_cells(cells)
    }

    #[test]
    fn test_move_onto_open_cell() {
        let grid = small_grid();
        let mut player = Player::new(Position::new(1, 1));
        assert_eq!(move_player(&mut player, Direction::Down, &grid), Position::new(1, 2));
    }

    #[test]
    fn test_move_into_rock_is_noop() {
        let grid = small_grid();
        let mut player = Player::new(Position::new(1, 1));
        assert_eq!(move_player(&mut player, Direction::Right, &grid), Position::new(1, 1));
    }

    #[test]
    fn test_move_into_border_is_noop() {
        let grid = small_grid();
        let mut hazard = Hazard { pos: Position::new(1, 1) };
        assert!(!move_entity(&mut hazard, -1, -1, &grid));
        assert_eq!(hazard.pos, Position::new(1, 1));
    }

    #[test]
    fn test_move_never_ends_on_unwalkable_cell() {
        let grid = small_grid();
        for y in 0..5 {
            for x in 0..5 {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        let start = Position::new(x, y);
                        let mut hazard = Hazard { pos: start };
                        let moved = move_entity(&mut hazard, dx, dy, &grid);
                        if moved {
                            assert!(grid.is_walkable(hazard.pos));
                        } else {
                            assert_eq!(hazard.pos, start);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_hazard_moves_diagonally() {
        let grid = small_grid();
        let mut hazard = Hazard { pos: Position::new(1, 2) };
        assert!(move_entity(&mut hazard, 1, 1, &grid));
        assert_eq!(hazard.pos, Position::new(2, 3));
    }
}
