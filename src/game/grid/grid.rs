//! World grid.
//!
//! The map is a fixed rectangle of cells surrounded by a permanent wall of
//! blocked tiles. It is generated once per world and never mutated afterwards.

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Serialize, Deserialize};

use crate::config::game::OPEN_PROBABILITY;
use crate::game::error::GameError;
use crate::game::types::{Cell, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl WorldGrid {
    /// Generate a new map: blocked border, interior open with `OPEN_PROBABILITY`,
    /// and `start` always open.
    pub fn generate(
        width: usize,
        height: usize,
        start: Position,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let inside_border = start.x >= 1
            && start.y >= 1
            && (start.x as usize) < width.saturating_sub(1)
            && (start.y as usize) < height.saturating_sub(1);
        if !inside_border {
            return Err(GameError::InvalidDimensions { width, height });
        }

        let mut cells = vec![vec![Cell::Blocked; width]; height];
        for row in cells.iter_mut().take(height - 1).skip(1) {
            for cell in row.iter_mut().take(width - 1).skip(1) {
                if rng.random_bool(OPEN_PROBABILITY) {
                    *cell = Cell::Open;
                }
            }
        }
        cells[start.y as usize][start.x as usize] = Cell::Open;

        Ok(Self { width, height, cells })
    }

    /// Build a grid from explicit rows (`cells[y][x]`). Rows must share one width.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());
        debug_assert!(
            cells.iter().all(|row| row.len() == width),
            "ragged grid rows"
        );
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Open)
    }

    /// All open cells in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                if *cell == Cell::Open {
                    Some(Position::new(x as i32, y as i32))
                } else {
                    None
                }
            })
        })
    }

    /// Uniformly random open cell.
    pub fn random_walkable(&self, rng: &mut impl Rng) -> Result<Position, GameError> {
        self.walkable_cells()
            .choose(rng)
            .ok_or(GameError::NoWalkableCells)
    }

    /// Uniformly random open cell satisfying `accept`.
    ///
    /// Same distribution as redrawing `random_walkable` until `accept` holds,
    /// but fails with `NoWalkableCells` instead of spinning when nothing qualifies.
    pub fn random_walkable_where(
        &self,
        rng: &mut impl Rng,
        accept: impl Fn(Position) -> bool,
    ) -> Result<Position, GameError> {
        self.walkable_cells()
            .filter(|pos| accept(*pos))
            .choose(rng)
            .ok_or(GameError::NoWalkableCells)
    }
}
