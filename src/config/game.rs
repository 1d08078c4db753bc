/// Game configuration constants.
/// 
/// This module defines the fixed gameplay parameters: world dimensions,
/// entity counts, pursuit tuning and the player's countdown thresholds.
pub const TICKS_PER_SECOND: u64 = 10; // Nominal simulation rate, one tick per input frame.

/// World size in pixels, divided by the tile size to get grid dimensions.
pub const WORLD_WIDTH: usize = 800;
pub const WORLD_HEIGHT: usize = 600;
pub const TILE_SIZE: usize = 40;

/// Number of columns in the game grid.
pub const GRID_COL: usize = WORLD_WIDTH / TILE_SIZE;

/// Number of rows in the game grid.
pub const GRID_ROW: usize = WORLD_HEIGHT / TILE_SIZE;

/// Chance for each interior cell to be open sand.
pub const OPEN_PROBABILITY: f64 = 0.75;

/// Player start cell, always forced open.
pub const PLAYER_START: (i32, i32) = (1, 1);

pub const START_VITALITY: i32 = 10;

pub const HAZARD_COUNT: usize = 5;
pub const PICKUP_COUNT: usize = 8;

/// Minimum distance on *each* axis between the player and a freshly placed hazard or goal.
pub const MIN_SPAWN_DISTANCE: i32 = 5;

/// Manhattan distance under which a hazard may chase the player.
pub const PURSUIT_RANGE: i32 = 5;

/// Probability of taking the direct step toward the player when in range.
pub const PURSUIT_BIAS: f64 = 0.7;

/// Ticks of damage immunity after a hazard hit.
pub const INVULNERABILITY_TICKS: u32 = 30;

/// Ticks without water before losing one vitality.
pub const DEHYDRATION_TICKS: u32 = 70;

/// Score awarded per water jug.
pub const PICKUP_SCORE: u32 = 10;

/// World regenerations tried before giving up on a degenerate map.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10;
