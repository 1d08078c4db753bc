use serde::{Serialize, Deserialize};

use crate::config::game::{START_VITALITY, PLAYER_START};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True when `other` is at least `min` tiles away on both axes.
    pub fn far_on_both_axes(self, other: Position, min: i32) -> bool {
        (self.x - other.x).abs() >= min && (self.y - other.y).abs() >= min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Directions currently held by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Pick the single direction to apply: Up > Down > Left > Right.
    pub fn resolve(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn any(&self) -> bool {
        self.resolve().is_some()
    }
}

impl From<Direction> for HeldKeys {
    fn from(direction: Direction) -> Self {
        let mut keys = HeldKeys::default();
        match direction {
            Direction::Up => keys.up = true,
            Direction::Down => keys.down = true,
            Direction::Left => keys.left = true,
            Direction::Right => keys.right = true,
        }
        keys
    }
}

/// One decoded input event per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Any key press that carries no direction.
    Begin,
    Steer(HeldKeys),
    /// Leave a terminal screen.
    Exit,
    /// Window closed; ends the game from any phase.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Intro,
    Playing,
    Victory,
    GameOver,
    Exited,
}

impl Phase {
    /// Victory and GameOver wait for an exit command.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Victory | Phase::GameOver)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub vitality: i32,
    pub score: u32,
    pub invulnerable_ticks: u32,
    pub dehydration_ticks: u32,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            vitality: START_VITALITY,
            score: 0,
            invulnerable_ticks: 0,
            dehydration_ticks: 0,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Position::new(PLAYER_START.0, PLAYER_START.1))
    }
}

/// A scorpion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Position,
}

/// A water jug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Position,
    pub consumed: bool,
}

impl Pickup {
    pub fn new(pos: Position) -> Self {
        Self { pos, consumed: false }
    }
}

/// The artifact. Hidden until every pickup has been consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Position,
    pub active: bool,
}

/// Emitted by the state machine for the surrounding driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    /// Entered Victory or GameOver; `high_score` must be persisted.
    Finished { outcome: Phase, score: u32, high_score: u32 },
    Exited,
}
