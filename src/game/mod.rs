//! Simulation core.
//!
//! World generation, entities, per-tick systems and the state machine that ties
//! them together. No I/O happens here; input arrives as `Command`s and the
//! renderer reads `Snapshot`s.

pub mod types;
pub mod error;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;

pub use error::GameError;
pub use state::{GameState, Snapshot};
pub use types::*;
