//! Errors raised by world generation and the persistence collaborator.
//!
//! Blocked moves and entity interactions never fail; they are plain state transitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A random cell was requested but no open cell (matching the constraint) exists.
    #[error("no walkable cell available")]
    NoWalkableCells,

    #[error("grid of {width}x{height} cannot hold the start cell inside its border")]
    InvalidDimensions { width: usize, height: usize },

    /// Every regeneration attempt produced a world without room for the entities.
    #[error("world generation failed after {attempts} attempts")]
    GenerationFailed { attempts: u32 },

    #[error("high score storage: {0}")]
    Io(#[from] std::io::Error),
}
