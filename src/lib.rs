//! Desert survival game: a procedurally generated tile grid, pursuing
//! scorpions, water jugs to collect and an artifact to claim.
//!
//! The `game` module is the simulation core. `persistence` stores the high
//! score, and the binary drives both from the terminal.

pub mod config;
pub mod game;
pub mod persistence;
