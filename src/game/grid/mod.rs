//! Desert grid module.
//!
//! Procedural generation and walkability queries for the tile map.

pub mod grid;

pub use grid::*;
