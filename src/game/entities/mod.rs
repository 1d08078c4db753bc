//! Game entities module.
//!
//! This module organizes player, scorpion and water jug entity logic.

pub mod player;
pub mod hazard;
pub mod pickup;

pub use player::*;
pub use hazard::*;
pub use pickup::*;
