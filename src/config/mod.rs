/// Main configuration module.
/// 
/// Re-exports submodules for gameplay and high score persistence configuration.
pub mod game;
pub mod persistence;
