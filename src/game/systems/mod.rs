pub mod movement;
pub mod pursuit;
pub mod resources;
pub mod rules;
pub mod render;

pub use movement::*;
pub use pursuit::*;
pub use resources::*;
pub use rules::*;
pub use render::*;
