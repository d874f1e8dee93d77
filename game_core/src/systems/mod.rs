pub mod collision;
pub mod input;
pub mod movement;
pub mod recycle;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use recycle::*;
pub use scoring::*;
