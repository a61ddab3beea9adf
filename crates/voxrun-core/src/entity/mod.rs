pub mod input;
pub mod player;

pub use input::{Axis, InputState, LookState};
pub use player::Player;
