//! Domain entities

mod character;
mod player;

pub use character::Character;
pub use player::Player;
