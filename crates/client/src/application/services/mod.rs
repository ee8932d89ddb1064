//! Application services
//!
//! Services own the use cases; the presentation layer only holds their results
//! in signals.

mod character_service;
mod player_service;

pub use character_service::CharacterService;
pub use player_service::PlayerService;
