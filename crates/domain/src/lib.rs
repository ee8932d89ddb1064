//! Kart Roster domain: characters, power rules, and roster filtering.
//!
//! This crate has no UI or platform dependencies.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod filtered_view;
pub mod ids;
pub mod value_objects;

pub use aggregates::Roster;
pub use entities::{Character, Player};
pub use error::DomainError;
pub use filtered_view::{FilteredView, AUTOCOMPLETE_MIN_CHARS};
pub use ids::CharacterId;
pub use value_objects::{AudioState, Power, PowerChange, MAX_POWER, POWER_STEP};
