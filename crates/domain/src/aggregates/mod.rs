//! Aggregate roots - domain objects that own their related data
//!
//! Mutations return result enums instead of exposing `&mut` internals.

pub mod roster;

pub use roster::Roster;
