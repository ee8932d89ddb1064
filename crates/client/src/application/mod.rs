//! Application layer - use cases over the ports

pub mod api;
pub mod error;
pub mod services;

pub use error::ServiceError;
