//! Kart Roster client.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support (web + desktop webview) is provided via compile-time
//! `cfg` selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform};
