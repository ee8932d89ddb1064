//! Top-level views

mod home;

pub use home::HomeView;
