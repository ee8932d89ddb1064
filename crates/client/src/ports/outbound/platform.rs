//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (e.g. warning auto-hide).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
///
/// Writes are last-write-wins; failures are logged by the adapter.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove every stored value
    fn clear(&self);
}

/// Audio element control, addressed by element id
pub trait AudioProvider: Clone + 'static {
    fn play(&self, element_id: &str);

    fn pause(&self, element_id: &str);

    /// Volume in `[0.0, 1.0]`
    fn set_volume(&self, element_id: &str, volume: f64);
}

/// Browser document operations
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Smoothly scroll the page to its bottom edge
    fn scroll_to_bottom(&self);
}

/// Storage key constants
///
/// Per-character power values are stored under the character's name.
pub mod storage_keys {
    pub const CHARACTERS: &str = "characters";
}

/// DOM ids of the `<audio>` elements rendered by the home view
pub mod audio_elements {
    pub const BACKGROUND_TRACK: &str = "background-track";
    pub const POWER_UP_EFFECT: &str = "power-up-effect";
}
