//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the UI layer, so presentation code never names an adapter type.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Storage is not exposed here: only the character service writes to it,
/// through `Platform::storage_adapter()`.
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Audio operations
    // -------------------------------------------------------------------------

    fn audio_play(&self, element_id: &str);

    fn audio_pause(&self, element_id: &str);

    fn audio_set_volume(&self, element_id: &str, volume: f64);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    fn scroll_to_bottom(&self);
}
