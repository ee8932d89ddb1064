//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/{desktop,wasm}.rs`
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    AudioProvider, DocumentProvider, PlatformPort, SleepProvider, StorageProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    audio: Arc<dyn AudioProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn clear(&self);
}

trait AudioProviderDyn: Send + Sync {
    fn play(&self, element_id: &str);
    fn pause(&self, element_id: &str);
    fn set_volume(&self, element_id: &str, volume: f64);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn scroll_to_bottom(&self);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn clear(&self) {
        StorageProvider::clear(self)
    }
}

impl<T: AudioProvider + Send + Sync> AudioProviderDyn for T {
    fn play(&self, element_id: &str) {
        AudioProvider::play(self, element_id)
    }
    fn pause(&self, element_id: &str) {
        AudioProvider::pause(self, element_id)
    }
    fn set_volume(&self, element_id: &str, volume: f64) {
        AudioProvider::set_volume(self, element_id, volume)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn scroll_to_bottom(&self) {
        DocumentProvider::scroll_to_bottom(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, S, A, D>(sleep: Sl, storage: S, audio: A, document: D) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        A: AudioProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            audio: Arc::new(audio),
            document: Arc::new(document),
        }
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// This allows application-layer services like `CharacterService` to use
    /// Platform's storage without exposing internal implementation details.
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage.save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage.load(key)
    }

    fn clear(&self) {
        self.platform.storage.clear()
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI hold `Arc<dyn PlatformPort>`
// =============================================================================

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn audio_play(&self, element_id: &str) {
        self.audio.play(element_id)
    }

    fn audio_pause(&self, element_id: &str) {
        self.audio.pause(element_id)
    }

    fn audio_set_volume(&self, element_id: &str, volume: f64) {
        self.audio.set_volume(element_id, volume)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn scroll_to_bottom(&self) {
        self.document.scroll_to_bottom()
    }
}
