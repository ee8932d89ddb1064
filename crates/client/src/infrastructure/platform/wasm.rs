//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using web-sys.

use crate::ports::outbound::{AudioProvider, DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;
use std::{future::Future, pin::Pin};
use wasm_bindgen::JsCast;

/// WASM sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM storage provider using browser localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage unavailable; dropping write to {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.clear() {
                tracing::error!("Failed to clear localStorage: {:?}", e);
            }
        }
    }
}

/// WASM audio provider driving `<audio>` elements by id
#[derive(Clone, Default)]
pub struct WasmAudioProvider;

impl WasmAudioProvider {
    fn element(element_id: &str) -> Option<web_sys::HtmlMediaElement> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?;
        match element.dyn_into::<web_sys::HtmlMediaElement>() {
            Ok(media) => Some(media),
            Err(_) => {
                tracing::warn!("Element {} is not a media element", element_id);
                None
            }
        }
    }
}

impl AudioProvider for WasmAudioProvider {
    fn play(&self, element_id: &str) {
        let Some(media) = Self::element(element_id) else {
            tracing::warn!("Audio element {} not found", element_id);
            return;
        };
        if !media.loop_() {
            media.set_current_time(0.0);
        }
        match media.play() {
            Ok(promise) => {
                let element_id = element_id.to_string();
                wasm_bindgen_futures::spawn_local(async move {
                    // Autoplay policies reject the promise until the user interacts.
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        tracing::warn!("Playback of {} was rejected: {:?}", element_id, e);
                    }
                });
            }
            Err(e) => tracing::error!("Failed to start playback of {}: {:?}", element_id, e),
        }
    }

    fn pause(&self, element_id: &str) {
        if let Some(media) = Self::element(element_id) {
            if let Err(e) = media.pause() {
                tracing::error!("Failed to pause {}: {:?}", element_id, e);
            }
        }
    }

    fn set_volume(&self, element_id: &str, volume: f64) {
        if let Some(media) = Self::element(element_id) {
            media.set_volume(volume.clamp(0.0, 1.0));
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn scroll_to_bottom(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|e| e.scroll_height())
            .unwrap_or(0);

        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmStorageProvider,
        WasmAudioProvider,
        WasmDocumentProvider,
    )
}
