//! In-memory platform for tests
//!
//! Storage lives in a shared map, audio and document calls are recorded, and
//! sleeping completes immediately.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{AudioProvider, DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;

/// In-memory storage provider
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MockStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.read().ok().and_then(|v| v.get(key).cloned())
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }
}

/// Records every audio call as a short string, e.g. `"play power-up-effect"`
#[derive(Clone, Default)]
pub struct MockAudioProvider {
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAudioProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl AudioProvider for MockAudioProvider {
    fn play(&self, element_id: &str) {
        self.record(format!("play {}", element_id));
    }

    fn pause(&self, element_id: &str) {
        self.record(format!("pause {}", element_id));
    }

    fn set_volume(&self, element_id: &str, volume: f64) {
        self.record(format!("volume {} {}", element_id, volume));
    }
}

/// Records page title changes and scroll requests
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
    scrolls: Arc<Mutex<usize>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.lock().ok().and_then(|t| t.clone())
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.lock().map(|s| *s).unwrap_or(0)
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut t) = self.title.lock() {
            *t = Some(title.to_string());
        }
    }

    fn scroll_to_bottom(&self) {
        if let Ok(mut s) = self.scrolls.lock() {
            *s += 1;
        }
    }
}

/// Sleep that resolves immediately and records the requested duration
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    requests: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    /// Durations passed to `sleep_ms`, in call order
    pub fn requests(&self) -> Vec<u64> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

/// Handles onto the mock providers inside a mock `Platform`
#[derive(Clone, Default)]
pub struct MockPlatformHandles {
    pub sleep: MockSleepProvider,
    pub storage: MockStorageProvider,
    pub audio: MockAudioProvider,
    pub document: MockDocumentProvider,
}

/// Build a `Platform` backed entirely by mocks
pub fn create_mock_platform() -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles::default();
    let platform = Platform::new(
        handles.sleep.clone(),
        handles.storage.clone(),
        handles.audio.clone(),
        handles.document.clone(),
    );
    (platform, handles)
}
