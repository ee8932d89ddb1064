//! Desktop platform implementations
//!
//! The desktop build renders into a webview, so audio and scrolling are driven
//! through `document::eval`. Storage is a JSON file on disk.

use crate::ports::outbound::{AudioProvider, DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/kartsim/storage.json
/// - macOS: ~/Library/Application Support/io.kartsim.client/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\kartsim\client\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "kartsim", "client") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("kartsim_storage.json")
        };
        Self::at_path(storage_path)
    }

    /// Create a storage provider backed by a specific file
    ///
    /// Loads existing data from the file if it exists.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_storage_file(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut HashMap<String, String>)) {
        match self.cache.write() {
            Ok(mut guard) => {
                f(&mut guard);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

fn read_storage_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.mutate(|map| {
            map.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        self.mutate(HashMap::clear);
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Run a script in the webview. Must be called from inside the Dioxus runtime.
fn run_script(script: String) {
    let _ = dioxus::document::eval(&script);
}

/// Quote a value as a JS string literal
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script running `body` against the element with `element_id`, if present
fn with_element(element_id: &str, body: &str) -> String {
    format!(
        "{{ const el = document.getElementById({}); if (el) {{ {} }} }}",
        js_string(element_id),
        body
    )
}

/// Desktop audio provider driving `<audio>` elements in the webview
#[derive(Clone, Default)]
pub struct DesktopAudioProvider;

impl AudioProvider for DesktopAudioProvider {
    fn play(&self, element_id: &str) {
        run_script(with_element(
            element_id,
            "if (!el.loop) { el.currentTime = 0; } el.play().catch(() => {});",
        ));
    }

    fn pause(&self, element_id: &str) {
        run_script(with_element(element_id, "el.pause();"));
    }

    fn set_volume(&self, element_id: &str, volume: f64) {
        run_script(with_element(
            element_id,
            &format!("el.volume = {};", volume.clamp(0.0, 1.0)),
        ));
    }
}

/// Desktop document provider
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is set through the desktop Config
    }

    fn scroll_to_bottom(&self) {
        run_script(
            "window.scrollTo({ top: document.documentElement.scrollHeight, behavior: 'smooth' });"
                .to_string(),
        );
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopStorageProvider::new(),
        DesktopAudioProvider,
        DesktopDocumentProvider,
    )
}
