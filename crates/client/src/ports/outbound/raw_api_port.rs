//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters and stored
//! behind `Arc<dyn ...>`. The application layer provides a typed wrapper
//! (`application::api::Api`) that deserializes on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// Fetch a JSON document.
    ///
    /// `location` is an absolute URL, or (desktop only) a filesystem path.
    async fn get_json(&self, location: &str) -> Result<Value, ApiError>;
}
