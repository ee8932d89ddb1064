//! HTTP adapter implementing `RawApiPort`
//!
//! Web builds go through `gloo-net` (browser `fetch`); desktop builds use
//! `reqwest`. Desktop also accepts a plain filesystem path so the bundled
//! roster document can be read without a web server.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// True for `http://` and `https://` locations
fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[derive(Clone, Default)]
pub struct ApiAdapter {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiAdapter {
    async fn fetch_remote(&self, url: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn read_local(&self, path: &str) -> Result<Value, ApiError> {
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::Io(format!("{}: {}", path, e)))?;
        serde_json::from_str(&data).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, location: &str) -> Result<Value, ApiError> {
        tracing::debug!(location, "GET");
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            self.read_local(location).await
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, location: &str) -> Result<Value, ApiError> {
        tracing::debug!(location, remote = is_remote(location), "GET");
        let response = gloo_net::http::Request::get(location)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: response.status(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://jsonplaceholder.typicode.com/users"));
        assert!(is_remote("http://localhost:8080/characters.json"));
        assert!(!is_remote("assets/data/characters.json"));
        assert!(!is_remote("/tmp/characters.json"));
    }

    #[tokio::test]
    async fn test_reads_local_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(&path, r#"[{"id":1,"name":"Peach"}]"#).unwrap();

        let adapter = ApiAdapter::new();
        let value = adapter.get_json(path.to_str().unwrap()).await.unwrap();
        assert_eq!(value[0]["name"], "Peach");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let adapter = ApiAdapter::new();
        let err = adapter
            .get_json("/definitely/not/here/characters.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let adapter = ApiAdapter::new();
        let err = adapter.get_json(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }
}
