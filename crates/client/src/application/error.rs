//! Service layer error types
//!
//! Wraps transport and domain failures so the presentation layer deals with a
//! single error type.

use kartsim_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Fetching or decoding a document failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A domain rule rejected the operation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Data could not be serialized for storage
    #[error("Failed to serialize for storage: {0}")]
    Serialize(String),
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_not_found())
            || matches!(self, ServiceError::Api(ApiError::HttpStatus { status: 404, .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_domain_and_http() {
        assert!(ServiceError::from(DomainError::not_found("Character", "9")).is_not_found());
        assert!(ServiceError::from(ApiError::HttpStatus {
            status: 404,
            message: String::new()
        })
        .is_not_found());
        assert!(!ServiceError::from(ApiError::RequestFailed("offline".into())).is_not_found());
    }

    #[test]
    fn display_is_transparent() {
        let err = ServiceError::from(ApiError::RequestFailed("offline".into()));
        assert_eq!(err.to_string(), "Request failed: offline");
    }
}
