//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Power value outside the gauge range
    #[error("Invalid power {value}: must be between 0 and {max}")]
    InvalidPower { value: i64, max: u8 },

    /// Two roster entries share an id
    #[error("Duplicate character id: {0}")]
    DuplicateId(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = DomainError::not_found("Character", "7");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Character with id 7");
    }

    #[test]
    fn invalid_power_message() {
        let err = DomainError::InvalidPower { value: 130, max: 100 };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid power 130: must be between 0 and 100"
        );
    }
}
