//! Player entity - a read-only record from the remote users API

use serde::{Deserialize, Serialize};

/// An online player as returned by the placeholder users endpoint.
///
/// Only the three displayed fields are kept; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub username: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"},
            "website": "hildegard.org"
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Leanne Graham");
        assert_eq!(p.username, "Bret");
        assert_eq!(p.website, "hildegard.org");
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{"name": "Leanne Graham", "username": "Bret"}"#;
        assert!(serde_json::from_str::<Player>(json).is_err());
    }
}
