//! Character entity - one racer on the roster

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::{Power, PowerChange};

/// A racer from the static roster document.
///
/// Accepts both the English field names and the Spanish ones used by the
/// original data file (`nombre`, `imagen`, `poder`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "imagen")]
    pub image_url: String,
    #[serde(alias = "poder")]
    power: Power,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        image_url: impl Into<String>,
        power: Power,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
            power,
        }
    }

    pub fn power(&self) -> Power {
        self.power
    }

    pub fn set_power(&mut self, power: Power) {
        self.power = power;
    }

    /// Apply one increment step and report what happened
    pub fn raise_power(&mut self) -> PowerChange {
        let change = self.power.raise();
        if let Some(current) = change.current() {
            self.power = current;
        }
        change
    }

    /// DOM id of the rendered list item (`"Mario2"`)
    pub fn element_id(&self) -> String {
        format!("{}{}", self.name, self.id)
    }

    /// Case-insensitive full-name comparison
    pub fn name_equals(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    /// Case-insensitive substring test; both sides are normalized
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mario(power: u8) -> Character {
        Character::new(
            CharacterId::new(2),
            "Mario",
            "img/mario.png",
            Power::new(power).unwrap(),
        )
    }

    #[test]
    fn deserializes_english_fields() {
        let json = r#"{"id":1,"name":"Peach","imageUrl":"img/peach.png","power":30}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, CharacterId::new(1));
        assert_eq!(c.name, "Peach");
        assert_eq!(c.image_url, "img/peach.png");
        assert_eq!(c.power().value(), 30);
    }

    #[test]
    fn deserializes_spanish_fields() {
        let json = r#"{"id":4,"nombre":"Yoshi","imagen":"img/yoshi.png","poder":70}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Yoshi");
        assert_eq!(c.power().value(), 70);
    }

    #[test]
    fn rejects_out_of_range_power() {
        let json = r#"{"id":1,"name":"Peach","imageUrl":"p.png","power":120}"#;
        assert!(serde_json::from_str::<Character>(json).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(mario(50)).unwrap();
        assert_eq!(value["imageUrl"], "img/mario.png");
        assert_eq!(value["power"], 50);
    }

    #[test]
    fn raise_power_mutates_only_on_change() {
        let mut c = mario(90);
        assert!(matches!(c.raise_power(), PowerChange::Raised { .. }));
        assert_eq!(c.power(), Power::MAX);
        assert_eq!(c.raise_power(), PowerChange::AlreadyMax);
        assert_eq!(c.power(), Power::MAX);
    }

    #[test]
    fn name_matching_ignores_case_on_both_sides() {
        let c = mario(0);
        assert!(c.name_equals("mARIO"));
        assert!(!c.name_equals("mari"));
        assert!(c.name_contains("ARI"));
        assert!(c.name_contains("mar"));
        assert!(!c.name_contains("luigi"));
    }

    #[test]
    fn element_id_joins_name_and_id() {
        assert_eq!(mario(0).element_id(), "Mario2");
    }
}
