//! Roster aggregate - the single owned collection of characters
//!
//! All power mutations go through the roster so there is exactly one
//! in-memory copy of each character.

use crate::entities::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::{Power, PowerChange};

/// The loaded characters, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Build a roster from the loaded document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` if two characters share an id.
    pub fn new(characters: Vec<Character>) -> Result<Self, DomainError> {
        for (i, c) in characters.iter().enumerate() {
            if characters[..i].iter().any(|other| other.id == c.id) {
                return Err(DomainError::DuplicateId(c.id.to_string()));
            }
        }
        Ok(Self { characters })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().map(|c| c.id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CharacterId) -> Result<&mut Character, DomainError> {
        self.characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Character", id.to_string()))
    }

    /// Apply one increment step to the character with `id`
    pub fn raise_power(&mut self, id: CharacterId) -> Result<PowerChange, DomainError> {
        Ok(self.get_mut(id)?.raise_power())
    }

    /// Overwrite the power of the character with `id`
    pub fn set_power(&mut self, id: CharacterId, power: Power) -> Result<&Character, DomainError> {
        let character = self.get_mut(id)?;
        character.set_power(power);
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: u32, name: &str, power: u8) -> Character {
        Character::new(
            CharacterId::new(id),
            name,
            format!("img/{}.png", name.to_lowercase()),
            Power::new(power).unwrap(),
        )
    }

    fn roster() -> Roster {
        Roster::new(vec![
            character(1, "Peach", 40),
            character(2, "Mario", 50),
            character(3, "Luigi", 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Roster::new(vec![character(1, "Peach", 0), character(1, "Toad", 0)]);
        assert_eq!(err, Err(DomainError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_keeps_document_order() {
        let names: Vec<_> = roster().characters().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Peach", "Mario", "Luigi"]);
    }

    #[test]
    fn test_raise_power_updates_only_target() {
        let mut r = roster();
        let change = r.raise_power(CharacterId::new(2)).unwrap();
        assert_eq!(change.current(), Some(Power::new(60).unwrap()));
        assert_eq!(r.get(CharacterId::new(2)).unwrap().power().value(), 60);
        assert_eq!(r.get(CharacterId::new(1)).unwrap().power().value(), 40);
    }

    #[test]
    fn test_raise_power_at_max() {
        let mut r = roster();
        assert_eq!(
            r.raise_power(CharacterId::new(3)).unwrap(),
            PowerChange::AlreadyMax
        );
        assert_eq!(r.get(CharacterId::new(3)).unwrap().power(), Power::MAX);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut r = roster();
        let err = r.raise_power(CharacterId::new(9)).unwrap_err();
        assert!(err.is_not_found());
        assert!(r.set_power(CharacterId::new(9), Power::ZERO).is_err());
    }

    #[test]
    fn test_set_power() {
        let mut r = roster();
        let updated = r
            .set_power(CharacterId::new(1), Power::new(80).unwrap())
            .unwrap();
        assert_eq!(updated.name, "Peach");
        assert_eq!(updated.power().value(), 80);
    }
}
