//! Character Service - the character store
//!
//! Loads the roster from the static document, mirrors it into storage, and
//! applies power changes. Storage writes happen only here.

use kartsim_domain::{Character, CharacterId, Power, PowerChange, Roster};

use crate::application::api::Api;
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, StorageProvider};

/// Character service for loading the roster and updating power levels
#[derive(Clone)]
pub struct CharacterService<S: StorageProvider> {
    api: Api,
    storage: S,
    /// URL (or desktop path) of the static roster document
    source: String,
}

impl<S: StorageProvider> CharacterService<S> {
    pub fn new(api: Api, storage: S, source: impl Into<String>) -> Self {
        Self {
            api,
            storage,
            source: source.into(),
        }
    }

    /// Fetch the roster document and mirror it into storage.
    ///
    /// Previously stored data is cleared first, then the whole roster is
    /// written as one blob under [`storage_keys::CHARACTERS`].
    pub async fn load(&self) -> Result<Roster, ServiceError> {
        let characters: Vec<Character> = self.api.get(&self.source).await?;
        let roster = Roster::new(characters)?;
        self.persist_roster(&roster)?;
        tracing::info!(count = roster.len(), source = %self.source, "Loaded character roster");
        Ok(roster)
    }

    fn persist_roster(&self, roster: &Roster) -> Result<(), ServiceError> {
        let blob = serde_json::to_string(roster.characters())
            .map_err(|e| ServiceError::Serialize(e.to_string()))?;
        self.storage.clear();
        self.storage.save(storage_keys::CHARACTERS, &blob);
        Ok(())
    }

    /// Set a character's power and persist it under the character's name
    pub fn update_power(
        &self,
        roster: &mut Roster,
        id: CharacterId,
        power: Power,
    ) -> Result<(), ServiceError> {
        let character = roster.set_power(id, power)?;
        self.storage.save(&character.name, &power.to_string());
        tracing::debug!(name = %character.name, %power, "Persisted power");
        Ok(())
    }

    /// Apply one increment step to a character.
    ///
    /// A full gauge returns `PowerChange::AlreadyMax` and writes nothing.
    pub fn increment_power(
        &self,
        roster: &mut Roster,
        id: CharacterId,
    ) -> Result<PowerChange, ServiceError> {
        let change = roster.raise_power(id)?;
        match change {
            PowerChange::Raised { current, .. } => self.update_power(roster, id, current)?,
            PowerChange::AlreadyMax => {
                tracing::debug!(%id, "Power already at maximum");
            }
        }
        Ok(change)
    }
}
