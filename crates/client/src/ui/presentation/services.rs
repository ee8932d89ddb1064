//! Service providers for the presentation layer
//!
//! Components use the hooks below to reach application services without
//! depending on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{CharacterService, PlayerService};
use crate::config::ClientConfig;
use crate::state::{Platform, PlatformStorageAdapter};

/// Concrete character service type used by the UI.
pub type UiCharacterService = CharacterService<PlatformStorageAdapter>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub character: Arc<UiCharacterService>,
    pub player: Arc<PlayerService>,
}

impl Services {
    /// Create all services with the given ports
    ///
    /// # Arguments
    /// * `api` - Typed HTTP access for both data sources
    /// * `platform` - Supplies the storage adapter for the character store
    /// * `config` - Locations of the roster document and the users endpoint
    pub fn new(api: Api, platform: &Platform, config: &ClientConfig) -> Self {
        Self {
            character: Arc::new(CharacterService::new(
                api.clone(),
                platform.storage_adapter(),
                config.characters_url.clone(),
            )),
            player: Arc::new(PlayerService::new(api, config.players_url.clone())),
        }
    }
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<UiCharacterService> {
    let services = use_context::<Services>();
    services.character.clone()
}

/// Hook to access the PlayerService from context
pub fn use_player_service() -> Arc<PlayerService> {
    let services = use_context::<Services>();
    services.player.clone()
}

/// Hook to access the ClientConfig from context
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
