//! Home view - the whole single-page application
//!
//! Loads the roster once on mount, then renders the filter bar, the list,
//! the player panel and the audio controls.

use dioxus::prelude::*;

use crate::ports::outbound::audio_elements;
use crate::presentation::components::{
    AudioToggle, CharacterList, FilterBar, PageHeader, PlayerPanel, PowerWarning,
};
use crate::presentation::services::{use_character_service, use_client_config};
use crate::presentation::state::{use_roster_state, LoadStatus};

#[component]
pub fn HomeView() -> Element {
    let roster_state = use_roster_state();
    let character_service = use_character_service();
    let config = use_client_config();

    use_future(move || {
        let service = character_service.clone();
        let mut roster_state = roster_state;
        async move {
            match service.load().await {
                Ok(roster) => roster_state.set_loaded(roster),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load character roster");
                    roster_state.set_failed(e.to_string());
                }
            }
        }
    });

    let status = roster_state.status.read().clone();

    rsx! {
        div {
            class: "page",

            audio {
                id: "{audio_elements::BACKGROUND_TRACK}",
                src: "{config.background_track_url}",
                r#loop: true,
                preload: "auto",
            }
            audio {
                id: "{audio_elements::POWER_UP_EFFECT}",
                src: "{config.power_up_sound_url}",
                preload: "auto",
            }

            PageHeader {}

            div {
                class: "toolbar",
                FilterBar {}
                AudioToggle {}
            }

            PowerWarning {}

            match status {
                LoadStatus::Failed(message) => rsx! {
                    div {
                        class: "error-banner",
                        role: "alert",
                        "Could not load characters: {message}"
                    }
                },
                LoadStatus::Ready => rsx! {
                    CharacterList {}
                },
                LoadStatus::Loading => rsx! {},
            }

            PlayerPanel {}
        }
    }
}
