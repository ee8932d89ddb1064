//! Character list - one card per character in the current filtered view
//!
//! Cards are keyed by character id, so each rendered card owns exactly one
//! increment handler for exactly one character.

use dioxus::prelude::*;
use kartsim_domain::{Character, CharacterId, MAX_POWER};

use crate::presentation::handlers::handle_power_result;
use crate::presentation::services::use_character_service;
use crate::presentation::state::{use_notice_state, use_roster_state};
use crate::use_platform;

#[component]
pub fn CharacterList() -> Element {
    let mut roster_state = use_roster_state();
    let mut notice_state = use_notice_state();
    let character_service = use_character_service();
    let platform = use_platform();

    let on_increment = use_callback(move |id: CharacterId| {
        let result = roster_state.increment(character_service.as_ref(), id);
        if let Some(warning) = handle_power_result(result, id, platform.as_ref()) {
            notice_state.show_warning(warning);
        }
    });

    let visible = roster_state.model.read().visible();

    rsx! {
        ul {
            class: "character-list",
            for character in visible {
                CharacterCard {
                    key: "{character.id}",
                    character: character.clone(),
                    on_increment,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    pub on_increment: EventHandler<CharacterId>,
}

/// A single roster entry: portrait, name, power gauge and increment button
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let character = &props.character;
    let id = character.id;
    let power = character.power();
    let on_increment = props.on_increment;

    rsx! {
        li {
            id: "{character.element_id()}",
            class: "character-card fade-in",
            img {
                class: "character-portrait",
                src: "{character.image_url}",
                alt: "{character.name}",
            }
            h4 { class: "character-name", "{character.name}" }
            div {
                class: "power-row",
                progress {
                    class: "power-gauge",
                    max: "{MAX_POWER}",
                    value: "{power.value()}",
                }
                h5 { class: "power-label", "{power.percent_label()}" }
                button {
                    class: "btn btn-increment",
                    r#type: "button",
                    onclick: move |_| on_increment.call(id),
                    "+"
                }
            }
        }
    }
}
