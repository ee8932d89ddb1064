//! Player panel - fetches the remote user list on demand

use dioxus::prelude::*;
use kartsim_domain::Player;

use crate::presentation::handlers::{panel_status, scroll_when_loaded, PanelStatus};
use crate::presentation::services::use_player_service;
use crate::use_platform;

#[component]
pub fn PlayerPanel() -> Element {
    let player_service = use_player_service();
    let platform = use_platform();
    let mut status = use_signal(PanelStatus::default);

    // Scroll once the player blocks are in the document
    use_effect(move || scroll_when_loaded(&status.read(), platform.as_ref()));

    let load_players = move |_| {
        if status.peek().blocks_fetch() {
            return;
        }
        status.set(PanelStatus::Loading);
        let service = player_service.clone();
        spawn(async move {
            status.set(panel_status(service.load_players().await));
        });
    };

    let current = status.read().clone();
    let in_flight = current == PanelStatus::Loading;
    let loaded = matches!(current, PanelStatus::Loaded(_));
    let button_class = if loaded { "btn fade-out" } else { "btn" };

    rsx! {
        section {
            class: "player-panel",
            button {
                class: "{button_class}",
                r#type: "button",
                disabled: in_flight || loaded,
                onclick: load_players,
                if in_flight { "Loading players…" } else { "Load players" }
            }

            match current {
                PanelStatus::Loaded(players) => rsx! {
                    h3 { class: "players-heading fade-in", "Players online ({players.len()})" }
                    for (index, player) in players.into_iter().enumerate() {
                        PlayerBlock { key: "{index}", player }
                    }
                },
                PanelStatus::Failed(message) => rsx! {
                    p { class: "error-message", "Could not load players: {message}" }
                },
                PanelStatus::Idle | PanelStatus::Loading => rsx! {},
            }
        }
    }
}

#[component]
fn PlayerBlock(player: Player) -> Element {
    rsx! {
        div {
            class: "player-block fade-in",
            p { "Name: {player.name}" }
            p { "Username: {player.username}" }
            p { "Website: {player.website}" }
        }
    }
}
