//! Background music toggle
//!
//! A single `AudioState` drives both playback and the button label.

use dioxus::prelude::*;
use kartsim_domain::AudioState;

use crate::presentation::handlers::{init_audio, toggle_audio};
use crate::use_platform;

#[component]
pub fn AudioToggle() -> Element {
    let platform = use_platform();
    let mut state = use_signal(AudioState::default);

    let volume_platform = platform.clone();
    use_effect(move || init_audio(volume_platform.as_ref()));

    let toggle = move |_| {
        let next = toggle_audio(platform.as_ref(), *state.peek());
        state.set(next);
    };

    let current = state();
    let class = if current.is_playing() {
        "btn audio-toggle playing"
    } else {
        "btn audio-toggle"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: toggle,
            "{current.label()}"
        }
    }
}
