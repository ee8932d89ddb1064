//! Transient "maximum power" warning
//!
//! Hides itself after `WARNING_DISPLAY_MS`. A newer warning restarts the
//! timer; the older timer then finds a different generation and does nothing.

use dioxus::prelude::*;

use crate::presentation::handlers::warning_expired;
use crate::presentation::state::use_notice_state;
use crate::use_platform;

#[component]
pub fn PowerWarning() -> Element {
    let notice_state = use_notice_state();
    let platform = use_platform();

    use_effect(move || {
        let (showing, generation) = {
            let slot = notice_state.warning.read();
            (slot.message().is_some(), slot.generation())
        };
        if !showing {
            return;
        }
        let platform = platform.clone();
        let mut notice_state = notice_state;
        spawn(async move {
            let generation = warning_expired(platform.as_ref(), generation).await;
            notice_state.dismiss_if_current(generation);
        });
    });

    let warning = notice_state.warning.read().message().map(str::to_string);

    rsx! {
        if let Some(message) = warning {
            div {
                class: "power-warning fade-in",
                role: "alert",
                "{message}"
            }
        }
    }
}
