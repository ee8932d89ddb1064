//! Page title, subtitle and the loading banner

use dioxus::prelude::*;

use crate::config::{PAGE_TITLE, RESET_FLASH_MS};
use crate::presentation::state::{use_roster_state, LoadStatus};
use crate::use_platform;

#[component]
pub fn PageHeader() -> Element {
    let roster_state = use_roster_state();
    let platform = use_platform();
    let mut flashing = use_signal(|| false);
    let resets = use_memo(move || roster_state.model.read().resets());

    // Each reset briefly shows the loading banner again
    use_effect(move || {
        let resets_seen = resets();
        if resets_seen == 0 {
            return;
        }
        flashing.set(true);
        let platform = platform.clone();
        spawn(async move {
            platform.sleep_ms(RESET_FLASH_MS).await;
            if *resets.peek() == resets_seen {
                flashing.set(false);
            }
        });
    });

    let loading = *roster_state.status.read() == LoadStatus::Loading || flashing();

    rsx! {
        header {
            class: "page-header",
            h1 { class: "page-title", "{PAGE_TITLE}" }
            h2 { class: "page-subtitle", "Characters" }
            if loading {
                h3 { class: "loading-banner", "Loading…" }
            }
        }
    }
}
