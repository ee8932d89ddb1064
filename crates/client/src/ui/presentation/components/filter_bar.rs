//! Name filter: exact match on submit, substring autocomplete while typing

use dioxus::prelude::*;

use crate::presentation::state::{use_roster_state, NOT_FOUND_MESSAGE};

#[component]
pub fn FilterBar() -> Element {
    let mut roster_state = use_roster_state();
    let (query, not_found) = {
        let model = roster_state.model.read();
        (model.query().to_string(), model.not_found())
    };

    rsx! {
        form {
            class: "filter-bar",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                roster_state.submit_filter();
            },
            input {
                class: "filter-input",
                r#type: "text",
                placeholder: "Search a character",
                value: "{query}",
                oninput: move |evt: FormEvent| roster_state.autocomplete(evt.value()),
            }
            button {
                class: "btn",
                r#type: "submit",
                "Filter"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| roster_state.reset(),
                "Reset"
            }
        }

        if not_found {
            p { class: "filter-message", "{NOT_FOUND_MESSAGE}" }
        }
    }
}
