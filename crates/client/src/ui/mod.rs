use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    let platform = use_platform();

    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::RosterState::new);
    use_context_provider(presentation::state::NoticeState::new);

    use_hook(move || presentation::handlers::init_page(platform.as_ref()));

    rsx! {
        WebStylesheet {}
        presentation::views::HomeView {}
    }
}

/// Desktop builds inject the stylesheet into the window head at launch.
#[cfg(target_arch = "wasm32")]
#[component]
fn WebStylesheet() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn WebStylesheet() -> Element {
    rsx! {}
}
