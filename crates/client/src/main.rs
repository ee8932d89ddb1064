//! Kart Roster - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kartsim_client::config::{ClientConfig, PAGE_TITLE};
use kartsim_client::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kartsim_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting {PAGE_TITLE}");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = ?e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Loaded client configuration");

    // Platform
    let platform = kartsim_client::infrastructure::platform::create_platform();

    // HTTP
    let raw_api = Arc::new(kartsim_client::infrastructure::http_client::ApiAdapter::new());
    let api = kartsim_client::application::api::Api::new(raw_api);

    let services = kartsim_client::presentation::Services::new(api, &platform, &config);
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(PAGE_TITLE);
        let head = format!("<style>{}</style>", load_client_css());
        let cfg = dioxus_desktop::Config::new()
            .with_window(window)
            .with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .with_context(config)
        .launch(kartsim_client::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<ClientConfig> {
    use anyhow::Context;

    kartsim_client::config::load_dotenv_from_repo_root();
    ClientConfig::from_env().context("reading KARTSIM_* environment variables")
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<ClientConfig> {
    Ok(ClientConfig::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_client_css() -> String {
    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("css")
        .join("main.css");
    std::fs::read_to_string(&css_path).unwrap_or_else(|e| {
        tracing::warn!(path = %css_path.display(), error = %e, "Stylesheet not found");
        String::new()
    })
}
