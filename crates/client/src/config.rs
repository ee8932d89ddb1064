//! Client configuration
//!
//! Web builds use compiled-in defaults. Desktop builds read `.env.local` /
//! `.env` from the repo root and then the process environment.

/// Page title shown in the browser tab and desktop window
pub const PAGE_TITLE: &str = "Mario Kart Simulator";

/// Remote read-only users endpoint
pub const DEFAULT_PLAYERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// How long the "maximum power" warning stays visible
pub const WARNING_DISPLAY_MS: u64 = 4000;

/// How long the loading banner flashes after a filter reset
pub const RESET_FLASH_MS: u64 = 600;

/// Background track volume applied at start-up
pub const BACKGROUND_VOLUME: f64 = 0.1;

/// Runtime configuration, provided to the UI through Dioxus context
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Static roster document (URL, or a filesystem path on desktop)
    pub characters_url: String,
    /// Remote users endpoint for the player panel
    pub players_url: String,
    /// Looping background track
    pub background_track_url: String,
    /// Short sound played on every successful power increment
    pub power_up_sound_url: String,
}

/// Served from the crate's `public/` directory at the site root
pub const DEFAULT_BACKGROUND_TRACK: &str = "/audio/background.mp3";
pub const DEFAULT_POWER_UP_SOUND: &str = "/audio/power-up.mp3";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            characters_url: bundled_roster_url(),
            players_url: DEFAULT_PLAYERS_URL.to_string(),
            background_track_url: DEFAULT_BACKGROUND_TRACK.to_string(),
            power_up_sound_url: DEFAULT_POWER_UP_SOUND.to_string(),
        }
    }
}

/// The roster document bundled by the asset pipeline
#[cfg(target_arch = "wasm32")]
fn bundled_roster_url() -> String {
    use dioxus::prelude::{asset, manganis, Asset};

    const ROSTER: Asset = asset!("/assets/data/characters.json");
    ROSTER.to_string()
}

/// Desktop reads the roster straight from the crate directory
#[cfg(not(target_arch = "wasm32"))]
fn bundled_roster_url() -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("data")
        .join("characters.json")
        .to_string_lossy()
        .into_owned()
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::ClientConfig;
    use anyhow::{bail, Result};
    use std::path::PathBuf;

    fn crate_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    impl ClientConfig {
        /// Load configuration from environment variables
        pub fn from_env() -> Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build a config from any key lookup (the environment, or a map in tests)
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
            let defaults = Self::default();

            let config = Self {
                characters_url: lookup("KARTSIM_CHARACTERS_URL").unwrap_or(defaults.characters_url),
                players_url: lookup("KARTSIM_PLAYERS_URL").unwrap_or(defaults.players_url),
                background_track_url: lookup("KARTSIM_BACKGROUND_TRACK")
                    .unwrap_or(defaults.background_track_url),
                power_up_sound_url: lookup("KARTSIM_POWER_UP_SOUND")
                    .unwrap_or(defaults.power_up_sound_url),
            };

            if config.characters_url.trim().is_empty() {
                bail!("KARTSIM_CHARACTERS_URL must not be empty");
            }
            if !(config.players_url.starts_with("http://")
                || config.players_url.starts_with("https://"))
            {
                bail!(
                    "KARTSIM_PLAYERS_URL must be an http(s) URL, got {:?}",
                    config.players_url
                );
            }

            Ok(config)
        }
    }

    /// Load `.env.local` then `.env` from the repo root, if present
    pub fn load_dotenv_from_repo_root() {
        let repo_root = crate_dir().join("..").join("..");

        // Prefer local overrides.
        for filename in [".env.local", ".env"] {
            let path = repo_root.join(filename);
            if path.exists() {
                let _ = dotenvy::from_path(path);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::load_dotenv_from_repo_root;
