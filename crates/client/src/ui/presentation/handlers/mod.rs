//! Presentation handlers
//!
//! Plain functions that turn UI events and application results into platform
//! calls and state changes. Components stay thin; these take
//! `&dyn PlatformPort` so they can run against the mock platform.

pub mod audio;
pub mod page;
pub mod players;
pub mod power;

pub use audio::{init_audio, toggle_audio};
pub use page::init_page;
pub use players::{panel_status, scroll_when_loaded, PanelStatus};
pub use power::{handle_power_result, warning_expired};
