//! Reusable UI components

pub mod audio_toggle;
pub mod character_list;
pub mod filter_bar;
pub mod page_header;
pub mod player_panel;
pub mod power_warning;

pub use audio_toggle::AudioToggle;
pub use character_list::{CharacterCard, CharacterList};
pub use filter_bar::FilterBar;
pub use page_header::PageHeader;
pub use player_panel::PlayerPanel;
pub use power_warning::PowerWarning;
