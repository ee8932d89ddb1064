//! Background audio toggle state
//!
//! One value drives both the playback call and the button label, so the two
//! can never disagree.

use serde::{Deserialize, Serialize};

/// Playback state of the background track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioState {
    Playing,
    #[default]
    Paused,
}

impl AudioState {
    /// The state after one press of the toggle button
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Button label for this state
    pub fn label(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        assert_eq!(AudioState::default(), AudioState::Paused);
        assert_eq!(AudioState::default().label(), "Paused");
    }

    #[test]
    fn toggle_from_paused_plays() {
        let next = AudioState::Paused.toggled();
        assert!(next.is_playing());
        assert_eq!(next.label(), "Playing");
    }

    #[test]
    fn double_toggle_round_trips() {
        for state in [AudioState::Playing, AudioState::Paused] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }
}
