//! Background track control

use kartsim_domain::AudioState;

use crate::config::BACKGROUND_VOLUME;
use crate::ports::outbound::{audio_elements, PlatformPort};

/// Apply the start-up volume to the background track
pub fn init_audio(platform: &dyn PlatformPort) {
    platform.audio_set_volume(audio_elements::BACKGROUND_TRACK, BACKGROUND_VOLUME);
}

/// Flip the audio state and drive playback from the new value.
///
/// The returned state is also what the toggle button labels itself with.
pub fn toggle_audio(platform: &dyn PlatformPort, current: AudioState) -> AudioState {
    let next = current.toggled();
    if next.is_playing() {
        platform.audio_play(audio_elements::BACKGROUND_TRACK);
    } else {
        platform.audio_pause(audio_elements::BACKGROUND_TRACK);
    }
    tracing::debug!(state = next.label(), "Background track toggled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn init_sets_background_volume() {
        let (platform, handles) = create_mock_platform();
        init_audio(&platform);
        assert_eq!(handles.audio.calls(), vec!["volume background-track 0.1"]);
    }

    #[test]
    fn toggle_from_paused_plays_and_labels_playing() {
        let (platform, handles) = create_mock_platform();

        let state = toggle_audio(&platform, AudioState::Paused);

        assert_eq!(state, AudioState::Playing);
        assert_eq!(state.label(), "Playing");
        assert_eq!(handles.audio.calls(), vec!["play background-track"]);
    }

    #[test]
    fn two_toggles_return_to_paused() {
        let (platform, handles) = create_mock_platform();

        let state = toggle_audio(&platform, AudioState::default());
        let state = toggle_audio(&platform, state);

        assert_eq!(state, AudioState::Paused);
        assert_eq!(state.label(), "Paused");
        assert_eq!(
            handles.audio.calls(),
            vec!["play background-track", "pause background-track"]
        );
    }
}
