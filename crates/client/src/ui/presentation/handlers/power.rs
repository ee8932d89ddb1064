//! Power increment outcomes

use kartsim_domain::{CharacterId, PowerChange};

use crate::application::ServiceError;
use crate::config::WARNING_DISPLAY_MS;
use crate::ports::outbound::{audio_elements, PlatformPort};
use crate::presentation::state::MAX_POWER_WARNING;

/// React to one increment click.
///
/// Plays the power-up cue on a raise. Returns the warning to show when the
/// gauge was already full.
pub fn handle_power_result(
    result: Result<PowerChange, ServiceError>,
    id: CharacterId,
    platform: &dyn PlatformPort,
) -> Option<&'static str> {
    match result {
        Ok(PowerChange::Raised { previous, current }) => {
            tracing::info!(%id, %previous, %current, "Power raised");
            platform.audio_play(audio_elements::POWER_UP_EFFECT);
            None
        }
        Ok(PowerChange::AlreadyMax) => Some(MAX_POWER_WARNING),
        Err(e) if e.is_not_found() => {
            tracing::warn!(%id, "Increment for a character no longer in the roster");
            None
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "Failed to raise power");
            None
        }
    }
}

/// Wait out the warning display time, then hand back the generation to dismiss
pub async fn warning_expired(platform: &dyn PlatformPort, generation: u64) -> u64 {
    platform.sleep_ms(WARNING_DISPLAY_MS).await;
    generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::application::services::CharacterService;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockStorageProvider};
    use crate::infrastructure::testing::fixtures::character;
    use crate::ports::outbound::MockRawApiPort;
    use crate::presentation::state::{RosterModel, WarningSlot};
    use kartsim_domain::{DomainError, Power, Roster};
    use std::sync::Arc;

    fn service() -> CharacterService<MockStorageProvider> {
        let api = Api::new(Arc::new(MockRawApiPort::new()));
        CharacterService::new(api, MockStorageProvider::new(), "characters.json")
    }

    #[test]
    fn raise_plays_power_up_cue() {
        let (platform, handles) = create_mock_platform();
        let change = PowerChange::Raised {
            previous: Power::new(50).unwrap(),
            current: Power::new(60).unwrap(),
        };

        let warning = handle_power_result(Ok(change), CharacterId::new(2), &platform);

        assert_eq!(warning, None);
        assert_eq!(handles.audio.calls(), vec!["play power-up-effect"]);
    }

    #[test]
    fn full_gauge_warns_without_sound() {
        let (platform, handles) = create_mock_platform();

        let warning =
            handle_power_result(Ok(PowerChange::AlreadyMax), CharacterId::new(2), &platform);

        assert_eq!(warning, Some(MAX_POWER_WARNING));
        assert!(handles.audio.calls().is_empty());
    }

    #[test]
    fn unknown_character_is_quiet() {
        let (platform, handles) = create_mock_platform();
        let err = ServiceError::from(DomainError::not_found("Character", "9"));

        let warning = handle_power_result(Err(err), CharacterId::new(9), &platform);

        assert_eq!(warning, None);
        assert!(handles.audio.calls().is_empty());
    }

    #[tokio::test]
    async fn mario_reaches_max_then_warning_expires() {
        let (platform, handles) = create_mock_platform();
        let svc = service();
        let mut model = RosterModel::new(Roster::new(vec![character(2, "Mario", 50)]).unwrap());
        let mut slot = WarningSlot::default();
        let mario = CharacterId::new(2);

        for _ in 0..5 {
            let result = model.increment(&svc, mario);
            assert_eq!(handle_power_result(result, mario, &platform), None);
        }
        assert_eq!(model.visible()[0].power(), Power::MAX);
        assert_eq!(handles.audio.calls().len(), 5);

        let result = model.increment(&svc, mario);
        let warning = handle_power_result(result, mario, &platform);
        assert_eq!(warning, Some(MAX_POWER_WARNING));
        assert_eq!(handles.audio.calls().len(), 5);

        let generation = slot.show(MAX_POWER_WARNING);
        let expired = warning_expired(&platform, generation).await;
        assert!(slot.dismiss_if_current(expired));
        assert_eq!(slot.message(), None);
        assert_eq!(handles.sleep.requests(), vec![WARNING_DISPLAY_MS]);
    }
}
