//! Player panel status

use kartsim_domain::Player;

use crate::application::ServiceError;
use crate::ports::outbound::PlatformPort;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Player>),
    Failed(String),
}

impl PanelStatus {
    /// A fetch is running or has already succeeded
    pub fn blocks_fetch(&self) -> bool {
        matches!(self, PanelStatus::Loading | PanelStatus::Loaded(_))
    }
}

/// Map a finished fetch onto the panel
pub fn panel_status(result: Result<Vec<Player>, ServiceError>) -> PanelStatus {
    match result {
        Ok(players) => PanelStatus::Loaded(players),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load players");
            PanelStatus::Failed(e.to_string())
        }
    }
}

/// Scroll to the bottom once the player blocks are rendered
pub fn scroll_when_loaded(status: &PanelStatus, platform: &dyn PlatformPort) {
    if matches!(status, PanelStatus::Loaded(_)) {
        platform.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::infrastructure::testing::fixtures::api_request_failed;

    fn player(name: &str) -> Player {
        Player {
            name: name.to_string(),
            username: name.to_lowercase(),
            website: format!("{}.org", name.to_lowercase()),
        }
    }

    #[test]
    fn loaded_players_scroll_the_page() {
        let (platform, handles) = create_mock_platform();

        let status = panel_status(Ok(vec![player("Leanne"), player("Ervin")]));
        scroll_when_loaded(&status, &platform);

        assert!(matches!(&status, PanelStatus::Loaded(p) if p.len() == 2));
        assert!(status.blocks_fetch());
        assert_eq!(handles.document.scroll_count(), 1);
    }

    #[test]
    fn failure_allows_another_attempt() {
        let (platform, handles) = create_mock_platform();

        let status = panel_status(Err(api_request_failed("offline").into()));
        scroll_when_loaded(&status, &platform);

        assert!(matches!(&status, PanelStatus::Failed(m) if m.contains("offline")));
        assert!(!status.blocks_fetch());
        assert_eq!(handles.document.scroll_count(), 0);
    }

    #[test]
    fn idle_and_loading_do_not_scroll() {
        let (platform, handles) = create_mock_platform();
        scroll_when_loaded(&PanelStatus::Idle, &platform);
        scroll_when_loaded(&PanelStatus::Loading, &platform);
        assert!(PanelStatus::Loading.blocks_fetch());
        assert_eq!(handles.document.scroll_count(), 0);
    }
}
