//! Player Service - fetches the online players list
//!
//! Read-only; nothing here is persisted.

use kartsim_domain::Player;

use crate::application::api::Api;
use crate::application::ServiceError;

#[derive(Clone)]
pub struct PlayerService {
    api: Api,
    source: String,
}

impl PlayerService {
    pub fn new(api: Api, source: impl Into<String>) -> Self {
        Self {
            api,
            source: source.into(),
        }
    }

    /// Fetch the remote user list once. No retry.
    pub async fn load_players(&self) -> Result<Vec<Player>, ServiceError> {
        let players: Vec<Player> = self.api.get(&self.source).await?;
        tracing::debug!(?players, "Players from placeholder API");
        tracing::info!(count = players.len(), "Loaded players");
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{api_request_failed, users_document};
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    const USERS: &str = "https://jsonplaceholder.typicode.com/users";

    #[tokio::test]
    async fn load_players_keeps_display_fields() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|location| location == USERS)
            .times(1)
            .returning(|_| Ok(users_document()));

        let svc = PlayerService::new(Api::new(Arc::new(raw)), USERS);
        let players = svc.load_players().await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(
            players[0],
            Player {
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                website: "hildegard.org".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn load_players_reports_failure() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Err(api_request_failed("dns")));

        let svc = PlayerService::new(Api::new(Arc::new(raw)), USERS);
        assert!(matches!(
            svc.load_players().await,
            Err(ServiceError::Api(_))
        ));
    }
}
