use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::TeamWithPlayers;
use crate::modules::stats::application::ports::outgoing::StatsProviderError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListTeamsWithPlayersError {
    #[error("Stats provider error: {0}")]
    Provider(String),
}

impl From<StatsProviderError> for ListTeamsWithPlayersError {
    fn from(err: StatsProviderError) -> Self {
        ListTeamsWithPlayersError::Provider(err.to_string())
    }
}

/// Every team with its roster attached. Fails as a whole if any roster fails.
#[async_trait]
pub trait ListTeamsWithPlayersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TeamWithPlayers>, ListTeamsWithPlayersError>;
}
