use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::{Player, TeamId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListPlayersError {
    #[error("Team {0} not found")]
    TeamNotFound(TeamId),

    #[error("Stats provider error: {0}")]
    Provider(String),
}

#[async_trait]
pub trait ListPlayersUseCase: Send + Sync {
    async fn execute(&self, team_id: TeamId) -> Result<Vec<Player>, ListPlayersError>;
}
