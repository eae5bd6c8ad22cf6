use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::{Player, Team, TeamId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsProviderError {
    /// The provider answered 404 for the requested resource.
    #[error("Resource not found at stats provider")]
    NotFound,

    #[error("Stats provider returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Stats provider unreachable: {0}")]
    Transport(String),

    #[error("Unexpected stats provider payload: {0}")]
    Decode(String),
}

/// Read-only source of teams and rosters. Nothing is cached; every call goes upstream.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// All teams of the configured sport, in provider order.
    async fn fetch_teams(&self) -> Result<Vec<Team>, StatsProviderError>;

    async fn fetch_roster(&self, team_id: TeamId) -> Result<Vec<Player>, StatsProviderError>;
}
