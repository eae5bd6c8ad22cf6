use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::{Player, TeamId};
use crate::modules::stats::application::ports::incoming::use_cases::{
    ListPlayersError, ListPlayersUseCase,
};
use crate::modules::stats::application::ports::outgoing::{StatsProvider, StatsProviderError};

pub struct ListPlayersService<P>
where
    P: StatsProvider,
{
    provider: P,
}

impl<P> ListPlayersService<P>
where
    P: StatsProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ListPlayersUseCase for ListPlayersService<P>
where
    P: StatsProvider + Send + Sync,
{
    async fn execute(&self, team_id: TeamId) -> Result<Vec<Player>, ListPlayersError> {
        self.provider
            .fetch_roster(team_id)
            .await
            .map_err(|err| match err {
                StatsProviderError::NotFound => ListPlayersError::TeamNotFound(team_id),
                other => ListPlayersError::Provider(other.to_string()),
            })
    }
}
