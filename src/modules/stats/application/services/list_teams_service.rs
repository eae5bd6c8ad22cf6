use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::Team;
use crate::modules::stats::application::ports::incoming::use_cases::{
    ListTeamsError, ListTeamsUseCase,
};
use crate::modules::stats::application::ports::outgoing::StatsProvider;

pub struct ListTeamsService<P>
where
    P: StatsProvider,
{
    provider: P,
}

impl<P> ListTeamsService<P>
where
    P: StatsProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ListTeamsUseCase for ListTeamsService<P>
where
    P: StatsProvider + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Team>, ListTeamsError> {
        self.provider
            .fetch_teams()
            .await
            .map_err(ListTeamsError::from)
    }
}
