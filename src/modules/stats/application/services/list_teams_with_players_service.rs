use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::modules::stats::application::domain::entities::{Player, TeamWithPlayers};
use crate::modules::stats::application::ports::incoming::use_cases::{
    ListTeamsWithPlayersError, ListTeamsWithPlayersUseCase,
};
use crate::modules::stats::application::ports::outgoing::{StatsProvider, StatsProviderError};

/// Fetches the team list, then each team's roster with at most
/// `roster_concurrency` requests in flight. Output keeps team order.
pub struct ListTeamsWithPlayersService<P>
where
    P: StatsProvider,
{
    provider: P,
    roster_concurrency: usize,
}

impl<P> ListTeamsWithPlayersService<P>
where
    P: StatsProvider,
{
    pub fn new(provider: P, roster_concurrency: usize) -> Self {
        Self {
            provider,
            roster_concurrency: roster_concurrency.max(1),
        }
    }
}

#[async_trait]
impl<P> ListTeamsWithPlayersUseCase for ListTeamsWithPlayersService<P>
where
    P: StatsProvider + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TeamWithPlayers>, ListTeamsWithPlayersError> {
        let teams = self.provider.fetch_teams().await?;
        debug!(
            teams = teams.len(),
            concurrency = self.roster_concurrency,
            "Fetching rosters"
        );

        // `buffered` yields in input order; `try_collect` stops at the first failure.
        let team_ids: Vec<_> = teams.iter().map(|team| team.id).collect();
        let rosters: Vec<Vec<Player>> = stream::iter(team_ids.into_iter().map(|team_id| {
            async move {
                self.provider
                    .fetch_roster(team_id)
                    .await
                    .map_err(|err| match err {
                        StatsProviderError::NotFound => ListTeamsWithPlayersError::Provider(
                            format!("Roster for team {team_id} not found"),
                        ),
                        other => ListTeamsWithPlayersError::from(other),
                    })
            }
        }))
        .buffered(self.roster_concurrency)
        .try_collect()
        .await?;

        Ok(teams
            .into_iter()
            .zip(rosters)
            .map(|(team, players)| TeamWithPlayers { team, players })
            .collect())
    }
}
