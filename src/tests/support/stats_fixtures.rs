use async_trait::async_trait;
use mockall::mock;

use crate::modules::stats::application::domain::entities::{Player, PlayerId, Team, TeamId};
use crate::modules::stats::application::ports::outgoing::{StatsProvider, StatsProviderError};

pub fn team(id: TeamId, team_name: &str) -> Team {
    Team {
        id,
        team_name: team_name.to_string(),
        abbreviation: "TST".to_string(),
        location_name: "Somewhere".to_string(),
        first_year_of_play: "1901".to_string(),
        league: Some("American League".to_string()),
        division: Some("American League East".to_string()),
        active: true,
    }
}

pub fn player(id: PlayerId, full_name: &str) -> Player {
    Player::new(id, full_name.to_string(), "99".to_string(), "Outfielder".to_string())
}

mock! {
    pub StatsApi {}

    #[async_trait]
    impl StatsProvider for StatsApi {
        async fn fetch_teams(&self) -> Result<Vec<Team>, StatsProviderError>;
        async fn fetch_roster(&self, team_id: TeamId) -> Result<Vec<Player>, StatsProviderError>;
    }
}
