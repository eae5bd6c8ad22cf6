use std::sync::Arc;

use crate::modules::stats::application::ports::incoming::use_cases::{
    ListPlayersUseCase, ListTeamsUseCase, ListTeamsWithPlayersUseCase,
};

#[derive(Clone)]
pub struct StatsUseCases {
    pub list_teams: Arc<dyn ListTeamsUseCase + Send + Sync>,
    pub list_players: Arc<dyn ListPlayersUseCase + Send + Sync>,
    pub list_teams_with_players: Arc<dyn ListTeamsWithPlayersUseCase + Send + Sync>,
}
