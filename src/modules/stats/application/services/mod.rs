mod list_players_service;
mod list_teams_service;
mod list_teams_with_players_service;

pub use list_players_service::ListPlayersService;
pub use list_teams_service::ListTeamsService;
pub use list_teams_with_players_service::ListTeamsWithPlayersService;
