mod list_players;
mod list_teams;
mod list_teams_with_players;

pub use list_players::list_players_handler;
pub use list_teams::list_teams_handler;
pub use list_teams_with_players::list_teams_with_players_handler;

pub use list_players::__path_list_players_handler;
pub use list_teams::__path_list_teams_handler;
pub use list_teams_with_players::__path_list_teams_with_players_handler;
