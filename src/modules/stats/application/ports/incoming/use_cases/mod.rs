mod list_players;
mod list_teams;
mod list_teams_with_players;

pub use list_players::{ListPlayersError, ListPlayersUseCase};
pub use list_teams::{ListTeamsError, ListTeamsUseCase};
pub use list_teams_with_players::{ListTeamsWithPlayersError, ListTeamsWithPlayersUseCase};
