use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const HEADSHOT_BASE_URL: &str = "https://content.mlb.com/images/headshots/current/60x60";

pub type TeamId = u32;
pub type PlayerId = u32;

/// Headshot image location for a player. Derived from the id only.
pub fn headshot_url(player_id: PlayerId) -> String {
    format!("{HEADSHOT_BASE_URL}/{player_id}@2x.png")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[schema(example = 147)]
    pub id: TeamId,
    #[schema(example = "Yankees")]
    pub team_name: String,
    #[schema(example = "NYY")]
    pub abbreviation: String,
    #[schema(example = "Bronx")]
    pub location_name: String,
    #[schema(example = "1903")]
    pub first_year_of_play: String,
    #[schema(example = "American League")]
    pub league: Option<String>,
    #[schema(example = "American League East")]
    pub division: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[schema(example = 592450)]
    pub id: PlayerId,
    #[schema(example = "Aaron Judge")]
    pub full_name: String,
    #[schema(example = "99")]
    pub jersey_number: String,
    #[schema(example = "Outfielder")]
    pub position: String,
    pub image_url: String,
}

impl Player {
    pub fn new(id: PlayerId, full_name: String, jersey_number: String, position: String) -> Self {
        Self {
            id,
            full_name,
            jersey_number,
            position,
            image_url: headshot_url(id),
        }
    }
}

/// A team with its roster attached. Serializes as the team's own fields plus `players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamWithPlayers {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}
