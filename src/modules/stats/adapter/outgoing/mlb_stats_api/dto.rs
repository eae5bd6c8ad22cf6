//! Wire shapes of the MLB Stats API. Only the fields the service exposes are read.

use serde::Deserialize;

use crate::modules::stats::application::domain::entities::{Player, Team};

#[derive(Debug, Deserialize)]
pub(super) struct TeamsResponseDto {
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TeamDto {
    pub id: u32,
    pub team_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub first_year_of_play: String,
    pub league: Option<NamedRefDto>,
    pub division: Option<NamedRefDto>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedRefDto {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RosterResponseDto {
    #[serde(default)]
    pub roster: Vec<RosterEntryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RosterEntryDto {
    pub person: PersonDto,
    #[serde(default)]
    pub jersey_number: String,
    pub position: PositionDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PersonDto {
    pub id: u32,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PositionDto {
    pub name: String,
}

impl TeamsResponseDto {
    pub fn into_domain(self) -> Vec<Team> {
        self.teams.into_iter().map(TeamDto::into_domain).collect()
    }
}

impl TeamDto {
    fn into_domain(self) -> Team {
        Team {
            id: self.id,
            team_name: self.team_name,
            abbreviation: self.abbreviation,
            location_name: self.location_name,
            first_year_of_play: self.first_year_of_play,
            league: self.league.and_then(|l| l.name),
            division: self.division.and_then(|d| d.name),
            active: self.active,
        }
    }
}

impl RosterResponseDto {
    pub fn into_domain(self) -> Vec<Player> {
        self.roster
            .into_iter()
            .map(|entry| {
                Player::new(
                    entry.person.id,
                    entry.person.full_name,
                    entry.jersey_number,
                    entry.position.name,
                )
            })
            .collect()
    }
}
