//! reqwest-backed adapter for the public MLB Stats API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{RosterResponseDto, TeamsResponseDto};
use crate::modules::stats::application::domain::entities::{Player, Team, TeamId};
use crate::modules::stats::application::ports::outgoing::{StatsProvider, StatsProviderError};

#[derive(Clone)]
pub struct MlbStatsApi {
    client: Client,
    base_url: Url,
    sport_id: u32,
}

impl MlbStatsApi {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, sport_id: u32, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            sport_id,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, StatsProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                StatsProviderError::Transport(format!("invalid stats base URL {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, StatsProviderError> {
        debug!(url = %url, "Requesting stats provider");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|err| StatsProviderError::Decode(format!("invalid JSON payload: {err}")))
    }
}

#[async_trait]
impl StatsProvider for MlbStatsApi {
    async fn fetch_teams(&self) -> Result<Vec<Team>, StatsProviderError> {
        let mut url = self.endpoint(&["teams"])?;
        url.query_pairs_mut()
            .append_pair("sportId", &self.sport_id.to_string());

        let dto: TeamsResponseDto = self.get_json(url).await?;
        Ok(dto.into_domain())
    }

    async fn fetch_roster(&self, team_id: TeamId) -> Result<Vec<Player>, StatsProviderError> {
        let team_segment = team_id.to_string();
        let url = self.endpoint(&["teams", team_segment.as_str(), "roster"])?;

        let dto: RosterResponseDto = self.get_json(url).await?;
        Ok(dto.into_domain())
    }
}

fn map_transport_error(error: reqwest::Error) -> StatsProviderError {
    if error.is_timeout() {
        StatsProviderError::Transport(format!("request timed out: {error}"))
    } else {
        StatsProviderError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StatsProviderError {
    if status == StatusCode::NOT_FOUND {
        return StatsProviderError::NotFound;
    }
    StatsProviderError::Upstream {
        status: status.as_u16(),
        message: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!(
            "{}...",
            compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>()
        )
    } else {
        compact
    }
}
