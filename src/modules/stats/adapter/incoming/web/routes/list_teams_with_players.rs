use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::stats::application::domain::entities::TeamWithPlayers;
use crate::modules::stats::application::ports::incoming::use_cases::ListTeamsWithPlayersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List every team with its roster attached
#[utoipa::path(
    get,
    path = "/team_and_players",
    tag = "stats",
    responses(
        (status = 200, description = "Teams with their players", body = [TeamWithPlayers]),
        (status = 500, description = "Stats provider failure", body = ErrorResponse)
    )
)]
#[get("/team_and_players")]
pub async fn list_teams_with_players_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.list_teams_with_players.execute().await {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(ListTeamsWithPlayersError::Provider(msg)) => {
            error!(error = %msg, "Failed to list teams with players");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STATS_PROVIDER_ERROR",
                "Failed to fetch teams and players from stats provider",
            )
        }
    }
}
