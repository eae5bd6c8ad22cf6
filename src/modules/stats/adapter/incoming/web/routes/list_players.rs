use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::stats::application::domain::entities::{Player, TeamId};
use crate::modules::stats::application::ports::incoming::use_cases::ListPlayersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the roster of one team
#[utoipa::path(
    get,
    path = "/players/{team_id}",
    tag = "stats",
    params(("team_id" = u32, Path, description = "MLB team id")),
    responses(
        (status = 200, description = "Players on the team roster", body = [Player]),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 422, description = "Team id is not an integer", body = ErrorResponse),
        (status = 500, description = "Stats provider failure", body = ErrorResponse)
    )
)]
#[get("/players/{team_id}")]
pub async fn list_players_handler(
    path: web::Path<TeamId>,
    data: web::Data<AppState>,
) -> impl Responder {
    let team_id = path.into_inner();

    match data.stats.list_players.execute(team_id).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(ListPlayersError::TeamNotFound(_)) => {
            warn!(team_id, "Roster requested for unknown team");
            ApiResponse::not_found("TEAM_NOT_FOUND", "Team not found")
        }
        Err(ListPlayersError::Provider(msg)) => {
            error!(team_id, error = %msg, "Failed to list players");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STATS_PROVIDER_ERROR",
                "Failed to fetch players from stats provider",
            )
        }
    }
}
