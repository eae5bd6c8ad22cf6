use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::stats::application::domain::entities::Team;
use crate::modules::stats::application::ports::incoming::use_cases::ListTeamsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List all teams
#[utoipa::path(
    get,
    path = "/list_teams",
    tag = "stats",
    responses(
        (status = 200, description = "All teams of the configured sport", body = [Team]),
        (status = 500, description = "Stats provider failure", body = ErrorResponse)
    )
)]
#[get("/list_teams")]
pub async fn list_teams_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.list_teams.execute().await {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(ListTeamsError::Provider(msg)) => {
            error!(error = %msg, "Failed to list teams");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STATS_PROVIDER_ERROR",
                "Failed to fetch teams from stats provider",
            )
        }
    }
}
