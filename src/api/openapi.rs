use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::stats::application::domain::entities::{Player, Team, TeamWithPlayers};
use crate::modules::users::adapter::incoming::web::routes::{
    CreateUserRequest, UpdateUserRequest, UserListData,
};
use crate::modules::users::application::domain::entities::User;
use crate::shared::api::ResponseStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ballpark API",
        version = "0.1.0",
        description = "MLB stats proxy and user management"
    ),
    paths(
        crate::health::root,

        // Stats endpoints
        crate::modules::stats::adapter::incoming::web::routes::list_teams_handler,
        crate::modules::stats::adapter::incoming::web::routes::list_players_handler,
        crate::modules::stats::adapter::incoming::web::routes::list_teams_with_players_handler,

        // User endpoints
        crate::modules::users::adapter::incoming::web::routes::create_user_handler,
        crate::modules::users::adapter::incoming::web::routes::get_user_handler,
        crate::modules::users::adapter::incoming::web::routes::update_user_handler,
        crate::modules::users::adapter::incoming::web::routes::delete_user_handler,
        crate::modules::users::adapter::incoming::web::routes::list_users_handler,
    ),
    components(
        schemas(
            ResponseStatus,
            ErrorResponse,
            MessageResponse,
            User,
            UserListData,
            CreateUserRequest,
            UpdateUserRequest,
            Team,
            Player,
            TeamWithPlayers
        )
    ),
    tags(
        (name = "info", description = "Service status"),
        (name = "stats", description = "Teams and rosters from the MLB Stats API"),
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
