pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::modules::stats::adapter::outgoing::MlbStatsApi;
use crate::modules::stats::application::services::{
    ListPlayersService, ListTeamsService, ListTeamsWithPlayersService,
};
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::modules::users::adapter::outgoing::UserRepositoryPostgres;
use crate::modules::users::application::services::{
    CreateUserService, DeleteUserService, GetUserService, ListUsersService, UpdateUserService,
};
use crate::modules::users::application::user_use_cases::UserUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub users: UserUseCases,
    pub stats: StatsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    // Unique indexes must exist before the first insert
    Migrator::up(&conn, None)
        .await
        .context("Failed to run database migrations")?;

    let db_arc = Arc::new(conn);

    // Users
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let users = UserUseCases {
        create: Arc::new(CreateUserService::new(user_repo.clone())),
        get: Arc::new(GetUserService::new(user_repo.clone())),
        update: Arc::new(UpdateUserService::new(user_repo.clone())),
        delete: Arc::new(DeleteUserService::new(user_repo.clone())),
        list: Arc::new(ListUsersService::new(user_repo)),
    };

    // Stats
    let stats_api = MlbStatsApi::new(
        config.stats_api_base_url.clone(),
        config.stats_sport_id,
        config.stats_http_timeout,
    )
    .context("Failed to build stats HTTP client")?;
    let stats = StatsUseCases {
        list_teams: Arc::new(ListTeamsService::new(stats_api.clone())),
        list_players: Arc::new(ListPlayersService::new(stats_api.clone())),
        list_teams_with_players: Arc::new(ListTeamsWithPlayersService::new(
            stats_api,
            config.roster_concurrency,
        )),
    };

    let state = AppState { users, stats };

    let server_url = config.server_address();
    info!(address = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    if let Ok(conn) = Arc::try_unwrap(db_arc) {
        conn.close().await.context("Failed to close database pool")?;
    }

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(custom_json_config())
        .app_data(custom_query_config())
        .app_data(custom_path_config());
    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Stats
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::list_teams_handler);
    cfg.service(crate::modules::stats::adapter::incoming::web::routes::list_players_handler);
    cfg.service(
        crate::modules::stats::adapter::incoming::web::routes::list_teams_with_players_handler,
    );
    // Users
    cfg.service(crate::modules::users::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::modules::users::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::modules::users::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::modules::users::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::modules::users::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
