pub mod app_state_builder;
pub mod in_memory_user_repository;
pub mod stats_fixtures;
pub mod stubs;
pub mod user_fixtures;
