pub mod mlb_stats_api;

pub use mlb_stats_api::MlbStatsApi;
