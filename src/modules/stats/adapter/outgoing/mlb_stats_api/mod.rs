mod dto;
mod http_client;

pub use http_client::MlbStatsApi;
