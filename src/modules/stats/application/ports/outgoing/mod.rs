pub mod stats_provider;

pub use stats_provider::{StatsProvider, StatsProviderError};
