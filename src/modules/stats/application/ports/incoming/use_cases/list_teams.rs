use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::Team;
use crate::modules::stats::application::ports::outgoing::StatsProviderError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListTeamsError {
    #[error("Stats provider error: {0}")]
    Provider(String),
}

impl From<StatsProviderError> for ListTeamsError {
    fn from(err: StatsProviderError) -> Self {
        ListTeamsError::Provider(err.to_string())
    }
}

#[async_trait]
pub trait ListTeamsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Team>, ListTeamsError>;
}
