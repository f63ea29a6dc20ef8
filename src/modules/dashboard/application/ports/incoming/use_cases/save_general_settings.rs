use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::dashboard::application::domain::SaveGeneralCommand;
use crate::modules::gateway::application::ports::outgoing::AccessToken;
use crate::modules::portfolio::application::domain::GlobalConfig;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SaveGeneralSettingsError {
    #[error("Could not encode settings: {0}")]
    Encode(String),

    #[error("{0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveGeneralOutcome {
    pub config: Arc<GlobalConfig>,
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait SaveGeneralSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        token: &AccessToken,
        command: SaveGeneralCommand,
    ) -> Result<SaveGeneralOutcome, SaveGeneralSettingsError>;
}
