use async_trait::async_trait;

use crate::modules::gateway::application::ports::outgoing::{Record, RecordId};
use crate::modules::schema::Collection;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum GetRecordDetailsError {
    #[error("Record not found")]
    NotFound,

    #[error("{0} entries have no detail view")]
    NoDetails(Collection),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetRecordDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> Result<Record, GetRecordDetailsError>;
}
