use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::modules::gateway::application::ports::outgoing::{Record, RecordId, RecordStore};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetRecordDetailsError, GetRecordDetailsUseCase,
};
use crate::modules::schema::Collection;

pub struct GetRecordDetailsService {
    store: Arc<dyn RecordStore>,
}

impl GetRecordDetailsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetRecordDetailsUseCase for GetRecordDetailsService {
    async fn execute(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> Result<Record, GetRecordDetailsError> {
        if !matches!(
            collection,
            Collection::Projects | Collection::Achievements | Collection::Education
        ) {
            return Err(GetRecordDetailsError::NoDetails(collection));
        }

        match self.store.select_one(collection.table(), id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(GetRecordDetailsError::NotFound),
            Err(e) => {
                error!(collection = %collection, id = %id, error = %e, "Failed to load record details");
                Err(GetRecordDetailsError::RepositoryError(e.to_string()))
            }
        }
    }
}
