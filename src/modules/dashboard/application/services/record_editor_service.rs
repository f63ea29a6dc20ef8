use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use super::bucket_uploader::BucketUploader;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    RecordEditorError, RecordEditorUseCase, SubmitOutcome,
};
use crate::modules::form::{FormMode, FormState, FormView, ModalSession};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, FileStorage, Record, RecordId, RecordStore, RecordStoreError,
};
use crate::modules::schema::Collection;

pub struct RecordEditorService {
    store: Arc<dyn RecordStore>,
    storage: Arc<dyn FileStorage>,
    bucket: String,
}

impl RecordEditorService {
    pub fn new(store: Arc<dyn RecordStore>, storage: Arc<dyn FileStorage>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            storage,
            bucket: bucket.into(),
        }
    }

    fn write_failed(collection: Collection, action: &str, e: RecordStoreError) -> RecordEditorError {
        error!(collection = %collection, action, error = %e, "Write rejected");
        RecordEditorError::Write(e.user_message())
    }
}

#[async_trait]
impl RecordEditorUseCase for RecordEditorService {
    fn open_create(&self, collection: Collection) -> Result<FormView, RecordEditorError> {
        let mut session = ModalSession::new();
        Ok(session.open_create(collection)?.clone())
    }

    async fn open_edit(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<FormView, RecordEditorError> {
        let mut session = ModalSession::new();
        let view = session
            .open_edit(collection, id, self.store.as_ref())
            .await?;
        Ok(view.clone())
    }

    async fn submit(
        &self,
        token: &AccessToken,
        collection: Collection,
        mode: FormMode,
        form: FormState,
    ) -> Result<SubmitOutcome, RecordEditorError> {
        let mut session = ModalSession::new();
        session.resume(collection, mode.clone())?;

        let uploader = BucketUploader::new(self.storage.clone(), token.clone(), self.bucket.clone());
        let extraction = session.submit(form, &uploader).await?;

        let table = collection.table();
        let written = match &mode {
            FormMode::Create => self
                .store
                .insert(token, table, extraction.payload)
                .await
                .map_err(|e| Self::write_failed(collection, "insert", e)),
            FormMode::Edit(id) => self
                .store
                .update(token, table, id, extraction.payload)
                .await
                .map_err(|e| Self::write_failed(collection, "update", e)),
        };
        session.finish();
        written?;

        info!(
            collection = %collection,
            warnings = extraction.warnings.len(),
            "Record saved"
        );
        Ok(SubmitOutcome {
            warnings: extraction.warnings,
        })
    }

    async fn delete(
        &self,
        token: &AccessToken,
        collection: Collection,
        id: &RecordId,
    ) -> Result<(), RecordEditorError> {
        self.store
            .delete(token, collection.table(), id)
            .await
            .map_err(|e| Self::write_failed(collection, "delete", e))?;

        info!(collection = %collection, id = %id, "Record deleted");
        Ok(())
    }

    async fn add_skill(&self, token: &AccessToken, name: &str) -> Result<bool, RecordEditorError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let mut payload = Record::new();
        payload.insert("name".to_string(), Value::String(name.to_string()));

        self.store
            .insert(token, Collection::Skills.table(), payload)
            .await
            .map_err(|e| Self::write_failed(Collection::Skills, "insert", e))?;

        info!(skill = %name, "Skill added");
        Ok(true)
    }
}
