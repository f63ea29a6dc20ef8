use async_trait::async_trait;

use crate::modules::form::{FormMode, FormState, FormView, ModalError};
use crate::modules::gateway::application::ports::outgoing::{AccessToken, RecordId};
use crate::modules::schema::Collection;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RecordEditorError {
    #[error(transparent)]
    Modal(#[from] ModalError),

    /// The backend refused the write; carries a user-facing message.
    #[error("{0}")]
    Write(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitOutcome {
    /// One entry per failed upload.
    pub warnings: Vec<String>,
}

/// Create, edit and delete entries of the content collections.
#[async_trait]
pub trait RecordEditorUseCase: Send + Sync {
    fn open_create(&self, collection: Collection) -> Result<FormView, RecordEditorError>;

    async fn open_edit(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<FormView, RecordEditorError>;

    async fn submit(
        &self,
        token: &AccessToken,
        collection: Collection,
        mode: FormMode,
        form: FormState,
    ) -> Result<SubmitOutcome, RecordEditorError>;

    async fn delete(
        &self,
        token: &AccessToken,
        collection: Collection,
        id: &RecordId,
    ) -> Result<(), RecordEditorError>;

    /// Inserts a skill by name. Blank names are ignored and return `false`.
    async fn add_skill(&self, token: &AccessToken, name: &str) -> Result<bool, RecordEditorError>;
}
