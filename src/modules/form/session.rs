use tracing::{info, warn};

use super::extract::{extract, Extraction, FormState, Uploader};
use super::view::{FormMode, FormView};
use crate::modules::gateway::application::ports::outgoing::{RecordId, RecordStore};
use crate::modules::schema::Collection;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Open(FormView),
    Submitting(FormView),
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ModalError {
    #[error("A form is already open")]
    AlreadyOpen,

    #[error("No form is open")]
    NotOpen,

    #[error("{0} entries cannot be edited")]
    UpdateUnsupported(Collection),
}

/// Lifecycle of the create/edit modal.
///
/// `Closed → Open(Create | Edit) → Submitting → Closed`, with `Open → Closed`
/// on cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    state: ModalState,
}

impl Default for ModalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalSession {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn view(&self) -> Option<&FormView> {
        match &self.state {
            ModalState::Open(view) | ModalState::Submitting(view) => Some(view),
            ModalState::Closed => None,
        }
    }

    pub fn open_create(&mut self, collection: Collection) -> Result<&FormView, ModalError> {
        self.open(FormView::build(collection, FormMode::Create))
    }

    /// Opens the form for an existing record.
    ///
    /// The record is fetched once. If the fetch fails or finds nothing the
    /// form still opens with blank fields; the failure is only logged.
    pub async fn open_edit(
        &mut self,
        collection: Collection,
        id: RecordId,
        store: &dyn RecordStore,
    ) -> Result<&FormView, ModalError> {
        self.ensure_editable(collection)?;
        if self.state != ModalState::Closed {
            return Err(ModalError::AlreadyOpen);
        }

        let mut view = FormView::build(collection, FormMode::Edit(id.clone()));
        match store.select_one(collection.table(), &id).await {
            Ok(Some(record)) => view.populate(&record),
            Ok(None) => warn!(collection = %collection, id = %id, "Record not found, opening blank form"),
            Err(e) => warn!(
                collection = %collection,
                id = %id,
                error = %e,
                "Record fetch failed, opening blank form"
            ),
        }

        self.open(view)
    }

    /// Reopens a form for a posted submission without fetching anything.
    pub fn resume(&mut self, collection: Collection, mode: FormMode) -> Result<&FormView, ModalError> {
        if matches!(mode, FormMode::Edit(_)) {
            self.ensure_editable(collection)?;
        }
        self.open(FormView::build(collection, mode))
    }

    /// `Open → Closed`. The dashboard's cancel link reaches the same state by
    /// navigating away.
    #[cfg(test)]
    pub fn cancel(&mut self) {
        if matches!(self.state, ModalState::Open(_)) {
            self.state = ModalState::Closed;
        }
    }

    /// Moves to `Submitting` and extracts the payload. Call [`finish`] once the
    /// write has completed, whatever its outcome.
    ///
    /// [`finish`]: ModalSession::finish
    pub async fn submit(
        &mut self,
        state: FormState,
        uploader: &dyn Uploader,
    ) -> Result<Extraction, ModalError> {
        let view = match std::mem::replace(&mut self.state, ModalState::Closed) {
            ModalState::Open(view) => view,
            other => {
                self.state = other;
                return Err(ModalError::NotOpen);
            }
        };

        self.state = ModalState::Submitting(view);
        let ModalState::Submitting(view) = &self.state else {
            return Err(ModalError::NotOpen);
        };

        Ok(extract(view, state, uploader).await)
    }

    pub fn finish(&mut self) {
        if let ModalState::Submitting(view) = &self.state {
            info!(collection = %view.collection, "Form closed after submit");
        }
        self.state = ModalState::Closed;
    }

    fn open(&mut self, view: FormView) -> Result<&FormView, ModalError> {
        if self.state != ModalState::Closed {
            return Err(ModalError::AlreadyOpen);
        }
        self.state = ModalState::Open(view);
        self.view().ok_or(ModalError::NotOpen)
    }

    fn ensure_editable(&self, collection: Collection) -> Result<(), ModalError> {
        if collection.supports_update() {
            Ok(())
        } else {
            Err(ModalError::UpdateUnsupported(collection))
        }
    }
}
