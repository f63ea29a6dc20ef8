use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::dashboard::application::domain::{LoginRequest, SaveGeneralCommand};
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    AdminAuthError, AdminAuthUseCase, RecordEditorError, RecordEditorUseCase, SaveGeneralOutcome,
    SaveGeneralSettingsError, SaveGeneralSettingsUseCase, SubmitOutcome,
};
use crate::modules::form::{FormMode, FormState, FormView, ModalError};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, BackendHealth, Record, RecordId, RecordStore, RecordStoreError, SelectQuery,
    Session, SessionUser,
};
use crate::modules::portfolio::application::domain::{
    ConfigUpdate, GlobalConfig, PortfolioPayload,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    FetchPortfolioUseCase, GetRecordDetailsError, GetRecordDetailsUseCase, LoadConfigUseCase,
};
use crate::modules::schema::Collection;

// ============================================================================
// Public site
// ============================================================================

#[derive(Default, Clone)]
pub struct StubFetchPortfolioUseCase {
    payload: PortfolioPayload,
}

impl StubFetchPortfolioUseCase {
    pub fn returning(payload: PortfolioPayload) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl FetchPortfolioUseCase for StubFetchPortfolioUseCase {
    async fn execute(&self) -> PortfolioPayload {
        self.payload.clone()
    }
}

#[derive(Clone)]
pub struct StubGetRecordDetailsUseCase {
    result: Result<Record, GetRecordDetailsError>,
}

impl StubGetRecordDetailsUseCase {
    pub fn found(record: Value) -> Self {
        Self {
            result: Ok(record.as_object().cloned().unwrap_or_default()),
        }
    }

    pub fn failing(err: GetRecordDetailsError) -> Self {
        Self { result: Err(err) }
    }

    pub fn not_found() -> Self {
        Self::failing(GetRecordDetailsError::NotFound)
    }
}

#[async_trait]
impl GetRecordDetailsUseCase for StubGetRecordDetailsUseCase {
    async fn execute(
        &self,
        _collection: Collection,
        _id: &RecordId,
    ) -> Result<Record, GetRecordDetailsError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubLoadConfigUseCase {
    config: Arc<GlobalConfig>,
}

#[async_trait]
impl LoadConfigUseCase for StubLoadConfigUseCase {
    async fn execute(&self) -> Arc<GlobalConfig> {
        self.config.clone()
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignedIn,
    SignedOut,
    Unavailable,
}

#[derive(Clone)]
pub struct StubAdminAuth {
    mode: AuthMode,
    pub sign_outs: Arc<AtomicUsize>,
}

impl StubAdminAuth {
    fn with_mode(mode: AuthMode) -> Self {
        Self {
            mode,
            sign_outs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Accepts any credentials and any token as `ada@example.com`.
    pub fn signed_in() -> Self {
        Self::with_mode(AuthMode::SignedIn)
    }

    pub fn signed_out() -> Self {
        Self::with_mode(AuthMode::SignedOut)
    }

    pub fn unavailable() -> Self {
        Self::with_mode(AuthMode::Unavailable)
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "u1".to_string(),
            email: Some("ada@example.com".to_string()),
        }
    }
}

#[async_trait]
impl AdminAuthUseCase for StubAdminAuth {
    async fn sign_in(&self, _request: LoginRequest) -> Result<Session, AdminAuthError> {
        match self.mode {
            AuthMode::SignedIn => Ok(Session {
                access_token: AccessToken::new("tok").unwrap(),
                expires_in: Some(3600),
                user: Self::user(),
            }),
            AuthMode::SignedOut => Err(AdminAuthError::InvalidCredentials(
                "Invalid login credentials".to_string(),
            )),
            AuthMode::Unavailable => Err(AdminAuthError::Unavailable("connection refused".to_string())),
        }
    }

    async fn verify(&self, _token: &AccessToken) -> Result<SessionUser, AdminAuthError> {
        match self.mode {
            AuthMode::SignedIn => Ok(Self::user()),
            AuthMode::SignedOut => Err(AdminAuthError::SessionExpired),
            AuthMode::Unavailable => Err(AdminAuthError::Unavailable("connection refused".to_string())),
        }
    }

    async fn sign_out(&self, _token: &AccessToken) {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every call. `opening` answers edit requests; `error` fails every
/// write.
#[derive(Clone, Default)]
pub struct StubRecordEditor {
    opening: Option<FormView>,
    warnings: Vec<String>,
    error: Option<RecordEditorError>,
    pub submissions: Arc<Mutex<Vec<(Collection, FormMode, FormState)>>>,
    pub deletions: Arc<Mutex<Vec<(Collection, String)>>>,
    pub skills: Arc<Mutex<Vec<String>>>,
}

impl StubRecordEditor {
    pub fn opening(view: FormView) -> Self {
        Self {
            opening: Some(view),
            ..Default::default()
        }
    }

    pub fn warning(message: &str) -> Self {
        Self {
            warnings: vec![message.to_string()],
            ..Default::default()
        }
    }

    pub fn failing(err: RecordEditorError) -> Self {
        Self {
            error: Some(err),
            ..Default::default()
        }
    }

    fn fail_if_configured(&self) -> Result<(), RecordEditorError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordEditorUseCase for StubRecordEditor {
    fn open_create(&self, collection: Collection) -> Result<FormView, RecordEditorError> {
        Ok(FormView::build(collection, FormMode::Create))
    }

    async fn open_edit(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<FormView, RecordEditorError> {
        if let Some(view) = &self.opening {
            return Ok(view.clone());
        }
        if !collection.supports_update() {
            return Err(ModalError::UpdateUnsupported(collection).into());
        }
        Ok(FormView::build(collection, FormMode::Edit(id)))
    }

    async fn submit(
        &self,
        _token: &AccessToken,
        collection: Collection,
        mode: FormMode,
        form: FormState,
    ) -> Result<SubmitOutcome, RecordEditorError> {
        self.fail_if_configured()?;
        self.submissions
            .lock()
            .unwrap()
            .push((collection, mode, form));
        Ok(SubmitOutcome {
            warnings: self.warnings.clone(),
        })
    }

    async fn delete(
        &self,
        _token: &AccessToken,
        collection: Collection,
        id: &RecordId,
    ) -> Result<(), RecordEditorError> {
        self.fail_if_configured()?;
        self.deletions
            .lock()
            .unwrap()
            .push((collection, id.as_str().to_string()));
        Ok(())
    }

    async fn add_skill(&self, _token: &AccessToken, name: &str) -> Result<bool, RecordEditorError> {
        self.fail_if_configured()?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.skills.lock().unwrap().push(name.to_string());
        Ok(true)
    }
}

#[derive(Clone, Default)]
pub struct StubSaveGeneralSettings {
    pub commands: Arc<Mutex<Vec<SaveGeneralCommand>>>,
}

impl StubSaveGeneralSettings {
    pub fn succeeding() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaveGeneralSettingsUseCase for StubSaveGeneralSettings {
    async fn execute(
        &self,
        _token: &AccessToken,
        command: SaveGeneralCommand,
    ) -> Result<SaveGeneralOutcome, SaveGeneralSettingsError> {
        let config = Arc::new(
            GlobalConfig::default().apply(ConfigUpdate::General(command.settings.clone())),
        );
        self.commands.lock().unwrap().push(command);
        Ok(SaveGeneralOutcome {
            config,
            warnings: Vec::new(),
        })
    }
}

// ============================================================================
// Backend
// ============================================================================

#[derive(Clone, Copy)]
pub struct StubBackendHealth {
    pub reachable: bool,
}

#[async_trait]
impl BackendHealth for StubBackendHealth {
    async fn is_reachable(&self) -> bool {
        self.reachable
    }
}

/// Read-only table contents keyed by table name. Writes are refused.
#[derive(Default, Clone)]
pub struct StaticRecordStore {
    rows: HashMap<String, Vec<Record>>,
    failing: HashSet<String>,
}

impl StaticRecordStore {
    pub fn with_rows(mut self, table: &str, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|row| row.as_object().cloned())
            .collect();
        self.rows.insert(table.to_string(), rows);
        self
    }

    pub fn failing_on(mut self, table: &str) -> Self {
        self.failing.insert(table.to_string());
        self
    }

    fn read_only() -> RecordStoreError {
        RecordStoreError::Backend {
            status: 405,
            message: "read-only test store".to_string(),
        }
    }
}

#[async_trait]
impl RecordStore for StaticRecordStore {
    async fn select(
        &self,
        table: &str,
        _query: SelectQuery,
    ) -> Result<Vec<Record>, RecordStoreError> {
        if self.failing.contains(table) {
            return Err(RecordStoreError::Network("connection reset".to_string()));
        }
        Ok(self.rows.get(table).cloned().unwrap_or_default())
    }

    async fn select_one(
        &self,
        table: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, RecordStoreError> {
        let rows = self.select(table, SelectQuery::all()).await?;
        Ok(rows
            .into_iter()
            .find(|row| RecordId::of(row).as_ref() == Some(id)))
    }

    async fn insert(
        &self,
        _token: &AccessToken,
        _table: &str,
        _payload: Record,
    ) -> Result<Record, RecordStoreError> {
        Err(Self::read_only())
    }

    async fn update(
        &self,
        _token: &AccessToken,
        _table: &str,
        _id: &RecordId,
        _payload: Record,
    ) -> Result<Record, RecordStoreError> {
        Err(Self::read_only())
    }

    async fn delete(
        &self,
        _token: &AccessToken,
        _table: &str,
        _id: &RecordId,
    ) -> Result<(), RecordStoreError> {
        Err(Self::read_only())
    }

    async fn upsert(
        &self,
        _token: &AccessToken,
        _table: &str,
        _payload: Record,
        _on_conflict: &str,
    ) -> Result<Record, RecordStoreError> {
        Err(Self::read_only())
    }
}
