use actix_web::web;
use std::sync::Arc;

use crate::modules::collection::CollectionRenderer;
use crate::modules::crop::{fake::FixedProbe, ImageProbe};
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    AdminAuthUseCase, RecordEditorUseCase, SaveGeneralSettingsUseCase,
};
use crate::modules::gateway::application::ports::outgoing::{BackendHealth, RecordStore};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    FetchPortfolioUseCase, GetRecordDetailsUseCase, LoadConfigUseCase,
};
use crate::shared::config::SessionConfig;
use crate::shared::web::Templates;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    fetch_portfolio: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
    get_record_details: Arc<dyn GetRecordDetailsUseCase + Send + Sync>,
    load_config: Arc<dyn LoadConfigUseCase + Send + Sync>,
    admin_auth: Arc<dyn AdminAuthUseCase + Send + Sync>,
    record_editor: Arc<dyn RecordEditorUseCase + Send + Sync>,
    save_general_settings: Arc<dyn SaveGeneralSettingsUseCase + Send + Sync>,
    record_store: Arc<dyn RecordStore>,
    image_probe: Arc<dyn ImageProbe>,
    backend_health: Arc<dyn BackendHealth>,
    session: SessionConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_portfolio: Arc::new(StubFetchPortfolioUseCase::default()),
            get_record_details: Arc::new(StubGetRecordDetailsUseCase::not_found()),
            load_config: Arc::new(StubLoadConfigUseCase::default()),
            admin_auth: Arc::new(StubAdminAuth::signed_out()),
            record_editor: Arc::new(StubRecordEditor::default()),
            save_general_settings: Arc::new(StubSaveGeneralSettings::succeeding()),
            record_store: Arc::new(StaticRecordStore::default()),
            image_probe: Arc::new(FixedProbe::new(None)),
            backend_health: Arc::new(StubBackendHealth { reachable: true }),
            session: SessionConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_portfolio(
        mut self,
        uc: impl FetchPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_portfolio = Arc::new(uc);
        self
    }

    pub fn with_get_record_details(
        mut self,
        uc: impl GetRecordDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_record_details = Arc::new(uc);
        self
    }

    pub fn with_admin_auth(mut self, uc: impl AdminAuthUseCase + Send + Sync + 'static) -> Self {
        self.admin_auth = Arc::new(uc);
        self
    }

    pub fn with_record_editor(
        mut self,
        uc: impl RecordEditorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.record_editor = Arc::new(uc);
        self
    }

    pub fn with_save_general_settings(
        mut self,
        uc: impl SaveGeneralSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_general_settings = Arc::new(uc);
        self
    }

    /// Backs the dashboard's collection lists.
    pub fn with_record_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.record_store = store;
        self
    }

    pub fn with_image_probe(mut self, probe: Arc<dyn ImageProbe>) -> Self {
        self.image_probe = probe;
        self
    }

    pub fn with_backend_health(mut self, health: impl BackendHealth + 'static) -> Self {
        self.backend_health = Arc::new(health);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                fetch: self.fetch_portfolio,
                get_details: self.get_record_details,
                load_config: self.load_config,
            },
            dashboard: DashboardUseCases {
                auth: self.admin_auth,
                editor: self.record_editor,
                save_general: self.save_general_settings,
                lists: CollectionRenderer::new(self.record_store),
            },
            templates: Arc::new(Templates::new().unwrap()),
            image_probe: self.image_probe,
            backend_health: self.backend_health,
            session: self.session,
        })
    }
}
