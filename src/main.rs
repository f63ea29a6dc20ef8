pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::collection::CollectionRenderer;
use crate::modules::crop::{HttpImageProbe, ImageProbe};
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::services::{
    AdminAuthService, RecordEditorService, SaveGeneralSettingsService,
};
use crate::modules::gateway::adapter::outgoing::{
    GoTrueAuth, PostgrestRecordStore, StorageBucket, SupabaseClient, SupabaseConfig,
};
use crate::modules::gateway::application::ports::outgoing::{
    AuthProvider, BackendHealth, FileStorage, RecordStore,
};
use crate::modules::portfolio::application::config_state::ConfigState;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    FetchPortfolioService, GetRecordDetailsService, LoadConfigService,
};
use crate::shared::api::custom_form_config;
use crate::shared::config::{ServerConfig, SessionConfig};
use crate::shared::web::Templates;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub dashboard: DashboardUseCases,
    pub templates: Arc<Templates>,
    pub image_probe: Arc<dyn ImageProbe>,
    pub backend_health: Arc<dyn BackendHealth>,
    pub session: SessionConfig,
}

#[cfg(not(tarpaulin_include))]
fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(e.to_string())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let server = ServerConfig::from_env().map_err(startup_error)?;
    let supabase = SupabaseConfig::from_env().map_err(startup_error)?;
    let session = SessionConfig::from_env();
    let bucket = supabase.storage_bucket.clone();
    let probe_timeout = supabase.timeout;

    info!(backend = %supabase.url, bucket = %bucket, "Backend configured");

    // Backend adapters share one client
    let client = SupabaseClient::new(supabase).map_err(startup_error)?;
    let postgrest = Arc::new(PostgrestRecordStore::new(client.clone()));
    let record_store: Arc<dyn RecordStore> = postgrest.clone();
    let backend_health: Arc<dyn BackendHealth> = postgrest;
    let auth_provider: Arc<dyn AuthProvider> = Arc::new(GoTrueAuth::new(client.clone()));
    let file_storage: Arc<dyn FileStorage> = Arc::new(StorageBucket::new(client));

    let config_state = Arc::new(ConfigState::default());

    let portfolio = PortfolioUseCases {
        fetch: Arc::new(FetchPortfolioService::new(record_store.clone())),
        get_details: Arc::new(GetRecordDetailsService::new(record_store.clone())),
        load_config: Arc::new(LoadConfigService::new(
            record_store.clone(),
            config_state.clone(),
        )),
    };

    let dashboard = DashboardUseCases {
        auth: Arc::new(AdminAuthService::new(auth_provider)),
        editor: Arc::new(RecordEditorService::new(
            record_store.clone(),
            file_storage.clone(),
            bucket.clone(),
        )),
        save_general: Arc::new(SaveGeneralSettingsService::new(
            record_store.clone(),
            file_storage,
            bucket,
            config_state,
        )),
        lists: CollectionRenderer::new(record_store),
    };

    let templates = Templates::new().map_err(startup_error)?;
    let image_probe = HttpImageProbe::new(probe_timeout).map_err(startup_error)?;

    let state = AppState {
        portfolio,
        dashboard,
        templates: Arc::new(templates),
        image_probe: Arc::new(image_probe),
        backend_health,
        session,
    };

    let server_url = server.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_form_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
    // Public site
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::public_site::adapter::incoming::web::routes::get_index_handler);
    cfg.service(crate::modules::public_site::adapter::incoming::web::routes::get_details_handler);
    // Dashboard, fixed paths before the `{collection}` patterns
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::show_dashboard_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::save_general_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::new_record_form_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::edit_record_form_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::delete_record_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::update_record_handler);
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::create_record_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
