use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use super::config_query::read_global_config;
use crate::modules::gateway::application::ports::outgoing::RecordStore;
use crate::modules::portfolio::application::config_state::ConfigState;
use crate::modules::portfolio::application::domain::GlobalConfig;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadConfigUseCase;

pub struct LoadConfigService {
    store: Arc<dyn RecordStore>,
    state: Arc<ConfigState>,
}

impl LoadConfigService {
    pub fn new(store: Arc<dyn RecordStore>, state: Arc<ConfigState>) -> Self {
        Self { store, state }
    }
}

#[async_trait]
impl LoadConfigUseCase for LoadConfigService {
    async fn execute(&self) -> Arc<GlobalConfig> {
        match read_global_config(self.store.as_ref()).await {
            Ok(cfg) => self.state.replace(cfg.unwrap_or_default()).await,
            Err(e) => {
                error!(error = %e, "Failed to refresh site config, keeping last snapshot");
                self.state.snapshot().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::RecordStoreError;
    use crate::tests::support::mocks::MockStore;
    use serde_json::json;

    #[tokio::test]
    async fn refresh_replaces_snapshot() {
        let mut store = MockStore::new();
        store.expect_select().returning(|_, _| {
            Ok(vec![json!({"key": "global", "value": {"heroName": "Grace"}})
                .as_object()
                .cloned()
                .unwrap()])
        });
        let state = Arc::new(ConfigState::default());

        let cfg = LoadConfigService::new(Arc::new(store), state.clone())
            .execute()
            .await;

        assert_eq!(cfg.hero_name.as_deref(), Some("Grace"));
        assert_eq!(state.snapshot().await.hero_name.as_deref(), Some("Grace"));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let mut store = MockStore::new();
        store
            .expect_select()
            .returning(|_, _| Err(RecordStoreError::Network("down".to_string())));
        let state = Arc::new(ConfigState::new(GlobalConfig {
            hero_name: Some("Ada".to_string()),
            ..Default::default()
        }));

        let cfg = LoadConfigService::new(Arc::new(store), state).execute().await;

        assert_eq!(cfg.hero_name.as_deref(), Some("Ada"));
    }
}
