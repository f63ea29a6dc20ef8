use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::domain::GlobalConfig;

/// Re-reads the site configuration into the shared snapshot.
///
/// On a failed read the previous snapshot is returned unchanged.
#[async_trait]
pub trait LoadConfigUseCase: Send + Sync {
    async fn execute(&self) -> Arc<GlobalConfig>;
}
