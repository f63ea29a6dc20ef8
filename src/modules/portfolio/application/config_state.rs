use std::sync::Arc;
use tokio::sync::RwLock;

use super::domain::GlobalConfig;

/// Latest known site configuration.
///
/// Readers get an immutable snapshot; writers swap in a whole new one after
/// the backend accepted it.
#[derive(Debug, Default)]
pub struct ConfigState {
    current: RwLock<Arc<GlobalConfig>>,
}

impl ConfigState {
    pub fn new(initial: GlobalConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    pub async fn snapshot(&self) -> Arc<GlobalConfig> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, next: GlobalConfig) -> Arc<GlobalConfig> {
        let next = Arc::new(next);
        *self.current.write().await = next.clone();
        next
    }
}
