use async_trait::async_trait;

use crate::modules::portfolio::application::domain::PortfolioPayload;

/// Aggregated read behind the public page. Never fails as a whole; each
/// section that could not be loaded is `None`.
#[async_trait]
pub trait FetchPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioPayload;
}
