use std::sync::Arc;

use super::ports::incoming::use_cases::{
    FetchPortfolioUseCase, GetRecordDetailsUseCase, LoadConfigUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub fetch: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
    pub get_details: Arc<dyn GetRecordDetailsUseCase + Send + Sync>,
    pub load_config: Arc<dyn LoadConfigUseCase + Send + Sync>,
}
