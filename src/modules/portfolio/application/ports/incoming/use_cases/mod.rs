mod fetch_portfolio;
mod get_record_details;
mod load_config;

pub use fetch_portfolio::FetchPortfolioUseCase;
pub use get_record_details::{GetRecordDetailsError, GetRecordDetailsUseCase};
pub use load_config::LoadConfigUseCase;
