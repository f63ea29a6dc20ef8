mod config_query;
mod fetch_portfolio_service;
mod get_record_details_service;
mod load_config_service;

pub use config_query::read_global_config;
pub use fetch_portfolio_service::FetchPortfolioService;
pub use get_record_details_service::GetRecordDetailsService;
pub use load_config_service::LoadConfigService;
