mod form_config;
mod response;

pub use form_config::custom_form_config;
pub use response::{ApiError, ApiResponse};
