// src/shared/api/form_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::FormConfig;

/// URL-encoded form bodies that fail to deserialize get the JSON error
/// envelope instead of actix's plain-text default.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
