//! Documentation-only shapes of the `ApiResponse` envelope.
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a 2xx JSON response, e.g. `GET /api/portfolio`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// The requested content
    pub data: T,
}

/// Body of a rejected request, such as an unreadable form submission.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable upper-case code, e.g. `VALIDATION_ERROR` or `INTERNAL_ERROR`
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Content type error")]
    pub message: String,
}
