use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::health::{HealthResponse, ReadinessResponse};
use crate::modules::crop::CropDescriptor;
use crate::modules::portfolio::application::domain::{
    Achievement, Education, Experience, GlobalConfig, PortfolioPayload, Project, Skill, Socials,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "0.1.0",
        description = "Read-only JSON view of the public portfolio content"
    ),
    paths(
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            SuccessResponse<PortfolioPayload>,
            ErrorResponse,
            ErrorDetail,
            PortfolioPayload,
            GlobalConfig,
            Socials,
            CropDescriptor,
            Experience,
            Project,
            Skill,
            Achievement,
            Education,
            HealthResponse,
            ReadinessResponse
        )
    ),
    tags(
        (name = "portfolio", description = "Aggregated portfolio content"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
