use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::domain::PortfolioPayload;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Everything the public page shows. Sections that failed to load are null.",
            body = inline(SuccessResponse<PortfolioPayload>),
            example = json!({
                "success": true,
                "data": {
                    "config": {"heroName": "Ada Lovelace", "socials": {"github": "https://github.com/ada"}},
                    "experience": [],
                    "projects": [{"id": "1", "title": "Analytical Engine", "techstack": ["Rust"]}],
                    "skills": null,
                    "achievements": [],
                    "education": []
                }
            })
        )
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let payload = data.portfolio.fetch.execute().await;
    ApiResponse::success(payload)
}
