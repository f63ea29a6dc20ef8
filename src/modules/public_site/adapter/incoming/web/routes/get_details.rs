use actix_web::{get, http::StatusCode, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::modules::gateway::application::ports::outgoing::RecordId;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetRecordDetailsError;
use crate::modules::public_site::view::DetailsView;
use crate::modules::schema::Collection;
use crate::shared::web::{html_fragment, names};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DetailsPath {
    pub collection: String,
    pub id: String,
}

fn not_found() -> actix_web::HttpResponse {
    html_fragment(
        StatusCode::NOT_FOUND,
        r#"<p class="modal-empty">Nothing to show here.</p>"#.to_string(),
    )
}

/// Detail overlay for a project, achievement or education entry.
#[get("/details/{collection}/{id}")]
pub async fn get_details_handler(
    path: web::Path<DetailsPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path = path.into_inner();

    let Ok(collection) = path.collection.parse::<Collection>() else {
        warn!(collection = %path.collection, "Details requested for unknown collection");
        return not_found();
    };
    let Some(id) = RecordId::new(path.id) else {
        return not_found();
    };

    match data.portfolio.get_details.execute(collection, &id).await {
        Ok(record) => {
            let view = DetailsView::from_record(&record);
            data.templates
                .fragment(StatusCode::OK, names::DETAILS, &json!({ "details": view }))
        }

        Err(GetRecordDetailsError::NotFound) | Err(GetRecordDetailsError::NoDetails(_)) => {
            not_found()
        }

        Err(GetRecordDetailsError::RepositoryError(msg)) => {
            error!(collection = %collection, id = %id, error = %msg, "Details fetch failed");
            html_fragment(
                StatusCode::BAD_GATEWAY,
                r#"<p class="modal-empty">Could not load this entry. Please try again later.</p>"#
                    .to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetRecordDetailsUseCase;

    async fn call(state: web::Data<AppState>, uri: &str) -> (StatusCode, String) {
        let app =
            test::init_service(App::new().app_data(state).service(get_details_handler)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn renders_education_overlay() {
        let state = TestAppStateBuilder::default()
            .with_get_record_details(StubGetRecordDetailsUseCase::found(serde_json::json!({
                "id": 4,
                "school": "ITB",
                "major": "Informatics",
                "start_year": "2020",
                "end_year": "",
                "youtubeurl": "https://youtu.be/dQw4w9WgXcQ"
            })))
            .build();

        let (status, html) = call(state, "/details/education/4").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("2020 - Present"));
        assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[actix_web::test]
    async fn singular_alias_is_accepted() {
        let state = TestAppStateBuilder::default()
            .with_get_record_details(StubGetRecordDetailsUseCase::found(serde_json::json!({
                "id": 1, "title": "Demo", "description": "a\nb", "link": "https://demo.dev"
            })))
            .build();

        let (status, html) = call(state, "/details/project/1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("a<br>b"));
        assert!(html.contains("View Project"));
    }

    #[actix_web::test]
    async fn unknown_collection_is_404() {
        let state = TestAppStateBuilder::default().build();

        let (status, _) = call(state, "/details/config/1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_record_is_404() {
        let state = TestAppStateBuilder::default()
            .with_get_record_details(StubGetRecordDetailsUseCase::failing(
                GetRecordDetailsError::NotFound,
            ))
            .build();

        let (status, _) = call(state, "/details/projects/9").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn backend_failure_is_502() {
        let state = TestAppStateBuilder::default()
            .with_get_record_details(StubGetRecordDetailsUseCase::failing(
                GetRecordDetailsError::RepositoryError("timeout".to_string()),
            ))
            .build();

        let (status, _) = call(state, "/details/projects/9").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
