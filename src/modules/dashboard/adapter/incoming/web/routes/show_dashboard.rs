use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::warn;

use crate::modules::dashboard::adapter::incoming::web::extractors::{
    lookup_session, removal_cookie, SessionLookup,
};
use crate::modules::dashboard::adapter::incoming::web::page::{
    render_dashboard, render_login, DashboardQuery, Tab,
};
use crate::AppState;

/// Login screen when signed out, dashboard otherwise.
#[get("/admin")]
pub async fn show_dashboard_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> impl Responder {
    let notice = query.notice();

    match lookup_session(&data, &req).await {
        SessionLookup::Active(session) => {
            render_dashboard(&data, &session, Tab::parse(query.tab.as_deref()), notice, None).await
        }
        SessionLookup::Missing => render_login(&data.templates, StatusCode::OK, notice.as_ref(), ""),
        SessionLookup::Rejected(rejection) => {
            let mut resp: HttpResponse =
                render_login(&data.templates, StatusCode::OK, Some(&rejection), "");
            if let Err(e) = resp.add_cookie(&removal_cookie(&data.session)) {
                warn!(error = %e, "Failed to clear session cookie");
            }
            resp
        }
    }
}
