use actix_web::{post, web, HttpRequest, Responder};

use crate::modules::dashboard::adapter::incoming::web::extractors::{cookie_token, removal_cookie};
use crate::modules::dashboard::adapter::incoming::web::page::dashboard_location;
use crate::shared::web::see_other_with_cookie;
use crate::AppState;

/// Ends the session locally even when the backend cannot be told.
#[post("/admin/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(token) = cookie_token(&req, &data.session) {
        data.dashboard.auth.sign_out(&token).await;
    }

    see_other_with_cookie(&dashboard_location(None, None), removal_cookie(&data.session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubAdminAuth;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use std::sync::atomic::Ordering;

    #[actix_web::test]
    async fn logout_signs_out_and_clears_cookie() {
        let auth = StubAdminAuth::signed_in();
        let sign_outs = auth.sign_outs.clone();
        let app_state = TestAppStateBuilder::default().with_admin_auth(auth).build();
        let app = test::init_service(App::new().app_data(app_state).service(logout_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/logout")
            .cookie(Cookie::new("sb-access-token", "tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/admin");
        assert_eq!(sign_outs.load(Ordering::SeqCst), 1);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == "sb-access-token")
            .unwrap();
        assert_eq!(cleared.value(), "");
    }

    #[actix_web::test]
    async fn logout_without_cookie_skips_backend() {
        let auth = StubAdminAuth::signed_in();
        let sign_outs = auth.sign_outs.clone();
        let app_state = TestAppStateBuilder::default().with_admin_auth(auth).build();
        let app = test::init_service(App::new().app_data(app_state).service(logout_handler)).await;

        let req = test::TestRequest::post().uri("/admin/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(sign_outs.load(Ordering::SeqCst), 0);
    }
}
