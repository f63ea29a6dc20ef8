use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::dashboard::adapter::incoming::web::extractors::session_cookie;
use crate::modules::dashboard::adapter::incoming::web::page::{dashboard_location, render_login};
use crate::modules::dashboard::application::domain::{LoginRequest, Notice};
use crate::modules::dashboard::application::ports::incoming::use_cases::AdminAuthError;
use crate::shared::web::see_other_with_cookie;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[post("/admin/login")]
pub async fn login_handler(data: web::Data<AppState>, form: web::Form<LoginForm>) -> impl Responder {
    let LoginForm { email, password } = form.into_inner();

    let request = match LoginRequest::new(email.clone(), password) {
        Ok(request) => request,
        Err(e) => {
            let notice = Notice::error(e.to_string());
            return render_login(&data.templates, StatusCode::BAD_REQUEST, Some(&notice), &email);
        }
    };

    match data.dashboard.auth.sign_in(request).await {
        Ok(session) => see_other_with_cookie(
            &dashboard_location(None, None),
            session_cookie(&data.session, &session),
        ),
        Err(AdminAuthError::InvalidCredentials(message)) => render_login(
            &data.templates,
            StatusCode::UNAUTHORIZED,
            Some(&Notice::error(message)),
            &email,
        ),
        Err(e) => {
            error!(error = %e, "Sign-in could not be completed");
            render_login(
                &data.templates,
                StatusCode::SERVICE_UNAVAILABLE,
                Some(&Notice::error(
                    "The sign-in service is unavailable. Please try again shortly.",
                )),
                &email,
            )
        }
    }
}
