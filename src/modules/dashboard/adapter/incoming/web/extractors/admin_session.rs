use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::{ready, LocalBoxFuture};
use tracing::warn;

use crate::modules::dashboard::adapter::incoming::web::page::dashboard_location;
use crate::modules::dashboard::application::domain::Notice;
use crate::modules::dashboard::application::ports::incoming::use_cases::AdminAuthError;
use crate::modules::gateway::application::ports::outgoing::{AccessToken, Session, SessionUser};
use crate::shared::api::ApiResponse;
use crate::shared::config::SessionConfig;
use crate::shared::web::see_other_with_cookie;
use crate::AppState;

const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";
const SESSION_UNVERIFIABLE: &str = "Could not verify your session. Please sign in again.";

/// A signed-in admin, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: AccessToken,
    pub user: SessionUser,
}

#[derive(Debug)]
pub enum SessionLookup {
    Active(AdminSession),
    Missing,
    /// The cookie was present but no longer grants access.
    Rejected(Notice),
}

pub fn session_cookie(config: &SessionConfig, session: &Session) -> Cookie<'static> {
    let mut cookie = Cookie::build(
        config.cookie_name.clone(),
        session.access_token.expose().to_string(),
    )
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(config.secure)
    .finish();

    if let Some(seconds) = session.expires_in.filter(|s| *s > 0) {
        cookie.set_max_age(Duration::seconds(seconds));
    }
    cookie
}

pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .finish();
    cookie.make_removal();
    cookie
}

pub fn cookie_token(req: &HttpRequest, config: &SessionConfig) -> Option<AccessToken> {
    req.cookie(&config.cookie_name)
        .and_then(|c| AccessToken::new(c.value()))
}

pub async fn lookup_session(data: &web::Data<AppState>, req: &HttpRequest) -> SessionLookup {
    let Some(token) = cookie_token(req, &data.session) else {
        return SessionLookup::Missing;
    };

    match data.dashboard.auth.verify(&token).await {
        Ok(user) => SessionLookup::Active(AdminSession { token, user }),
        Err(AdminAuthError::SessionExpired) => {
            SessionLookup::Rejected(Notice::error(SESSION_EXPIRED))
        }
        Err(e) => {
            warn!(error = %e, "Session check failed");
            SessionLookup::Rejected(Notice::error(SESSION_UNVERIFIABLE))
        }
    }
}

fn create_redirect_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(data) = req.app_data::<web::Data<AppState>>().cloned() else {
            return Box::pin(ready(Err(create_redirect_error(
                ApiResponse::internal_error(),
            ))));
        };
        let req = req.clone();

        Box::pin(async move {
            match lookup_session(&data, &req).await {
                SessionLookup::Active(session) => Ok(session),
                SessionLookup::Missing => Err(create_redirect_error(see_other_with_cookie(
                    &dashboard_location(None, None),
                    removal_cookie(&data.session),
                ))),
                SessionLookup::Rejected(notice) => {
                    Err(create_redirect_error(see_other_with_cookie(
                        &dashboard_location(None, Some(&notice)),
                        removal_cookie(&data.session),
                    )))
                }
            }
        })
    }
}
