use async_trait::async_trait;

use crate::modules::dashboard::application::domain::LoginRequest;
use crate::modules::gateway::application::ports::outgoing::{AccessToken, Session, SessionUser};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum AdminAuthError {
    /// Carries the backend's own wording.
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Sign-in gate for the dashboard.
#[async_trait]
pub trait AdminAuthUseCase: Send + Sync {
    async fn sign_in(&self, request: LoginRequest) -> Result<Session, AdminAuthError>;

    /// Resolves the admin behind a stored token.
    async fn verify(&self, token: &AccessToken) -> Result<SessionUser, AdminAuthError>;

    /// Best effort; the local session ends regardless.
    async fn sign_out(&self, token: &AccessToken);
}
