use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::dashboard::application::domain::LoginRequest;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    AdminAuthError, AdminAuthUseCase,
};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, AuthProvider, AuthProviderError, Session, SessionUser,
};

pub struct AdminAuthService {
    auth: Arc<dyn AuthProvider>,
}

impl AdminAuthService {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }
}

fn unavailable(e: AuthProviderError) -> AdminAuthError {
    AdminAuthError::Unavailable(e.to_string())
}

#[async_trait]
impl AdminAuthUseCase for AdminAuthService {
    async fn sign_in(&self, request: LoginRequest) -> Result<Session, AdminAuthError> {
        match self.auth.sign_in(request.email(), request.password()).await {
            Ok(session) => {
                info!(user_id = %session.user.id, "Admin signed in");
                Ok(session)
            }
            Err(AuthProviderError::InvalidCredentials(msg)) => {
                warn!(email = %request.email(), "Admin sign-in rejected");
                Err(AdminAuthError::InvalidCredentials(msg))
            }
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn verify(&self, token: &AccessToken) -> Result<SessionUser, AdminAuthError> {
        self.auth
            .get_session(token)
            .await
            .map_err(unavailable)?
            .ok_or(AdminAuthError::SessionExpired)
    }

    async fn sign_out(&self, token: &AccessToken) {
        match self.auth.sign_out(token).await {
            Ok(()) => info!("Admin signed out"),
            Err(e) => warn!(error = %e, "Backend sign-out failed, dropping local session anyway"),
        }
    }
}
