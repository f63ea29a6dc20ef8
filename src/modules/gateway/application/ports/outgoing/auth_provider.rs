use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token of a signed-in backend user.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Tokens never end up in logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: AccessToken,
    /// Lifetime of the access token in seconds, as issued.
    pub expires_in: Option<i64>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum AuthProviderError {
    /// Wrong email/password; carries the backend's wording.
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Backend rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Network problem: {0}")]
    Network(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthProviderError>;

    /// Resolves the user behind a token; `Ok(None)` when the token is no
    /// longer valid.
    async fn get_session(
        &self,
        token: &AccessToken,
    ) -> Result<Option<SessionUser>, AuthProviderError>;

    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthProviderError>;
}
