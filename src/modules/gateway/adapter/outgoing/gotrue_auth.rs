use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::rest_client::{HttpMethod, SupabaseClient, SupabaseError};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, AuthProvider, AuthProviderError, Session, SessionUser,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: SessionUser,
}

/// `AuthProvider` over the hosted auth service (GoTrue).
#[derive(Clone)]
pub struct GoTrueAuth {
    client: SupabaseClient,
}

impl GoTrueAuth {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn map_error(err: SupabaseError) -> AuthProviderError {
    match err {
        SupabaseError::Status { status, message } => AuthProviderError::Backend { status, message },
        SupabaseError::Network(msg) | SupabaseError::InvalidUrl(msg) => {
            AuthProviderError::Network(msg)
        }
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthProviderError> {
        let url = self.client.config().auth_endpoint("token?grant_type=password");
        let request = self
            .client
            .request(HttpMethod::Post, url, None)
            .json(&json!({ "email": email, "password": password }));

        let response = match self.client.execute(request).await {
            Ok(r) => r,
            Err(SupabaseError::Status { status, message })
                if (400..500).contains(&status) && status != 429 =>
            {
                warn!(status, "Sign-in rejected");
                return Err(AuthProviderError::InvalidCredentials(message));
            }
            Err(e) => return Err(map_error(e)),
        };

        let body: TokenResponse = serde_json::from_slice(&response.body)
            .map_err(|e| AuthProviderError::Decode(e.to_string()))?;

        let access_token = AccessToken::new(body.access_token)
            .ok_or_else(|| AuthProviderError::Decode("empty access token".to_string()))?;

        Ok(Session {
            access_token,
            expires_in: body.expires_in,
            user: body.user,
        })
    }

    async fn get_session(
        &self,
        token: &AccessToken,
    ) -> Result<Option<SessionUser>, AuthProviderError> {
        let url = self.client.config().auth_endpoint("user");
        let request = self.client.request(HttpMethod::Get, url, Some(token));

        match self.client.execute(request).await {
            Ok(response) => serde_json::from_slice::<SessionUser>(&response.body)
                .map(Some)
                .map_err(|e| AuthProviderError::Decode(e.to_string())),
            Err(SupabaseError::Status {
                status: 401 | 403, ..
            }) => Ok(None),
            Err(e) => Err(map_error(e)),
        }
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthProviderError> {
        let url = self.client.config().auth_endpoint("logout");
        let request = self.client.request(HttpMethod::Post, url, Some(token));

        match self.client.execute(request).await {
            Ok(_) => Ok(()),
            // Already expired or revoked.
            Err(SupabaseError::Status {
                status: 401 | 403 | 404,
                ..
            }) => Ok(()),
            Err(e) => Err(map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::rest_client::fake::{test_config, FakeTransport};
    use super::super::rest_client::RestBody;
    use super::*;
    use serde_json::Value;
    use std::sync::Arc;

    fn auth(fake: Arc<FakeTransport>) -> GoTrueAuth {
        GoTrueAuth::new(SupabaseClient::with_transport(fake, test_config()))
    }

    #[tokio::test]
    async fn sign_in_posts_password_grant_and_returns_session() {
        let fake = FakeTransport::new();
        fake.push_json(
            200,
            json!({
                "access_token": "jwt-1",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "r-1",
                "user": {"id": "u-1", "email": "ada@example.com", "role": "authenticated"}
            }),
        );

        let session = auth(fake.clone())
            .sign_in("ada@example.com", "hunter22")
            .await
            .unwrap();

        assert_eq!(session.access_token.expose(), "jwt-1");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));

        let req = fake.last_request();
        assert_eq!(
            req.url,
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
        let body: Value = match &req.body {
            Some(RestBody::Json(bytes)) => serde_json::from_slice(bytes).unwrap(),
            _ => panic!("expected JSON body"),
        };
        assert_eq!(body["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn sign_in_maps_rejection_to_invalid_credentials() {
        let fake = FakeTransport::new();
        fake.push_json(
            400,
            json!({"error": "invalid_grant", "error_description": "Invalid login credentials"}),
        );

        let err = auth(fake).sign_in("a@b.co", "nope").await.unwrap_err();

        assert_eq!(
            err,
            AuthProviderError::InvalidCredentials("Invalid login credentials".to_string())
        );
    }

    #[tokio::test]
    async fn get_session_returns_none_for_expired_token() {
        let fake = FakeTransport::new();
        fake.push_json(401, json!({"msg": "invalid JWT"}));

        let user = auth(fake)
            .get_session(&AccessToken::new("old").unwrap())
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn get_session_resolves_user() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({"id": "u-1", "email": "ada@example.com"}));

        let user = auth(fake.clone())
            .get_session(&AccessToken::new("jwt").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(
            fake.last_request().header_value("Authorization"),
            Some("Bearer jwt")
        );
    }

    #[tokio::test]
    async fn sign_out_tolerates_already_revoked_tokens() {
        let fake = FakeTransport::new();
        fake.push_empty(401);

        assert!(auth(fake)
            .sign_out(&AccessToken::new("jwt").unwrap())
            .await
            .is_ok());
    }
}
