use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::supabase_config::SupabaseConfig;
use crate::modules::gateway::application::ports::outgoing::AccessToken;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestBody {
    Json(Vec<u8>),
    Raw { content_type: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RestBody>,
}

impl RestRequest {
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, value: &Value) -> Self {
        // Serializing a `Value` cannot fail.
        self.body = Some(RestBody::Json(value.to_string().into_bytes()));
        self
    }

    pub fn raw(mut self, content_type: &str, bytes: Vec<u8>) -> Self {
        self.body = Some(RestBody::Raw {
            content_type: content_type.to_string(),
            bytes,
        });
        self
    }

    #[cfg(test)]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RestResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Internal seam so the Supabase adapters can be tested without a network.
///
/// Transport errors are returned as plain text; every one of them is treated
/// as transient.
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, String>;
}

// ============================================================================
// reqwest transport
// ============================================================================

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RestTransport for ReqwestTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, String> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            Some(RestBody::Json(bytes)) => builder
                .header("Content-Type", "application/json")
                .body(bytes),
            Some(RestBody::Raw {
                content_type,
                bytes,
            }) => builder.header("Content-Type", content_type).body(bytes),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| e.to_string())?;

        Ok(RestResponse {
            status,
            body: body.to_vec(),
        })
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SupabaseError {
    #[error("Network problem: {0}")]
    Network(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Shared HTTP client for the three Supabase services (tables, auth, storage).
///
/// Adds the project key and bearer headers and retries idempotent reads on
/// network failures, 429 and 5xx responses with exponential backoff.
#[derive(Clone)]
pub struct SupabaseClient {
    transport: Arc<dyn RestTransport>,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    pub fn with_transport(transport: Arc<dyn RestTransport>, config: SupabaseConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Starts a request carrying the project key. Without a user token the
    /// anonymous key doubles as bearer.
    pub fn request(
        &self,
        method: HttpMethod,
        url: String,
        token: Option<&AccessToken>,
    ) -> RestRequest {
        let bearer = token
            .map(|t| t.expose().to_string())
            .unwrap_or_else(|| self.config.anon_key.clone());

        RestRequest {
            method,
            url,
            headers: vec![
                ("apikey".to_string(), self.config.anon_key.clone()),
                ("Authorization".to_string(), format!("Bearer {bearer}")),
            ],
            body: None,
        }
    }

    pub async fn execute(&self, request: RestRequest) -> Result<RestResponse, SupabaseError> {
        let attempts = match request.method {
            HttpMethod::Get => self.config.max_retries + 1,
            _ => 1,
        };

        let mut last_error: Option<SupabaseError> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = backoff_delay(self.config.retry_base, attempt);
                warn!(
                    url = %request.url,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Backend read failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.transport.send(request.clone()).await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SupabaseError::Network(e));
                    continue;
                }
            };

            if response.status == 429 || response.status >= 500 {
                last_error = Some(SupabaseError::Status {
                    status: response.status,
                    message: backend_message(&response),
                });
                continue;
            }

            if !response.is_success() {
                return Err(SupabaseError::Status {
                    status: response.status,
                    message: backend_message(&response),
                });
            }

            debug!(url = %request.url, status = response.status, "Backend call succeeded");
            return Ok(response);
        }

        Err(last_error.unwrap_or_else(|| SupabaseError::Network("no attempt made".to_string())))
    }
}

const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Wait before retry number `retry` (1-based): `base × 2^(retry-1)`, capped
/// at [`MAX_BACKOFF`].
fn backoff_delay(base: Duration, retry: u32) -> Duration {
    let factor = 1u32
        .checked_shl(retry.saturating_sub(1))
        .unwrap_or(u32::MAX);
    base.saturating_mul(factor).min(MAX_BACKOFF)
}

/// Picks the human-readable part of a backend error body.
///
/// PostgREST uses `message`, GoTrue uses `msg`/`error_description`, Storage
/// uses `message` or `error`.
pub fn backend_message(response: &RestResponse) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&response.body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.trim().is_empty() {
                    return text.clone();
                }
            }
        }
    }

    let text = String::from_utf8_lossy(&response.body).trim().to_string();
    if text.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        text
    }
}
