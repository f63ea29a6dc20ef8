use std::env;

use anyhow::{Context, Result};

/// Bind address of the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            Err(_) => 8080,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cookie that carries the admin's backend access token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "sb-access-token".to_string(),
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let production = env::var("RUST_ENV").as_deref() == Ok("production");

        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| Self::default().cookie_name);

        let secure = match env::var("SESSION_COOKIE_SECURE") {
            Ok(raw) => matches!(raw.trim(), "1" | "true" | "yes"),
            Err(_) => production,
        };

        Self {
            cookie_name,
            secure,
        }
    }
}
