use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const MAX_RETRIES_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub anon_key: String,
    pub storage_bucket: String,
    pub timeout: Duration,
    /// Extra attempts for idempotent reads.
    pub max_retries: u32,
    pub retry_base: Duration,
}

impl SupabaseConfig {
    fn parse_number<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<T>()
                .ok()
                .with_context(|| format!("Invalid {key} value: {raw}")),
            Err(_) => Ok(default),
        }
    }

    fn bounded_retries(retries: u32) -> Result<u32> {
        if retries > MAX_RETRIES_LIMIT {
            bail!("SUPABASE_MAX_RETRIES must be at most {MAX_RETRIES_LIMIT}, got {retries}");
        }
        Ok(retries)
    }

    /// Load backend connection settings from environment variables.
    pub fn from_env() -> Result<Self> {
        let url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let anon_key = env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
        let storage_bucket =
            env::var("SUPABASE_STORAGE_BUCKET").unwrap_or_else(|_| "portfolio".to_string());

        let timeout_secs = Self::parse_number::<u64>("SUPABASE_TIMEOUT_SECS", 15)?;
        let max_retries =
            Self::bounded_retries(Self::parse_number::<u32>("SUPABASE_MAX_RETRIES", 2)?)?;
        let retry_base_ms = Self::parse_number::<u64>("SUPABASE_RETRY_BASE_MS", 200)?;

        Self::new(url, anon_key, storage_bucket).map(|cfg| Self {
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            retry_base: Duration::from_millis(retry_base_ms),
            ..cfg
        })
    }

    /// Builds a config with default timing and validates the URL and key.
    pub fn new(url: String, anon_key: String, storage_bucket: String) -> Result<Self> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!("SUPABASE_URL must be an http(s) URL");
        }
        reqwest::Url::parse(&url).context("SUPABASE_URL is not a valid URL")?;

        if anon_key.trim().is_empty() {
            bail!("SUPABASE_ANON_KEY cannot be empty");
        }
        if storage_bucket.trim().is_empty() {
            bail!("SUPABASE_STORAGE_BUCKET cannot be empty");
        }

        Ok(Self {
            url,
            anon_key,
            storage_bucket,
            timeout: Duration::from_secs(15),
            max_retries: 2,
            retry_base: Duration::from_millis(200),
        })
    }

    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    pub fn storage_endpoint(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.url, path)
    }
}
