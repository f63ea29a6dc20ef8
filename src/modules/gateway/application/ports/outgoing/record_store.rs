use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;

use super::AccessToken;

/// A row as the backend returns it: attribute name → JSON value.
pub type Record = Map<String, Value>;

// ============================================================================
// Record identity
// ============================================================================

/// Backend-issued row identifier.
///
/// Rows may carry either a numeric or a textual primary key; both are kept as
/// their textual form since they are only ever echoed back in `eq.` filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::new(s.clone()),
            Value::Number(n) => Self::new(n.to_string()),
            _ => None,
        }
    }

    /// Reads the `id` attribute of a record.
    pub fn of(record: &Record) -> Option<Self> {
        record.get("id").and_then(Self::from_value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordId::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("record id must be a string or a number"))
    }
}

// ============================================================================
// Query shape
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EqFilter {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub filter: Option<EqFilter>,
    pub order: Option<OrderBy>,
}

impl SelectQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ordered(order: Option<OrderBy>) -> Self {
        Self {
            filter: None,
            order,
        }
    }

    pub fn where_eq(mut self, column: &str, value: &str) -> Self {
        self.filter = Some(EqFilter {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RecordStoreError {
    #[error("Backend rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Network problem: {0}")]
    Network(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl RecordStoreError {
    /// Human-readable text suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            RecordStoreError::Backend { message, .. } => message.clone(),
            RecordStoreError::Network(_) => "Could not reach the backend".to_string(),
            RecordStoreError::Decode(_) => "The backend sent an unexpected response".to_string(),
        }
    }
}

// ============================================================================
// Port
// ============================================================================

/// Table access on the hosted database.
///
/// Reads run with the anonymous key; writes require the signed-in admin's
/// access token so row-level policies apply.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, table: &str, query: SelectQuery)
        -> Result<Vec<Record>, RecordStoreError>;

    /// Returns `Ok(None)` when no row matches.
    async fn select_one(&self, table: &str, id: &RecordId)
        -> Result<Option<Record>, RecordStoreError>;

    async fn insert(
        &self,
        token: &AccessToken,
        table: &str,
        payload: Record,
    ) -> Result<Record, RecordStoreError>;

    async fn update(
        &self,
        token: &AccessToken,
        table: &str,
        id: &RecordId,
        payload: Record,
    ) -> Result<Record, RecordStoreError>;

    async fn delete(
        &self,
        token: &AccessToken,
        table: &str,
        id: &RecordId,
    ) -> Result<(), RecordStoreError>;

    /// Insert-or-merge keyed on `on_conflict`.
    async fn upsert(
        &self,
        token: &AccessToken,
        table: &str,
        payload: Record,
        on_conflict: &str,
    ) -> Result<Record, RecordStoreError>;
}

/// Readiness check against the backend.
#[async_trait]
pub trait BackendHealth: Send + Sync {
    async fn is_reachable(&self) -> bool;
}
