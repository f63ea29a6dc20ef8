use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use super::rest_client::{HttpMethod, RestRequest, RestResponse, SupabaseClient, SupabaseError};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, BackendHealth, Record, RecordId, RecordStore, RecordStoreError, SelectQuery,
};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_ROWS: &str = "return=representation";

/// `RecordStore` over the hosted database's REST interface (PostgREST).
#[derive(Clone)]
pub struct PostgrestRecordStore {
    client: SupabaseClient,
}

impl PostgrestRecordStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn table_url(&self, table: &str, params: &[(&str, String)]) -> Result<String, RecordStoreError> {
        let mut url = reqwest::Url::parse(&self.client.config().rest_endpoint(table))
            .map_err(|e| RecordStoreError::Network(format!("invalid table URL: {e}")))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url.to_string())
    }

    async fn run(&self, request: RestRequest) -> Result<RestResponse, RecordStoreError> {
        self.client.execute(request).await.map_err(map_supabase_error)
    }
}

fn map_supabase_error(err: SupabaseError) -> RecordStoreError {
    match err {
        SupabaseError::Status { status, message } => RecordStoreError::Backend { status, message },
        SupabaseError::Network(msg) => RecordStoreError::Network(msg),
        SupabaseError::InvalidUrl(msg) => RecordStoreError::Network(msg),
    }
}

fn decode_rows(response: &RestResponse) -> Result<Vec<Record>, RecordStoreError> {
    serde_json::from_slice::<Vec<Record>>(&response.body)
        .map_err(|e| RecordStoreError::Decode(e.to_string()))
}

fn first_row(response: &RestResponse, table: &str) -> Result<Record, RecordStoreError> {
    decode_rows(response)?
        .into_iter()
        .next()
        .ok_or_else(|| RecordStoreError::Backend {
            status: 404,
            message: format!("No matching row in {table}"),
        })
}

fn id_filter(id: &RecordId) -> (&'static str, String) {
    ("id", format!("eq.{}", id.as_str()))
}

#[async_trait]
impl RecordStore for PostgrestRecordStore {
    async fn select(
        &self,
        table: &str,
        query: SelectQuery,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let mut params: Vec<(&str, String)> = vec![("select", "*".to_string())];
        if let Some(filter) = &query.filter {
            params.push((filter.column.as_str(), format!("eq.{}", filter.value)));
        }
        if let Some(order) = query.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(("order", format!("{}.{}", order.column, direction)));
        }

        let url = self.table_url(table, &params)?;
        let request = self.client.request(HttpMethod::Get, url, None);
        let response = self.run(request).await?;

        decode_rows(&response)
    }

    async fn select_one(
        &self,
        table: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, RecordStoreError> {
        let url = self.table_url(table, &[("select", "*".to_string()), id_filter(id)])?;
        let request = self
            .client
            .request(HttpMethod::Get, url, None)
            .header("Accept", SINGLE_OBJECT);

        match self.client.execute(request).await {
            Ok(response) => serde_json::from_slice::<Record>(&response.body)
                .map(Some)
                .map_err(|e| RecordStoreError::Decode(e.to_string())),
            // 406: the single-object request matched zero rows.
            Err(SupabaseError::Status { status: 406, .. }) => Ok(None),
            Err(e) => Err(map_supabase_error(e)),
        }
    }

    async fn insert(
        &self,
        token: &AccessToken,
        table: &str,
        payload: Record,
    ) -> Result<Record, RecordStoreError> {
        let url = self.table_url(table, &[])?;
        let request = self
            .client
            .request(HttpMethod::Post, url, Some(token))
            .header("Prefer", RETURN_ROWS)
            .json(&Value::Object(payload));

        let response = self.run(request).await.inspect_err(|e| {
            error!(table, error = %e, "Insert failed");
        })?;

        first_row(&response, table)
    }

    async fn update(
        &self,
        token: &AccessToken,
        table: &str,
        id: &RecordId,
        payload: Record,
    ) -> Result<Record, RecordStoreError> {
        let url = self.table_url(table, &[id_filter(id)])?;
        let request = self
            .client
            .request(HttpMethod::Patch, url, Some(token))
            .header("Prefer", RETURN_ROWS)
            .json(&Value::Object(payload));

        let response = self.run(request).await.inspect_err(|e| {
            error!(table, id = %id, error = %e, "Update failed");
        })?;

        first_row(&response, table)
    }

    async fn delete(
        &self,
        token: &AccessToken,
        table: &str,
        id: &RecordId,
    ) -> Result<(), RecordStoreError> {
        let url = self.table_url(table, &[id_filter(id)])?;
        let request = self.client.request(HttpMethod::Delete, url, Some(token));

        self.run(request).await.inspect_err(|e| {
            error!(table, id = %id, error = %e, "Delete failed");
        })?;

        Ok(())
    }

    async fn upsert(
        &self,
        token: &AccessToken,
        table: &str,
        payload: Record,
        on_conflict: &str,
    ) -> Result<Record, RecordStoreError> {
        let url = self.table_url(table, &[("on_conflict", on_conflict.to_string())])?;
        let request = self
            .client
            .request(HttpMethod::Post, url, Some(token))
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&Value::Object(payload));

        let response = self.run(request).await.inspect_err(|e| {
            error!(table, on_conflict, error = %e, "Upsert failed");
        })?;

        first_row(&response, table)
    }
}

#[async_trait]
impl BackendHealth for PostgrestRecordStore {
    async fn is_reachable(&self) -> bool {
        let url = format!("{}/rest/v1/", self.client.config().url);
        let request = self.client.request(HttpMethod::Get, url, None);

        match self.client.execute(request).await {
            Ok(_) => true,
            // Any answer below 500 means the service is up.
            Err(SupabaseError::Status { status, .. }) if status < 500 => true,
            Err(e) => {
                warn!(error = %e, "Backend readiness probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::rest_client::fake::{test_config, FakeTransport};
    use super::super::rest_client::RestBody;
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::OrderBy;
    use serde_json::json;
    use std::sync::Arc;

    fn store(fake: Arc<FakeTransport>) -> PostgrestRecordStore {
        PostgrestRecordStore::new(SupabaseClient::with_transport(fake, test_config()))
    }

    fn token() -> AccessToken {
        AccessToken::new("admin-jwt").unwrap()
    }

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn body_json(request: &RestRequest) -> Value {
        match &request.body {
            Some(RestBody::Json(bytes)) => serde_json::from_slice(bytes).unwrap(),
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn select_builds_ordered_query_with_anon_key() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]));

        let rows = store(fake.clone())
            .select("projects", SelectQuery::ordered(Some(OrderBy::desc("created_at"))))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        let req = fake.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://demo.supabase.co/rest/v1/projects?select=*&order=created_at.desc"
        );
        assert_eq!(req.header_value("Authorization"), Some("Bearer anon-key"));
    }

    #[tokio::test]
    async fn select_applies_equality_filter() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!([{"key": "global", "value": {}}]));

        store(fake.clone())
            .select("config", SelectQuery::all().where_eq("key", "global"))
            .await
            .unwrap();

        assert_eq!(
            fake.last_request().url,
            "https://demo.supabase.co/rest/v1/config?select=*&key=eq.global"
        );
    }

    #[tokio::test]
    async fn select_reports_undecodable_bodies() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({"not": "a list"}));

        let err = store(fake).select("skills", SelectQuery::all()).await.unwrap_err();

        assert!(matches!(err, RecordStoreError::Decode(_)));
    }

    #[tokio::test]
    async fn select_one_returns_none_when_no_row_matches() {
        let fake = FakeTransport::new();
        fake.push_json(406, json!({"code": "PGRST116", "message": "0 rows"}));

        let id = RecordId::new("99").unwrap();
        let row = store(fake.clone()).select_one("education", &id).await.unwrap();

        assert!(row.is_none());
        let req = fake.last_request();
        assert_eq!(req.header_value("Accept"), Some(SINGLE_OBJECT));
        assert!(req.url.ends_with("select=*&id=eq.99"));
    }

    #[tokio::test]
    async fn select_one_decodes_single_object() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({"id": 3, "school": "ITB"}));

        let id = RecordId::new("3").unwrap();
        let row = store(fake).select_one("education", &id).await.unwrap().unwrap();

        assert_eq!(row.get("school"), Some(&json!("ITB")));
    }

    #[tokio::test]
    async fn insert_sends_payload_with_user_token() {
        let fake = FakeTransport::new();
        fake.push_json(201, json!([{"id": 5, "name": "Rust"}]));

        let created = store(fake.clone())
            .insert(&token(), "skills", record(json!({"name": "Rust"})))
            .await
            .unwrap();

        assert_eq!(created.get("id"), Some(&json!(5)));
        let req = fake.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header_value("Authorization"), Some("Bearer admin-jwt"));
        assert_eq!(req.header_value("Prefer"), Some(RETURN_ROWS));
        assert_eq!(body_json(&req), json!({"name": "Rust"}));
    }

    #[tokio::test]
    async fn update_targets_row_by_id() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!([{"id": 8, "role": "Lead"}]));

        let id = RecordId::new("8").unwrap();
        store(fake.clone())
            .update(&token(), "experience", &id, record(json!({"role": "Lead"})))
            .await
            .unwrap();

        let req = fake.last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "https://demo.supabase.co/rest/v1/experience?id=eq.8");
    }

    #[tokio::test]
    async fn update_with_no_matching_row_is_an_error() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!([]));

        let id = RecordId::new("8").unwrap();
        let err = store(fake)
            .update(&token(), "experience", &id, record(json!({"role": "Lead"})))
            .await
            .unwrap_err();

        assert!(matches!(err, RecordStoreError::Backend { status: 404, .. }));
    }

    #[tokio::test]
    async fn delete_surfaces_backend_message() {
        let fake = FakeTransport::new();
        fake.push_json(403, json!({"message": "permission denied for table projects"}));

        let id = RecordId::new("1").unwrap();
        let err = store(fake).delete(&token(), "projects", &id).await.unwrap_err();

        assert_eq!(err.user_message(), "permission denied for table projects");
    }

    #[tokio::test]
    async fn upsert_merges_on_conflict_key() {
        let fake = FakeTransport::new();
        fake.push_json(201, json!([{"key": "global", "value": {"heroName": "Ada"}}]));

        store(fake.clone())
            .upsert(
                &token(),
                "config",
                record(json!({"key": "global", "value": {"heroName": "Ada"}})),
                "key",
            )
            .await
            .unwrap();

        let req = fake.last_request();
        assert_eq!(req.url, "https://demo.supabase.co/rest/v1/config?on_conflict=key");
        assert_eq!(
            req.header_value("Prefer"),
            Some("resolution=merge-duplicates,return=representation")
        );
    }

    #[tokio::test]
    async fn readiness_treats_client_errors_as_reachable() {
        let fake = FakeTransport::new();
        fake.push_json(401, json!({"message": "no api key"}));
        assert!(store(fake).is_reachable().await);

        let fake = FakeTransport::new();
        for _ in 0..3 {
            fake.push_network_error("refused");
        }
        assert!(!store(fake).is_reachable().await);
    }
}
