use serde_json::Value;
use tracing::warn;

use crate::modules::gateway::application::ports::outgoing::{
    RecordStore, RecordStoreError, SelectQuery,
};
use crate::modules::portfolio::application::domain::{GlobalConfig, CONFIG_KEY, CONFIG_TABLE};

/// Reads the `global` config row. `Ok(None)` when the row is missing or its
/// value cannot be read as a config.
pub async fn read_global_config(
    store: &dyn RecordStore,
) -> Result<Option<GlobalConfig>, RecordStoreError> {
    let rows = store
        .select(CONFIG_TABLE, SelectQuery::all().where_eq("key", CONFIG_KEY))
        .await?;

    let Some(value) = rows.into_iter().next().and_then(|mut row| row.remove("value")) else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        value => match serde_json::from_value::<GlobalConfig>(value) {
            Ok(cfg) => Ok(Some(cfg)),
            Err(e) => {
                warn!(error = %e, "Stored config value is malformed, ignoring it");
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::MockStore;
    use serde_json::json;

    #[tokio::test]
    async fn reads_value_of_global_row() {
        let mut store = MockStore::new();
        store
            .expect_select()
            .withf(|table, q| {
                table == "config"
                    && q.filter.as_ref().map(|f| (f.column.as_str(), f.value.as_str()))
                        == Some(("key", "global"))
            })
            .returning(|_, _| {
                Ok(vec![json!({"key": "global", "value": {"heroName": "Ada"}})
                    .as_object()
                    .cloned()
                    .unwrap()])
            });

        let cfg = read_global_config(&store).await.unwrap().unwrap();

        assert_eq!(cfg.hero_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn missing_row_is_none() {
        let mut store = MockStore::new();
        store.expect_select().returning(|_, _| Ok(vec![]));

        assert!(read_global_config(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_value_is_none() {
        let mut store = MockStore::new();
        store.expect_select().returning(|_, _| {
            Ok(vec![json!({"key": "global", "value": "oops"})
                .as_object()
                .cloned()
                .unwrap()])
        });

        assert!(read_global_config(&store).await.unwrap().is_none());
    }
}
