use std::sync::Arc;
use tracing::{error, info};

use crate::modules::gateway::application::ports::outgoing::{Record, RecordStore, SelectQuery};
use crate::modules::schema::Collection;

/// A named region of a page whose children are rendered markup fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub id: String,
    children: Vec<String>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, markup: String) {
        self.children.push(markup);
    }

    #[cfg(test)]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn html(&self) -> String {
        self.children.join("\n")
    }
}

/// Refills a container with one fragment per record of a collection.
///
/// Every call replaces the container's contents entirely. A failed fetch is
/// logged and leaves the container empty.
#[derive(Clone)]
pub struct CollectionRenderer {
    store: Arc<dyn RecordStore>,
}

impl CollectionRenderer {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the number of fragments appended.
    pub async fn render<F>(&self, collection: Collection, container: &mut Container, template: F) -> usize
    where
        F: Fn(&Record) -> String,
    {
        container.clear();

        let query = SelectQuery::ordered(collection.ordering());
        let records = match self.store.select(collection.table(), query).await {
            Ok(records) => records,
            Err(e) => {
                error!(
                    collection = %collection,
                    container = %container.id,
                    error = %e,
                    "Failed to load collection"
                );
                return 0;
            }
        };

        for record in &records {
            container.append(template(record));
        }

        info!(collection = %collection, count = records.len(), "Collection rendered");
        records.len()
    }
}
