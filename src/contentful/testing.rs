//! In-memory content source for tests

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{ContentSource, ContentfulError, EntryCollection, EntryQuery};

/// Serves canned collections per content type and records every query
#[derive(Default)]
pub(crate) struct StaticSource {
    collections: HashMap<String, Value>,
    failing: Vec<String>,
    queries: Mutex<Vec<EntryQuery>>,
}

impl StaticSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `collection` for `content_type`
    pub(crate) fn with(mut self, content_type: &str, collection: Value) -> Self {
        self.collections.insert(content_type.to_string(), collection);
        self
    }

    /// Answer every query for `content_type` with a 503
    pub(crate) fn failing(mut self, content_type: &str) -> Self {
        self.failing.push(content_type.to_string());
        self
    }

    pub(crate) fn queries(&self) -> Vec<EntryQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentfulError> {
        self.queries.lock().unwrap().push(query.clone());

        let content_type = query.content_type_id();
        if self.failing.iter().any(|ct| ct == content_type) {
            return Err(ContentfulError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        let raw = self
            .collections
            .get(content_type)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({ "items": [] }));
        let mut collection: EntryCollection =
            serde_json::from_value(raw).map_err(|e| ContentfulError::Parse(e.to_string()))?;

        for (name, value) in query.field_filters() {
            collection
                .items
                .retain(|entry| entry.field_str(name) == Some(value.as_str()));
        }
        if let Some(limit) = query.limit_value() {
            collection.items.truncate(limit as usize);
        }
        Ok(collection)
    }
}
