//! Entries query builder

use std::fmt;

/// Order by creation time, newest first
pub const NEWEST_FIRST: &str = "-sys.createdAt";

/// Parameters for one `GET /entries` request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    content_type: String,
    order: Option<String>,
    select: Option<String>,
    field_equals: Vec<(String, String)>,
    limit: Option<u32>,
}

impl EntryQuery {
    /// Start a query for entries of one content type
    pub fn content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            ..Self::default()
        }
    }

    /// Set the ordering instruction
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Order by creation time, newest first
    pub fn newest_first(self) -> Self {
        self.order(NEWEST_FIRST)
    }

    /// Project the response onto the given field path
    pub fn select(mut self, path: impl Into<String>) -> Self {
        self.select = Some(path.into());
        self
    }

    /// Require `fields.<name>` to equal `value` exactly
    pub fn field_eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_equals.push((name.into(), value.into()));
        self
    }

    /// Cap the number of returned entries
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The content type discriminator
    pub fn content_type_id(&self) -> &str {
        &self.content_type
    }

    /// Field equality filters as `(name, value)`
    pub fn field_filters(&self) -> &[(String, String)] {
        &self.field_equals
    }

    /// Entry cap, if any
    pub fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    /// Query-string pairs in a stable order
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_string(), self.content_type.clone())];
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        for (name, value) in &self.field_equals {
            params.push((format!("fields.{}", name), value.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

impl fmt::Display for EntryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .to_params()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{}", rendered.join("&"))
    }
}
