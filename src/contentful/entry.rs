//! Raw entries as returned by the Delivery API
//!
//! Fields are kept as loose JSON so that every optional level of a nested
//! path is read explicitly. Asset fields arrive either inline or as links
//! into `includes.Asset`; both shapes resolve through
//! [`EntryCollection::asset_url`].

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ContentfulError;

/// One page of an entries listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub items: Vec<Entry>,

    #[serde(default)]
    pub includes: Includes,

    /// Total number of matching entries on the server
    #[serde(default)]
    pub total: u64,
}

/// Linked resources shipped alongside the items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Entry>,
}

/// An entry or asset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub sys: Sys,

    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// System metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub id: Option<String>,
}

impl Entry {
    /// Raw field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String field; non-string values read as absent
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Boolean field; non-boolean values read as absent
    pub fn field_bool(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(Value::as_bool)
    }

    /// The entry id, or a shape error
    pub fn require_id(&self) -> Result<&str, ContentfulError> {
        self.sys.id.as_deref().ok_or_else(|| ContentfulError::MissingField {
            entry: "<unknown>".to_string(),
            field: "sys.id".to_string(),
        })
    }

    /// A string field that must be present
    pub fn require_str(&self, name: &str) -> Result<&str, ContentfulError> {
        self.field_str(name).ok_or_else(|| ContentfulError::MissingField {
            entry: self.sys.id.clone().unwrap_or_else(|| "<unknown>".to_string()),
            field: format!("fields.{}", name),
        })
    }

    /// `fields.file.url` of an asset
    fn file_url(&self) -> Option<&str> {
        self.fields
            .get("file")
            .and_then(|file| file.get("url"))
            .and_then(Value::as_str)
    }

    fn asset_link_id(value: &Value) -> Option<&str> {
        let sys = value.get("sys")?;
        let kind = sys.get("type").and_then(Value::as_str);
        let link_type = sys.get("linkType").and_then(Value::as_str);
        match (kind, link_type) {
            (Some("Link"), Some("Asset")) => sys.get("id").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl EntryCollection {
    /// Look up an included asset by id
    pub fn asset(&self, id: &str) -> Option<&Entry> {
        self.includes
            .assets
            .iter()
            .find(|asset| asset.sys.id.as_deref() == Some(id))
    }

    /// Raw file URL of the asset referenced by `entry.fields[name]`
    ///
    /// Returns `None` when the field, the link target, the file, or the URL
    /// is missing at any level.
    pub fn asset_url<'a>(&'a self, entry: &'a Entry, name: &str) -> Option<&'a str> {
        let value = entry.field(name)?;

        if let Some(id) = Entry::asset_link_id(value) {
            return match self.asset(id) {
                Some(asset) => asset.file_url(),
                None => {
                    tracing::debug!("Unresolved asset link {} on field {}", id, name);
                    None
                }
            };
        }

        value
            .get("fields")
            .and_then(|fields| fields.get("file"))
            .and_then(|file| file.get("url"))
            .and_then(Value::as_str)
    }

    /// Whether the server holds more matches than this page carries
    pub fn is_truncated(&self) -> bool {
        self.total > self.items.len() as u64
    }
}
