//! Research items (publications)

use serde::{Deserialize, Serialize};

use crate::contentful::{ContentfulError, Entry, EntryCollection};
use crate::helpers::asset_url;

/// A publication in the research library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchItem {
    /// Source-assigned id
    pub id: String,

    pub title: String,

    pub description: String,

    /// Absolute cover image URL
    pub image: Option<String>,

    /// Card accent color
    pub border_color: String,

    /// Absolute URL of the downloadable document
    pub pdf_url: Option<String>,

    /// Used for filtering in the library view
    pub category: String,
}

impl ResearchItem {
    /// Build from a raw entry
    ///
    /// `id` and `title` are required; other text fields default to empty.
    pub fn from_entry(
        entry: &Entry,
        data: &EntryCollection,
        default_border_color: &str,
    ) -> Result<Self, ContentfulError> {
        Ok(Self {
            id: entry.require_id()?.to_string(),
            title: entry.require_str("title")?.to_string(),
            description: entry.field_str("description").unwrap_or_default().to_string(),
            image: asset_url(data.asset_url(entry, "image")),
            border_color: entry
                .field_str("borderColor")
                .filter(|color| !color.is_empty())
                .unwrap_or(default_border_color)
                .to_string(),
            pdf_url: asset_url(data.asset_url(entry, "pdf")),
            category: entry.field_str("category").unwrap_or_default().to_string(),
        })
    }
}
