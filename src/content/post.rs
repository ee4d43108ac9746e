//! Blog post records

use serde::{Deserialize, Serialize};

use super::richtext::{flatten_document, ContentBlock};
use crate::contentful::{ContentfulError, Entry, EntryCollection};
use crate::helpers::{asset_url, display_date, read_time, slug_or_derive};

/// A blog post as shown in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,

    /// Date exactly as the source stores it
    pub date: String,

    pub category: String,

    /// Defaults to false when the source omits it
    pub featured: bool,

    /// Absolute image URL
    pub image: Option<String>,

    /// Source slug, or one derived from the title
    pub slug: String,
}

impl BlogPostSummary {
    /// Build from a raw entry; `id` and `title` are required
    pub fn from_entry(entry: &Entry, data: &EntryCollection) -> Result<Self, ContentfulError> {
        let title = entry.require_str("title")?;
        Ok(Self {
            id: entry.require_id()?.to_string(),
            title: title.to_string(),
            excerpt: entry.field_str("excerpt").unwrap_or_default().to_string(),
            author: entry.field_str("author").unwrap_or_default().to_string(),
            date: entry.field_str("date").unwrap_or_default().to_string(),
            category: entry.field_str("category").unwrap_or_default().to_string(),
            featured: entry.field_bool("featured").unwrap_or(false),
            image: asset_url(data.asset_url(entry, "image")),
            slug: slug_or_derive(entry.field_str("slug"), title),
        })
    }
}

/// A full blog post for the article page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,

    /// Long-form display date, e.g. "January 5, 2024"
    pub date: String,

    pub category: String,
    pub featured: bool,
    pub image: Option<String>,
    pub slug: String,

    /// Flattened body
    pub content: Vec<ContentBlock>,

    /// e.g. "3 min read"
    pub read_time: String,
}

impl BlogPostDetail {
    /// Build from a raw entry, flattening its rich-text `body`
    pub fn from_entry(entry: &Entry, data: &EntryCollection) -> Result<Self, ContentfulError> {
        let summary = BlogPostSummary::from_entry(entry, data)?;
        let content = flatten_document(entry.field("body"))?;
        let read_time = read_time(content.iter().map(|block| block.text.as_str()));

        Ok(Self {
            id: summary.id,
            title: summary.title,
            excerpt: summary.excerpt,
            author: summary.author,
            date: display_date(&summary.date),
            category: summary.category,
            featured: summary.featured,
            image: summary.image,
            slug: summary.slug,
            content,
            read_time,
        })
    }
}
