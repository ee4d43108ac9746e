//! Content gateway
//!
//! Normalizes Contentful entries into the record shapes the site renders.
//! Every operation performs exactly one request and fails open: transport
//! and shape errors are logged and replaced by an empty or absent result,
//! so callers never see an error from this layer.

use indexmap::IndexSet;
use serde::Serialize;
use std::sync::Arc;

use super::{BlogPostDetail, BlogPostSummary, ResearchItem, ALL_CATEGORY};
use crate::config::{BlogConfig, ResearchConfig, SiteConfig};
use crate::contentful::{
    ContentSource, ContentfulClient, ContentfulError, EntryCollection, EntryQuery,
};

/// Research items plus the category list, as the library page needs them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    pub items: Vec<ResearchItem>,
    pub categories: Vec<String>,
}

impl Library {
    /// Items visible under `category`
    pub fn filtered(&self, category: &str) -> Vec<ResearchItem> {
        super::listing::filter_by_category(&self.items, category)
    }
}

/// Read-only view over the content source
#[derive(Clone)]
pub struct ContentGateway {
    source: Arc<dyn ContentSource>,
    research: ResearchConfig,
    blog: BlogConfig,
}

impl ContentGateway {
    /// Create a gateway over an already-configured source
    pub fn new(source: Arc<dyn ContentSource>, research: ResearchConfig, blog: BlogConfig) -> Self {
        Self {
            source,
            research,
            blog,
        }
    }

    /// Build the Contentful client once and wrap it
    pub fn from_config(config: &SiteConfig) -> Result<Self, ContentfulError> {
        let client = ContentfulClient::new(&config.contentful)?;
        Ok(Self::new(
            Arc::new(client),
            config.research.clone(),
            config.blog.clone(),
        ))
    }

    /// All research items, newest first; empty on failure
    pub async fn fetch_research_items(&self) -> Vec<ResearchItem> {
        let query = EntryQuery::content_type(&self.research.content_type).newest_first();
        let result = self.try_research_items(&query).await;
        fail_open("fetch_research_items", &query, result, Vec::new)
    }

    /// `"All"` followed by the distinct non-empty categories in first-seen
    /// order; just `["All"]` on failure
    pub async fn fetch_research_categories(&self) -> Vec<String> {
        let query =
            EntryQuery::content_type(&self.research.content_type).select("fields.category");
        let result = self.try_research_categories(&query).await;
        fail_open("fetch_research_categories", &query, result, || {
            vec![ALL_CATEGORY.to_string()]
        })
    }

    /// All blog post summaries, newest first; empty on failure
    pub async fn fetch_blog_posts(&self) -> Vec<BlogPostSummary> {
        let query = EntryQuery::content_type(&self.blog.content_type).newest_first();
        let result = self.try_blog_posts(&query).await;
        fail_open("fetch_blog_posts", &query, result, Vec::new)
    }

    /// The post whose slug equals `slug` exactly; `None` when nothing
    /// matches or the lookup fails
    pub async fn fetch_blog_post_by_slug(&self, slug: &str) -> Option<BlogPostDetail> {
        let query = EntryQuery::content_type(&self.blog.content_type)
            .field_eq("slug", slug)
            .limit(1);
        let result = self.try_blog_post_by_slug(&query, slug).await;
        fail_open("fetch_blog_post_by_slug", &query, result, || None)
    }

    /// Items and categories, requested concurrently
    pub async fn fetch_library(&self) -> Library {
        let (items, categories) =
            tokio::join!(self.fetch_research_items(), self.fetch_research_categories());
        Library { items, categories }
    }

    async fn list(&self, query: &EntryQuery) -> Result<EntryCollection, ContentfulError> {
        let data = self.source.get_entries(query).await?;
        if data.is_truncated() {
            tracing::warn!(
                query = %query,
                returned = data.items.len(),
                total = data.total,
                "Content source has more entries than one page; extra entries are not shown"
            );
        }
        Ok(data)
    }

    async fn try_research_items(
        &self,
        query: &EntryQuery,
    ) -> Result<Vec<ResearchItem>, ContentfulError> {
        let data = self.list(query).await?;
        let items = data
            .items
            .iter()
            .map(|entry| {
                ResearchItem::from_entry(entry, &data, &self.research.default_border_color)
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Fetched {} research items", items.len());
        Ok(items)
    }

    async fn try_research_categories(
        &self,
        query: &EntryQuery,
    ) -> Result<Vec<String>, ContentfulError> {
        let data = self.list(query).await?;

        let distinct: IndexSet<&str> = data
            .items
            .iter()
            .filter_map(|entry| entry.field_str("category"))
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORY)
            .collect();

        let mut categories = Vec::with_capacity(distinct.len() + 1);
        categories.push(ALL_CATEGORY.to_string());
        categories.extend(distinct.into_iter().map(str::to_string));
        Ok(categories)
    }

    async fn try_blog_posts(
        &self,
        query: &EntryQuery,
    ) -> Result<Vec<BlogPostSummary>, ContentfulError> {
        let data = self.list(query).await?;
        let posts = data
            .items
            .iter()
            .map(|entry| BlogPostSummary::from_entry(entry, &data))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Fetched {} blog posts", posts.len());
        Ok(posts)
    }

    async fn try_blog_post_by_slug(
        &self,
        query: &EntryQuery,
        slug: &str,
    ) -> Result<Option<BlogPostDetail>, ContentfulError> {
        let data = self.source.get_entries(query).await?;

        // Exact, case-sensitive match whatever the source's comparison rules
        let Some(entry) = data
            .items
            .iter()
            .find(|entry| entry.field_str("slug") == Some(slug))
        else {
            tracing::debug!("No blog post with slug {:?}", slug);
            return Ok(None);
        };

        BlogPostDetail::from_entry(entry, &data).map(Some)
    }
}

/// Log a failed fetch and substitute its fallback
fn fail_open<T>(
    operation: &str,
    query: &EntryQuery,
    result: Result<T, ContentfulError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(
                operation,
                content_type = query.content_type_id(),
                query = %query,
                transport = e.is_transport(),
                "Content fetch failed, using fallback: {}",
                e
            );
            fallback()
        }
    }
}
