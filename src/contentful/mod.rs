//! Contentful Delivery API access
//!
//! The [`ContentSource`] trait is the seam between the content gateway and
//! the hosted content service. [`ContentfulClient`] is the production
//! implementation; tests substitute an in-memory source.

mod client;
mod entry;
mod error;
mod query;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ContentfulClient;
pub use entry::{Entry, EntryCollection, Includes, Sys};
pub use error::ContentfulError;
pub use query::EntryQuery;

use async_trait::async_trait;

/// Anything that can answer an entries query
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Perform exactly one entries request
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentfulError>;
}
