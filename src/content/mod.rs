//! Content module - record shapes, the content gateway, and listing logic

mod gateway;
pub mod listing;
mod post;
mod research;
mod richtext;

pub use gateway::{ContentGateway, Library};
pub use listing::BlogListing;
pub use post::{BlogPostDetail, BlogPostSummary};
pub use research::ResearchItem;
pub use richtext::{flatten_document, BlockKind, ContentBlock};

/// Category value that stands for "no filter"
pub const ALL_CATEGORY: &str = "All";
