//! Listing logic shared by the blog and library views

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{BlogPostSummary, ResearchItem, ALL_CATEGORY};

/// Blog posts split into the featured slot and the regular grid
///
/// Nothing upstream guarantees a single featured post. The first post
/// flagged `featured` takes the slot; any later flagged posts stay in the
/// regular list in their original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogListing {
    pub featured: Option<BlogPostSummary>,
    pub regular: Vec<BlogPostSummary>,
}

impl BlogListing {
    /// Partition posts, preserving order
    pub fn from_posts(posts: Vec<BlogPostSummary>) -> Self {
        let mut listing = Self::default();
        for post in posts {
            if post.featured && listing.featured.is_none() {
                listing.featured = Some(post);
            } else {
                listing.regular.push(post);
            }
        }
        listing
    }

    /// The first `count` regular posts
    pub fn visible(&self, count: usize) -> &[BlogPostSummary] {
        &self.regular[..count.min(self.regular.len())]
    }

    /// Whether showing `count` posts leaves some hidden
    pub fn has_more(&self, count: usize) -> bool {
        count < self.regular.len()
    }

    /// Window size after pressing "load more" (or "show less" once
    /// everything is visible)
    pub fn next_visible(&self, count: usize, step: usize) -> usize {
        if self.has_more(count) {
            count + step
        } else {
            step
        }
    }

    /// Total number of posts, featured included
    pub fn len(&self) -> usize {
        self.regular.len() + usize::from(self.featured.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Items in `category`; `"All"` or an empty category selects everything
pub fn filter_by_category(items: &[ResearchItem], category: &str) -> Vec<ResearchItem> {
    if category.is_empty() || category == ALL_CATEGORY {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

/// Up to `count` items picked at random, for the home page showcase
pub fn featured_sample<R: Rng + ?Sized>(
    items: &[ResearchItem],
    count: usize,
    rng: &mut R,
) -> Vec<ResearchItem> {
    items.choose_multiple(rng, count).cloned().collect()
}
