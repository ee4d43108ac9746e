//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::BlogListing;
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    print!("{}", render(site, content_type).await?);
    Ok(())
}

/// Render a listing as plain text
pub async fn render(site: &Site, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "research" | "publications" => {
            let items = site.gateway.fetch_research_items().await;
            writeln!(out, "Research ({}):", items.len())?;
            for item in items {
                let category = if item.category.is_empty() {
                    "-"
                } else {
                    item.category.as_str()
                };
                writeln!(out, "  {} [{}]", item.title, category)?;
                if let Some(pdf) = &item.pdf_url {
                    writeln!(out, "    {}", pdf)?;
                }
            }
        }
        "category" | "categories" => {
            let categories = site.gateway.fetch_research_categories().await;
            writeln!(out, "Categories ({}):", categories.len())?;
            for category in categories {
                writeln!(out, "  {}", category)?;
            }
        }
        "blog" | "post" | "posts" => {
            let listing = BlogListing::from_posts(site.gateway.fetch_blog_posts().await);
            writeln!(out, "Posts ({}):", listing.len())?;
            if let Some(post) = &listing.featured {
                writeln!(out, "  * {} - {} [{}] (featured)", post.date, post.title, post.slug)?;
            }
            for post in &listing.regular {
                writeln!(out, "  {} - {} [{}]", post.date, post.title, post.slug)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: research, categories, blog",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentGateway;
    use crate::contentful::testing::StaticSource;
    use serde_json::json;
    use std::sync::Arc;

    fn site(source: StaticSource) -> Site {
        let config = SiteConfig::default();
        let gateway = ContentGateway::new(
            Arc::new(source),
            config.research.clone(),
            config.blog.clone(),
        );
        Site::with_gateway(config, gateway)
    }

    #[tokio::test]
    async fn test_list_blog_marks_featured() {
        let site = site(StaticSource::new().with(
            "blogPost",
            json!({ "items": [
                { "sys": { "id": "1" }, "fields": { "title": "First", "date": "2024-02-01" } },
                { "sys": { "id": "2" }, "fields": { "title": "Second", "date": "2024-01-01", "featured": true } }
            ]}),
        ));

        let out = render(&site, "blog").await.unwrap();
        assert!(out.starts_with("Posts (2):"));
        assert!(out.contains("  * 2024-01-01 - Second [second] (featured)"));
        assert!(out.contains("  2024-02-01 - First [first]"));
    }

    #[tokio::test]
    async fn test_list_categories_on_outage() {
        let site = site(StaticSource::new().failing("researchItem"));
        let out = render(&site, "categories").await.unwrap();
        assert_eq!(out, "Categories (1):\n  All\n");
    }

    #[tokio::test]
    async fn test_unknown_type() {
        let site = site(StaticSource::new());
        assert!(render(&site, "tags").await.is_err());
    }
}
