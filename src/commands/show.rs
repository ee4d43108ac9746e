//! Show a single blog post

use anyhow::Result;
use std::fmt::Write;

use crate::content::{BlockKind, BlogPostDetail};
use crate::helpers::blog_path;
use crate::Site;

/// Print the article with the given slug
pub async fn run(site: &Site, slug: &str) -> Result<()> {
    match site.gateway.fetch_blog_post_by_slug(slug).await {
        Some(post) => print!("{}", render(&post)?),
        None => anyhow::bail!("Article not found: {}", slug),
    }
    Ok(())
}

/// Render an article as plain text
pub fn render(post: &BlogPostDetail) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", post.title)?;
    writeln!(out, "{}", "=".repeat(post.title.chars().count()))?;
    writeln!(
        out,
        "{} | {} | {} | {}",
        post.author, post.date, post.category, post.read_time
    )?;
    writeln!(out, "{}", blog_path(&post.slug))?;

    for block in &post.content {
        writeln!(out)?;
        match block.kind {
            BlockKind::Heading => writeln!(out, "## {}", block.text)?,
            BlockKind::Paragraph => writeln!(out, "{}", block.text)?,
        }
    }

    Ok(out)
}
