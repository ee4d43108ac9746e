//! JSON API over the content gateway
//!
//! Handlers never surface content-source failures: the gateway has already
//! replaced them with empty results. The only error status is a 404 for an
//! unknown article or route.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{listing, BlogListing, BlogPostSummary, ContentGateway, ALL_CATEGORY};
use crate::Site;

/// Server state
struct ServerState {
    gateway: ContentGateway,
    per_page: usize,
    featured_count: usize,
}

#[derive(Debug, Deserialize)]
struct ResearchParams {
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlogParams {
    visible: Option<usize>,
}

/// One window of the blog listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlogPage {
    featured: Option<BlogPostSummary>,
    posts: Vec<BlogPostSummary>,
    has_more: bool,
    total: usize,
}

/// Build the API router for a site
pub fn router(site: &Site) -> Router {
    let state = Arc::new(ServerState {
        gateway: site.gateway.clone(),
        per_page: site.config.blog.per_page.max(1),
        featured_count: site.config.research.featured_count,
    });

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/research", get(research_handler))
        .route("/api/research/categories", get(categories_handler))
        .route("/api/research/featured", get(featured_research_handler))
        .route("/api/library", get(library_handler))
        .route("/api/blog", get(blog_handler))
        .route("/api/blog/:slug", get(blog_post_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn research_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ResearchParams>,
) -> impl IntoResponse {
    let items = state.gateway.fetch_research_items().await;
    let category = params.category.as_deref().unwrap_or(ALL_CATEGORY);
    Json(listing::filter_by_category(&items, category))
}

async fn categories_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.gateway.fetch_research_categories().await)
}

async fn featured_research_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let items = state.gateway.fetch_research_items().await;
    let sample = {
        let mut rng = rand::thread_rng();
        listing::featured_sample(&items, state.featured_count, &mut rng)
    };
    Json(sample)
}

async fn library_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.gateway.fetch_library().await)
}

async fn blog_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<BlogParams>,
) -> impl IntoResponse {
    let listing = BlogListing::from_posts(state.gateway.fetch_blog_posts().await);
    let visible = params.visible.unwrap_or(state.per_page);

    Json(BlogPage {
        posts: listing.visible(visible).to_vec(),
        has_more: listing.has_more(visible),
        total: listing.len(),
        featured: listing.featured,
    })
}

async fn blog_post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match state.gateway.fetch_blog_post_by_slug(&slug).await {
        Some(post) => Json(post).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "article not found" })),
        )
            .into_response(),
    }
}

async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::contentful::testing::StaticSource;
    use serde_json::Value;

    fn site(source: StaticSource) -> Site {
        let mut config = SiteConfig::default();
        config.blog.per_page = 2;
        config.research.featured_count = 2;
        let gateway = ContentGateway::new(
            Arc::new(source),
            config.research.clone(),
            config.blog.clone(),
        );
        Site::with_gateway(config, gateway)
    }

    fn source() -> StaticSource {
        StaticSource::new()
            .with(
                "researchItem",
                json!({ "items": [
                    { "sys": { "id": "r1" }, "fields": { "title": "One", "category": "Policy" } },
                    { "sys": { "id": "r2" }, "fields": { "title": "Two", "category": "Research" } },
                    { "sys": { "id": "r3" }, "fields": { "title": "Three", "category": "Policy" } }
                ]}),
            )
            .with(
                "blogPost",
                json!({ "items": [
                    { "sys": { "id": "p1" }, "fields": { "title": "Alpha", "featured": true } },
                    { "sys": { "id": "p2" }, "fields": { "title": "Beta", "slug": "beta" } },
                    { "sys": { "id": "p3" }, "fields": { "title": "Gamma", "featured": true } },
                    { "sys": { "id": "p4" }, "fields": { "title": "Delta" } }
                ]}),
            )
    }

    async fn spawn(site: &Site) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(site);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn get_json(url: &str) -> (u16, Value) {
        let resp = reqwest::get(url).await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_research_filter() {
        let base = spawn(&site(source())).await;

        let (status, all) = get_json(&format!("{}/api/research", base)).await;
        assert_eq!(status, 200);
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (_, policy) = get_json(&format!("{}/api/research?category=Policy", base)).await;
        let ids: Vec<_> = policy
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert_eq!(policy[0]["borderColor"], "#00CAFF");

        let (_, unfiltered) = get_json(&format!("{}/api/research?category=", base)).await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_categories_and_library() {
        let base = spawn(&site(source())).await;

        let (_, categories) = get_json(&format!("{}/api/research/categories", base)).await;
        assert_eq!(categories, json!(["All", "Policy", "Research"]));

        let (_, library) = get_json(&format!("{}/api/library", base)).await;
        assert_eq!(library["items"].as_array().unwrap().len(), 3);
        assert_eq!(library["categories"][0], "All");

        let (_, featured) = get_json(&format!("{}/api/research/featured", base)).await;
        assert_eq!(featured.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_blog_listing_window() {
        let base = spawn(&site(source())).await;

        let (_, page) = get_json(&format!("{}/api/blog", base)).await;
        assert_eq!(page["featured"]["id"], "p1");
        assert_eq!(page["posts"].as_array().unwrap().len(), 2);
        assert_eq!(page["posts"][0]["id"], "p2");
        assert_eq!(page["posts"][1]["id"], "p3");
        assert_eq!(page["hasMore"], true);
        assert_eq!(page["total"], 4);

        let (_, page) = get_json(&format!("{}/api/blog?visible=10", base)).await;
        assert_eq!(page["posts"].as_array().unwrap().len(), 3);
        assert_eq!(page["hasMore"], false);
    }

    #[tokio::test]
    async fn test_blog_post_lookup() {
        let base = spawn(&site(source())).await;

        let (status, post) = get_json(&format!("{}/api/blog/beta", base)).await;
        assert_eq!(status, 200);
        assert_eq!(post["id"], "p2");
        assert_eq!(post["readTime"], "5 min read");

        let (status, body) = get_json(&format!("{}/api/blog/nonexistent-slug", base)).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "article not found");
    }

    #[tokio::test]
    async fn test_outage_yields_empty_results() {
        let base = spawn(&site(
            StaticSource::new()
                .failing("researchItem")
                .failing("blogPost"),
        ))
        .await;

        let (status, items) = get_json(&format!("{}/api/research", base)).await;
        assert_eq!(status, 200);
        assert_eq!(items, json!([]));

        let (_, categories) = get_json(&format!("{}/api/research/categories", base)).await;
        assert_eq!(categories, json!(["All"]));

        let (status, page) = get_json(&format!("{}/api/blog", base)).await;
        assert_eq!(status, 200);
        assert!(page["featured"].is_null());
        assert_eq!(page["total"], 0);
    }

    #[tokio::test]
    async fn test_health_and_fallback() {
        let base = spawn(&site(source())).await;

        let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "ok");

        let (status, _) = get_json(&format!("{}/nowhere", base)).await;
        assert_eq!(status, 404);
    }
}
