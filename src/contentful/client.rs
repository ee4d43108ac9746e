//! Delivery API HTTP client

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;

use super::{ContentSource, ContentfulError, EntryCollection, EntryQuery};
use crate::config::ContentfulConfig;

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for one space and environment, built once per process
#[derive(Clone)]
pub struct ContentfulClient {
    http: reqwest::Client,
    entries_url: String,
    access_token: String,
}

impl ContentfulClient {
    /// Build a client from configuration
    pub fn new(config: &ContentfulConfig) -> Result<Self, ContentfulError> {
        if config.space_id.trim().is_empty() {
            return Err(ContentfulError::Config(
                "contentful.space_id is not set".to_string(),
            ));
        }
        if config.access_token.trim().is_empty() {
            return Err(ContentfulError::Config(
                "contentful.access_token is not set".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("advocacy-site/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let entries_url = format!(
            "{}/spaces/{}/environments/{}/entries",
            config.base_url.trim_end_matches('/'),
            utf8_percent_encode(&config.space_id, PATH_SEGMENT),
            utf8_percent_encode(&config.environment, PATH_SEGMENT),
        );

        Ok(Self {
            http,
            entries_url,
            access_token: config.access_token.clone(),
        })
    }

    /// Fully qualified entries endpoint
    pub fn entries_url(&self) -> &str {
        &self.entries_url
    }
}

#[async_trait]
impl ContentSource for ContentfulClient {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentfulError> {
        tracing::debug!("GET {}?{}", self.entries_url, query);

        let resp = self
            .http
            .get(&self.entries_url)
            .bearer_auth(&self.access_token)
            .query(&query.to_params())
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ContentfulError::Parse(e.to_string()))
    }
}

/// Turn a non-success status into [`ContentfulError::Api`]
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ContentfulError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ContentfulError::Api {
        status,
        message: error_message(&body),
    })
}

/// Prefer the `message` of a Contentful error body over the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
