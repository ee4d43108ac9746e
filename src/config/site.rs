//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding `contentful.space_id`
pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable overriding `contentful.access_token`
pub const ENV_ACCESS_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";
/// Environment variable overriding `contentful.environment`
pub const ENV_ENVIRONMENT: &str = "CONTENTFUL_ENVIRONMENT";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Content source
    #[serde(default)]
    pub contentful: ContentfulConfig,

    // Content types
    #[serde(default)]
    pub research: ResearchConfig,
    #[serde(default)]
    pub blog: BlogConfig,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Advocacy Site".to_string(),
            url: "http://example.com".to_string(),
            contentful: ContentfulConfig::default(),
            research: ResearchConfig::default(),
            blog: BlogConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply credential overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply credential overrides from an arbitrary lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(space_id) = non_empty(ENV_SPACE_ID) {
            self.contentful.space_id = space_id;
            tracing::debug!("Using space id from {}", ENV_SPACE_ID);
        }
        if let Some(token) = non_empty(ENV_ACCESS_TOKEN) {
            self.contentful.access_token = token;
            tracing::debug!("Using access token from {}", ENV_ACCESS_TOKEN);
        }
        if let Some(environment) = non_empty(ENV_ENVIRONMENT) {
            self.contentful.environment = environment;
        }
    }
}

/// Contentful Delivery API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub base_url: String,
    /// Request timeout; unset or zero leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            access_token: String::new(),
            environment: "master".to_string(),
            base_url: "https://cdn.contentful.com".to_string(),
            timeout_secs: None,
        }
    }
}

// The access token never reaches the logs.
impl std::fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Research item (publication) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    pub content_type: String,
    pub default_border_color: String,
    pub featured_count: usize,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            content_type: "researchItem".to_string(),
            default_border_color: "#00CAFF".to_string(),
            featured_count: 4,
        }
    }
}

/// Blog post configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub content_type: String,
    pub per_page: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_type: "blogPost".to_string(),
            per_page: 6,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
