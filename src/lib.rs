//! advocacy-site: content gateway for a nonprofit advocacy site
//!
//! This crate reads publications and blog posts from the Contentful
//! Delivery API, normalizes them into plain records, and serves them as a
//! JSON API for the site's pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod contentful;
pub mod helpers;
pub mod server;

use anyhow::{Context, Result};
use std::path::Path;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The configured site
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Gateway over the content source, built once
    pub gateway: content::ContentGateway,
}

impl Site {
    /// Load a site from a directory
    ///
    /// Reads `_config.yml` when present, applies credential overrides from
    /// the environment, and builds the Contentful client.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };
        config.apply_env();

        Self::with_config(config)
    }

    /// Build a site from an explicit configuration
    pub fn with_config(config: config::SiteConfig) -> Result<Self> {
        let gateway = content::ContentGateway::from_config(&config)
            .context("Failed to create Contentful client")?;

        Ok(Self { config, gateway })
    }

    /// Build a site over an existing gateway
    pub fn with_gateway(config: config::SiteConfig, gateway: content::ContentGateway) -> Self {
        Self { config, gateway }
    }
}
