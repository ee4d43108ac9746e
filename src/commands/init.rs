//! Initialize a new site configuration

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

/// Template written by `init`
const CONFIG_TEMPLATE: &str = r#"# Site configuration

# Site
title: Advocacy Site
url: http://example.com

# Content source
# Credentials may instead come from CONTENTFUL_SPACE_ID and
# CONTENTFUL_ACCESS_TOKEN.
contentful:
  space_id: ''
  access_token: ''
  environment: master
  base_url: https://cdn.contentful.com
  # timeout_secs: 30

# Publications
research:
  content_type: researchItem
  default_border_color: '#00CAFF'
  featured_count: 4

# Blog
blog:
  content_type: blogPost
  per_page: 6

# Server
server:
  ip: localhost
  port: 4000
"#;

/// Write a template `_config.yml` into `target_dir`
///
/// An existing configuration is never overwritten.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    tracing::info!("Created: {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: SiteConfig = serde_yaml::from_str(CONFIG_TEMPLATE).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.research.content_type, defaults.research.content_type);
        assert_eq!(
            config.research.default_border_color,
            defaults.research.default_border_color
        );
        assert_eq!(config.contentful.timeout_secs, None);
        assert_eq!(config.blog.per_page, defaults.blog.per_page);
        assert_eq!(config.server.port, defaults.server.port);
    }

    #[test]
    fn test_init_site() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("site");

        init_site(&target).unwrap();
        assert!(target.join(CONFIG_FILE).exists());

        assert!(init_site(&target).is_err());
    }
}
