//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub public_dir: String,
    /// Section of the site that holds the baked articles
    pub thoughts_dir: String,
    pub static_dir: String,

    /// File the fetched post collection is cached in, relative to public_dir
    pub content_file: String,
    /// How long a fetched collection stays fresh before `fetch` hits the API again
    pub cache_ttl_secs: u64,

    // Navigation
    pub menu: Vec<LinkItem>,
    pub contact_links: Vec<LinkItem>,

    // Content source
    pub notion: NotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "notion-press".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            public_dir: "public".to_string(),
            thoughts_dir: "thoughts".to_string(),
            static_dir: "static".to_string(),

            content_file: "blog-content.json".to_string(),
            cache_ttl_secs: 300,

            menu: Vec::new(),
            contact_links: Vec::new(),

            notion: NotionConfig::default(),
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
}

/// A named link, used for the header menu and footer contact links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkItem {
    pub name: String,
    pub path: String,
}

/// Notion content-source configuration
///
/// The integration token is read from the environment variable named by
/// `token_env`, never from the config file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    pub api_base: String,
    pub api_version: String,
    pub database_id: String,
    pub token_env: String,

    // Database property names
    pub title_property: String,
    pub status_property: String,
    /// Status value a post must carry to be published
    pub published_status: String,
    pub date_property: String,
    pub type_property: String,
    /// Blog types to include; empty means all
    pub blog_types: Vec<String>,

    pub request_timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.notion.com/v1".to_string(),
            api_version: "2022-06-28".to_string(),
            database_id: String::new(),
            token_env: "NOTION_TOKEN".to_string(),

            title_property: "Title".to_string(),
            status_property: "Status".to_string(),
            published_status: "Published".to_string(),
            date_property: "Published".to_string(),
            type_property: "Blog".to_string(),
            blog_types: Vec::new(),

            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.thoughts_dir, "thoughts");
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.notion.api_base, "https://api.notion.com/v1");
        assert_eq!(config.notion.token_env, "NOTION_TOKEN");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: jordy rodriguez
author: Jordy Rodriguez
url: https://example.org
cache_ttl_secs: 600
menu:
  - name: about
    path: /about
  - name: thoughts
    path: /thoughts
notion:
  database_id: 24f79889bbb181c1a483dc5ddca87241
  blog_types: ["Personal", "Modern Stewardship"]
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "jordy rodriguez");
        assert_eq!(config.cache_ttl_secs, 600);
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[1].path, "/thoughts");
        assert_eq!(
            config.notion.database_id,
            "24f79889bbb181c1a483dc5ddca87241"
        );
        assert_eq!(config.notion.blog_types.len(), 2);
        // Fields not present in the file keep their defaults
        assert_eq!(config.notion.api_version, "2022-06-28");
        assert_eq!(config.public_dir, "public");
    }
}
