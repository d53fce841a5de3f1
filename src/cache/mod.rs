//! Fetched-content cache
//!
//! `fetch` writes the whole post collection plus a fetch timestamp to a
//! single JSON file; `build` and `list` read it back. Freshness is an
//! explicit predicate the command layer checks before refetching - nothing
//! here talks to the network.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Post;

/// The fetched post collection, keyed by slug in publish order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogContent {
    #[serde(default)]
    pub posts: IndexMap<String, Post>,

    /// When the collection was fetched
    #[serde(default, rename = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl BlogContent {
    pub fn new(posts: IndexMap<String, Post>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            posts,
            last_updated: Some(fetched_at),
        }
    }

    /// Load the collection from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = serde_json::from_str(&content)
            .with_context(|| format!("malformed content cache {}", path.display()))?;
        Ok(parsed)
    }

    /// Save the collection to disk, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether the collection is still fresh at `now` for the given ttl
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match self.last_updated {
            Some(fetched_at) => now.signed_duration_since(fetched_at) < ttl,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: &str) -> Post {
        Post {
            id: format!("id-{}", title),
            title: title.to_string(),
            status: "Published".to_string(),
            published_date: date.to_string(),
            blog_type: "Personal".to_string(),
            url: String::new(),
            content: format!("<p>{}</p>", title),
            excerpt: String::new(),
        }
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog-content.json");

        let mut posts = IndexMap::new();
        posts.insert("zebra".to_string(), post("Zebra", "2025-02-01"));
        posts.insert("apple".to_string(), post("Apple", "2025-01-01"));

        let content = BlogContent::new(posts, Utc::now());
        content.save(&path).unwrap();

        let loaded = BlogContent::load(&path).unwrap();
        let slugs: Vec<&String> = loaded.posts.keys().collect();
        assert_eq!(slugs, vec!["zebra", "apple"]);
        assert_eq!(loaded.posts["zebra"].content, "<p>Zebra</p>");
        assert!(loaded.last_updated.is_some());
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("blog-content.json");

        BlogContent::default().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BlogContent::load(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_freshness() {
        let now = Utc::now();
        let ttl = Duration::seconds(300);

        let fresh = BlogContent::new(IndexMap::new(), now - Duration::seconds(60));
        assert!(fresh.is_fresh(now, ttl));

        let stale = BlogContent::new(IndexMap::new(), now - Duration::seconds(600));
        assert!(!stale.is_fresh(now, ttl));

        // Never fetched is never fresh
        assert!(!BlogContent::default().is_fresh(now, ttl));
    }
}
