//! notion-press: a static site generator for a Notion-backed personal blog
//!
//! Posts are authored in a Notion database. `fetch` pulls the published
//! entries down through the block API and converts them to HTML; `build`
//! bakes the static article pages and the section index from that cache.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod notion;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application
#[derive(Clone)]
pub struct NotionPress {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Content cache location
    pub content_path: PathBuf,
}

impl NotionPress {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let content_path = public_dir.join(&config.content_file);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            content_path,
        })
    }
}
