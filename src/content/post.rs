//! Post model extracted from the Notion database

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::NotionConfig;
use crate::notion::types::PageObject;

/// One blog post, as stored in the content cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Notion page id
    pub id: String,

    /// Post title
    pub title: String,

    /// Editorial status
    pub status: String,

    /// Publication date as supplied by the source ("2025-07-04")
    pub published_date: String,

    /// Which blog the post belongs to
    pub blog_type: String,

    /// Canonical Notion URL of the page
    pub url: String,

    /// Rendered HTML body
    #[serde(default)]
    pub content: String,

    /// Short display line for index listings
    #[serde(default)]
    pub excerpt: String,
}

impl Post {
    /// Extract a post from a database page, without body content.
    ///
    /// Returns None for pages that are not published or whose blog type is
    /// filtered out.
    pub fn from_page(page: &PageObject, config: &NotionConfig) -> Option<Self> {
        let title = page
            .property(&config.title_property)
            .and_then(|p| p.title_text())
            .unwrap_or_else(|| "Untitled".to_string());
        let status = page
            .property(&config.status_property)
            .and_then(|p| p.select_name())
            .unwrap_or_default()
            .to_string();
        let published_date = page
            .property(&config.date_property)
            .and_then(|p| p.date_start())
            .unwrap_or_default()
            .to_string();
        let blog_type = page
            .property(&config.type_property)
            .and_then(|p| p.select_name())
            .unwrap_or_default()
            .to_string();

        if status != config.published_status {
            return None;
        }
        if !config.blog_types.is_empty() && !config.blog_types.iter().any(|t| *t == blog_type) {
            return None;
        }

        let excerpt = short_date(&published_date).unwrap_or_default();

        Some(Self {
            id: page.id.clone(),
            title,
            status,
            published_date,
            blog_type,
            url: page.url.clone(),
            content: String::new(),
            excerpt,
        })
    }

    /// URL-friendly name derived from the title
    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }

    /// Parsed publication date, if the source supplied one
    pub fn published(&self) -> Option<NaiveDate> {
        parse_date(&self.published_date)
    }
}

/// Parse the date part of a source date value, which is either a bare date
/// ("2025-07-04") or a full RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format a source date like "Jul 4, 2025"
pub fn short_date(value: &str) -> Option<String> {
    parse_date(value).map(|d| d.format("%b %-d, %Y").to_string())
}

/// Format a source date like "July 4, 2025"
pub fn long_date(value: &str) -> Option<String> {
    parse_date(value).map(|d| d.format("%B %-d, %Y").to_string())
}
