//! List fetched posts

use anyhow::{Context, Result};

use crate::cache::BlogContent;
use crate::generator::clean_url;
use crate::NotionPress;

/// Print the cached post collection
pub fn run(app: &NotionPress) -> Result<()> {
    let content = BlogContent::load(&app.content_path)
        .context("no fetched content found; run `notion-press fetch` first")?;

    println!("Posts ({}):", content.posts.len());
    for (slug, post) in &content.posts {
        println!(
            "  {} - {} [{}] /{}/{}/",
            post.published_date,
            post.title,
            post.blog_type,
            app.config.thoughts_dir,
            clean_url(slug)
        );
    }

    Ok(())
}
