//! Bake static article pages from the fetched content

use anyhow::{Context, Result};

use crate::cache::BlogContent;
use crate::generator::StaticGenerator;
use crate::NotionPress;

/// Generate the static pages from the content cache
pub fn run(app: &NotionPress) -> Result<()> {
    let start = std::time::Instant::now();

    let content = BlogContent::load(&app.content_path)
        .context("no fetched content found; run `notion-press fetch` first")?;

    tracing::info!("Loaded {} posts", content.posts.len());

    let generator = StaticGenerator::new(app)?;
    generator.generate(&content)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
