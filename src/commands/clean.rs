//! Clean generated pages and the content cache

use anyhow::Result;
use std::fs;

use crate::NotionPress;

/// Remove the generated article section and the content cache
pub fn run(app: &NotionPress) -> Result<()> {
    let section_dir = app.public_dir.join(&app.config.thoughts_dir);
    if section_dir.exists() {
        fs::remove_dir_all(&section_dir)?;
        tracing::info!("Deleted: {:?}", section_dir);
    }

    if app.content_path.exists() {
        fs::remove_file(&app.content_path)?;
        tracing::info!("Deleted: {:?}", app.content_path);
    }

    Ok(())
}
