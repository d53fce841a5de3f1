//! Fetch posts and content from Notion

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use indexmap::IndexMap;

use crate::cache::BlogContent;
use crate::content::Post;
use crate::notion::{materialize, NotionClient};
use crate::render::render_blocks;
use crate::NotionPress;

/// Fetch the published post collection and write the content cache
pub async fn run(app: &NotionPress, force: bool) -> Result<()> {
    if !force {
        if let Ok(existing) = BlogContent::load(&app.content_path) {
            let ttl = Duration::seconds(app.config.cache_ttl_secs as i64);
            if existing.is_fresh(Utc::now(), ttl) {
                tracing::info!(
                    "Content cache is fresh ({} posts), skipping fetch; use --force to refetch",
                    existing.posts.len()
                );
                return Ok(());
            }
        }
    }

    let notion = &app.config.notion;
    if notion.database_id.is_empty() {
        anyhow::bail!("no notion.database_id configured in _config.yml");
    }
    let token = std::env::var(&notion.token_env)
        .with_context(|| format!("missing Notion token: set {}", notion.token_env))?;

    let client = NotionClient::new(notion.clone(), token)?;

    let pages = client.query_database().await?;
    tracing::info!("Fetched {} pages from the posts database", pages.len());

    let mut posts: IndexMap<String, Post> = IndexMap::new();
    for page in &pages {
        let Some(mut post) = Post::from_page(page, notion) else {
            continue;
        };
        tracing::info!("Processing post: {}", post.title);
        post.content = fetch_post_content(&client, &page.id).await;
        posts.insert(post.slug(), post);
    }

    let content = BlogContent::new(posts, Utc::now());
    content.save(&app.content_path)?;

    tracing::info!(
        "Saved {} posts to {:?}",
        content.posts.len(),
        app.content_path
    );

    Ok(())
}

/// Fetch and render one post body. A failed fetch yields an empty body so a
/// single bad post cannot sink the whole run.
async fn fetch_post_content(client: &NotionClient, page_id: &str) -> String {
    match client.list_blocks(page_id).await {
        Ok(blocks) => {
            let tree = materialize(client, blocks).await;
            render_blocks(&tree)
        }
        Err(err) => {
            tracing::error!("Failed to fetch content for {}: {}", page_id, err);
            String::new()
        }
    }
}
