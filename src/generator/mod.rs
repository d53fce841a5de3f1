//! Static page generator
//!
//! Bakes the fetched collection into one directory per article plus the
//! section index, mirroring the clean URLs the site links to
//! (/thoughts/helloworld/ for the post slugged hello-world).

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::cache::BlogContent;
use crate::content::{long_date, short_date, Post};
use crate::templates::{ArticleData, IndexEntryData, SiteData, TemplateRenderer};
use crate::NotionPress;

/// Static site generator over the fetched post collection
pub struct StaticGenerator<'a> {
    app: &'a NotionPress,
    renderer: TemplateRenderer,
}

impl<'a> StaticGenerator<'a> {
    /// Create a new generator
    pub fn new(app: &'a NotionPress) -> Result<Self> {
        Ok(Self {
            app,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate every article page and the section index
    pub fn generate(&self, content: &BlogContent) -> Result<()> {
        let section_dir = self.app.public_dir.join(&self.app.config.thoughts_dir);
        fs::create_dir_all(&section_dir)?;

        // Article directories from a previous run are stale; the section
        // index.html is regenerated in place
        clean_article_dirs(&section_dir)?;

        let site = self.site_data();

        // Newest first
        let mut posts: Vec<(&String, &Post)> = content.posts.iter().collect();
        posts.sort_by(|a, b| b.1.published().cmp(&a.1.published()));

        for (slug, post) in &posts {
            let dir = section_dir.join(clean_url(slug));
            fs::create_dir_all(&dir)?;
            let html = self.render_article(&site, post)?;
            fs::write(dir.join("index.html"), html)?;
            tracing::info!(
                "Generated: /{}/{}/",
                self.app.config.thoughts_dir,
                clean_url(slug)
            );
        }

        let index = self.render_index(&site, &posts)?;
        fs::write(section_dir.join("index.html"), index)?;
        tracing::info!("Generated: /{}/", self.app.config.thoughts_dir);

        self.copy_static_assets()?;

        Ok(())
    }

    fn site_data(&self) -> SiteData {
        let config = &self.app.config;
        SiteData {
            title: config.title.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
            thoughts_dir: config.thoughts_dir.clone(),
            menu: config.menu.clone(),
            contact_links: config.contact_links.clone(),
        }
    }

    fn render_article(&self, site: &SiteData, post: &Post) -> Result<String> {
        let article = ArticleData {
            title: post.title.clone(),
            date: long_date(&post.published_date).unwrap_or_default(),
            content: post.content.clone(),
        };

        let mut context = Context::new();
        context.insert("site", site);
        context.insert("post", &article);
        self.renderer.render("article.html", &context)
    }

    fn render_index(&self, site: &SiteData, posts: &[(&String, &Post)]) -> Result<String> {
        let entries: Vec<IndexEntryData> = posts
            .iter()
            .map(|(slug, post)| IndexEntryData {
                title: post.title.clone(),
                href: format!("/{}/{}/", site.thoughts_dir, clean_url(slug)),
                date: short_date(&post.published_date).unwrap_or_default(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", site);
        context.insert("posts", &entries);
        self.renderer.render("index.html", &context)
    }

    /// Copy files from the static dir (stylesheet, images, scripts) into
    /// the output directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = self.app.base_dir.join(&self.app.config.static_dir);
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&static_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(&static_dir).unwrap_or(path);
            let target = self.app.public_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)
                .with_context(|| format!("failed to copy asset {}", path.display()))?;
        }

        Ok(())
    }
}

/// Remove article directories left over from a previous run, keeping plain
/// files (the section index.html) in place
fn clean_article_dirs(section_dir: &Path) -> Result<()> {
    for entry in fs::read_dir(section_dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            fs::remove_dir_all(entry.path())?;
        }
    }
    Ok(())
}

/// Squash a slug into the directory name used in article URLs
pub fn clean_url(slug: &str) -> String {
    slug.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::Utc;
    use indexmap::IndexMap;

    fn post(title: &str, date: &str, content: &str) -> Post {
        Post {
            id: format!("id-{}", title),
            title: title.to_string(),
            status: "Published".to_string(),
            published_date: date.to_string(),
            blog_type: "Personal".to_string(),
            url: String::new(),
            content: content.to_string(),
            excerpt: short_date(date).unwrap_or_default(),
        }
    }

    fn test_app(base_dir: &Path) -> NotionPress {
        let config = SiteConfig::default();
        let public_dir = base_dir.join(&config.public_dir);
        let content_path = public_dir.join(&config.content_file);
        NotionPress {
            config,
            base_dir: base_dir.to_path_buf(),
            public_dir,
            content_path,
        }
    }

    #[test]
    fn test_clean_url() {
        assert_eq!(clean_url("hello-world"), "helloworld");
        assert_eq!(clean_url("on software"), "onsoftware");
        assert_eq!(clean_url("Already"), "already");
    }

    #[test]
    fn test_generate_writes_articles_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let mut posts = IndexMap::new();
        posts.insert(
            "older-post".to_string(),
            post("Older Post", "2025-01-01", "<p>old</p>"),
        );
        posts.insert(
            "newer-post".to_string(),
            post("Newer Post", "2025-07-04", "<p>new</p>"),
        );
        let content = BlogContent::new(posts, Utc::now());

        let generator = StaticGenerator::new(&app).unwrap();
        generator.generate(&content).unwrap();

        let section = app.public_dir.join("thoughts");
        let article = fs::read_to_string(section.join("newerpost").join("index.html")).unwrap();
        assert!(article.contains("<h1>Newer Post</h1>"));
        assert!(article.contains("July 4, 2025"));
        assert!(article.contains("<p>new</p>"));

        let index = fs::read_to_string(section.join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="/thoughts/newerpost/">Newer Post</a>"#));
        assert!(index.contains(r#"<a href="/thoughts/olderpost/">Older Post</a>"#));
        // Newest first on the index
        let newer = index.find("Newer Post").unwrap();
        let older = index.find("Older Post").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_generate_removes_stale_article_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let stale = app.public_dir.join("thoughts").join("removedpost");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("index.html"), "stale").unwrap();

        let mut posts = IndexMap::new();
        posts.insert(
            "kept-post".to_string(),
            post("Kept Post", "2025-03-01", "<p>kept</p>"),
        );
        let content = BlogContent::new(posts, Utc::now());

        let generator = StaticGenerator::new(&app).unwrap();
        generator.generate(&content).unwrap();

        assert!(!stale.exists());
        assert!(app
            .public_dir
            .join("thoughts")
            .join("keptpost")
            .join("index.html")
            .exists());
    }

    #[test]
    fn test_static_assets_are_copied() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let static_dir = dir.path().join("static");
        fs::create_dir_all(static_dir.join("pics")).unwrap();
        fs::write(static_dir.join("style.css"), "body {}").unwrap();
        fs::write(static_dir.join("pics").join("me.jpg"), "jpg").unwrap();

        let generator = StaticGenerator::new(&app).unwrap();
        generator.generate(&BlogContent::default()).unwrap();

        assert!(app.public_dir.join("style.css").exists());
        assert!(app.public_dir.join("pics").join("me.jpg").exists());
    }
}
