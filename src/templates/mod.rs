//! Built-in page templates using the Tera template engine
//!
//! The article and index shells are embedded in the binary; there is no
//! on-disk theme to install.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::LinkItem;

/// Template renderer with the embedded page shells
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies are already HTML; nothing here should be escaped again
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("article.html", include_str!("press/article.html")),
            ("index.html", include_str!("press/index.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide data shared by every page
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub author: String,
    pub url: String,
    pub thoughts_dir: String,
    pub menu: Vec<LinkItem>,
    pub contact_links: Vec<LinkItem>,
}

/// One article page
#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub title: String,
    pub date: String,
    pub content: String,
}

/// One entry on the section index
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntryData {
    pub title: String,
    pub href: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "jordy rodriguez".to_string(),
            author: "Jordy Rodriguez".to_string(),
            url: "https://example.org".to_string(),
            thoughts_dir: "thoughts".to_string(),
            menu: vec![LinkItem {
                name: "thoughts".to_string(),
                path: "/thoughts".to_string(),
            }],
            contact_links: vec![LinkItem {
                name: "github".to_string(),
                path: "https://github.com/example".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_article() {
        let renderer = TemplateRenderer::new().unwrap();
        let article = ArticleData {
            title: "A Post".to_string(),
            date: "July 4, 2025".to_string(),
            content: "<p>Hello <strong>there</strong></p>".to_string(),
        };

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("post", &article);

        let html = renderer.render("article.html", &context).unwrap();
        assert!(html.contains("<title>A Post - jordy rodriguez</title>"));
        assert!(html.contains("<h1>A Post</h1>"));
        assert!(html.contains("July 4, 2025"));
        // Content must land unescaped
        assert!(html.contains("<p>Hello <strong>there</strong></p>"));
        assert!(html.contains(r#"<a href="/thoughts/" class="back-link">"#));
        assert!(html.contains("https://github.com/example"));
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let entries = vec![
            IndexEntryData {
                title: "First".to_string(),
                href: "/thoughts/first/".to_string(),
                date: "Jul 4, 2025".to_string(),
            },
            IndexEntryData {
                title: "Second".to_string(),
                href: "/thoughts/second/".to_string(),
                date: "Jun 1, 2025".to_string(),
            },
        ];

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("posts", &entries);

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains(r#"<a href="/thoughts/first/">First</a>"#));
        assert!(html.contains(r#"<a href="/thoughts/second/">Second</a>"#));
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }
}
