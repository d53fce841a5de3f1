//! Inline run formatting

use crate::notion::types::RichText;

/// Render a rich-text sequence to inline HTML, preserving run order.
///
/// Style wraps nest in a fixed order (strong outermost, then em, then code)
/// no matter which combination of flags is set; a hyperlink wraps the fully
/// styled text. Runs are concatenated with no separator.
pub fn render_rich_text(runs: &[RichText]) -> String {
    let mut out = String::new();

    for run in runs {
        let mut text = escape_html(&run.plain_text);

        if run.annotations.code {
            text = format!("<code>{}</code>", text);
        }
        if run.annotations.italic {
            text = format!("<em>{}</em>", text);
        }
        if run.annotations.bold {
            text = format!("<strong>{}</strong>", text);
        }

        if let Some(href) = &run.href {
            text = format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(href),
                text
            );
        }

        out.push_str(&text);
    }

    out
}

/// Flatten a rich-text sequence to unstyled text
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|r| r.plain_text.as_str()).collect()
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::types::Annotations;

    fn run(text: &str) -> RichText {
        RichText {
            plain_text: text.to_string(),
            ..RichText::default()
        }
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render_rich_text(&[]), "");
    }

    #[test]
    fn test_plain_runs_concatenate_in_order() {
        let runs = vec![run("one "), run("two")];
        assert_eq!(render_rich_text(&runs), "one two");
    }

    #[test]
    fn test_nesting_order_is_fixed() {
        let mut styled = run("text");
        styled.annotations = Annotations {
            bold: true,
            italic: true,
            code: true,
            ..Annotations::default()
        };
        assert_eq!(
            render_rich_text(&[styled]),
            "<strong><em><code>text</code></em></strong>"
        );
    }

    #[test]
    fn test_single_styles() {
        let mut bold = run("b");
        bold.annotations.bold = true;
        assert_eq!(render_rich_text(&[bold]), "<strong>b</strong>");

        let mut italic = run("i");
        italic.annotations.italic = true;
        assert_eq!(render_rich_text(&[italic]), "<em>i</em>");

        let mut code = run("c");
        code.annotations.code = true;
        assert_eq!(render_rich_text(&[code]), "<code>c</code>");
    }

    #[test]
    fn test_link_wraps_styled_text() {
        let mut linked = run("docs");
        linked.annotations.bold = true;
        linked.href = Some("https://example.com".to_string());
        assert_eq!(
            render_rich_text(&[linked]),
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer"><strong>docs</strong></a>"#
        );
    }

    #[test]
    fn test_text_is_escaped_before_styling() {
        let mut styled = run("a < b & c");
        styled.annotations.code = true;
        assert_eq!(
            render_rich_text(&[styled]),
            "<code>a &lt; b &amp; c</code>"
        );
    }

    #[test]
    fn test_href_is_escaped() {
        let mut linked = run("x");
        linked.href = Some(r#"https://example.com/?a="1"&b=2"#.to_string());
        let html = render_rich_text(&[linked]);
        assert!(html.contains("href=\"https://example.com/?a=&quot;1&quot;&amp;b=2\""));
    }

    #[test]
    fn test_plain_text_flattens() {
        let mut styled = run("styled");
        styled.annotations.bold = true;
        let runs = vec![run("pre "), styled];
        assert_eq!(plain_text(&runs), "pre styled");
    }
}
