//! Block tree to HTML conversion
//!
//! A pure walk over a materialized block tree: identical trees always
//! serialize to identical fragments, and sibling order is rendering order.
//! Consecutive list items of the same kind are grouped under one `<ul>` or
//! `<ol>`; nested children render inside their parent `<li>`.

use serde_json::Value;

use super::inline::{escape_html, plain_text, render_rich_text};
use crate::notion::tree::BlockNode;
use crate::notion::types::{BlockKind, ImagePayload, RichText, TablePayload, TableRowPayload};

/// Convert an ordered block tree into an HTML fragment
pub fn render_blocks(nodes: &[BlockNode]) -> String {
    let mut out = String::new();
    let mut idx = 0;

    while idx < nodes.len() {
        match list_kind(&nodes[idx].block.kind) {
            Some(kind) => {
                // Maximal run of same-kind siblings becomes one list element
                let start = idx;
                while idx < nodes.len() && list_kind(&nodes[idx].block.kind) == Some(kind) {
                    idx += 1;
                }
                render_list(&mut out, kind, &nodes[start..idx]);
            }
            None => {
                render_block(&mut out, &nodes[idx]);
                idx += 1;
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Bulleted => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

fn list_kind(kind: &BlockKind) -> Option<ListKind> {
    match kind {
        BlockKind::BulletedListItem(_) => Some(ListKind::Bulleted),
        BlockKind::NumberedListItem(_) => Some(ListKind::Numbered),
        _ => None,
    }
}

fn item_runs(kind: &BlockKind) -> &[RichText] {
    match kind {
        BlockKind::BulletedListItem(p) | BlockKind::NumberedListItem(p) => &p.rich_text,
        _ => &[],
    }
}

/// Wrap a run of sibling list items in a single list element
fn render_list(out: &mut String, kind: ListKind, items: &[BlockNode]) {
    out.push('<');
    out.push_str(kind.tag());
    out.push('>');

    for item in items {
        out.push_str("<li>");
        out.push_str(&render_rich_text(item_runs(&item.block.kind)));
        // Nested children land inside the same <li>, producing a nested
        // list rather than a sibling one
        if !item.children.is_empty() {
            out.push_str(&render_blocks(&item.children));
        }
        out.push_str("</li>");
    }

    out.push_str("</");
    out.push_str(kind.tag());
    out.push('>');
}

fn render_block(out: &mut String, node: &BlockNode) {
    match &node.block.kind {
        BlockKind::Paragraph(p) => {
            let text = render_rich_text(&p.rich_text);
            // Empty paragraphs are vertical spacing in the editor; drop them
            if !text.trim().is_empty() {
                out.push_str(&format!("<p>{}</p>", text));
            }
        }
        BlockKind::Heading1(p) => {
            out.push_str(&format!("<h1>{}</h1>", render_rich_text(&p.rich_text)));
        }
        BlockKind::Heading2(p) => {
            out.push_str(&format!("<h2>{}</h2>", render_rich_text(&p.rich_text)));
        }
        BlockKind::Heading3(p) => {
            out.push_str(&format!("<h3>{}</h3>", render_rich_text(&p.rich_text)));
        }
        BlockKind::Quote(p) => {
            out.push_str(&format!(
                "<blockquote><p>{}</p></blockquote>",
                render_rich_text(&p.rich_text)
            ));
        }
        BlockKind::Divider => out.push_str("<hr>"),
        BlockKind::Image(image) => render_image(out, image),
        BlockKind::Table(table) => render_table(out, table, &node.children),
        // Rows only carry meaning inside a table
        BlockKind::TableRow(_) => {}
        // Grouped into lists by render_blocks
        BlockKind::BulletedListItem(_) | BlockKind::NumberedListItem(_) => {}
        BlockKind::Unknown(payload) => render_unknown(out, payload),
    }
}

fn render_image(out: &mut String, image: &ImagePayload) {
    // No resolvable source, no output
    let Some(url) = image.url() else {
        return;
    };
    let alt = plain_text(&image.caption);
    out.push_str(&format!(
        r#"<img src="{}" alt="{}" />"#,
        escape_html(url),
        escape_html(&alt)
    ));
}

/// Serialize a table. With column-header mode on, the first row renders
/// inside `<thead>` and the rest share one `<tbody>`; with row-header mode
/// on, the first cell of every row is a `<th>`.
fn render_table(out: &mut String, table: &TablePayload, children: &[BlockNode]) {
    let rows: Vec<&TableRowPayload> = children
        .iter()
        .filter_map(|node| match &node.block.kind {
            BlockKind::TableRow(row) => Some(row),
            _ => None,
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    out.push_str("<table>");

    let body_start = usize::from(table.has_column_header);
    let last = rows.len() - 1;

    for (i, row) in rows.iter().enumerate() {
        let header_row = table.has_column_header && i == 0;

        if header_row {
            out.push_str("<thead>");
        } else if i == body_start {
            out.push_str("<tbody>");
        }

        out.push_str("<tr>");
        for (col, cell) in row.cells.iter().enumerate() {
            let header_cell = header_row || (table.has_row_header && col == 0);
            let tag = if header_cell { "th" } else { "td" };
            out.push_str(&format!("<{}>{}</{}>", tag, render_rich_text(cell), tag));
        }
        out.push_str("</tr>");

        if header_row {
            out.push_str("</thead>");
        } else if i == last {
            out.push_str("</tbody>");
        }
    }

    out.push_str("</table>");
}

/// Best-effort fallback for unrecognized kinds: a payload that exposes a
/// rich-text sequence renders as a plain paragraph, anything else
/// contributes nothing
fn render_unknown(out: &mut String, payload: &Value) {
    let Some(values) = payload.get("rich_text").and_then(|v| v.as_array()) else {
        return;
    };

    let runs: Vec<RichText> = values
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect();

    let text = render_rich_text(&runs);
    if !text.trim().is_empty() {
        out.push_str(&format!("<p>{}</p>", text));
    }
}
