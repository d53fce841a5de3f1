//! Block-to-HTML rendering

mod html;
mod inline;

pub use html::render_blocks;
pub use inline::{escape_html, plain_text, render_rich_text};
