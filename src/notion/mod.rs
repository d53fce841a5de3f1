//! Notion content source - typed block model, API client, and tree building

pub mod client;
pub mod tree;
pub mod types;

pub use client::{NotionClient, NotionError};
pub use tree::{materialize, BlockNode, BlockSource};
