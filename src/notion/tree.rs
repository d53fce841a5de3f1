//! Materializing nested block trees
//!
//! The children endpoint returns one level at a time, so rendering a post
//! splits into two stages: this module does the fallible fetching, and
//! `render` consumes the finished tree as a pure pass. A failed child fetch
//! degrades to an empty child list so one missing branch cannot sink the
//! whole post.

use async_trait::async_trait;

use super::client::{NotionClient, NotionError};
use super::types::{Block, BlockKind};

/// A block together with its fetched children
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub block: Block,
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    /// A node with no children
    pub fn leaf(block: Block) -> Self {
        Self {
            block,
            children: Vec::new(),
        }
    }
}

/// Anything that can list the child blocks of a block
#[async_trait]
pub trait BlockSource {
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError>;
}

#[async_trait]
impl BlockSource for NotionClient {
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        self.list_blocks(block_id).await
    }
}

/// Kinds whose children feed into rendering
fn needs_children(kind: &BlockKind) -> bool {
    matches!(
        kind,
        BlockKind::BulletedListItem(_) | BlockKind::NumberedListItem(_) | BlockKind::Table(_)
    )
}

/// Build the nested tree for `blocks`, fetching children depth-first.
///
/// Sibling fetches are sequential and in block order, so the resulting tree
/// (and therefore the rendered output) is deterministic.
pub async fn materialize<S>(source: &S, blocks: Vec<Block>) -> Vec<BlockNode>
where
    S: BlockSource + Sync,
{
    let mut nodes = Vec::with_capacity(blocks.len());

    for block in blocks {
        let children = if block.has_children && needs_children(&block.kind) {
            match source.list_children(&block.id).await {
                Ok(children) => Box::pin(materialize(source, children)).await,
                Err(err) => {
                    tracing::warn!("Failed to fetch children of block {}: {}", block.id, err);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        nodes.push(BlockNode { block, children });
    }

    nodes
}
