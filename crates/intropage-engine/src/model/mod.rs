pub mod block;
pub mod document;

pub use block::{
    BlockContent, BlockError, BlockVariant, ContentBlock, StyleMap, suggest_block_id,
};
pub use document::{Document, PageMeta, ThemeConfig};
