//! Document store: owns the single in-memory [`Document`] and exposes
//! every mutation the management surface needs, plus snapshot
//! serialization for persistence, export, and import.
//!
//! Mutations are synchronous and run to completion; the store carries a
//! version counter so callers can detect that a re-render is due. The
//! snapshot format is JSON with the top-level sections `pageInfo`,
//! `styles`, and `contentBlocks`; importing merges those sections
//! shallowly over the current document rather than replacing it.

use serde::Deserialize;

use crate::model::{BlockContent, ContentBlock, Document, PageMeta, StyleMap, ThemeConfig};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Partial update applied to a block's top-level fields. `content` and
/// `style` replace the previous value wholesale; there is no deep
/// merge of payloads or style maps.
#[derive(Debug, Clone, Default)]
pub struct BlockPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub content: Option<BlockContent>,
    pub style: Option<StyleMap>,
}

/// Top-level snapshot sections, each optional so an import can carry
/// any subset of the document.
#[derive(Deserialize)]
struct PartialSnapshot {
    #[serde(rename = "pageInfo")]
    meta: Option<PageMeta>,
    #[serde(rename = "styles")]
    theme: Option<ThemeConfig>,
    #[serde(rename = "contentBlocks")]
    blocks: Option<Vec<ContentBlock>>,
}

pub struct DocumentStore {
    document: Document,
    version: u64,
}

impl DocumentStore {
    pub fn new(document: Document) -> Self {
        DocumentStore {
            document,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Incremented on every change; lets callers detect that the page
    /// needs re-rendering without diffing documents.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Appends the block. Id collisions are not checked here; callers
    /// validate uniqueness before inserting.
    pub fn add_block(&mut self, block: ContentBlock) {
        self.document.blocks.push(block);
        self.touch();
    }

    /// Removes the first block with a matching id. Absent ids are a
    /// no-op, not an error.
    pub fn remove_block(&mut self, id: &str) -> bool {
        let Some(index) = self.document.blocks.iter().position(|b| b.id == id) else {
            return false;
        };
        self.document.blocks.remove(index);
        self.touch();
        true
    }

    /// Shallow-merges the patch into the matching block. No-op if the
    /// id is absent.
    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> bool {
        let Some(block) = self.document.blocks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        if let Some(enabled) = patch.enabled {
            block.enabled = enabled;
        }
        if let Some(title) = patch.title {
            block.title = Some(title);
        }
        if let Some(content) = patch.content {
            block.content = content;
        }
        if let Some(style) = patch.style {
            block.style = style;
        }
        self.touch();
        true
    }

    /// Flips the block's `enabled` flag. No-op if the id is absent.
    pub fn toggle_block(&mut self, id: &str) -> bool {
        let Some(block) = self.document.blocks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        block.enabled = !block.enabled;
        self.touch();
        true
    }

    /// Replaces the block list with the blocks named by `ids`, in that
    /// order. Destructive: blocks whose id is not listed are dropped,
    /// and an id listed twice duplicates its block.
    pub fn reorder(&mut self, ids: &[String]) {
        let reordered: Vec<ContentBlock> = ids
            .iter()
            .filter_map(|id| self.document.blocks.iter().find(|b| &b.id == id).cloned())
            .collect();
        self.document.blocks = reordered;
        self.touch();
    }

    pub fn set_page_title(&mut self, title: String) {
        self.document.meta.title = title;
        self.touch();
    }

    pub fn set_page_language(&mut self, language: String) {
        self.document.meta.language = language;
        self.touch();
    }

    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.document.theme = theme;
        self.touch();
    }

    /// Complete textual snapshot of the document, human-readable and
    /// sufficient for exact reconstruction.
    pub fn serialize(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Parses a snapshot and merges its top-level sections over the
    /// current document. Sections absent from the snapshot keep their
    /// current value. A parse failure leaves the document untouched.
    pub fn deserialize(&mut self, text: &str) -> Result<(), SnapshotError> {
        let snapshot: PartialSnapshot = serde_json::from_str(text)?;
        if let Some(meta) = snapshot.meta {
            self.document.meta = meta;
        }
        if let Some(theme) = snapshot.theme {
            self.document.theme = theme;
        }
        if let Some(blocks) = snapshot.blocks {
            self.document.blocks = blocks;
        }
        self.touch();
        Ok(())
    }
}
