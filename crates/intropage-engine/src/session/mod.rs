//! Management session: the mediator between editing intents and the
//! document store. Edits arrive as explicit request objects (no modal
//! prompts), destructive operations require an explicit confirmation
//! signal, and every mutation ends with a full re-render pushed into
//! the configured [`RenderSink`].
//!
//! Parse failures on import/load are converted to [`SessionError`]
//! here and never crash the render loop; the document is left
//! unchanged when that happens.

use crate::model::{BlockContent, BlockError, ContentBlock, ThemeConfig};
use crate::render::{self, Page};
use crate::storage::{LANG_KEY, Storage, USER_CONFIG_KEY};
use crate::store::{BlockPatch, DocumentStore, SnapshotError};

/// Fixed name of the exported snapshot artifact.
pub const EXPORT_FILE_NAME: &str = "intropage-config.json";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Block(#[from] BlockError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("block id must not be empty")]
    EmptyId,
}

/// Explicit confirmation signal for destructive operations. Callers
/// collect it from the user however they like; the session only acts
/// on `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Visibility of the management panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

/// Receives the freshly rendered page after every mutation. Any
/// `FnMut(&Page)` closure qualifies; headless sessions keep the
/// default sink, which drops renders.
pub trait RenderSink {
    fn present(&mut self, page: &Page);
}

impl<F: FnMut(&Page)> RenderSink for F {
    fn present(&mut self, page: &Page) {
        self(page)
    }
}

/// Intent to add a new block. The variant arrives as a string from the
/// UI and is validated against the closed set before anything is
/// constructed.
#[derive(Debug, Clone)]
pub struct AddBlockRequest {
    pub variant: String,
    pub id: String,
    pub title: Option<String>,
}

/// Per-field content updates for one block variant. Fields left `None`
/// keep their current value.
#[derive(Debug, Clone)]
pub enum ContentEdit {
    Header {
        greeting: Option<String>,
        name: Option<String>,
        subtitle: Option<String>,
    },
    Text {
        text: Option<String>,
    },
    List {
        items: Option<Vec<String>>,
    },
    Custom {
        markup: Option<String>,
    },
}

/// Intent to edit an existing block.
#[derive(Debug, Clone, Default)]
pub struct EditRequest {
    pub title: Option<String>,
    pub content: Option<ContentEdit>,
}

/// The exported snapshot, ready to be written wherever the caller
/// delivers downloads.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

pub struct ManagementSession<S: Storage> {
    store: DocumentStore,
    storage: S,
    panel: PanelState,
    sink: Box<dyn RenderSink>,
}

impl<S: Storage> ManagementSession<S> {
    pub fn new(document: crate::model::Document, storage: S) -> Self {
        ManagementSession {
            store: DocumentStore::new(document),
            storage,
            panel: PanelState::Hidden,
            sink: Box::new(|_: &Page| {}),
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = sink;
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Render the current document from scratch.
    pub fn page(&self) -> Page {
        render::render(self.store.document())
    }

    fn present(&mut self) {
        let page = self.page();
        self.sink.present(&page);
    }

    // Panel state machine: Hidden ⇄ Visible.

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn open_panel(&mut self) {
        self.panel = PanelState::Visible;
    }

    pub fn close_panel(&mut self) {
        self.panel = PanelState::Hidden;
    }

    pub fn toggle_panel(&mut self) {
        self.panel = match self.panel {
            PanelState::Hidden => PanelState::Visible,
            PanelState::Visible => PanelState::Hidden,
        };
    }

    /// Validate the request and append a block with variant-appropriate
    /// defaults. Ids are required to be non-empty but not checked for
    /// uniqueness; see [`DocumentStore::add_block`].
    pub fn add_block(&mut self, request: AddBlockRequest) -> Result<(), SessionError> {
        if request.id.trim().is_empty() {
            return Err(SessionError::EmptyId);
        }
        let variant = request.variant.trim().parse()?;
        let title = request.title.filter(|t| !t.is_empty());
        self.store
            .add_block(ContentBlock::with_defaults(variant, request.id, title));
        self.present();
        Ok(())
    }

    /// Apply per-field edits to a block. Returns false without touching
    /// anything when the id is absent or the edit targets a different
    /// variant than the block carries.
    pub fn edit_block(&mut self, id: &str, request: EditRequest) -> bool {
        let Some(block) = self.store.document().block(id) else {
            return false;
        };

        let content = match request.content {
            None => None,
            Some(edit) => match merged_content(&block.content, edit) {
                Some(content) => Some(content),
                None => return false,
            },
        };

        let patch = BlockPatch {
            title: request.title,
            content,
            ..BlockPatch::default()
        };
        let changed = self.store.update_block(id, patch);
        if changed {
            self.present();
        }
        changed
    }

    /// Remove a block, but only on an explicit confirmation.
    pub fn delete_block(&mut self, id: &str, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Confirmed {
            return false;
        }
        let removed = self.store.remove_block(id);
        self.present();
        removed
    }

    pub fn toggle_block(&mut self, id: &str) -> bool {
        let toggled = self.store.toggle_block(id);
        if toggled {
            self.present();
        }
        toggled
    }

    pub fn reorder(&mut self, ids: &[String]) {
        self.store.reorder(ids);
        self.present();
    }

    pub fn set_page_title(&mut self, title: impl Into<String>) {
        self.store.set_page_title(title.into());
        self.present();
    }

    pub fn set_page_language(&mut self, language: impl Into<String>) {
        self.store.set_page_language(language.into());
        self.present();
    }

    /// Theme values are applied opaquely; obviously bogus color values
    /// only earn a warning, matching how the page treats them.
    pub fn set_theme(&mut self, theme: ThemeConfig) {
        for value in [
            &theme.primary_color,
            &theme.highlight_color,
            &theme.info_text_color,
        ] {
            if !ThemeConfig::looks_like_color(value) {
                log::warn!("theme value {value:?} does not look like a color");
            }
        }
        self.store.set_theme(theme);
        self.present();
    }

    /// Persist the full snapshot under the fixed storage key.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let snapshot = self.store.serialize()?;
        self.storage.set(USER_CONFIG_KEY, &snapshot);
        Ok(())
    }

    /// Restore a previously saved snapshot. An absent key is silently
    /// ignored; a malformed one is an error and leaves the document
    /// unchanged.
    pub fn load(&mut self) -> Result<bool, SessionError> {
        let Some(snapshot) = self.storage.get(USER_CONFIG_KEY) else {
            return Ok(false);
        };
        self.store.deserialize(&snapshot)?;
        self.present();
        Ok(true)
    }

    pub fn export(&self) -> Result<ExportArtifact, SessionError> {
        Ok(ExportArtifact {
            file_name: EXPORT_FILE_NAME.to_string(),
            contents: self.store.serialize()?,
        })
    }

    /// Merge an imported snapshot over the current document, but only
    /// on an explicit confirmation. Returns whether anything was
    /// applied.
    pub fn import(&mut self, text: &str, confirmation: Confirmation) -> Result<bool, SessionError> {
        if confirmation != Confirmation::Confirmed {
            return Ok(false);
        }
        self.store.deserialize(text)?;
        self.present();
        Ok(true)
    }

    pub fn persist_language(&mut self, lang: &str) {
        self.storage.set(LANG_KEY, lang);
    }

    pub fn saved_language(&self) -> Option<String> {
        self.storage.get(LANG_KEY)
    }
}

/// Merge per-field edits into the block's current payload. `None` when
/// the edit targets a different variant.
fn merged_content(current: &BlockContent, edit: ContentEdit) -> Option<BlockContent> {
    match (current, edit) {
        (
            BlockContent::Header {
                greeting,
                name,
                subtitle,
            },
            ContentEdit::Header {
                greeting: new_greeting,
                name: new_name,
                subtitle: new_subtitle,
            },
        ) => Some(BlockContent::Header {
            greeting: new_greeting.unwrap_or_else(|| greeting.clone()),
            name: new_name.unwrap_or_else(|| name.clone()),
            subtitle: new_subtitle.unwrap_or_else(|| subtitle.clone()),
        }),
        (BlockContent::Text { text }, ContentEdit::Text { text: new_text }) => {
            Some(BlockContent::Text {
                text: new_text.unwrap_or_else(|| text.clone()),
            })
        }
        (BlockContent::List { items }, ContentEdit::List { items: new_items }) => {
            Some(BlockContent::List {
                items: new_items.unwrap_or_else(|| items.clone()),
            })
        }
        (BlockContent::Custom { markup }, ContentEdit::Custom { markup: new_markup }) => {
            Some(BlockContent::Custom {
                markup: new_markup.unwrap_or_else(|| markup.clone()),
            })
        }
        _ => None,
    }
}
