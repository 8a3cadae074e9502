//! Pure rendering: maps a [`Document`](crate::model::Document) to an
//! ordered list of display nodes. Frontends (the Dioxus desktop UI,
//! the HTML writer in [`html`]) consume the same [`Page`] structure,
//! so rendering the same document twice yields identical output.
//!
//! Re-rendering is total: callers rebuild the page from scratch after
//! every mutation instead of patching previous output.

pub mod html;

use crate::model::{BlockContent, BlockVariant, ContentBlock, Document, StyleMap, ThemeConfig};

/// Inline style applied to header blocks, which take the full viewport
/// and center their content regardless of list position.
pub const FULL_VIEWPORT_STYLE: &str =
    "display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 100vh;";

/// One enabled block, prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBlock {
    pub id: String,
    /// Present only when the block carries a non-blank title.
    pub title: Option<String>,
    /// Applied opaquely by the frontend; keys keep the snapshot's
    /// camelCase spelling.
    pub style: StyleMap,
    pub body: RenderBody,
    /// Header blocks render centered over the full viewport.
    pub full_viewport: bool,
}

/// Variant-specific display content, blank-safe where the model allows
/// blanks.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBody {
    Header {
        greeting: Option<String>,
        name: Option<String>,
        subtitle: Option<String>,
    },
    Text {
        text: String,
    },
    List {
        items: Vec<String>,
    },
    /// Raw markup injected verbatim, without escaping. This is a trust
    /// boundary: only operator-authored content belongs here.
    Custom {
        markup: String,
    },
}

/// The rendered page: resolved title, theme variables, and display
/// blocks in final order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub theme: ThemeConfig,
    pub blocks: Vec<RenderBlock>,
}

/// Render the document. Disabled blocks are skipped entirely; header
/// blocks are hoisted to the front (keeping their relative order) and
/// flagged for full-viewport placement; everything else keeps document
/// order.
pub fn render(document: &Document) -> Page {
    let mut headers = Vec::new();
    let mut rest = Vec::new();

    for block in document.blocks.iter().filter(|b| b.enabled) {
        match block.variant() {
            BlockVariant::Header => headers.push(render_block(block, true)),
            _ => rest.push(render_block(block, false)),
        }
    }
    headers.extend(rest);

    Page {
        title: document.meta.title.clone(),
        theme: document.theme.clone(),
        blocks: headers,
    }
}

fn render_block(block: &ContentBlock, full_viewport: bool) -> RenderBlock {
    let body = match &block.content {
        BlockContent::Header {
            greeting,
            name,
            subtitle,
        } => RenderBody::Header {
            greeting: non_blank(greeting),
            name: non_blank(name),
            subtitle: non_blank(subtitle),
        },
        BlockContent::Text { text } => RenderBody::Text { text: text.clone() },
        BlockContent::List { items } => RenderBody::List {
            items: items.clone(),
        },
        BlockContent::Custom { markup } => RenderBody::Custom {
            markup: markup.clone(),
        },
    };

    RenderBlock {
        id: block.id.clone(),
        title: block.title.as_deref().and_then(non_blank),
        style: block.style.clone(),
        body,
        full_viewport,
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
