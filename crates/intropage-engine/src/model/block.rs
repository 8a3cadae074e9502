use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Open map of presentation hints (`backgroundColor`, `padding`, ...)
/// applied opaquely by the renderer. Ordered so rendered output is
/// deterministic for a given document.
pub type StyleMap = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("unknown block variant: {0:?}")]
    InvalidVariant(String),
}

/// The closed set of content block types. Not extensible at runtime;
/// anything else is rejected at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockVariant {
    Header,
    Text,
    List,
    Custom,
}

impl BlockVariant {
    pub const ALL: [BlockVariant; 4] = [
        BlockVariant::Header,
        BlockVariant::Text,
        BlockVariant::List,
        BlockVariant::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockVariant::Header => "header",
            BlockVariant::Text => "text",
            BlockVariant::List => "list",
            BlockVariant::Custom => "custom",
        }
    }
}

impl FromStr for BlockVariant {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(BlockVariant::Header),
            "text" => Ok(BlockVariant::Text),
            "list" => Ok(BlockVariant::List),
            "custom" => Ok(BlockVariant::Custom),
            other => Err(BlockError::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for BlockVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload. Serialized adjacently tagged so the
/// snapshot carries `"variant": "text", "content": { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", content = "content", rename_all = "lowercase")]
pub enum BlockContent {
    Header {
        #[serde(default)]
        greeting: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        subtitle: String,
    },
    Text {
        #[serde(default)]
        text: String,
    },
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    Custom {
        /// Raw markup passed through to the presentation layer without
        /// escaping. Operator-authored content only; imported snapshots
        /// deserve a review before trusting this field.
        #[serde(default)]
        markup: String,
    },
}

impl BlockContent {
    pub fn variant(&self) -> BlockVariant {
        match self {
            BlockContent::Header { .. } => BlockVariant::Header,
            BlockContent::Text { .. } => BlockVariant::Text,
            BlockContent::List { .. } => BlockVariant::List,
            BlockContent::Custom { .. } => BlockVariant::Custom,
        }
    }

    /// Placeholder payload for a freshly added block.
    pub fn placeholder(variant: BlockVariant) -> Self {
        match variant {
            BlockVariant::Header => BlockContent::Header {
                greeting: "Enter a greeting".to_string(),
                name: "Enter your name".to_string(),
                subtitle: "Enter a subtitle".to_string(),
            },
            BlockVariant::Text => BlockContent::Text {
                text: "Enter your text".to_string(),
            },
            BlockVariant::List => BlockContent::List {
                items: vec![
                    "Enter item 1".to_string(),
                    "Enter item 2".to_string(),
                    "Enter item 3".to_string(),
                ],
            },
            BlockVariant::Custom => BlockContent::Custom {
                markup: r#"<p class="info-text">Enter your markup</p>"#.to_string(),
            },
        }
    }
}

fn enabled_default() -> bool {
    true
}

/// A single self-contained unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Unique within the document. Uniqueness is the caller's job:
    /// `DocumentStore::add_block` does not check for collisions.
    pub id: String,
    /// Disabled blocks stay in the model but are skipped by the renderer.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub content: BlockContent,
    #[serde(default)]
    pub style: StyleMap,
}

impl ContentBlock {
    /// Block with variant-appropriate placeholder content and the
    /// default glass-card styling.
    pub fn with_defaults(
        variant: BlockVariant,
        id: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        ContentBlock {
            id: id.into(),
            enabled: true,
            title,
            content: BlockContent::placeholder(variant),
            style: default_style(variant),
        }
    }

    pub fn variant(&self) -> BlockVariant {
        self.content.variant()
    }
}

fn default_style(variant: BlockVariant) -> StyleMap {
    let mut style = StyleMap::new();
    style.insert(
        "backgroundColor".to_string(),
        "rgba(255, 255, 255, 0.1)".to_string(),
    );
    style.insert("padding".to_string(), "20px".to_string());
    style.insert("borderRadius".to_string(), "24px".to_string());
    if variant == BlockVariant::Header {
        style.insert("textAlign".to_string(), "center".to_string());
    }
    style
}

/// Candidate id for a new block, unlikely to collide with anything
/// already in the document.
pub fn suggest_block_id() -> String {
    format!("block-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn variant_parsing_accepts_the_closed_set() {
        for variant in BlockVariant::ALL {
            assert_eq!(variant.as_str().parse::<BlockVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn variant_parsing_rejects_unknown_tags() {
        let err = "banner".parse::<BlockVariant>().unwrap_err();
        assert!(matches!(err, BlockError::InvalidVariant(tag) if tag == "banner"));
    }

    #[test]
    fn defaults_are_placeholder_valued_and_enabled() {
        let block = ContentBlock::with_defaults(BlockVariant::Text, "about", None);
        assert!(block.enabled);
        assert_eq!(block.variant(), BlockVariant::Text);
        let BlockContent::Text { text } = &block.content else {
            panic!("expected text payload");
        };
        assert!(!text.is_empty());
        assert!(!block.style.is_empty());
    }

    #[test]
    fn block_serializes_with_variant_tag_and_content_payload() {
        let block = ContentBlock {
            id: "about".to_string(),
            enabled: true,
            title: Some("About".to_string()),
            content: BlockContent::Text {
                text: "hi".to_string(),
            },
            style: StyleMap::new(),
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "about",
                "enabled": true,
                "title": "About",
                "variant": "text",
                "content": { "text": "hi" },
                "style": {}
            })
        );
    }

    #[test]
    fn missing_enabled_defaults_to_true() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": "about",
            "variant": "text",
            "content": { "text": "hi" }
        }))
        .unwrap();
        assert!(block.enabled);
        assert_eq!(block.title, None);
    }

    #[test]
    fn unknown_variant_fails_to_deserialize() {
        let result: Result<ContentBlock, _> = serde_json::from_value(json!({
            "id": "x",
            "variant": "banner",
            "content": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn header_fields_are_individually_optional() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": "hero",
            "variant": "header",
            "content": { "name": "Mika" }
        }))
        .unwrap();
        let BlockContent::Header {
            greeting,
            name,
            subtitle,
        } = &block.content
        else {
            panic!("expected header payload");
        };
        assert_eq!(greeting, "");
        assert_eq!(name, "Mika");
        assert_eq!(subtitle, "");
    }

    #[test]
    fn suggested_ids_do_not_repeat() {
        assert_ne!(suggest_block_id(), suggest_block_id());
    }
}
