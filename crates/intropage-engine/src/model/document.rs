use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::block::{BlockContent, BlockVariant, ContentBlock};

/// Page-level metadata, serialized as `pageInfo` in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub language: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        PageMeta {
            title: "Enter a page title".to_string(),
            language: crate::i18n::DEFAULT_LANG.to_string(),
        }
    }
}

/// Theme variables, serialized as `styles` in the snapshot and consumed
/// by the presentation layer as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub background_image: String,
    pub primary_color: String,
    pub highlight_color: String,
    pub info_text_color: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background_image: "assets/background.jpeg".to_string(),
            primary_color: "#a6deff".to_string(),
            highlight_color: "#dba6ff".to_string(),
            info_text_color: "#ffa6d3".to_string(),
            font_family: "KleeOne-Regular".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Named variables for the presentation layer, in declaration order.
    pub fn css_custom_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "--background-image",
                format!("url(\"{}\")", self.background_image),
            ),
            ("--primary-color", self.primary_color.clone()),
            ("--highlight-color", self.highlight_color.clone()),
            ("--info-text-color", self.info_text_color.clone()),
            ("--font-family", self.font_family.clone()),
        ]
    }

    /// Loose shape check for values coming out of the management UI.
    /// Theme values are applied opaquely either way; this only backs a
    /// warning for obviously bogus input.
    pub fn looks_like_color(value: &str) -> bool {
        static COLOR: OnceLock<Regex> = OnceLock::new();
        let re = COLOR.get_or_init(|| {
            Regex::new(r"^(#[0-9a-fA-F]{3}([0-9a-fA-F]{3})?([0-9a-fA-F]{2})?|rgba?\(.+\)|hsla?\(.+\))$")
                .expect("color pattern compiles")
        });
        re.is_match(value.trim())
    }
}

/// The single in-memory document: metadata, theme, and the ordered
/// block list. Block order is display order, except that the renderer
/// hoists header blocks to full-viewport placement up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "pageInfo")]
    pub meta: PageMeta,
    #[serde(rename = "styles")]
    pub theme: ThemeConfig,
    #[serde(rename = "contentBlocks", default)]
    pub blocks: Vec<ContentBlock>,
}

impl Document {
    /// The built-in starter page: one block of each flavor, all
    /// placeholder-valued, ready to be edited in place.
    pub fn placeholder() -> Self {
        let blocks = vec![
            ContentBlock::with_defaults(BlockVariant::Header, "header", Some("Welcome".into())),
            ContentBlock::with_defaults(BlockVariant::Text, "about", Some("🌟 About Me".into())),
            ContentBlock {
                content: BlockContent::List {
                    items: vec![
                        "Enter skill 1".to_string(),
                        "Enter skill 2".to_string(),
                        "Enter skill 3".to_string(),
                    ],
                },
                ..ContentBlock::with_defaults(BlockVariant::List, "skills", Some("💼 Skills".into()))
            },
            ContentBlock::with_defaults(BlockVariant::Text, "hobbies", Some("🎮 Hobbies".into())),
            ContentBlock {
                content: BlockContent::Custom {
                    markup: concat!(
                        r#"<p class="info-text">Enter your contact details</p>"#,
                        "\n",
                        r#"<p class="info-text">Email: <span class="highlight">you@example.com</span></p>"#,
                    )
                    .to_string(),
                },
                ..ContentBlock::with_defaults(
                    BlockVariant::Custom,
                    "contact",
                    Some("📞 Contact".into()),
                )
            },
        ];

        Document {
            meta: PageMeta::default(),
            theme: ThemeConfig::default(),
            blocks,
        }
    }

    pub fn block(&self, id: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn placeholder_document_covers_every_variant() {
        let doc = Document::placeholder();
        let variants: Vec<_> = doc.blocks.iter().map(|b| b.variant()).collect();
        for variant in BlockVariant::ALL {
            assert!(variants.contains(&variant), "missing {variant}");
        }
        assert!(doc.blocks.iter().all(|b| b.enabled));
    }

    #[test]
    fn block_lookup_finds_first_match() {
        let doc = Document::placeholder();
        assert_eq!(doc.block("about").unwrap().id, "about");
        assert!(doc.block("nope").is_none());
    }

    #[test]
    fn css_custom_properties_cover_all_theme_values() {
        let theme = ThemeConfig::default();
        let props = theme.css_custom_properties();
        assert_eq!(props.len(), 5);
        assert_eq!(props[0].0, "--background-image");
        assert_eq!(props[0].1, "url(\"assets/background.jpeg\")");
        assert_eq!(props[1], ("--primary-color", "#a6deff".to_string()));
    }

    #[rstest]
    #[case("#fff", true)]
    #[case("#a6deff", true)]
    #[case("#a6deffcc", true)]
    #[case("rgba(255, 255, 255, 0.1)", true)]
    #[case("hsl(200, 50%, 50%)", true)]
    #[case("not a color", false)]
    #[case("#12", false)]
    fn color_shape_check(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(ThemeConfig::looks_like_color(value), expected);
    }
}
