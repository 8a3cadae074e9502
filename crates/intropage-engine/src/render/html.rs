//! HTML writer over the rendered [`Page`]. Text content and attribute
//! values are escaped; the Custom variant's markup is the single
//! deliberate exception and is written through verbatim.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{FULL_VIEWPORT_STYLE, Page, RenderBlock, RenderBody};
use crate::model::StyleMap;

/// Write the page body: one section per display block, in page order,
/// separated by newlines.
pub fn write_html(page: &Page) -> String {
    let sections: Vec<String> = page.blocks.iter().map(write_block).collect();
    sections.join("\n")
}

fn write_block(block: &RenderBlock) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"section\" id=\"block-");
    out.push_str(&encode_double_quoted_attribute(&block.id));
    out.push('"');
    if block.full_viewport {
        out.push_str(" style=\"");
        out.push_str(FULL_VIEWPORT_STYLE);
        out.push('"');
    }
    out.push('>');

    out.push_str("<div class=\"glass-container-apple\"");
    if !block.style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&encode_double_quoted_attribute(&inline_style(&block.style)));
        out.push('"');
    }
    out.push('>');

    if let Some(title) = &block.title {
        out.push_str("<h3 class=\"section-title\">");
        out.push_str(&encode_text(title));
        out.push_str("</h3>");
    }

    write_body(&mut out, &block.body);

    out.push_str("</div></div>");
    out
}

fn write_body(out: &mut String, body: &RenderBody) {
    match body {
        RenderBody::Header {
            greeting,
            name,
            subtitle,
        } => {
            if let Some(greeting) = greeting {
                write_info_text(out, greeting);
            }
            if let Some(name) = name {
                out.push_str("<p><strong class=\"highlight\">");
                out.push_str(&encode_text(name));
                out.push_str("</strong></p>");
            }
            if let Some(subtitle) = subtitle {
                write_info_text(out, subtitle);
            }
        }
        RenderBody::Text { text } => write_info_text(out, text),
        RenderBody::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li class=\"info-text\">");
                out.push_str(&encode_text(item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        // Trust boundary: operator-authored markup, no escaping.
        RenderBody::Custom { markup } => out.push_str(markup),
    }
}

fn write_info_text(out: &mut String, text: &str) {
    out.push_str("<p class=\"info-text\">");
    out.push_str(&encode_text(text));
    out.push_str("</p>");
}

/// Convert the open style map into an inline `style` attribute value,
/// translating the snapshot's camelCase keys to CSS property names.
pub fn inline_style(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {}", css_property(key), value))
        .collect::<Vec<_>>()
        .join("; ")
}

fn css_property(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockContent, BlockVariant, ContentBlock, Document};
    use crate::render::render;
    use pretty_assertions::assert_eq;

    fn page_with(block: ContentBlock) -> Page {
        render(&Document {
            blocks: vec![block],
            ..Document::placeholder()
        })
    }

    fn bare_block(id: &str, content: BlockContent) -> ContentBlock {
        ContentBlock {
            id: id.to_string(),
            enabled: true,
            title: None,
            content,
            style: StyleMap::new(),
        }
    }

    #[test]
    fn text_block_markup() {
        let page = page_with(bare_block(
            "a",
            BlockContent::Text {
                text: "hi".to_string(),
            },
        ));
        insta::assert_snapshot!(
            write_html(&page),
            @r#"<div class="section" id="block-a"><div class="glass-container-apple"><p class="info-text">hi</p></div></div>"#
        );
    }

    #[test]
    fn list_block_markup_keeps_item_order() {
        let page = page_with(bare_block(
            "skills",
            BlockContent::List {
                items: vec!["one".to_string(), "two".to_string()],
            },
        ));
        assert_eq!(
            write_html(&page),
            "<div class=\"section\" id=\"block-skills\"><div class=\"glass-container-apple\">\
             <ul><li class=\"info-text\">one</li><li class=\"info-text\">two</li></ul></div></div>"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let page = page_with(bare_block(
            "a",
            BlockContent::Text {
                text: "<script>alert(1)</script>".to_string(),
            },
        ));
        let html = write_html(&page);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn custom_markup_is_not_escaped() {
        let markup = r#"<p class="info-text">Email: <span class="highlight">x@y.z</span></p>"#;
        let page = page_with(bare_block(
            "contact",
            BlockContent::Custom {
                markup: markup.to_string(),
            },
        ));
        assert!(write_html(&page).contains(markup));
    }

    #[test]
    fn header_block_gets_full_viewport_style_and_regions() {
        let block = ContentBlock {
            content: BlockContent::Header {
                greeting: "Hello".to_string(),
                name: "Mika".to_string(),
                subtitle: "Engineer".to_string(),
            },
            style: StyleMap::new(),
            ..ContentBlock::with_defaults(BlockVariant::Header, "hero", None)
        };
        let html = write_html(&page_with(block));
        assert!(html.contains(FULL_VIEWPORT_STYLE));
        assert!(html.contains("<p class=\"info-text\">Hello</p>"));
        assert!(html.contains("<strong class=\"highlight\">Mika</strong>"));
        assert!(html.contains("<p class=\"info-text\">Engineer</p>"));
    }

    #[test]
    fn style_map_becomes_css_properties_in_key_order() {
        let mut style = StyleMap::new();
        style.insert("backgroundColor".to_string(), "red".to_string());
        style.insert("textAlign".to_string(), "center".to_string());
        assert_eq!(inline_style(&style), "background-color: red; text-align: center");
    }

    #[test]
    fn titles_render_before_the_body() {
        let block = ContentBlock {
            title: Some("About".to_string()),
            ..bare_block(
                "about",
                BlockContent::Text {
                    text: "hi".to_string(),
                },
            )
        };
        let html = write_html(&page_with(block));
        assert!(html.contains("<h3 class=\"section-title\">About</h3><p class=\"info-text\">hi</p>"));
    }

    #[test]
    fn writer_is_idempotent() {
        let page = render(&Document::placeholder());
        assert_eq!(write_html(&page), write_html(&page));
    }
}
