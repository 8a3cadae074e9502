use dioxus::prelude::*;
use intropage_engine::render::html::inline_style;
use intropage_engine::{FULL_VIEWPORT_STYLE, RenderBlock, RenderBody};

use crate::ui::components::{
    custom_block::CustomBlock, header_block::HeaderBlock, list_block::ListBlock,
    text_block::TextBlock,
};

#[component]
pub fn Block(block: RenderBlock) -> Element {
    let section_style = if block.full_viewport {
        FULL_VIEWPORT_STYLE
    } else {
        ""
    };
    let container_style = inline_style(&block.style);

    rsx! {
        div {
            class: "section",
            id: "block-{block.id}",
            style: "{section_style}",
            div {
                class: "glass-container-apple",
                style: "{container_style}",
                if let Some(title) = &block.title {
                    h3 { class: "section-title", "{title}" }
                }
                {body(&block.body)}
            }
        }
    }
}

fn body(body: &RenderBody) -> Element {
    match body {
        RenderBody::Header {
            greeting,
            name,
            subtitle,
        } => rsx! {
            HeaderBlock {
                greeting: greeting.clone(),
                name: name.clone(),
                subtitle: subtitle.clone()
            }
        },
        RenderBody::Text { text } => rsx! {
            TextBlock { text: text.clone() }
        },
        RenderBody::List { items } => rsx! {
            ListBlock { items: items.clone() }
        },
        RenderBody::Custom { markup } => rsx! {
            CustomBlock { markup: markup.clone() }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use intropage_engine::StyleMap;
    use pretty_assertions::assert_eq;

    fn render_to_html(block: RenderBlock) -> String {
        let mut dom = VirtualDom::new_with_props(Block, BlockProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    fn bare(id: &str, body: RenderBody) -> RenderBlock {
        RenderBlock {
            id: id.to_string(),
            title: None,
            style: StyleMap::new(),
            body,
            full_viewport: false,
        }
    }

    #[test]
    fn text_block_renders_content_and_classes() {
        let html = render_to_html(bare(
            "about",
            RenderBody::Text {
                text: "hello there".to_string(),
            },
        ));
        assert!(html.contains("block-about"));
        assert!(html.contains("glass-container-apple"));
        assert!(html.contains("hello there"));
    }

    #[test]
    fn list_block_renders_items_in_order() {
        let html = render_to_html(bare(
            "skills",
            RenderBody::List {
                items: vec!["first".to_string(), "second".to_string()],
            },
        ));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn custom_markup_is_injected_verbatim() {
        let markup = r#"<span class="highlight">raw</span>"#;
        let html = render_to_html(bare(
            "contact",
            RenderBody::Custom {
                markup: markup.to_string(),
            },
        ));
        assert!(html.contains(markup));
    }

    #[test]
    fn header_block_gets_full_viewport_placement() {
        let block = RenderBlock {
            full_viewport: true,
            ..bare(
                "hero",
                RenderBody::Header {
                    greeting: Some("Hi".to_string()),
                    name: Some("Mika".to_string()),
                    subtitle: None,
                },
            )
        };
        let html = render_to_html(block);
        assert!(html.contains("min-height: 100vh"));
        assert!(html.contains("Mika"));
    }

    #[test]
    fn titles_show_up_once() {
        let block = RenderBlock {
            title: Some("About".to_string()),
            ..bare(
                "about",
                RenderBody::Text {
                    text: "hi".to_string(),
                },
            )
        };
        let html = render_to_html(block);
        assert_eq!(html.matches("section-title").count(), 1);
    }
}
