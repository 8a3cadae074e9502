use dioxus::prelude::*;

/// Operator-authored markup, injected without escaping. This is the
/// page's documented trust boundary: imported snapshots can carry
/// arbitrary markup here, so review them before confirming an import.
#[component]
pub fn CustomBlock(markup: String) -> Element {
    rsx! {
        div { class: "custom-markup", dangerous_inner_html: "{markup}" }
    }
}
