use dioxus::prelude::*;

#[component]
pub fn TextBlock(text: String) -> Element {
    rsx! {
        p { class: "info-text", "{text}" }
    }
}
