use dioxus::prelude::*;

#[component]
pub fn ListBlock(items: Vec<String>) -> Element {
    rsx! {
        ul {
            for item in items {
                li { class: "info-text", "{item}" }
            }
        }
    }
}
