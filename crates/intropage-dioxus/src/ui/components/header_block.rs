use dioxus::prelude::*;

/// Greeting, name, and subtitle as three distinct regions, each
/// skipped when blank.
#[component]
pub fn HeaderBlock(
    greeting: Option<String>,
    name: Option<String>,
    subtitle: Option<String>,
) -> Element {
    rsx! {
        if let Some(greeting) = greeting {
            p { class: "info-text", "{greeting}" }
        }
        if let Some(name) = name {
            p {
                strong { class: "highlight", "{name}" }
            }
        }
        if let Some(subtitle) = subtitle {
            p { class: "info-text", "{subtitle}" }
        }
    }
}
