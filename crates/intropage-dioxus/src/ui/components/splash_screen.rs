use dioxus::prelude::*;

/// Full-screen overlay shown while the page boots. The app hides it
/// after a fixed delay; it carries no state of its own.
#[component]
pub fn SplashScreen(visible: bool) -> Element {
    let class = if visible {
        "loading-screen"
    } else {
        "loading-screen hidden"
    };
    rsx! {
        div { class: "{class}",
            div { class: "loading-spinner" }
        }
    }
}
