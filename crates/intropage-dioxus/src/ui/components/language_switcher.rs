use dioxus::prelude::*;

use crate::locales;

/// Fixed-position language selector. Switching languages kicks off a
/// table load in the app; the page keeps its current strings until the
/// new table installs.
#[component]
pub fn LanguageSwitcher(current: String, label: String, on_change: Callback<String>) -> Element {
    rsx! {
        select {
            id: "language-switcher",
            class: "language-switcher",
            title: "{label}",
            value: "{current}",
            onchange: move |event: Event<FormData>| on_change.call(event.value()),
            for (code, name) in locales::LANGUAGES.iter().copied() {
                option { value: "{code}", selected: code == current, "{name}" }
            }
        }
    }
}
