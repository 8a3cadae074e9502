use dioxus::prelude::*;
use intropage_engine::{BlockContent, ContentBlock, ContentEdit, EditRequest};

/// Variant-specific edit forms. Each collects a full field set locally
/// and submits one edit request when the user applies; nothing touches
/// the document until then.
#[component]
pub fn EditBlockForm(
    block: ContentBlock,
    on_apply: Callback<EditRequest>,
    on_cancel: Callback<()>,
) -> Element {
    let title = block.title.clone().unwrap_or_default();
    match block.content.clone() {
        BlockContent::Header {
            greeting,
            name,
            subtitle,
        } => rsx! {
            HeaderEditForm { title, greeting, name, subtitle, on_apply, on_cancel }
        },
        BlockContent::Text { text } => rsx! {
            TextEditForm { title, text, on_apply, on_cancel }
        },
        BlockContent::List { items } => rsx! {
            ListEditForm { title, items, on_apply, on_cancel }
        },
        BlockContent::Custom { markup } => rsx! {
            CustomEditForm { title, markup, on_apply, on_cancel }
        },
    }
}

#[component]
fn HeaderEditForm(
    title: String,
    greeting: String,
    name: String,
    subtitle: String,
    on_apply: Callback<EditRequest>,
    on_cancel: Callback<()>,
) -> Element {
    let mut title_field = use_signal(|| title);
    let mut greeting_field = use_signal(|| greeting);
    let mut name_field = use_signal(|| name);
    let mut subtitle_field = use_signal(|| subtitle);

    rsx! {
        div { class: "edit-form",
            label { "Title" }
            input {
                value: "{title_field}",
                oninput: move |event: Event<FormData>| title_field.set(event.value()),
            }
            label { "Greeting" }
            input {
                value: "{greeting_field}",
                oninput: move |event: Event<FormData>| greeting_field.set(event.value()),
            }
            label { "Name" }
            input {
                value: "{name_field}",
                oninput: move |event: Event<FormData>| name_field.set(event.value()),
            }
            label { "Subtitle" }
            input {
                value: "{subtitle_field}",
                oninput: move |event: Event<FormData>| subtitle_field.set(event.value()),
            }
            FormActions {
                on_apply: move |_| {
                    on_apply.call(EditRequest {
                        title: Some(title_field.read().clone()),
                        content: Some(ContentEdit::Header {
                            greeting: Some(greeting_field.read().clone()),
                            name: Some(name_field.read().clone()),
                            subtitle: Some(subtitle_field.read().clone()),
                        }),
                    })
                },
                on_cancel,
            }
        }
    }
}

#[component]
fn TextEditForm(
    title: String,
    text: String,
    on_apply: Callback<EditRequest>,
    on_cancel: Callback<()>,
) -> Element {
    let mut title_field = use_signal(|| title);
    let mut text_field = use_signal(|| text);

    rsx! {
        div { class: "edit-form",
            label { "Title" }
            input {
                value: "{title_field}",
                oninput: move |event: Event<FormData>| title_field.set(event.value()),
            }
            label { "Text" }
            textarea {
                value: "{text_field}",
                oninput: move |event: Event<FormData>| text_field.set(event.value()),
            }
            FormActions {
                on_apply: move |_| {
                    on_apply.call(EditRequest {
                        title: Some(title_field.read().clone()),
                        content: Some(ContentEdit::Text {
                            text: Some(text_field.read().clone()),
                        }),
                    })
                },
                on_cancel,
            }
        }
    }
}

#[component]
fn ListEditForm(
    title: String,
    items: Vec<String>,
    on_apply: Callback<EditRequest>,
    on_cancel: Callback<()>,
) -> Element {
    let mut title_field = use_signal(|| title);
    let mut items_field = use_signal(|| items.join("\n"));

    rsx! {
        div { class: "edit-form",
            label { "Title" }
            input {
                value: "{title_field}",
                oninput: move |event: Event<FormData>| title_field.set(event.value()),
            }
            label { "Items (one per line)" }
            textarea {
                value: "{items_field}",
                oninput: move |event: Event<FormData>| items_field.set(event.value()),
            }
            FormActions {
                on_apply: move |_| {
                    // Blank lines are dropped rather than kept as empty items.
                    let items = items_field
                        .read()
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(String::from)
                        .collect();
                    on_apply.call(EditRequest {
                        title: Some(title_field.read().clone()),
                        content: Some(ContentEdit::List { items: Some(items) }),
                    })
                },
                on_cancel,
            }
        }
    }
}

#[component]
fn CustomEditForm(
    title: String,
    markup: String,
    on_apply: Callback<EditRequest>,
    on_cancel: Callback<()>,
) -> Element {
    let mut title_field = use_signal(|| title);
    let mut markup_field = use_signal(|| markup);

    rsx! {
        div { class: "edit-form",
            label { "Title" }
            input {
                value: "{title_field}",
                oninput: move |event: Event<FormData>| title_field.set(event.value()),
            }
            label { "Markup (rendered verbatim)" }
            textarea {
                class: "markup-editor",
                value: "{markup_field}",
                spellcheck: false,
                oninput: move |event: Event<FormData>| markup_field.set(event.value()),
            }
            FormActions {
                on_apply: move |_| {
                    on_apply.call(EditRequest {
                        title: Some(title_field.read().clone()),
                        content: Some(ContentEdit::Custom {
                            markup: Some(markup_field.read().clone()),
                        }),
                    })
                },
                on_cancel,
            }
        }
    }
}

#[component]
fn FormActions(on_apply: Callback<()>, on_cancel: Callback<()>) -> Element {
    rsx! {
        div { class: "form-actions",
            button { class: "apply-btn", onclick: move |_| on_apply.call(()), "Apply" }
            button { onclick: move |_| on_cancel.call(()), "Cancel" }
        }
    }
}
