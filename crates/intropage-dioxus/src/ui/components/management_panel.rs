use dioxus::prelude::*;
use intropage_engine::{AddBlockRequest, ContentBlock, EditRequest, ThemeConfig, suggest_block_id};

use crate::ui::components::edit_form::EditBlockForm;

/// The management surface: page settings, theme values, the block list
/// with per-block controls, the add-block form, and snapshot
/// save/export/import. Deleting and importing ask for a second click
/// before anything destructive happens.
#[component]
pub fn ManagementPanel(
    title: String,
    theme: ThemeConfig,
    blocks: Vec<ContentBlock>,
    notice: Option<String>,
    on_close: Callback<()>,
    on_set_title: Callback<String>,
    on_set_theme: Callback<ThemeConfig>,
    on_add: Callback<AddBlockRequest>,
    on_edit: Callback<(String, EditRequest)>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
    on_reorder: Callback<Vec<String>>,
    on_save: Callback<()>,
    on_export: Callback<()>,
    on_import: Callback<String>,
) -> Element {
    let mut add_variant = use_signal(|| "text".to_string());
    let mut add_id = use_signal(suggest_block_id);
    let mut add_title = use_signal(String::new);
    let mut editing = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);
    let mut import_text = use_signal(String::new);

    let ids: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
    let import_pending = !import_text.read().is_empty();

    rsx! {
        div { class: "management-panel", id: "management-panel",
            div { class: "panel-header",
                h2 { "Manage page" }
                button {
                    class: "close-btn",
                    id: "close-panel",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            if let Some(notice) = &notice {
                p { class: "notice", "{notice}" }
            }

            section { class: "panel-section",
                h3 { "Page" }
                label { "Title" }
                input {
                    id: "page-title-input",
                    value: "{title}",
                    oninput: move |event: Event<FormData>| on_set_title.call(event.value()),
                }
                label { "Background image" }
                input {
                    id: "background-input",
                    value: "{theme.background_image}",
                    oninput: {
                        let theme = theme.clone();
                        move |event: Event<FormData>| {
                            on_set_theme.call(ThemeConfig {
                                background_image: event.value(),
                                ..theme.clone()
                            })
                        }
                    },
                }
                label { "Primary color" }
                input {
                    id: "primary-color",
                    value: "{theme.primary_color}",
                    oninput: {
                        let theme = theme.clone();
                        move |event: Event<FormData>| {
                            on_set_theme.call(ThemeConfig {
                                primary_color: event.value(),
                                ..theme.clone()
                            })
                        }
                    },
                }
                label { "Highlight color" }
                input {
                    id: "highlight-color",
                    value: "{theme.highlight_color}",
                    oninput: {
                        let theme = theme.clone();
                        move |event: Event<FormData>| {
                            on_set_theme.call(ThemeConfig {
                                highlight_color: event.value(),
                                ..theme.clone()
                            })
                        }
                    },
                }
                label { "Info text color" }
                input {
                    id: "text-color",
                    value: "{theme.info_text_color}",
                    oninput: {
                        let theme = theme.clone();
                        move |event: Event<FormData>| {
                            on_set_theme.call(ThemeConfig {
                                info_text_color: event.value(),
                                ..theme.clone()
                            })
                        }
                    },
                }
                label { "Font family" }
                input {
                    id: "font-input",
                    value: "{theme.font_family}",
                    oninput: {
                        let theme = theme.clone();
                        move |event: Event<FormData>| {
                            on_set_theme.call(ThemeConfig {
                                font_family: event.value(),
                                ..theme.clone()
                            })
                        }
                    },
                }
            }

            section { class: "panel-section",
                h3 { "Blocks" }
                div { class: "blocks-list", id: "blocks-list",
                    for (index, block) in blocks.iter().enumerate() {
                        BlockRow {
                            key: "{block.id}",
                            block: block.clone(),
                            index,
                            ids: ids.clone(),
                            editing: editing.read().as_deref() == Some(block.id.as_str()),
                            delete_pending: pending_delete.read().as_deref() == Some(block.id.as_str()),
                            on_edit_open: move |id: Option<String>| editing.set(id),
                            on_edit,
                            on_toggle,
                            on_delete_request: move |id: Option<String>| pending_delete.set(id),
                            on_delete: move |id: String| {
                                pending_delete.set(None);
                                on_delete.call(id);
                            },
                            on_reorder,
                        }
                    }
                }
            }

            section { class: "panel-section",
                h3 { "Add block" }
                label { "Type" }
                select {
                    id: "block-type",
                    value: "{add_variant}",
                    onchange: move |event: Event<FormData>| add_variant.set(event.value()),
                    option { value: "header", "Header" }
                    option { value: "text", "Text" }
                    option { value: "list", "List" }
                    option { value: "custom", "Custom" }
                }
                label { "Id" }
                input {
                    id: "block-id",
                    value: "{add_id}",
                    oninput: move |event: Event<FormData>| add_id.set(event.value()),
                }
                label { "Title" }
                input {
                    id: "block-title",
                    value: "{add_title}",
                    oninput: move |event: Event<FormData>| add_title.set(event.value()),
                }
                button {
                    class: "add-btn",
                    id: "add-block-btn",
                    onclick: move |_| {
                        on_add.call(AddBlockRequest {
                            variant: add_variant.read().clone(),
                            id: add_id.read().clone(),
                            title: Some(add_title.read().clone()).filter(|t| !t.is_empty()),
                        });
                        add_id.set(suggest_block_id());
                        add_title.set(String::new());
                    },
                    "Add"
                }
            }

            section { class: "panel-section",
                h3 { "Snapshot" }
                div { class: "config-actions",
                    button { id: "save-config", onclick: move |_| on_save.call(()), "Save" }
                    button { id: "export-config", onclick: move |_| on_export.call(()), "Export" }
                }
                label { "Import" }
                textarea {
                    id: "import-config",
                    placeholder: "Paste an exported snapshot here",
                    value: "{import_text}",
                    oninput: move |event: Event<FormData>| import_text.set(event.value()),
                }
                if import_pending {
                    p { class: "import-warning",
                        "Importing overwrites the matching parts of the current page."
                    }
                    button {
                        class: "import-btn",
                        onclick: move |_| {
                            let text = import_text.read().clone();
                            import_text.set(String::new());
                            on_import.call(text);
                        },
                        "Confirm import"
                    }
                }
            }
        }
    }
}

#[component]
fn BlockRow(
    block: ContentBlock,
    index: usize,
    ids: Vec<String>,
    editing: bool,
    delete_pending: bool,
    on_edit_open: Callback<Option<String>>,
    on_edit: Callback<(String, EditRequest)>,
    on_toggle: Callback<String>,
    on_delete_request: Callback<Option<String>>,
    on_delete: Callback<String>,
    on_reorder: Callback<Vec<String>>,
) -> Element {
    let label = block.title.clone().unwrap_or_else(|| block.id.clone());
    let toggle_label = if block.enabled { "Hide" } else { "Show" };
    let status = if block.enabled { "enabled" } else { "disabled" };
    let variant = block.variant();
    let block_id = block.id.clone();

    let move_up = {
        let ids = ids.clone();
        move |_| {
            if index > 0 {
                let mut ids = ids.clone();
                ids.swap(index, index - 1);
                on_reorder.call(ids);
            }
        }
    };
    let move_down = {
        let ids = ids.clone();
        move |_| {
            if index + 1 < ids.len() {
                let mut ids = ids.clone();
                ids.swap(index, index + 1);
                on_reorder.call(ids);
            }
        }
    };

    rsx! {
        div { class: "block-item",
            div { class: "block-header",
                strong { "{label}" }
                div { class: "block-controls",
                    button { onclick: move_up, "↑" }
                    button { onclick: move_down, "↓" }
                    button {
                        class: "edit-btn",
                        onclick: {
                            let id = block_id.clone();
                            move |_| on_edit_open.call(Some(id.clone()))
                        },
                        "Edit"
                    }
                    button {
                        class: "toggle-btn",
                        onclick: {
                            let id = block_id.clone();
                            move |_| on_toggle.call(id.clone())
                        },
                        "{toggle_label}"
                    }
                    if delete_pending {
                        button {
                            class: "delete-btn",
                            onclick: {
                                let id = block_id.clone();
                                move |_| on_delete.call(id.clone())
                            },
                            "Confirm delete"
                        }
                        button { onclick: move |_| on_delete_request.call(None), "Cancel" }
                    } else {
                        button {
                            class: "delete-btn",
                            onclick: {
                                let id = block_id.clone();
                                move |_| on_delete_request.call(Some(id.clone()))
                            },
                            "Delete"
                        }
                    }
                }
            }
            div { class: "block-meta", "Type: {variant} · {status}" }
            if editing {
                EditBlockForm {
                    block: block.clone(),
                    on_apply: {
                        let id = block_id.clone();
                        move |request: EditRequest| {
                            on_edit.call((id.clone(), request));
                            on_edit_open.call(None);
                        }
                    },
                    on_cancel: move |_| on_edit_open.call(None),
                }
            }
        }
    }
}
