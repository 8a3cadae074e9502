use dioxus::prelude::*;
use std::path::PathBuf;

use intropage_engine::{
    AddBlockRequest, Confirmation, DEFAULT_LANG, Document, EditRequest, FileStorage, I18n,
    ManagementSession, Page, PanelState, ThemeConfig,
};

use super::components::{Block, LanguageSwitcher, ManagementPanel, SplashScreen};
use crate::locales;

const INTROPAGE_CSS: &str = include_str!("../assets/intropage.css");

/// How long the splash overlay stays up after launch.
const SPLASH_MILLIS: u64 = 2000;

/// Re-render from scratch after a session mutation. Rendering is total:
/// the previous page is discarded, not patched.
fn refresh(session: Signal<ManagementSession<FileStorage>>, mut page: Signal<Page>) {
    let rendered = session.peek().page();
    page.set(rendered);
}

#[component]
pub fn App(data_dir: PathBuf) -> Element {
    let session = use_signal(|| {
        let storage = FileStorage::new(data_dir.clone());
        let mut session = ManagementSession::new(Document::placeholder(), storage);
        // A saved snapshot overrides the starter page; a broken one is
        // reported and ignored.
        if let Err(e) = session.load() {
            log::warn!("ignoring saved page: {e}");
        }
        session
    });

    let page = use_signal(|| session.peek().page());
    let mut notice = use_signal(|| None::<String>);

    let mut i18n = use_signal(|| {
        let mut i18n = I18n::new();
        if let Some(table) = locales::table(DEFAULT_LANG) {
            i18n.insert_table(DEFAULT_LANG, table);
        }
        if let Some(saved) = session.peek().saved_language() {
            if let Some(table) = locales::table(&saved) {
                i18n.insert_table(saved.clone(), table);
            }
            i18n.set_language(saved);
        }
        i18n
    });

    let mut splash_visible = use_signal(|| true);
    use_future(move || async move {
        tokio::time::sleep(std::time::Duration::from_millis(SPLASH_MILLIS)).await;
        splash_visible.set(false);
    });

    let on_language_change = Callback::new(move |lang: String| {
        let mut session = session;
        session.with_mut(|s| {
            s.persist_language(&lang);
            s.set_page_language(lang.clone());
        });
        refresh(session, page);

        // Loads are sequenced by ticket; a completion for an abandoned
        // switch is dropped instead of clobbering the newer choice.
        let ticket = i18n.with_mut(|i| i.begin_load(&lang));
        spawn(async move {
            match locales::table(ticket.lang()) {
                Some(table) => i18n.with_mut(|i| {
                    if i.install(&ticket, table) {
                        let lang = ticket.lang().to_string();
                        i.set_language(lang);
                    }
                }),
                None => log::warn!(
                    "no usable locale for {:?}; keeping the fallback chain",
                    ticket.lang()
                ),
            }
        });
    });

    let on_toggle_panel = Callback::new(move |_: ()| {
        let mut session = session;
        session.with_mut(|s| s.toggle_panel());
    });
    let on_close = Callback::new(move |_: ()| {
        let mut session = session;
        session.with_mut(|s| s.close_panel());
    });
    let on_set_title = Callback::new(move |title: String| {
        let mut session = session;
        session.with_mut(|s| s.set_page_title(title));
        refresh(session, page);
    });
    let on_set_theme = Callback::new(move |theme: ThemeConfig| {
        let mut session = session;
        session.with_mut(|s| s.set_theme(theme));
        refresh(session, page);
    });
    let on_add = Callback::new(move |request: AddBlockRequest| {
        let mut session = session;
        match session.with_mut(|s| s.add_block(request)) {
            Ok(()) => {
                refresh(session, page);
                notice.set(None);
            }
            Err(e) => notice.set(Some(format!("Cannot add block: {e}"))),
        }
    });
    let on_edit = Callback::new(move |(id, request): (String, EditRequest)| {
        let mut session = session;
        session.with_mut(|s| s.edit_block(&id, request));
        refresh(session, page);
    });
    let on_toggle = Callback::new(move |id: String| {
        let mut session = session;
        session.with_mut(|s| s.toggle_block(&id));
        refresh(session, page);
    });
    let on_delete = Callback::new(move |id: String| {
        let mut session = session;
        session.with_mut(|s| s.delete_block(&id, Confirmation::Confirmed));
        refresh(session, page);
    });
    let on_reorder = Callback::new(move |ids: Vec<String>| {
        let mut session = session;
        session.with_mut(|s| s.reorder(&ids));
        refresh(session, page);
    });
    let on_save = Callback::new(move |_: ()| {
        let mut session = session;
        match session.with_mut(|s| s.save()) {
            Ok(()) => notice.set(Some("Saved".to_string())),
            Err(e) => notice.set(Some(format!("Save failed: {e}"))),
        }
    });
    let export_dir = data_dir.clone();
    let on_export = Callback::new(move |_: ()| {
        let artifact = match session.read().export() {
            Ok(artifact) => artifact,
            Err(e) => {
                notice.set(Some(format!("Export failed: {e}")));
                return;
            }
        };
        let path = export_dir.join(&artifact.file_name);
        match std::fs::write(&path, &artifact.contents) {
            Ok(()) => notice.set(Some(format!("Exported to {}", path.display()))),
            Err(e) => notice.set(Some(format!("Export failed: {e}"))),
        }
    });
    let on_import = Callback::new(move |text: String| {
        let mut session = session;
        match session.with_mut(|s| s.import(&text, Confirmation::Confirmed)) {
            Ok(true) => {
                refresh(session, page);
                notice.set(Some("Import applied".to_string()));
            }
            Ok(false) => {}
            Err(e) => notice.set(Some(format!("Import failed: {e}"))),
        }
    });

    let page_now = page.read().clone();
    let panel_visible = session.read().panel() == PanelState::Visible;
    let document = session.read().store().document().clone();

    let theme_vars = page_now
        .theme
        .css_custom_properties()
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ");
    let display_title = i18n.read().translate("page_title", &page_now.title);
    let switcher_label = i18n.read().translate("language.label", "Language");
    let footer_text = i18n
        .read()
        .translate("footer.updated", "✨ Updated recently ✨");
    let current_language = i18n.read().current_language().to_string();

    rsx! {
        style { {INTROPAGE_CSS} }
        div { class: "page-root", style: "{theme_vars}",
            SplashScreen { visible: *splash_visible.read() }
            LanguageSwitcher {
                current: current_language,
                label: switcher_label,
                on_change: on_language_change,
            }
            button {
                class: "management-toggle",
                id: "toggle-management",
                onclick: move |_| on_toggle_panel.call(()),
                "⚙"
            }
            if panel_visible {
                ManagementPanel {
                    title: document.meta.title.clone(),
                    theme: document.theme.clone(),
                    blocks: document.blocks.clone(),
                    notice: notice.read().clone(),
                    on_close,
                    on_set_title,
                    on_set_theme,
                    on_add,
                    on_edit,
                    on_toggle,
                    on_delete,
                    on_reorder,
                    on_save,
                    on_export,
                    on_import,
                }
            }
            h1 { class: "page-title", id: "page-title", "{display_title}" }
            main { class: "content",
                for block in page_now.blocks.clone() {
                    Block { key: "{block.id}", block }
                }
            }
            div { class: "update-badge",
                span { "{footer_text}" }
            }
        }
    }
}
