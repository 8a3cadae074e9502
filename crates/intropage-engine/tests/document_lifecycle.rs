//! End-to-end exercises of the engine surface: a session over a real
//! file-backed storage, driven the way the desktop UI drives it.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use intropage_engine::render::html::write_html;
use intropage_engine::{
    AddBlockRequest, Confirmation, ContentEdit, Document, EditRequest, FileStorage,
    ManagementSession, RenderBody,
};

fn file_session(dir: &TempDir) -> ManagementSession<FileStorage> {
    ManagementSession::new(Document::placeholder(), FileStorage::new(dir.path()))
}

#[test]
fn edit_save_reload_keeps_the_edited_page() {
    let dir = TempDir::new().unwrap();

    let mut session = file_session(&dir);
    session.set_page_title("Mika's page");
    session.edit_block(
        "about",
        EditRequest {
            content: Some(ContentEdit::Text {
                text: Some("I write Rust.".to_string()),
            }),
            ..EditRequest::default()
        },
    );
    session.save().unwrap();

    // A fresh session over the same storage restores the same page.
    let mut restored = file_session(&dir);
    assert!(restored.load().unwrap());
    assert_eq!(restored.store().document(), session.store().document());

    let page = restored.page();
    assert_eq!(page.title, "Mika's page");
    let about = page.blocks.iter().find(|b| b.id == "about").unwrap();
    assert_eq!(
        about.body,
        RenderBody::Text {
            text: "I write Rust.".to_string()
        }
    );
}

#[test]
fn export_import_round_trips_between_sessions() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    let mut source = file_session(&dir_a);
    source
        .add_block(AddBlockRequest {
            variant: "list".to_string(),
            id: "projects".to_string(),
            title: Some("Projects".to_string()),
        })
        .unwrap();
    source.delete_block("hobbies", Confirmation::Confirmed);
    let artifact = source.export().unwrap();

    let mut target = file_session(&dir_b);
    assert!(
        target
            .import(&artifact.contents, Confirmation::Confirmed)
            .unwrap()
    );
    assert_eq!(target.store().document(), source.store().document());
}

#[test]
fn destructive_reorder_then_render_shows_only_the_listed_blocks() {
    let dir = TempDir::new().unwrap();
    let mut session = file_session(&dir);

    session.reorder(&["skills".to_string(), "about".to_string()]);

    let page = session.page();
    let ids: Vec<_> = page.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["skills", "about"]);
}

#[test]
fn disabled_blocks_never_reach_the_html_output() {
    let dir = TempDir::new().unwrap();
    let mut session = file_session(&dir);

    session.toggle_block("about");
    let html = write_html(&session.page());
    assert!(!html.contains("block-about"));

    session.toggle_block("about");
    let html = write_html(&session.page());
    assert!(html.contains("block-about"));
}
