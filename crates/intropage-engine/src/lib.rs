pub mod i18n;
pub mod model;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;

// Re-export key types for easier usage
pub use i18n::{DEFAULT_LANG, I18n, I18nError, LoadTicket, TranslationTable};
pub use model::{
    BlockContent, BlockError, BlockVariant, ContentBlock, Document, PageMeta, StyleMap,
    ThemeConfig, suggest_block_id,
};
pub use render::{FULL_VIEWPORT_STYLE, Page, RenderBlock, RenderBody};
pub use session::{
    AddBlockRequest, Confirmation, ContentEdit, EditRequest, EXPORT_FILE_NAME, ExportArtifact,
    ManagementSession, PanelState, RenderSink, SessionError,
};
pub use storage::{FileStorage, LANG_KEY, MemoryStorage, Storage, USER_CONFIG_KEY};
pub use store::{BlockPatch, DocumentStore, SnapshotError};
