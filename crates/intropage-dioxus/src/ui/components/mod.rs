pub mod block;
pub mod custom_block;
pub mod edit_form;
pub mod header_block;
pub mod language_switcher;
pub mod list_block;
pub mod management_panel;
pub mod splash_screen;
pub mod text_block;

pub use block::Block;
pub use language_switcher::LanguageSwitcher;
pub use management_panel::ManagementPanel;
pub use splash_screen::SplashScreen;
