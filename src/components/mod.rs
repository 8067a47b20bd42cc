//! Presentational components shared across pages.

pub mod chat_header;
pub mod code_entry;
pub mod conversation_sidebar;
pub mod image_result;
pub mod image_viewer;
pub mod loading_overlay;
pub mod oauth_buttons;
pub mod report_dialog;
pub mod size_selector;
pub mod style_selector;
pub mod toaster;
