pub mod common;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod layout;
pub mod list_toolbar;
pub mod pagination;
pub mod reason_dialog;
pub mod toast;
