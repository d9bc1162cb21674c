pub mod approvals;
pub mod cache;
pub mod dispatcher;
pub mod list;
pub mod list_view;
pub mod tabs;
pub mod toast;
