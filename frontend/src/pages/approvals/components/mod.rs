pub mod table;
pub mod tabs;
