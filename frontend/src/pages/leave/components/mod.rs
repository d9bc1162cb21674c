pub mod forms;
pub mod history;
