pub mod history;
pub mod range;
