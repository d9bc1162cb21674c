pub mod display;
pub mod storage;
pub mod time;
