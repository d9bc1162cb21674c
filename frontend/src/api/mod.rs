pub mod approvals;
mod attendance;
pub mod client;
mod declarations;
mod directory;
mod documents;
pub mod types;

pub use approvals::ApprovalKind;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
