pub mod announcements;
pub mod approvals;
pub mod attendance;
pub mod declarations;
pub mod directory;
pub mod documents;
pub mod holidays;
pub mod home;
pub mod leave;
pub mod payroll;
