use crate::api::{ApprovalKind, ApprovalRequest, RequestStatus};
use crate::utils::display::{display_date, display_date_time, display_days, display_or_placeholder};
use crate::utils::storage::{load_preference, save_preference, APPROVALS_TAB_KEY};

pub const STATUS_OPTIONS: [&str; 3] = ["Pending", "Approved", "Rejected"];

pub fn load_saved_tab() -> ApprovalKind {
    load_preference(APPROVALS_TAB_KEY)
        .and_then(|key| ApprovalKind::from_key(&key))
        .unwrap_or(ApprovalKind::Leave)
}

pub fn save_tab(kind: ApprovalKind) {
    save_preference(APPROVALS_TAB_KEY, kind.key());
}

pub fn column_headers(kind: ApprovalKind) -> Vec<&'static str> {
    match kind {
        ApprovalKind::Leave => vec![
            "Employee", "Designation", "Type", "From", "To", "Days", "Reason", "Status",
        ],
        ApprovalKind::CompOff => vec!["Employee", "Designation", "Worked on", "Days", "Reason", "Status"],
        ApprovalKind::VendorMeeting => {
            vec!["Employee", "Designation", "Meeting at", "Location", "Reason", "Status"]
        }
        ApprovalKind::Revert => vec![
            "Employee", "Leave type", "From", "To", "Leave days", "Revert days", "Reason", "Status",
        ],
    }
}

pub fn row_cells(kind: ApprovalKind, row: &ApprovalRequest) -> Vec<String> {
    let employee = display_or_placeholder(row.employee_name());
    let designation = display_or_placeholder(row.designation());
    let reason = display_or_placeholder(row.reason.as_deref());
    let status = display_or_placeholder(row.status.as_deref());
    match kind {
        ApprovalKind::Leave => vec![
            employee,
            designation,
            display_or_placeholder(row.leave_type.as_deref()),
            display_date(row.leave_start_date),
            display_date(row.leave_end_date),
            display_days(row.total_days),
            reason,
            status,
        ],
        ApprovalKind::CompOff => vec![
            employee,
            designation,
            display_date(row.leave_start_date),
            display_days(row.total_days),
            reason,
            status,
        ],
        ApprovalKind::VendorMeeting => vec![
            employee,
            designation,
            display_date_time(row.date_time),
            display_or_placeholder(row.location.as_deref()),
            reason,
            status,
        ],
        ApprovalKind::Revert => vec![
            employee,
            display_or_placeholder(row.leave_type.as_deref()),
            display_date(row.leave_start_date),
            display_date(row.leave_end_date),
            display_days(row.total_days),
            display_days(row.revert_days),
            reason,
            status,
        ],
    }
}

pub fn status_badge_class(status: Option<RequestStatus>) -> &'static str {
    match status {
        Some(RequestStatus::Pending) => "bg-status-warning-bg text-status-warning-text",
        Some(RequestStatus::Approved) => "bg-status-success-bg text-status-success-text",
        Some(RequestStatus::Rejected) => "bg-status-error-bg text-status-error-text",
        None => "bg-surface-muted text-fg-muted",
    }
}

/// Distinct type values in server order, for the type filter.
pub fn distinct_types(rows: &[ApprovalRequest]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for value in rows.iter().filter_map(|row| row.leave_type.as_deref()) {
        if !value.trim().is_empty() && !types.iter().any(|known| known == value) {
            types.push(value.to_string());
        }
    }
    types
}

pub fn reject_prompt(kind: ApprovalKind) -> String {
    if kind.rejection_requires_reason() {
        format!(
            "Give a reason for rejecting this {}.",
            kind.resource_name().to_lowercase()
        )
    } else {
        format!(
            "Optionally add a remark for rejecting this {}.",
            kind.resource_name().to_lowercase()
        )
    }
}
