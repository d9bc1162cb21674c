use crate::api::{
    ApiError, ApprovalRequest, CreateCompOffRequest, CreateLeaveRequest, CreateRevertRequest,
    RequestStatus,
};
use crate::components::forms::parse_date_input;
use chrono::NaiveDate;
use leptos::*;

pub const LEAVE_TYPES: [(&str, &str); 4] = [
    ("Casual", "Casual leave"),
    ("Sick", "Sick leave"),
    ("Earned", "Earned leave"),
    ("Unpaid", "Unpaid leave"),
];

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_date(value: &str, field: &str) -> Result<NaiveDate, ApiError> {
    parse_date_input(value, field)
        .map_err(ApiError::validation)?
        .ok_or_else(|| ApiError::validation(format!("{} is required.", field)))
}

/// Day counts are positive and move in half-day steps.
pub fn parse_day_count(value: &str, field: &str) -> Result<f64, ApiError> {
    let days: f64 = value
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a number.", field)))?;
    if !days.is_finite() || days <= 0.0 {
        return Err(ApiError::validation(format!("{} must be greater than zero.", field)));
    }
    if (days * 2.0).fract() != 0.0 {
        return Err(ApiError::validation(format!(
            "{} must be a whole or half day.",
            field
        )));
    }
    Ok(days)
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    total_days: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LEAVE_TYPES[0].0.to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            total_days: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn days_signal(&self) -> RwSignal<String> {
        self.total_days
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set(LEAVE_TYPES[0].0.to_string());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.total_days.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(&self) -> Result<CreateLeaveRequest, ApiError> {
        let leave_type = self.leave_type.get_untracked();
        if leave_type.trim().is_empty() {
            return Err(ApiError::validation("Leave type is required."));
        }
        let start = required_date(&self.start_date.get_untracked(), "Start date")?;
        let end = required_date(&self.end_date.get_untracked(), "End date")?;
        if end < start {
            return Err(ApiError::validation(
                "End date must be on or after the start date.",
            ));
        }
        let total_days = parse_day_count(&self.total_days.get_untracked(), "Number of days")?;
        let span = (end - start).num_days() as f64 + 1.0;
        if total_days > span {
            return Err(ApiError::validation(format!(
                "Number of days cannot exceed the {} day(s) between the dates.",
                span
            )));
        }
        Ok(CreateLeaveRequest {
            leave_type,
            leave_start_date: start,
            leave_end_date: end,
            total_days,
            reason: optional_string(self.reason.get_untracked()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct CompOffFormState {
    worked_date: RwSignal<String>,
    total_days: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for CompOffFormState {
    fn default() -> Self {
        Self {
            worked_date: create_rw_signal(String::new()),
            total_days: create_rw_signal("1".to_string()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl CompOffFormState {
    pub fn worked_signal(&self) -> RwSignal<String> {
        self.worked_date
    }

    pub fn days_signal(&self) -> RwSignal<String> {
        self.total_days
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.worked_date.set(String::new());
        self.total_days.set("1".to_string());
        self.reason.set(String::new());
    }

    /// A comp-off covers at most one worked day.
    pub fn to_payload(&self) -> Result<CreateCompOffRequest, ApiError> {
        let worked_date = required_date(&self.worked_date.get_untracked(), "Worked date")?;
        let total_days = parse_day_count(&self.total_days.get_untracked(), "Comp-off days")?;
        if total_days > 1.0 {
            return Err(ApiError::validation("Comp-off days must be 0.5 or 1."));
        }
        Ok(CreateCompOffRequest {
            worked_date,
            total_days,
            reason: optional_string(self.reason.get_untracked()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct RevertFormState {
    leave_id: RwSignal<String>,
    revert_days: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for RevertFormState {
    fn default() -> Self {
        Self {
            leave_id: create_rw_signal(String::new()),
            revert_days: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl RevertFormState {
    pub fn leave_signal(&self) -> RwSignal<String> {
        self.leave_id
    }

    pub fn days_signal(&self) -> RwSignal<String> {
        self.revert_days
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_id.set(String::new());
        self.revert_days.set(String::new());
        self.reason.set(String::new());
    }

    /// Only approved leave can be reverted, by at least one day and never
    /// more than the leave covered.
    pub fn to_payload(&self, leaves: &[ApprovalRequest]) -> Result<CreateRevertRequest, ApiError> {
        let leave_id = self.leave_id.get_untracked();
        if leave_id.trim().is_empty() {
            return Err(ApiError::validation("Select the leave to revert."));
        }
        let leave = leaves
            .iter()
            .find(|leave| leave.id == leave_id)
            .ok_or_else(|| ApiError::validation("The selected leave was not found."))?;
        if leave.request_status() != Some(RequestStatus::Approved) {
            return Err(ApiError::validation("Only approved leave can be reverted."));
        }
        let revert_days = parse_day_count(&self.revert_days.get_untracked(), "Revert days")?;
        let total = leave.total_days.unwrap_or_default();
        validate_revert_days(revert_days, total)?;
        Ok(CreateRevertRequest {
            leave_id,
            revert_days,
            reason: optional_string(self.reason.get_untracked()),
        })
    }
}

pub fn validate_revert_days(revert_days: f64, total_days: f64) -> Result<(), ApiError> {
    if revert_days < 1.0 {
        return Err(ApiError::validation("Revert days must be at least 1."));
    }
    if revert_days > total_days {
        return Err(ApiError::validation(format!(
            "Revert days cannot exceed the {} day(s) of leave taken.",
            total_days
        )));
    }
    Ok(())
}

/// Approved leave the employee can still ask to revert.
pub fn revertible(leaves: &[ApprovalRequest]) -> Vec<ApprovalRequest> {
    leaves
        .iter()
        .filter(|leave| leave.request_status() == Some(RequestStatus::Approved))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_counts_move_in_half_steps() {
        assert_eq!(parse_day_count("1.5", "Days").unwrap(), 1.5);
        assert_eq!(parse_day_count(" 2 ", "Days").unwrap(), 2.0);
        assert!(parse_day_count("0", "Days").is_err());
        assert!(parse_day_count("1.25", "Days").is_err());
        assert!(parse_day_count("two", "Days").is_err());
    }

    #[test]
    fn revert_days_bounded_by_leave() {
        assert!(validate_revert_days(1.0, 3.0).is_ok());
        assert!(validate_revert_days(2.5, 3.0).is_ok());
        assert!(validate_revert_days(3.0, 3.0).is_ok());
        assert!(validate_revert_days(0.5, 3.0).is_err());
        assert!(validate_revert_days(3.5, 3.0).is_err());
    }

    #[test]
    fn only_approved_leave_is_revertible() {
        let rows: Vec<ApprovalRequest> = ["Approved", "Pending", "Rejected"]
            .into_iter()
            .enumerate()
            .map(|(i, status)| ApprovalRequest {
                id: format!("l{}", i),
                status: Some(status.into()),
                ..ApprovalRequest::default()
            })
            .collect();
        let ids: Vec<_> = revertible(&rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["l0"]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn leave_form_validates_dates_and_days() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            assert_eq!(
                form.to_payload().unwrap_err().error,
                "Start date is required."
            );
            form.start_signal().set("2025-02-10".into());
            form.end_signal().set("2025-02-07".into());
            form.days_signal().set("1".into());
            assert_eq!(
                form.to_payload().unwrap_err().error,
                "End date must be on or after the start date."
            );
            form.end_signal().set("2025-02-11".into());
            form.days_signal().set("3".into());
            assert!(form.to_payload().is_err());
            form.days_signal().set("1.5".into());
            form.reason_signal().set("  ".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.total_days, 1.5);
            assert_eq!(payload.reason, None);
            assert_eq!(payload.leave_type, "Casual");
        });
    }

    #[test]
    fn comp_off_is_at_most_one_day() {
        with_runtime(|| {
            let form = CompOffFormState::default();
            form.worked_signal().set("2025-01-04".into());
            assert_eq!(form.to_payload().unwrap().total_days, 1.0);
            form.days_signal().set("1.5".into());
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn revert_form_checks_selected_leave() {
        with_runtime(|| {
            let leaves = vec![
                ApprovalRequest {
                    id: "l1".into(),
                    status: Some("Approved".into()),
                    total_days: Some(3.0),
                    ..ApprovalRequest::default()
                },
                ApprovalRequest {
                    id: "l2".into(),
                    status: Some("Pending".into()),
                    total_days: Some(2.0),
                    ..ApprovalRequest::default()
                },
            ];
            let form = RevertFormState::default();
            assert!(form.to_payload(&leaves).is_err());
            form.leave_signal().set("l2".into());
            form.days_signal().set("1".into());
            assert_eq!(
                form.to_payload(&leaves).unwrap_err().error,
                "Only approved leave can be reverted."
            );
            form.leave_signal().set("l1".into());
            form.days_signal().set("4".into());
            assert!(form.to_payload(&leaves).is_err());
            form.days_signal().set("1.5".into());
            let payload = form.to_payload(&leaves).unwrap();
            assert_eq!(payload.leave_id, "l1");
            assert_eq!(payload.revert_days, 1.5);
        });
    }
}
