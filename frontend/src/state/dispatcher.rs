use super::toast::Notifier;
use crate::api::{
    ApiError, ApprovalKind, ApprovalRequest, MutationEnvelope, RequestStatus, StatusUpdateRequest,
};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Remote(ApiError),
    #[error("This request has already been {status}.")]
    StaleRecord { status: String },
    #[error("Request not found. Refresh the list and try again.")]
    RecordNotFound,
    #[error("{0}")]
    Validation(String),
}

impl From<ApiError> for ActionError {
    fn from(error: ApiError) -> Self {
        ActionError::Remote(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Approved,
    Rejected,
}

impl TargetStatus {
    pub fn as_status(&self) -> RequestStatus {
        match self {
            TargetStatus::Approved => RequestStatus::Approved,
            TargetStatus::Rejected => RequestStatus::Rejected,
        }
    }

    fn progressive(&self) -> &'static str {
        match self {
            TargetStatus::Approved => "Approving",
            TargetStatus::Rejected => "Rejecting",
        }
    }

    fn past(&self) -> &'static str {
        match self {
            TargetStatus::Approved => "approved",
            TargetStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub id: String,
    pub target: TargetStatus,
    pub reason: Option<String>,
}

impl ActionRequest {
    pub fn approve(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: TargetStatus::Approved,
            reason: None,
        }
    }

    pub fn reject(id: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            id: id.into(),
            target: TargetStatus::Rejected,
            reason,
        }
    }
}

/// Checks a transition against the rows currently on screen and builds the
/// payload. Nothing here touches the network.
pub fn validate(
    records: &[ApprovalRequest],
    kind: ApprovalKind,
    request: &ActionRequest,
) -> Result<StatusUpdateRequest, ActionError> {
    let record = records
        .iter()
        .find(|record| record.id == request.id)
        .ok_or(ActionError::RecordNotFound)?;
    if !record.is_pending() {
        let status = record
            .status
            .as_deref()
            .unwrap_or("processed")
            .to_lowercase();
        return Err(ActionError::StaleRecord { status });
    }
    let remarks = request
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(str::to_string);
    if request.target == TargetStatus::Rejected
        && kind.rejection_requires_reason()
        && remarks.is_none()
    {
        return Err(ActionError::Validation(
            "Please provide a reason for rejection.".into(),
        ));
    }
    Ok(StatusUpdateRequest {
        status: request.target.as_status(),
        id: request.id.clone(),
        remarks,
    })
}

/// Runs approve/reject for one resource: validation, processing toast,
/// mutation, then a success toast and a refetch. Failures leave the data
/// untouched.
pub struct ActionDispatcher<N: Notifier> {
    kind: ApprovalKind,
    notifier: N,
}

impl<N: Notifier> ActionDispatcher<N> {
    pub fn new(kind: ApprovalKind, notifier: N) -> Self {
        Self { kind, notifier }
    }

    pub fn kind(&self) -> ApprovalKind {
        self.kind
    }

    pub async fn apply<S, Fut, R>(
        &self,
        records: &[ApprovalRequest],
        request: ActionRequest,
        send: S,
        refresh: R,
    ) -> Result<MutationEnvelope, ActionError>
    where
        S: FnOnce(ApprovalKind, StatusUpdateRequest) -> Fut,
        Fut: Future<Output = Result<MutationEnvelope, ApiError>>,
        R: FnOnce(),
    {
        let payload = match validate(records, self.kind, &request) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!(
                    "{} {} blocked: {}",
                    self.kind.key(),
                    request.id,
                    err
                );
                self.notifier.error(&err.to_string());
                return Err(err);
            }
        };

        let processing = self.notifier.loading(&format!(
            "{} {}...",
            request.target.progressive(),
            self.kind.resource_name().to_lowercase()
        ));
        let result = send(self.kind, payload).await;
        self.notifier.dismiss(processing);

        match result {
            Ok(envelope) => {
                self.notifier.success(&format!(
                    "{} {}",
                    self.kind.resource_name(),
                    request.target.past()
                ));
                refresh();
                Ok(envelope)
            }
            Err(err) => {
                log::error!(
                    "{} status update for {} failed: {}",
                    self.kind.key(),
                    request.id,
                    err
                );
                self.notifier.error(&err.error);
                Err(ActionError::Remote(err))
            }
        }
    }
}
