use serde::{Deserialize, Serialize};

use super::{
    client::ApiClient,
    types::{
        ApiError, ApprovalRequest, CreateCompOffRequest, CreateLeaveRequest, CreateRevertRequest,
        ListQuery, ListResponse, MutationEnvelope, StatusUpdateRequest,
    },
};

/// Resource families that go through the approve/reject workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalKind {
    Leave,
    CompOff,
    VendorMeeting,
    Revert,
}

impl ApprovalKind {
    pub const ALL: [ApprovalKind; 4] = [
        ApprovalKind::Leave,
        ApprovalKind::CompOff,
        ApprovalKind::VendorMeeting,
        ApprovalKind::Revert,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ApprovalKind::Leave => "leave",
            ApprovalKind::CompOff => "compoff",
            ApprovalKind::VendorMeeting => "vendor",
            ApprovalKind::Revert => "revert",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalKind::Leave => "Leave",
            ApprovalKind::CompOff => "Comp-off",
            ApprovalKind::VendorMeeting => "Vendor meeting",
            ApprovalKind::Revert => "Leave revert",
        }
    }

    /// Noun used in toasts, e.g. "Leave request approved".
    pub fn resource_name(&self) -> &'static str {
        match self {
            ApprovalKind::Leave => "Leave request",
            ApprovalKind::CompOff => "Comp-off request",
            ApprovalKind::VendorMeeting => "Vendor meeting",
            ApprovalKind::Revert => "Revert request",
        }
    }

    pub fn list_path(&self) -> &'static str {
        match self {
            ApprovalKind::Leave => "/leave/requests",
            ApprovalKind::CompOff => "/comp-off/requests",
            ApprovalKind::VendorMeeting => "/vendor-meetings",
            ApprovalKind::Revert => "/leave/revert-requests",
        }
    }

    pub fn status_path(&self) -> String {
        format!("{}/status", self.list_path())
    }

    /// Only leave rejections collect a mandatory reason.
    pub fn rejection_requires_reason(&self) -> bool {
        matches!(self, ApprovalKind::Leave)
    }
}

impl ApiClient {
    pub async fn list_approvals(
        &self,
        kind: ApprovalKind,
        query: &ListQuery,
    ) -> Result<ListResponse<ApprovalRequest>, ApiError> {
        self.get_list(kind.list_path(), query).await
    }

    pub async fn update_approval_status(
        &self,
        kind: ApprovalKind,
        payload: &StatusUpdateRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint(&kind.status_path()).await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_envelope_response(response).await
    }

    pub async fn apply_leave(
        &self,
        payload: &CreateLeaveRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint("/leave/apply").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_envelope_response(response).await
    }

    pub async fn apply_comp_off(
        &self,
        payload: &CreateCompOffRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint("/comp-off/apply").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_envelope_response(response).await
    }

    pub async fn request_leave_revert(
        &self,
        payload: &CreateRevertRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint("/leave/revert").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_envelope_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_keys_round_trip() {
        for kind in ApprovalKind::ALL {
            assert_eq!(ApprovalKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ApprovalKind::from_key("payroll"), None);
    }

    #[test]
    fn only_leave_rejection_needs_reason() {
        assert!(ApprovalKind::Leave.rejection_requires_reason());
        assert!(!ApprovalKind::CompOff.rejection_requires_reason());
        assert!(!ApprovalKind::VendorMeeting.rejection_requires_reason());
        assert!(!ApprovalKind::Revert.rejection_requires_reason());
    }

    #[test]
    fn status_path_extends_list_path() {
        assert_eq!(
            ApprovalKind::CompOff.status_path(),
            "/comp-off/requests/status"
        );
    }
}
