use crate::api::{
    ApiClient, ApiError, ApprovalKind, ApprovalRequest, ListQuery, ListResponse,
    MutationEnvelope, StatusUpdateRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApprovalsRepository {
    client: Rc<ApiClient>,
}

impl ApprovalsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Approval lists are paged in the browser, so the whole collection is
    /// requested.
    pub async fn list(
        &self,
        kind: ApprovalKind,
    ) -> Result<ListResponse<ApprovalRequest>, ApiError> {
        self.client
            .list_approvals(kind, &ListQuery::default())
            .await
    }

    pub async fn update_status(
        &self,
        kind: ApprovalKind,
        payload: StatusUpdateRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        self.client.update_approval_status(kind, &payload).await
    }
}
