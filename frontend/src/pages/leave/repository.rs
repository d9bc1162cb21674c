use crate::api::{
    ApiClient, ApiError, ApprovalKind, ApprovalRequest, CreateCompOffRequest, CreateLeaveRequest,
    CreateRevertRequest, ListQuery, ListResponse, MutationEnvelope,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// The caller's own leave requests; the server scopes the list to the
    /// signed-in employee.
    pub async fn my_leaves(&self) -> Result<ListResponse<ApprovalRequest>, ApiError> {
        self.client
            .list_approvals(ApprovalKind::Leave, &ListQuery::default())
            .await
    }

    pub async fn apply_leave(&self, payload: CreateLeaveRequest) -> Result<MutationEnvelope, ApiError> {
        self.client.apply_leave(&payload).await
    }

    pub async fn apply_comp_off(
        &self,
        payload: CreateCompOffRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        self.client.apply_comp_off(&payload).await
    }

    pub async fn request_revert(
        &self,
        payload: CreateRevertRequest,
    ) -> Result<MutationEnvelope, ApiError> {
        self.client.request_leave_revert(&payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn apply_leave_posts_camel_case_payload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leave/apply");
            then.status(201).json_body(json!({ "success": true }));
        });
        let repo = LeaveRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        repo.apply_leave(CreateLeaveRequest {
            leave_type: "Sick".into(),
            leave_start_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            leave_end_date: NaiveDate::from_ymd_opt(2025, 2, 11).unwrap(),
            total_days: 2.0,
            reason: None,
        })
        .await
        .unwrap();
        let body = server
            .last_call(POST, "/api/leave/apply")
            .and_then(|call| call.json_body())
            .unwrap();
        assert_eq!(body["leaveType"], "Sick");
        assert_eq!(body["leaveStartDate"], "2025-02-10");
        assert_eq!(body["totalDays"], 2.0);
        assert!(body.get("reason").is_none());
    }

    #[tokio::test]
    async fn revert_failure_carries_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leave/revert");
            then.status(400).json_body(json!({ "error": "Leave already reverted" }));
        });
        let repo = LeaveRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let err = repo
            .request_revert(CreateRevertRequest {
                leave_id: "l1".into(),
                revert_days: 1.0,
                reason: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Leave already reverted");
    }
}
