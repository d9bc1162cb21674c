use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, ListQuery, ListResponse, MutationEnvelope},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<AttendanceRecord>, ApiError> {
        self.get_list("/attendance", query).await
    }

    pub async fn punch_in(&self) -> Result<MutationEnvelope, ApiError> {
        self.punch("/attendance/punch-in").await
    }

    pub async fn punch_out(&self) -> Result<MutationEnvelope, ApiError> {
        self.punch("/attendance/punch-out").await
    }

    async fn punch(&self, path: &str) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint(path).await;
        let response = self
            .send(self.http_client().post(url).json(&json!({})))
            .await?;
        self.map_envelope_response(response).await
    }
}
