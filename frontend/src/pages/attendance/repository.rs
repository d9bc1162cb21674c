use crate::api::{ApiClient, ApiError, AttendanceRecord, ListQuery, ListResponse, MutationEnvelope};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn history(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ListResponse<AttendanceRecord>, ApiError> {
        let query = ListQuery {
            date_from: from,
            date_to: to,
            ..ListQuery::default()
        };
        self.client.list_attendance(&query).await
    }

    pub async fn punch_in(&self) -> Result<MutationEnvelope, ApiError> {
        self.client.punch_in().await
    }

    pub async fn punch_out(&self) -> Result<MutationEnvelope, ApiError> {
        self.client.punch_out().await
    }
}
