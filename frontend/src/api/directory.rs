use super::{
    client::ApiClient,
    types::{
        Announcement, ApiError, CreateAnnouncement, Employee, Holiday, ListQuery, ListResponse,
        MutationEnvelope, PayrollRow,
    },
};

impl ApiClient {
    pub async fn list_employees(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<Employee>, ApiError> {
        self.get_list("/employees", query).await
    }

    pub async fn list_holidays(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<Holiday>, ApiError> {
        self.get_list("/holidays", query).await
    }

    pub async fn list_payroll(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<PayrollRow>, ApiError> {
        self.get_list("/payroll", query).await
    }

    pub async fn list_announcements(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<Announcement>, ApiError> {
        self.get_list("/announcements", query).await
    }

    pub async fn create_announcement(
        &self,
        payload: &CreateAnnouncement,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint("/announcements").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_envelope_response(response).await
    }
}
