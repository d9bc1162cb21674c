use crate::api::{ApiClient, ApiError, ListQuery, ListResponse, PayrollRow};
use std::rc::Rc;

#[derive(Clone)]
pub struct PayrollRepository {
    client: Rc<ApiClient>,
}

impl PayrollRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn page(
        &self,
        page: u32,
        limit: u32,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<ListResponse<PayrollRow>, ApiError> {
        let query = ListQuery {
            month,
            year,
            ..ListQuery::paged(page, limit)
        };
        self.client.list_payroll(&query).await
    }
}
