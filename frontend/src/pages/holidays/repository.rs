use crate::api::{ApiClient, ApiError, Holiday, ListQuery, ListResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct HolidaysRepository {
    client: Rc<ApiClient>,
}

impl HolidaysRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn holidays(&self) -> Result<ListResponse<Holiday>, ApiError> {
        self.client.list_holidays(&ListQuery::default()).await
    }
}
