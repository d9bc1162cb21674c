use crate::api::{ApiClient, ApiError, Employee, ListQuery, ListResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct DirectoryRepository {
    client: Rc<ApiClient>,
}

impl DirectoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employees(&self) -> Result<ListResponse<Employee>, ApiError> {
        self.client.list_employees(&ListQuery::default()).await
    }
}
