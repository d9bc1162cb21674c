use crate::api::{ApiClient, ApiError, Declaration, MutationEnvelope};
use std::rc::Rc;

#[derive(Clone)]
pub struct DeclarationRepository {
    client: Rc<ApiClient>,
}

impl DeclarationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self, employee_id: &str) -> Result<Option<Declaration>, ApiError> {
        self.client.get_declaration(employee_id).await
    }

    pub async fn submit(&self, declaration: Declaration) -> Result<MutationEnvelope, ApiError> {
        self.client.submit_declaration(&declaration).await
    }
}
