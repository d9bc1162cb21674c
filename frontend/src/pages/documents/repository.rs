use crate::api::{ApiClient, ApiError, Document, DocumentUpload, ListQuery, ListResponse, MutationEnvelope};
use std::rc::Rc;

#[derive(Clone)]
pub struct DocumentsRepository {
    client: Rc<ApiClient>,
}

impl DocumentsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<ListResponse<Document>, ApiError> {
        self.client.list_documents(&ListQuery::default()).await
    }

    pub async fn upload(&self, upload: DocumentUpload) -> Result<MutationEnvelope, ApiError> {
        self.client.upload_document(upload).await
    }
}
