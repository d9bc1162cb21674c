use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, Document, DocumentUpload, ListQuery, ListResponse, MutationEnvelope},
};

fn upload_form(upload: DocumentUpload) -> Result<Form, ApiError> {
    let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
    if let Some(content_type) = upload.content_type.as_deref() {
        part = part
            .mime_str(content_type)
            .map_err(|_| ApiError::validation(format!("Unsupported file type: {}", content_type)))?;
    }
    Ok(Form::new()
        .text("docType", upload.doc_type.as_str())
        .text("documentName", upload.document_name)
        .text("employeeId", upload.employee_id)
        .part("file", part))
}

impl ApiClient {
    pub async fn list_documents(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<Document>, ApiError> {
        self.get_list("/documents", query).await
    }

    pub async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> Result<MutationEnvelope, ApiError> {
        let form = upload_form(upload)?;
        let url = self.endpoint("/documents/upload").await;
        let response = self
            .send(self.http_client().post(url).multipart(form))
            .await?;
        self.map_envelope_response(response).await
    }
}
