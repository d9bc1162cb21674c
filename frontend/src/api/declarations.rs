use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, Declaration, MutationEnvelope},
};
use serde::Deserialize;

#[derive(Deserialize)]
struct DeclarationEnvelope {
    #[serde(default)]
    data: Option<Declaration>,
}

impl ApiClient {
    /// Returns `None` when the employee has not declared anything yet.
    pub async fn get_declaration(
        &self,
        employee_id: &str,
    ) -> Result<Option<Declaration>, ApiError> {
        let url = self
            .endpoint(&format!(
                "/tax-declarations/{}",
                encode_path_segment(employee_id)
            ))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: DeclarationEnvelope = self.map_json_response(response).await?;
        Ok(envelope.data)
    }

    pub async fn submit_declaration(
        &self,
        declaration: &Declaration,
    ) -> Result<MutationEnvelope, ApiError> {
        let url = self.endpoint("/tax-declarations").await;
        let response = self
            .send(self.http_client().post(url).json(declaration))
            .await?;
        self.map_envelope_response(response).await
    }
}
