use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, ListQuery, ListResponse, MutationEnvelope},
    config,
};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = Self::with_auth(builder)
            .build()
            .map_err(|e| ApiError::unknown(format!("Failed to build request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_registry::lookup(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::network(format!("Request failed: {}", e))
        })
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<ListResponse<T>, ApiError> {
        let url = self.endpoint(path).await;
        let response = self
            .send(self.http_client().get(url).query(query))
            .await?;
        self.map_json_response(response).await
    }

    /// A mutation only counts as applied when the status is 2xx and the body
    /// carries a recognizable success flag.
    pub(crate) async fn map_envelope_response(
        &self,
        response: Response,
    ) -> Result<MutationEnvelope, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }
        let envelope: MutationEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        if envelope.is_success() {
            Ok(envelope)
        } else {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "The server did not confirm the update.".to_string());
            Err(ApiError::server(status.as_u16(), message))
        }
    }

    async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<Value>(&text).ok();
        let message = parsed
            .as_ref()
            .and_then(|body| {
                body.get("error")
                    .or_else(|| body.get("message"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
            });
        let mut error = ApiError::server(status.as_u16(), message);
        if let Some(code) = parsed
            .as_ref()
            .and_then(|body| body.get("code"))
            .and_then(|v| v.as_str())
        {
            error.code = code.to_string();
        }
        error.details = parsed.and_then(|body| body.get("details").cloned());
        log::warn!("api error {}: {}", status.as_u16(), error.error);
        error
    }
}

pub(crate) fn encode_path_segment(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, percent_encoding::NON_ALPHANUMERIC).to_string()
}

fn stored_token() -> Option<String> {
    crate::utils::storage::load_preference(crate::utils::storage::AUTH_TOKEN_KEY)
}
