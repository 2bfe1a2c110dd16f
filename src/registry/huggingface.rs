//! Hugging Face Hub model listing
//!
//! Uses the public `/api/models` endpoint, which accepts the same
//! `search`/`limit`/`sort`/`direction` parameters as the hub client
//! libraries. Task filters are sent as `pipeline_tag`.

use super::traits::*;
use crate::config::HubSettings;
use crate::network::{HttpClient, HttpRequest, HttpResponse};
use async_trait::async_trait;
use tracing::debug;

/// Default model listing endpoint
pub const DEFAULT_API_URL: &str = "https://huggingface.co/api/models";

/// Hugging Face Hub model registry
pub struct HuggingFaceHub {
    client: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl HuggingFaceHub {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }

    pub fn with_settings(client: HttpClient, settings: &HubSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            token: settings.token.clone(),
        }
    }

    /// Override the listing endpoint
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Build the HTTP request for a listing
    pub fn request(&self, query: &ModelQuery) -> HttpRequest {
        let mut request = HttpRequest::get(&self.api_url)
            .param("search", &query.search)
            .param("limit", query.limit)
            .param("sort", &query.sort)
            .param("direction", query.direction);

        if let Some(ref task) = query.task {
            request = request.param("pipeline_tag", task);
        }

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request
    }

    /// Parse a listing response
    pub fn response(&self, response: HttpResponse) -> Result<Vec<HubModel>, RegistryError> {
        if !response.is_success() {
            return Err(RegistryError::Status {
                status: response.status,
                body: response.text.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&response.text)?)
    }
}

#[async_trait]
impl ModelProvider for HuggingFaceHub {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn list_models(&self, query: &ModelQuery) -> Result<Vec<HubModel>, RegistryError> {
        let request = self.request(query);
        debug!(
            "Listing models from {} (search={:?}, limit={})",
            self.api_url, query.search, query.limit
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(RegistryError::Network)?;

        self.response(response)
    }
}
