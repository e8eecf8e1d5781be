//! Gemini client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use crate::gcp::{vertex_host, AuthenticationManager};
use crate::llm::core::{
    error::LlmError,
    provider::{EventStream, LlmProvider, VertexTarget},
    types::{GenerateRequest, StreamEvent},
};
use crate::llm::http::{build_client, ensure_success};
use crate::llm::sse::parse_sse_stream;

use super::mapper::{from_gemini_response, to_gemini_request, GeminiStreamState};
use super::types::GenerateContentResponse;

/// Gemini model identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiModel {
    Gemini25Pro,
    Gemini25Flash,
    Gemini25FlashLite,
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }

    /// Smallest thinking budget the model accepts
    ///
    /// Flash and Flash-Lite can switch thinking off; Pro always thinks.
    pub fn min_thinking_budget(&self) -> u32 {
        match self {
            GeminiModel::Gemini25Pro => 128,
            GeminiModel::Gemini25Flash | GeminiModel::Gemini25FlashLite => 0,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [
            GeminiModel::Gemini25Pro,
            GeminiModel::Gemini25Flash,
            GeminiModel::Gemini25FlashLite,
        ]
        .into_iter()
        .find(|model| model.as_str() == id)
    }
}

/// Client for interacting with Gemini models on Vertex AI
pub struct GeminiClient {
    http_client: Client,
    auth_manager: Arc<AuthenticationManager>,
    target: VertexTarget,
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        target: VertexTarget,
        model: GeminiModel,
        auth_manager: Arc<AuthenticationManager>,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http_client: build_client(target.request_timeout)?,
            auth_manager,
            target,
            model,
        })
    }

    fn build_endpoint_url(&self) -> String {
        endpoint_url(&self.target.project_id, &self.target.location, self.model)
    }
}

fn endpoint_url(project_id: &str, location: &str, model: GeminiModel) -> String {
    format!(
        "https://{}/v1/projects/{}/locations/{}/publishers/google/models/{}:streamGenerateContent?alt=sse",
        vertex_host(location),
        project_id,
        location,
        model.as_str()
    )
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        let gemini_request = to_gemini_request(request, self.model);
        let token = self.auth_manager.get_token().await?;

        let url = self.build_endpoint_url();
        debug!(%url, "Calling Gemini streamGenerateContent");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&gemini_request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let sse_stream =
            parse_sse_stream::<GenerateContentResponse>(Box::pin(response.bytes_stream()));

        let mut state = GeminiStreamState::default();
        let event_stream = sse_stream.flat_map(move |result| {
            let events: Vec<Result<StreamEvent, LlmError>> = match result {
                Ok(chunk) => from_gemini_response(chunk, &mut state)
                    .into_iter()
                    .map(Ok)
                    .collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(events)
        });

        Ok(Box::pin(event_stream))
    }
}
