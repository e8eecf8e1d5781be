//! Claude client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use crate::gcp::{vertex_host, AuthenticationManager};
use crate::llm::core::{
    error::LlmError,
    provider::{EventStream, LlmProvider, VertexTarget},
    types::{GenerateRequest, StreamEvent, UsageMetadata},
};
use crate::llm::http::{build_client, ensure_success};
use crate::llm::sse::parse_sse_stream;

use super::mapper::{from_claude_event, to_claude_request};
use super::types::ClaudeStreamEvent;

/// Claude model identifiers for Vertex AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaudeModel {
    /// Claude Sonnet 4.5 (released 2025-09-29)
    Sonnet45,
    /// Claude Haiku 4.5 (released 2025-10-01)
    Haiku45,
}

impl ClaudeModel {
    /// Get the model identifier string for Vertex AI
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaudeModel::Sonnet45 => "claude-sonnet-4-5@20250929",
            ClaudeModel::Haiku45 => "claude-haiku-4-5@20251001",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [ClaudeModel::Sonnet45, ClaudeModel::Haiku45]
            .into_iter()
            .find(|model| model.as_str() == id)
    }
}

/// Client for interacting with Claude models on Vertex AI
pub struct ClaudeClient {
    http_client: Client,
    auth_manager: Arc<AuthenticationManager>,
    target: VertexTarget,
    model: ClaudeModel,
}

impl ClaudeClient {
    /// Create a new Claude client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        target: VertexTarget,
        model: ClaudeModel,
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

fn endpoint_url(project_id: &str, location: &str, model: ClaudeModel) -> String {
    format!(
        "https://{}/v1/projects/{}/locations/{}/publishers/anthropic/models/{}:streamRawPredict",
        vertex_host(location),
        project_id,
        location,
        model.as_str()
    )
}

#[async_trait]
impl LlmProvider for ClaudeClient {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        let claude_request = to_claude_request(request);
        let token = self.auth_manager.get_token().await?;

        let url = self.build_endpoint_url();
        debug!(%url, "Calling Claude streamRawPredict");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&claude_request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let sse_stream = parse_sse_stream::<ClaudeStreamEvent>(Box::pin(response.bytes_stream()));

        let mut accumulated_usage = UsageMetadata::default();
        let event_stream = sse_stream.flat_map(move |result| {
            let events: Vec<Result<StreamEvent, LlmError>> = match result {
                Ok(claude_event) => from_claude_event(claude_event, &mut accumulated_usage)
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
