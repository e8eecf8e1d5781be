//! Provider trait for LLM implementations

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use super::{error::LlmError, types::{GenerateRequest, Model, StreamEvent}};
use crate::gcp::AuthenticationManager;
use crate::llm::claude::ClaudeClient;
use crate::llm::gemini::GeminiClient;

/// Boxed stream of provider-neutral events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send>>;

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stream generate content from the LLM
    ///
    /// Sends the request and returns a stream of events representing the
    /// incremental response. Errors before the first byte (auth, HTTP status)
    /// are returned directly; later failures arrive as stream items.
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError>;
}

/// Where and how to reach Vertex AI
#[derive(Debug, Clone)]
pub struct VertexTarget {
    /// GCP project ID
    pub project_id: String,
    /// GCP location (e.g., "us-central1" or "global")
    pub location: String,
    /// Whole-request timeout for the HTTP client
    pub request_timeout: Duration,
}

/// Create an LLM provider for a model on Vertex AI
///
/// Both Claude and Gemini clients connect to Google Cloud Vertex AI and share
/// the given credentials.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use blogsmith::gcp::AuthenticationManager;
/// use blogsmith::llm::{create_provider, GeminiModel, Model, VertexTarget};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = Arc::new(AuthenticationManager::new().await?);
/// let target = VertexTarget {
///     project_id: "my-project".to_string(),
///     location: "us-central1".to_string(),
///     request_timeout: Duration::from_secs(300),
/// };
/// let provider = create_provider(Model::Gemini(GeminiModel::Gemini25Flash), target, auth)?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(
    model: Model,
    target: VertexTarget,
    auth: Arc<AuthenticationManager>,
) -> Result<Box<dyn LlmProvider>, LlmError> {
    match model {
        Model::Claude(claude_model) => {
            let client = ClaudeClient::new(target, claude_model, auth)?;
            Ok(Box::new(client))
        }
        Model::Gemini(gemini_model) => {
            let client = GeminiClient::new(target, gemini_model, auth)?;
            Ok(Box::new(client))
        }
    }
}
