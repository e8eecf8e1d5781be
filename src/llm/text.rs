//! Whole-text generation on top of a streaming provider

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::llm::core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{EventStream, LlmProvider},
    types::{FinishReason, GenerateRequest, Model, StreamEvent, UsageMetadata},
};

/// Capability to turn a prompt into generated text
#[async_trait]
pub trait GenerateText: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Text accumulated from a finished stream
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub finish_reason: Option<FinishReason>,
    pub usage: Option<UsageMetadata>,
}

/// Drain a provider stream into a single text
///
/// Text deltas are concatenated in arrival order and the result is trimmed.
/// An in-band error or a stream failure aborts; blank output is an error.
pub async fn collect_text(mut stream: EventStream) -> Result<Generation, LlmError> {
    let mut text = String::new();
    let mut finish_reason = None;
    let mut usage = None;

    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::TextDelta { text: delta, .. } => text.push_str(&delta),
            StreamEvent::MessageDelta { usage: Some(update) } => usage = Some(update),
            StreamEvent::MessageEnd {
                finish_reason: reason,
                usage: final_usage,
            } => {
                finish_reason = Some(reason);
                usage = Some(final_usage);
            }
            StreamEvent::Error { code, message } => {
                return Err(LlmError::ProviderError { code, message });
            }
            other => debug!(?other, "Ignoring stream event"),
        }
    }

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(Generation {
        text,
        finish_reason,
        usage,
    })
}

/// [`GenerateText`] backed by an [`LlmProvider`] and fixed sampling settings
pub struct TextGenerator {
    provider: Box<dyn LlmProvider>,
    model: Model,
    config: GenerationConfig,
}

impl TextGenerator {
    pub fn new(provider: Box<dyn LlmProvider>, model: Model, config: GenerationConfig) -> Self {
        Self {
            provider,
            model,
            config,
        }
    }
}

#[async_trait]
impl GenerateText for TextGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateRequest::from_prompt(prompt, self.config.clone());
        let stream = self.provider.stream_generate(request).await?;
        let generation = collect_text(stream).await?;

        if generation.finish_reason == Some(FinishReason::MaxTokens) {
            warn!(
                model = %self.model,
                max_tokens = self.config.max_tokens,
                usage = ?generation.usage,
                "Generation hit the token limit"
            );
            return Err(LlmError::Truncated {
                max_tokens: self.config.max_tokens,
            });
        }
        info!(
            model = %self.model,
            finish_reason = ?generation.finish_reason,
            usage = ?generation.usage,
            bytes = generation.text.len(),
            "Generation complete"
        );

        Ok(generation.text)
    }
}
