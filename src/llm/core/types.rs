//! Core types for the LLM abstraction layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::GenerationConfig;
use crate::llm::claude::ClaudeModel;
use crate::llm::gemini::GeminiModel;

/// Request to generate content from an LLM
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Conversation so far (a single user turn for blog generation)
    pub messages: Vec<Message>,
    /// Generation parameters
    pub config: GenerationConfig,
}

impl GenerateRequest {
    /// Single-turn request carrying one user prompt
    pub fn from_prompt(prompt: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            config,
        }
    }
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Human input
    User,
    /// Model output
    Assistant,
}

/// Events emitted during streaming generation
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Response begins
    MessageStart { message: MessageMetadata },
    /// New text block begins
    ContentBlockStart { index: usize },
    /// Text token(s) for a block
    TextDelta { index: usize, text: String },
    /// Content block complete
    ContentBlockEnd { index: usize },
    /// Usage update without completion
    MessageDelta { usage: Option<UsageMetadata> },
    /// Response complete
    MessageEnd {
        finish_reason: FinishReason,
        usage: UsageMetadata,
    },
    /// Error reported inside the stream
    Error { code: String, message: String },
}

/// Metadata about a message
#[derive(Debug, Clone, PartialEq)]
pub struct MessageMetadata {
    pub id: String,
    pub role: MessageRole,
    /// Initial usage metadata (if available)
    pub usage: Option<UsageMetadata>,
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    EndTurn,
    /// Natural completion (alternative name)
    Stop,
    /// Hit token limit
    MaxTokens,
    /// Hit stop sequence
    StopSequence,
    /// Blocked by safety filters
    Safety,
    /// Provider-specific reason
    Other(String),
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl UsageMetadata {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// Unified model enum for all supported LLM providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Model {
    /// Anthropic Claude model on Vertex AI
    Claude(ClaudeModel),
    /// Google Gemini model on Vertex AI
    Gemini(GeminiModel),
}

impl Model {
    /// Get the model identifier as a string
    pub fn as_str(&self) -> &str {
        match self {
            Model::Claude(model) => model.as_str(),
            Model::Gemini(model) => model.as_str(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A model identifier that names no supported model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown model identifier: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if let Some(model) = ClaudeModel::from_id(id) {
            return Ok(Model::Claude(model));
        }
        if let Some(model) = GeminiModel::from_id(id) {
            return Ok(Model::Gemini(model));
        }
        Err(UnknownModel(id.to_string()))
    }
}
