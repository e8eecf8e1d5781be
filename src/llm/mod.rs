//! LLM abstraction layer
//!
//! A unified interface for streaming text generation from Anthropic Claude
//! and Google Gemini models hosted on Vertex AI, plus the whole-text
//! [`GenerateText`] capability the blog handler depends on.

pub mod core;
pub mod claude;
pub mod gemini;
pub mod http;
pub mod sse;
pub mod text;

pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{create_provider, EventStream, LlmProvider, VertexTarget},
    types::{
        FinishReason, GenerateRequest, Message, MessageRole, Model, StreamEvent, UnknownModel,
        UsageMetadata,
    },
};

pub use claude::ClaudeModel;
pub use gemini::GeminiModel;
pub use text::{collect_text, GenerateText, Generation, TextGenerator};
