//! Claude provider implementation
//!
//! Anthropic Claude models hosted on Vertex AI, streamed through
//! `streamRawPredict`.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::{ClaudeClient, ClaudeModel};
