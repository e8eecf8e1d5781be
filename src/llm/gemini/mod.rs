//! Gemini provider implementation
//!
//! Google Gemini models on Vertex AI, streamed through
//! `streamGenerateContent?alt=sse`.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::{GeminiClient, GeminiModel};
