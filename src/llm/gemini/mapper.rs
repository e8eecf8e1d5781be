//! Mapping between abstraction types and Gemini types

use crate::llm::core::{
    config::GenerationConfig,
    types::{
        FinishReason, GenerateRequest, Message, MessageMetadata, MessageRole, StreamEvent,
        UsageMetadata,
    },
};

use super::client::GeminiModel;
use super::types::{
    Content, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse, Part,
    ThinkingConfig,
};

/// Gemini answers with a single text block
const TEXT_BLOCK: usize = 0;

/// Convert our abstraction request to Gemini's request format
///
/// Thinking is held at the model's minimum budget. That budget is added on
/// top of `max_tokens`, so the visible answer keeps the full allowance.
pub fn to_gemini_request(request: GenerateRequest, model: GeminiModel) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: request.messages.into_iter().map(to_gemini_content).collect(),
        generation_config: Some(to_gemini_generation_config(
            request.config,
            model.min_thinking_budget(),
        )),
    }
}

fn to_gemini_content(message: Message) -> Content {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "model",
    };

    Content {
        role: role.to_string(),
        parts: vec![Part::text(message.content)],
    }
}

fn to_gemini_generation_config(
    config: GenerationConfig,
    thinking_budget: u32,
) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        max_output_tokens: Some(config.max_tokens.saturating_add(thinking_budget)),
        temperature: config.temperature,
        top_p: config.top_p,
        thinking_config: Some(ThinkingConfig { thinking_budget }),
    }
}

/// Per-stream state: Gemini has no explicit start event
#[derive(Debug, Default)]
pub struct GeminiStreamState {
    started: bool,
}

/// Convert one Gemini response chunk into abstraction events
///
/// The first chunk opens the message and its text block; a chunk carrying a
/// finish reason closes both.
pub fn from_gemini_response(
    response: GenerateContentResponse,
    state: &mut GeminiStreamState,
) -> Vec<StreamEvent> {
    let mut events = Vec::new();

    if !state.started {
        state.started = true;
        events.push(StreamEvent::MessageStart {
            message: MessageMetadata {
                id: response.response_id.clone().unwrap_or_default(),
                role: MessageRole::Assistant,
                usage: None,
            },
        });
        events.push(StreamEvent::ContentBlockStart { index: TEXT_BLOCK });
    }

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        events.push(StreamEvent::Error {
            code: "prompt_blocked".to_string(),
            message: format!("Prompt blocked: {}", reason),
        });
        return events;
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return events;
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    for part in parts {
        if part.thought == Some(true) {
            continue;
        }
        if let Some(text) = part.text {
            events.push(StreamEvent::TextDelta {
                index: TEXT_BLOCK,
                text,
            });
        }
    }

    if let Some(finish_reason) = candidate.finish_reason.as_deref() {
        let usage = response
            .usage_metadata
            .map(|u| UsageMetadata {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        events.push(StreamEvent::ContentBlockEnd { index: TEXT_BLOCK });
        events.push(StreamEvent::MessageEnd {
            finish_reason: map_finish_reason(finish_reason),
            usage,
        });
    }

    events
}

fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" | "SPII" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}
