//! Mapping between abstraction types and Claude-specific types

use crate::llm::core::types::{
    FinishReason, GenerateRequest, Message, MessageMetadata, MessageRole, StreamEvent,
    UsageMetadata,
};

use super::types::{
    ClaudeContentBlockStart, ClaudeContentDelta, ClaudeMessage, ClaudeStreamEvent,
    StreamRawPredictRequest, ANTHROPIC_VERSION,
};

/// Convert our abstraction request to Claude's request format
pub fn to_claude_request(request: GenerateRequest) -> StreamRawPredictRequest {
    StreamRawPredictRequest {
        anthropic_version: ANTHROPIC_VERSION.to_string(),
        max_tokens: request.config.max_tokens,
        messages: request.messages.into_iter().map(to_claude_message).collect(),
        temperature: request.config.temperature,
        top_p: request.config.top_p,
        stream: true,
    }
}

fn to_claude_message(message: Message) -> ClaudeMessage {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    };

    ClaudeMessage {
        role: role.to_string(),
        content: message.content,
    }
}

/// Convert one Claude stream event into zero or more abstraction events
///
/// `accumulated_usage` carries input tokens from `message_start` forward to
/// the final `message_delta`, which only reports output tokens.
pub fn from_claude_event(
    event: ClaudeStreamEvent,
    accumulated_usage: &mut UsageMetadata,
) -> Vec<StreamEvent> {
    match event {
        ClaudeStreamEvent::MessageStart { message } => {
            *accumulated_usage =
                UsageMetadata::new(message.usage.input_tokens, message.usage.output_tokens);

            vec![StreamEvent::MessageStart {
                message: MessageMetadata {
                    id: message.id,
                    role: MessageRole::Assistant,
                    usage: Some(*accumulated_usage),
                },
            }]
        }
        ClaudeStreamEvent::ContentBlockStart {
            index,
            content_block: ClaudeContentBlockStart::Text { text },
        } => {
            let mut events = vec![StreamEvent::ContentBlockStart { index }];
            if !text.is_empty() {
                events.push(StreamEvent::TextDelta { index, text });
            }
            events
        }
        ClaudeStreamEvent::ContentBlockDelta {
            index,
            delta: ClaudeContentDelta::TextDelta { text },
        } => vec![StreamEvent::TextDelta { index, text }],
        ClaudeStreamEvent::ContentBlockStop { index } => {
            vec![StreamEvent::ContentBlockEnd { index }]
        }
        ClaudeStreamEvent::MessageDelta { delta, usage } => {
            if let Some(usage) = usage {
                *accumulated_usage =
                    UsageMetadata::new(accumulated_usage.input_tokens, usage.output_tokens);
            }

            match delta.stop_reason {
                Some(stop_reason) => vec![StreamEvent::MessageEnd {
                    finish_reason: map_stop_reason(&stop_reason),
                    usage: *accumulated_usage,
                }],
                None => vec![StreamEvent::MessageDelta {
                    usage: Some(*accumulated_usage),
                }],
            }
        }
        // message_stop follows the final message_delta and carries nothing new
        ClaudeStreamEvent::MessageStop | ClaudeStreamEvent::Ping => vec![],
        ClaudeStreamEvent::Error { error } => vec![StreamEvent::Error {
            code: error.error_type,
            message: error.message,
        }],
    }
}

fn map_stop_reason(reason: &str) -> FinishReason {
    match reason {
        "end_turn" => FinishReason::EndTurn,
        "max_tokens" => FinishReason::MaxTokens,
        "stop_sequence" => FinishReason::StopSequence,
        "refusal" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}
