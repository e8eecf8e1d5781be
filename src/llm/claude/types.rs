//! Claude-specific request and response types
//!
//! These types map directly to the Vertex AI Claude API schema.

use serde::{Deserialize, Serialize};

/// Version string Vertex AI requires on every Claude request
pub const ANTHROPIC_VERSION: &str = "vertex-2023-10-16";

/// Request to stream raw predictions from Claude via Vertex AI
#[derive(Debug, Clone, Serialize)]
pub struct StreamRawPredictRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Always true; responses are consumed as SSE
    pub stream: bool,
}

/// A single plain-text message
#[derive(Debug, Clone, Serialize)]
pub struct ClaudeMessage {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

/// SSE event types from Claude streaming API
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeStreamEvent {
    MessageStart {
        message: ClaudeMessageData,
    },
    ContentBlockStart {
        index: usize,
        content_block: ClaudeContentBlockStart,
    },
    ContentBlockDelta {
        index: usize,
        delta: ClaudeContentDelta,
    },
    ContentBlockStop {
        index: usize,
    },
    MessageDelta {
        delta: ClaudeMessageDeltaData,
        usage: Option<ClaudeUsage>,
    },
    MessageStop,
    /// Keep-alive
    Ping,
    Error {
        error: ClaudeErrorData,
    },
}

/// Message data from message_start event
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessageData {
    pub id: String,
    pub model: String,
    pub usage: ClaudeUsage,
}

/// Content block start data
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentBlockStart {
    Text { text: String },
}

/// Content delta (incremental update)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentDelta {
    TextDelta { text: String },
}

/// Message delta data
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessageDeltaData {
    /// Set when the message completes
    pub stop_reason: Option<String>,
}

/// Usage metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeUsage {
    /// Not present in message_delta updates
    #[serde(default)]
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeErrorData {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_raw_predict_request_serialization() {
        let request = StreamRawPredictRequest {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: 512,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            temperature: Some(0.5),
            top_p: None,
            stream: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["anthropic_version"], "vertex-2023-10-16");
        assert_eq!(json["max_tokens"], 512);
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["content"], "Hello");
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn test_message_start_deserialization_ignores_extra_fields() {
        let json = r#"{"type":"message_start","message":{"id":"msg_123","type":"message","role":"assistant","content":[],"model":"claude-sonnet-4-5","stop_reason":null,"stop_sequence":null,"usage":{"input_tokens":10,"output_tokens":0}}}"#;

        match serde_json::from_str::<ClaudeStreamEvent>(json).unwrap() {
            ClaudeStreamEvent::MessageStart { message } => {
                assert_eq!(message.id, "msg_123");
                assert_eq!(message.usage.input_tokens, 10);
            }
            other => panic!("Expected MessageStart event, got {:?}", other),
        }
    }

    #[test]
    fn test_message_delta_usage_without_input_tokens() {
        let json = r#"{"type":"message_delta","delta":{"stop_reason":"end_turn","stop_sequence":null},"usage":{"output_tokens":25}}"#;

        match serde_json::from_str::<ClaudeStreamEvent>(json).unwrap() {
            ClaudeStreamEvent::MessageDelta { delta, usage } => {
                assert_eq!(delta.stop_reason.as_deref(), Some("end_turn"));
                let usage = usage.unwrap();
                assert_eq!(usage.input_tokens, 0);
                assert_eq!(usage.output_tokens, 25);
            }
            other => panic!("Expected MessageDelta event, got {:?}", other),
        }
    }

    #[test]
    fn test_error_event_deserialization() {
        let json = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;

        match serde_json::from_str::<ClaudeStreamEvent>(json).unwrap() {
            ClaudeStreamEvent::Error { error } => {
                assert_eq!(error.error_type, "overloaded_error");
                assert_eq!(error.message, "Overloaded");
            }
            other => panic!("Expected Error event, got {:?}", other),
        }
    }

    #[test]
    fn test_ping_and_stop_deserialization() {
        assert!(matches!(
            serde_json::from_str::<ClaudeStreamEvent>(r#"{"type":"ping"}"#).unwrap(),
            ClaudeStreamEvent::Ping
        ));
        assert!(matches!(
            serde_json::from_str::<ClaudeStreamEvent>(r#"{"type":"message_stop"}"#).unwrap(),
            ClaudeStreamEvent::MessageStop
        ));
    }
}
