//! Inbound payload parsing and validation

use serde::Deserialize;
use serde_json::Value;

use super::GenerationError;

/// A validated request to write one blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub expertise_level: String,
    pub context: String,
}

/// Wire shape of the inbound object
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationPayload {
    blog_topic: Option<String>,
    level: Option<String>,
    context: Option<String>,
}

impl GenerationRequest {
    /// Build a request, trimming each field and rejecting blank ones
    pub fn new(
        topic: impl Into<String>,
        expertise_level: impl Into<String>,
        context: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            topic: required("blogTopic", Some(topic.into()))?,
            expertise_level: required("level", Some(expertise_level.into()))?,
            context: required("context", Some(context.into()))?,
        })
    }

    /// Parse a raw request body
    ///
    /// The payload is either the request object itself or an event envelope
    /// whose `body` holds the object, inline or as a JSON string.
    pub fn from_payload(payload: &[u8]) -> Result<Self, GenerationError> {
        let value: Value = serde_json::from_slice(payload)
            .map_err(|_| GenerationError::InvalidInput("Invalid JSON payload".to_string()))?;

        let value = unwrap_envelope(value)?;
        if !value.is_object() {
            return Err(GenerationError::InvalidInput(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let payload: GenerationPayload = serde_json::from_value(value).map_err(|e| {
            GenerationError::InvalidInput(format!("Invalid request payload: {}", e))
        })?;

        Ok(Self {
            topic: required("blogTopic", payload.blog_topic)?,
            expertise_level: required("level", payload.level)?,
            context: required("context", payload.context)?,
        })
    }
}

fn unwrap_envelope(value: Value) -> Result<Value, GenerationError> {
    match value {
        Value::Object(mut map) => match map.remove("body") {
            Some(Value::String(body)) => serde_json::from_str(&body).map_err(|_| {
                GenerationError::InvalidInput("Invalid JSON payload".to_string())
            }),
            Some(body) => Ok(body),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, GenerationError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GenerationError::InvalidInput(format!("{} is required", field))),
    }
}
