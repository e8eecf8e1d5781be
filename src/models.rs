// Response shapes shared by the handler, the HTTP layer and the client

use serde::{Deserialize, Serialize};

use crate::blog::{GenerationError, GenerationResult};

pub const SUCCESS_MESSAGE: &str = "Content successfully generated and uploaded.";

// Response body: success or error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success { blog: String, message: String },
    Failure { error: String },
}

impl ResponseBody {
    pub fn error(message: impl Into<String>) -> Self {
        ResponseBody::Failure {
            error: message.into(),
        }
    }
}

// Status code plus body for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl ResponseEnvelope {
    pub fn success(result: GenerationResult) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Success {
                blog: result.content,
                message: SUCCESS_MESSAGE.to_string(),
            },
        }
    }

    pub fn failure(err: &GenerationError) -> Self {
        let status_code = match err {
            GenerationError::InvalidInput(_) => 400,
            GenerationError::Inference(_) => 502,
            GenerationError::Storage(_) => 500,
        };

        Self {
            status_code,
            body: ResponseBody::error(err.public_message()),
        }
    }
}

impl From<Result<GenerationResult, GenerationError>> for ResponseEnvelope {
    fn from(outcome: Result<GenerationResult, GenerationError>) -> Self {
        match outcome {
            Ok(result) => ResponseEnvelope::success(result),
            Err(err) => ResponseEnvelope::failure(&err),
        }
    }
}

// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
