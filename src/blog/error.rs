use thiserror::Error;

use crate::llm::LlmError;
use crate::storage::StorageError;

/// Terminal outcomes of a failed invocation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Missing, blank or malformed input; no collaborator was called
    #[error("{0}")]
    InvalidInput(String),

    /// The inference call failed; nothing was stored
    #[error("Inference failed: {0}")]
    Inference(#[from] LlmError),

    /// Inference succeeded but the upload failed; the content was discarded
    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl GenerationError {
    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            GenerationError::InvalidInput(msg) => msg.clone(),
            GenerationError::Inference(_) => {
                "Failed to generate content. Please try again.".to_string()
            }
            GenerationError::Storage(_) => {
                "Failed to upload generated content to storage.".to_string()
            }
        }
    }
}
