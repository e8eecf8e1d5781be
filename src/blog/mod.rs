//! Blog generation request handler
//!
//! One straight-line pipeline per invocation: parse the payload, build the
//! prompt, call the [`GenerateText`](crate::llm::GenerateText) capability,
//! store the text through [`StoreObject`](crate::storage::StoreObject), and
//! answer with a [`ResponseEnvelope`](crate::models::ResponseEnvelope).

pub mod error;
pub mod key;
pub mod prompt;
pub mod request;
pub mod service;

pub use error::GenerationError;
pub use key::storage_key;
pub use prompt::build_prompt;
pub use request::GenerationRequest;
pub use service::BlogService;

/// Generated text and where it was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub content: String,
    pub storage_key: String,
}
