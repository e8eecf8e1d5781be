use bytes::Bytes;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::llm::GenerateText;
use crate::models::ResponseEnvelope;
use crate::storage::{StoreObject, TEXT_CONTENT_TYPE};

use super::{build_prompt, storage_key, GenerationError, GenerationRequest, GenerationResult};

/// The request handler: validate, generate, store, respond
///
/// Holds no per-invocation state; one instance serves every request.
pub struct BlogService {
    generator: Arc<dyn GenerateText>,
    store: Arc<dyn StoreObject>,
    key_prefix: String,
}

impl BlogService {
    pub fn new(
        generator: Arc<dyn GenerateText>,
        store: Arc<dyn StoreObject>,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            store,
            key_prefix: key_prefix.into(),
        }
    }

    /// Generate a post and persist it
    ///
    /// Storage is only attempted once inference has returned text. If the
    /// upload fails the text is dropped.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let prompt = build_prompt(request);
        info!(
            topic = %request.topic,
            level = %request.expertise_level,
            "Generating blog content"
        );

        let content = self.generator.generate_text(&prompt).await?;

        let key = storage_key(&self.key_prefix, &request.topic);
        self.store
            .put_object(&key, Bytes::from(content.clone()), TEXT_CONTENT_TYPE)
            .await?;

        info!(%key, bytes = content.len(), "Blog content stored");
        Ok(GenerationResult {
            content,
            storage_key: key,
        })
    }

    /// Run one invocation from raw payload to response envelope
    pub async fn handle(&self, payload: &[u8]) -> ResponseEnvelope {
        let outcome = match GenerationRequest::from_payload(payload) {
            Ok(request) => self.generate(&request).await,
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(_) => {}
            Err(e @ GenerationError::InvalidInput(_)) => warn!(error = %e, "Rejected request"),
            Err(e) => error!(error = %e, "Blog generation failed"),
        }

        ResponseEnvelope::from(outcome)
    }
}
