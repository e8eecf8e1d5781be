//! Deterministic stand-ins for the inference and storage collaborators

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use blogsmith::blog::BlogService;
use blogsmith::llm::{GenerateText, LlmError};
use blogsmith::storage::{StorageError, StorageResult, StoreObject};

/// Default key prefix used by the tests
pub const PREFIX: &str = "generated-content";

/// Generator that returns canned text or a canned failure
pub struct StubGenerator {
    reply: Result<String, fn() -> LlmError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Self::erroring(|| LlmError::ProviderError {
            code: "UNAVAILABLE".to_string(),
            message: "model is overloaded".to_string(),
        })
    }

    /// Fails the way a generation cut off at the token limit does
    pub fn truncating() -> Arc<Self> {
        Self::erroring(|| LlmError::Truncated { max_tokens: 512 })
    }

    fn erroring(error: fn() -> LlmError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateText for StubGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(error) => Err(error()),
        }
    }
}

/// Store that records every object it is handed
pub struct RecordingStore {
    fail: bool,
    objects: Mutex<Vec<(String, Bytes, String)>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            objects: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            objects: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// (key, body, content type) of each put, in order
    pub fn objects(&self) -> Vec<(String, Bytes, String)> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreObject for RecordingStore {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), body, content_type.to_string()));
        if self.fail {
            return Err(StorageError::UploadFailed {
                status: 403,
                body: "Access denied".to_string(),
            });
        }
        Ok(())
    }
}

pub fn service(generator: Arc<StubGenerator>, store: Arc<RecordingStore>) -> Arc<BlogService> {
    Arc::new(BlogService::new(generator, store, PREFIX))
}
