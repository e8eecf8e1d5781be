use async_trait::async_trait;
use bytes::Bytes;

use super::StorageResult;

/// Content type for generated blog text
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Capability to persist a blob under a key
///
/// A successful return means the whole object is stored; writing an existing
/// key replaces it.
#[async_trait]
pub trait StoreObject: Send + Sync {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()>;
}
