use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::{StorageError, StorageResult, StoreObject};

/// Filesystem-backed store for running without a bucket
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolve a key under the base path, refusing anything that could escape it
    fn resolve_path(&self, key: &str) -> StorageResult<PathBuf> {
        let relative = Path::new(key);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if key.is_empty() || !is_plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl StoreObject for LocalStore {
    async fn put_object(&self, key: &str, body: Bytes, _content_type: &str) -> StorageResult<()> {
        let path = self.resolve_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, &body).await?;

        info!(path = %path.display(), bytes = body.len(), "Stored object locally");
        Ok(())
    }
}
