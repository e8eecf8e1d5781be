use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::gcp::AuthenticationManager;

use super::{StorageError, StorageResult, StoreObject};

const UPLOAD_BASE_URL: &str = "https://storage.googleapis.com/upload/storage/v1";

/// Google Cloud Storage bucket written through the JSON API media upload
///
/// Each object is sent in one request, so an upload either creates the whole
/// object or nothing.
pub struct GcsStore {
    http_client: Client,
    auth_manager: Arc<AuthenticationManager>,
    bucket: String,
}

impl GcsStore {
    pub fn new(
        bucket: impl Into<String>,
        auth_manager: Arc<AuthenticationManager>,
        request_timeout: Duration,
    ) -> StorageResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            auth_manager,
            bucket: bucket.into(),
        })
    }
}

fn upload_url(bucket: &str) -> String {
    format!("{}/b/{}/o", UPLOAD_BASE_URL, bucket)
}

#[async_trait]
impl StoreObject for GcsStore {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let token = self.auth_manager.get_token().await?;
        let size = body.len();

        let response = self
            .http_client
            .post(upload_url(&self.bucket))
            .query(&[("uploadType", "media"), ("name", key)])
            .bearer_auth(token)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        info!(bucket = %self.bucket, %key, bytes = size, "Uploaded object");
        Ok(())
    }
}
