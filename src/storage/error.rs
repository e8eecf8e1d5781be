use thiserror::Error;

use crate::gcp::AuthError;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    #[error("Upload failed (status {status}): {body}")]
    UploadFailed { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
