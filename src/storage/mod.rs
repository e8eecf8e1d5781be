//! Object storage for generated content

pub mod error;
pub mod gcs;
pub mod local;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use gcs::GcsStore;
pub use local::LocalStore;
pub use traits::{StoreObject, TEXT_CONTENT_TYPE};
