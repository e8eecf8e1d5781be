//! Google Cloud plumbing shared by the Vertex AI and Cloud Storage clients

pub mod auth;

pub use auth::{AuthError, AuthenticationManager};

/// Vertex AI API host for a location
///
/// Regional endpoints are prefixed with the location; the `global` location
/// has no prefix.
pub fn vertex_host(location: &str) -> String {
    if location == "global" {
        "aiplatform.googleapis.com".to_string()
    } else {
        format!("{}-aiplatform.googleapis.com", location)
    }
}
