//! Application Default Credentials (ADC) wrapper

use gcp_auth::AuthenticationManager as GcpAuthManager;
use thiserror::Error;

/// OAuth scope covering both Vertex AI and Cloud Storage
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Credential discovery or token refresh failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// No usable credential source was found
    #[error("Failed to initialize ADC: {0}")]
    Initialization(String),

    /// A token could not be fetched or refreshed
    #[error("Failed to get token: {0}")]
    Token(String),
}

/// Manages GCP access tokens using Application Default Credentials
///
/// One instance is shared (behind an `Arc`) by the inference and storage
/// clients. Token caching and refresh are handled by `gcp_auth`.
///
/// Supports multiple credential sources:
/// - `GOOGLE_APPLICATION_CREDENTIALS` environment variable
/// - User credentials from `gcloud auth application-default login`
/// - Metadata server (Compute Engine, Cloud Run, GKE)
pub struct AuthenticationManager {
    inner: GcpAuthManager,
}

impl AuthenticationManager {
    /// Discover credentials using the standard ADC flow
    ///
    /// # Errors
    /// Returns an error if no valid credentials can be found.
    pub async fn new() -> Result<Self, AuthError> {
        let inner = GcpAuthManager::new()
            .await
            .map_err(|e| AuthError::Initialization(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Get a bearer token for the cloud platform scope
    ///
    /// # Errors
    /// Returns an error if token retrieval or refresh fails.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        let token = self
            .inner
            .get_token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| AuthError::Token(e.to_string()))?;

        Ok(token.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        let err = AuthError::Initialization("no credentials".to_string());
        assert_eq!(err.to_string(), "Failed to initialize ADC: no credentials");

        let err = AuthError::Token("expired".to_string());
        assert_eq!(err.to_string(), "Failed to get token: expired");
    }

    #[tokio::test]
    #[ignore] // Only run with valid credentials
    async fn test_get_token() {
        let auth = AuthenticationManager::new()
            .await
            .expect("Failed to initialize AuthenticationManager");

        let token = auth
            .get_token()
            .await
            .expect("Failed to retrieve access token");

        assert!(!token.is_empty(), "Token should not be empty");
        assert!(
            token.len() > 20,
            "Token seems too short: {} characters",
            token.len()
        );
    }
}
