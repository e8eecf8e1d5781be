//! HTTP helpers shared by the Vertex AI clients

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode};

use crate::llm::core::error::LlmError;

/// Build the HTTP client used for Vertex AI calls
pub fn build_client(request_timeout: Duration) -> Result<Client, LlmError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(request_timeout)
        .build()
        .map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })
}

/// Pass through a successful response, or turn the status into an error
pub async fn ensure_success(response: Response) -> Result<Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        return Err(LlmError::RateLimitExceeded { retry_after });
    }

    let body = response.text().await.unwrap_or_default();
    Err(LlmError::HttpError {
        status: status.as_u16(),
        body,
    })
}

/// Only the delay-seconds form of `Retry-After` is understood
fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
