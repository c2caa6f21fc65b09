//! Downstream Gavagai API client.
//!
//! # Responsibilities
//! - Build the per-project GET request with bearer auth
//! - Enforce the downstream timeout
//! - Decode the downstream JSON body
//!
//! # Design Decisions
//! - One shared hyper client, connections reused across requests
//! - Every downstream call has a deadline; no call can block forever
//! - The downstream body is relayed as opaque JSON, never interpreted

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde_json::Value;
use thiserror::Error;
use tokio::time;

use crate::config::GavagaiConfig;
use crate::http::request::X_REQUEST_ID;

/// Upper bound on a buffered downstream response body.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Failure modes of a single relay attempt.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Gavagai answered with a non-2xx status.
    #[error("gavagai returned status {status}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// The downstream call exceeded its deadline.
    #[error("gavagai request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection-level failure (refused, reset, DNS).
    #[error("gavagai request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    /// Gavagai answered 2xx but the body was not valid JSON.
    #[error("gavagai response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body could not be read or exceeded the buffer limit.
    #[error("failed to read gavagai response body: {0}")]
    Body(axum::Error),

    /// The outbound request could not be constructed.
    #[error("failed to build gavagai request: {0}")]
    InvalidRequest(#[from] axum::http::Error),
}

/// Client for the Gavagai sentiment-analysis API.
pub struct GavagaiClient {
    client: Client<HttpConnector, Body>,
    config: GavagaiConfig,
}

impl GavagaiClient {
    /// Create a new client for the configured downstream.
    pub fn new(config: GavagaiConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, config }
    }

    /// The downstream URL for a project, with the ID rendered verbatim.
    pub fn project_url(&self, project_id: &str) -> String {
        format!(
            "{}/projects/{}",
            self.config.api_url.trim_end_matches('/'),
            project_id
        )
    }

    /// Fetch project insights downstream.
    ///
    /// The call is a bodiless GET; the inbound payload only shapes the URL.
    pub async fn fetch_project(
        &self,
        project_id: &str,
        request_id: &str,
    ) -> Result<Value, RelayError> {
        let url = self.project_url(project_id);

        let request = Request::builder()
            .method(Method::GET)
            .uri(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_token),
            )
            .header(X_REQUEST_ID, request_id)
            .body(Body::empty())?;

        let deadline = Duration::from_secs(self.config.request_timeout_secs);
        let response = time::timeout(deadline, self.client.request(request))
            .await
            .map_err(|_| RelayError::Timeout(deadline))??;

        let status = response.status();
        let bytes = to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES)
            .await
            .map_err(RelayError::Body)?;

        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_url(api_url: &str) -> GavagaiClient {
        GavagaiClient::new(GavagaiConfig {
            api_url: api_url.to_string(),
            api_token: "token".to_string(),
            request_timeout_secs: 5,
        })
    }

    #[test]
    fn test_project_url_includes_id_verbatim() {
        let client = client_with_url("http://localhost:9000");
        assert_eq!(client.project_url("abc-123"), "http://localhost:9000/projects/abc-123");
    }

    #[test]
    fn test_project_url_tolerates_trailing_slash() {
        let client = client_with_url("http://localhost:9000/");
        assert_eq!(client.project_url("42"), "http://localhost:9000/projects/42");
    }
}
