//! Insights relay handler.
//!
//! Accepts one authenticated POST, relays a GET to the Gavagai API for the
//! requested project, and returns the downstream JSON in a success envelope.

use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;

use crate::gavagai::RelayError;
use crate::http::request::X_REQUEST_ID;
use crate::http::response::{relay_error, relay_success};
use crate::http::server::AppState;
use crate::insights::types::InsightsRequest;
use crate::observability::metrics;

/// `POST /api/v1/gavagai/insights`
pub async fn post_insights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<InsightsRequest>,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let project_id = match payload.project_path_segment() {
        Some(id) => id,
        None => {
            tracing::warn!(
                request_id = %request_id,
                "Rejecting insights request without a usable projectId"
            );
            metrics::record_request("POST", 400, "rejected", start_time);
            return relay_error(
                StatusCode::BAD_REQUEST,
                None,
                "projectId must be a non-empty string or a number",
            );
        }
    };

    // Diagnostic view of the payload; the downstream call itself is a bodiless GET.
    let query = payload.to_project_query();
    tracing::debug!(
        request_id = %request_id,
        project_id = %project_id,
        payload = %serde_json::to_string(&query).unwrap_or_default(),
        "Relaying insights request"
    );

    match state.gavagai.fetch_project(&project_id, &request_id).await {
        Ok(result) => {
            metrics::record_request("POST", 200, "relayed", start_time);
            relay_success(result)
        }
        Err(RelayError::UpstreamStatus { status, body }) => {
            tracing::warn!(
                request_id = %request_id,
                project_id = %project_id,
                upstream_status = %status,
                upstream_body = %body,
                "Gavagai returned an error status"
            );
            metrics::record_request("POST", 500, "upstream_error", start_time);
            relay_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(status),
                "gavagai request failed",
            )
        }
        Err(RelayError::Timeout(deadline)) => {
            tracing::warn!(
                request_id = %request_id,
                project_id = %project_id,
                deadline = ?deadline,
                "Gavagai request timed out"
            );
            metrics::record_request("POST", 504, "timeout", start_time);
            relay_error(StatusCode::GATEWAY_TIMEOUT, None, "gavagai request timed out")
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                project_id = %project_id,
                error = %err,
                "Gavagai request failed"
            );
            metrics::record_request("POST", 502, "transport", start_time);
            relay_error(StatusCode::BAD_GATEWAY, None, "gavagai request failed")
        }
    }
}
