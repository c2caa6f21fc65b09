//! Response envelopes.
//!
//! # Responsibilities
//! - Wrap downstream JSON in the success envelope the BI frontend expects
//! - Map relay failures to well-formed error envelopes
//!
//! # Design Decisions
//! - Success shape is `{"result": <downstream body>}`, downstream JSON relayed unchanged
//! - Error shape carries a message plus the upstream status when one exists
//! - Downstream HTTP errors surface as 500 regardless of their own status

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Success envelope around the relayed downstream body.
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub result: Value,
}

/// Error envelope for failed relay attempts.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

/// Build a 200 response relaying the downstream JSON unchanged.
pub fn relay_success(result: Value) -> Response {
    (StatusCode::OK, Json(SuccessBody { result })).into_response()
}

/// Build an error response with the given status and message.
pub fn relay_error(
    status: StatusCode,
    upstream_status: Option<StatusCode>,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
            upstream_status: upstream_status.map(|s| s.as_u16()),
        }),
    )
        .into_response()
}
