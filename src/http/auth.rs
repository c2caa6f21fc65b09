//! Bearer-token check for the insights endpoint.
//!
//! Session handling belongs to whatever sits in front of the relay; this is
//! a single static key compared against the Authorization header.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.config.auth.enabled {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    if let Some(auth_val) = auth_header {
        if auth_val == format!("Bearer {}", state.config.auth.api_key) {
            return Ok(next.run(request).await);
        }
    }

    tracing::warn!("Rejecting insights request with missing or invalid API key");
    Err(StatusCode::UNAUTHORIZED)
}
