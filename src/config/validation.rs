//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Reject an empty downstream token instead of sending `Bearer ` blind
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "gavagai.api_url").
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration, collecting every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("'{}' is not a valid socket address", config.listener.bind_address),
        });
    }

    match Url::parse(&config.gavagai.api_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => {
            errors.push(ValidationError {
                field: "gavagai.api_url",
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Err(e) => {
            errors.push(ValidationError {
                field: "gavagai.api_url",
                message: format!("'{}' is not a valid URL: {}", config.gavagai.api_url, e),
            });
        }
    }

    if config.gavagai.api_token.trim().is_empty() {
        errors.push(ValidationError {
            field: "gavagai.api_token",
            message: "must not be empty; set it in the config file or GAVAGAI_API_TOKEN".to_string(),
        });
    }

    if config.gavagai.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "gavagai.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.auth.enabled && config.auth.api_key.trim().is_empty() {
        errors.push(ValidationError {
            field: "auth.api_key",
            message: "must not be empty when auth is enabled".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address",
            message: format!(
                "'{}' is not a valid socket address",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
