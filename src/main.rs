//! Gavagai Insights Relay
//!
//! A small HTTP service that fronts the Gavagai sentiment-analysis API for a
//! business-intelligence frontend, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                INSIGHTS RELAY                │
//!                       │                                              │
//!   POST /api/v1/       │  ┌─────────┐   ┌─────────┐   ┌────────────┐ │
//!   gavagai/insights ───┼─▶│  http   │──▶│  auth   │──▶│  insights  │ │
//!                       │  │ server  │   │ bearer  │   │  handler   │ │
//!                       │  └─────────┘   └─────────┘   └─────┬──────┘ │
//!                       │                                    │        │
//!                       │                                    ▼        │
//!   {"result": ...} ◀───┼──────────────────────────┌────────────────┐ │       Gavagai
//!   or mapped error     │                          │ gavagai client │◀┼────── API
//!                       │                          └────────────────┘ │
//!                       │  ┌────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns        │ │
//!                       │  │  config · observability · lifecycle    │ │
//!                       │  └────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tokio::net::TcpListener;

use gavagai_relay::config;
use gavagai_relay::http::HttpServer;
use gavagai_relay::lifecycle::Shutdown;
use gavagai_relay::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref())?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!("gavagai-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        gavagai_api_url = %config.gavagai.api_url,
        downstream_timeout_secs = config.gavagai.request_timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        auth_enabled = config.auth.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
