//! Insights endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/v1/gavagai/insights (JSON body)
//!     → types.rs (deserialize, project path segment, reshaped query)
//!     → handler.rs (validate, debug-log payload, relay downstream)
//!     → success envelope or mapped error
//! ```

pub mod handler;
pub mod types;

pub use types::{InsightsRequest, ProjectQuery};
