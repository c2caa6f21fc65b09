//! Downstream Gavagai API subsystem.
//!
//! # Data Flow
//! ```text
//! insights handler
//!     → client.rs (build GET /projects/{id}, bearer auth, timeout)
//!     → Gavagai API
//!     → decoded JSON Value or RelayError
//! ```

pub mod client;

pub use client::{GavagaiClient, RelayError};
