//! Gavagai Insights Relay Library

pub mod config;
pub mod gavagai;
pub mod http;
pub mod insights;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
