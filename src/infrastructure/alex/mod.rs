//! ALEX server integration: HTTP client, wire models, error mapping.

pub mod client;
pub mod error;
pub mod models;

pub use client::AlexClient;
pub use error::{ApiError, ApiResult};
