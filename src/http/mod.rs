//! HTTP client layer — `TradecoveHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::TradecoveHttp;
pub use retry::{RetryConfig, RetryPolicy};
