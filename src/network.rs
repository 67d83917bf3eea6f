//! Network URL constants for the Tradecove SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.tradecove.io";
