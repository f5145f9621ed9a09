//! Error taxonomy for tool operations.
//!
//! Internal functions propagate `ToolError` with `?`; the host-facing
//! operations in [`crate::tools`] catch every variant at their boundary and
//! render it into the returned string. No error crosses the tool contract.

use std::fmt;

#[derive(Debug)]
pub enum ToolError {
    /// A required credential is missing or empty. Raised before any network
    /// traffic happens.
    Configuration(String),
    /// The token exchange failed: non-2xx status or an undecodable body.
    UpstreamAuth(String),
    /// A data call failed: network error, non-2xx status, or a body that
    /// did not match the expected shape.
    UpstreamRequest(String),
    /// A required lookup (artist or album resolution) matched nothing.
    NotFound(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            ToolError::UpstreamAuth(msg) => write!(f, "authentication failed: {}", msg),
            ToolError::UpstreamRequest(msg) => write!(f, "upstream request failed: {}", msg),
            ToolError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        ToolError::UpstreamRequest(err.to_string())
    }
}
