//! # Common Error Types
//!
//! Consolidated error handling for the console client.
//!
//! This module provides a single error type [`ApiError`] covering every way a
//! read or write against the backend can fail.
//!
//! ## Error Categories
//!
//! - **Network**: No response at all (connection refused, DNS, timeout)
//! - **Http**: The backend answered with a non-2xx status, usually carrying a
//!   human-readable `message`
//! - **Decode**: A response body did not match the expected shape
//! - **Storage**: The access token store could not be read or written
//! - **Config**: Invalid environment configuration
//! - **InvalidRequest**: A request could not be built from its arguments
//! - **Cache**: A cached value had an unexpected type for its key
//!
//! ## Propagation
//!
//! Nothing in the API modules or the query layer catches these errors. They
//! surface to the caller, which reads [`ApiError::message`] to show the user
//! something meaningful:
//!
//! ```rust,no_run
//! use console::core::error::ApiError;
//!
//! let err = ApiError::Http { status: 401, message: Some("Invalid credentials".to_string()) };
//! assert_eq!(err.message(), Some("Invalid credentials"));
//! assert_eq!(err.status(), Some(401));
//! ```
//!
//! `ApiError` is `Clone` so that one failed in-flight request can be
//! reported to every caller that coalesced onto it.

use thiserror::Error;

/// Error type for every backend interaction in the console.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` is taken from the error body's `message` (or `error`)
    /// field when the body is JSON.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The token store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Arguments cannot form a valid request, e.g. a `..` resource id.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A cache entry held a value of the wrong type.
    #[error("Cache error: {0}")]
    Cache(String),
}

impl ApiError {
    /// Backend-provided message for HTTP errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for HTTP errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
