/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/

//! Error types for the storefront client
//!
//! Every fallible operation in the crate returns [`AppError`]. The variants
//! separate transport failures, backend rejections and decoding problems so
//! callers can pick their own recovery (retry, re-login, inline form error).

use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    Network(reqwest::Error),
    /// The backend answered with a non-2xx status
    ///
    /// `message` is the text extracted from the response body, or a generic
    /// fallback when the body carried none.
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// Human readable message
        message: String,
    },
    /// A 2xx response whose body could not be decoded into the expected type
    Deserialization(String),
    /// JSON serialization error
    Json(serde_json::Error),
    /// I/O error, raised by the file-backed token store
    Io(std::io::Error),
    /// A bounded wait elapsed before the backend answered
    Timeout(Duration),
    /// The operation requires a session token and none is stored
    Unauthorized,
    /// Input rejected before any request was sent
    InvalidInput(String),
    /// A caller supplied header name or value is not valid HTTP
    InvalidHeader(String),
    /// The backend answered 2xx but the payload misses required data
    InvalidResponse(String),
}

impl AppError {
    /// Builds an [`AppError::Api`] from a status and a message
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }

    /// Status code of a backend rejection, if this error is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether this error is the bounded-wait expiry
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Timeout(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Api { message, .. } => write!(f, "{message}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Timeout(d) => write!(f, "request timed out after {}ms", d.as_millis()),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
