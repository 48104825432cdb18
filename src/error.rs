/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the Concur client
//!
//! Every failure is an [`AppError`], and every [`AppError`] classifies into
//! exactly one [`ErrorKind`]. Transport failures (connection reset, timeout,
//! undecodable body) never escape unclassified: they are reported as
//! [`ErrorKind::Api`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse error classification exposed to tool callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Token issuance or refresh failed, the token is malformed, or credentials are missing
    #[serde(rename = "AuthenticationError")]
    Authentication,
    /// The resource does not exist (404)
    #[serde(rename = "NotFoundError")]
    NotFound,
    /// The request was rejected as malformed (400) or failed local validation
    #[serde(rename = "ValidationError")]
    Validation,
    /// Any other non-2xx status or transport failure
    #[serde(rename = "ApiError")]
    Api,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Api => "ApiError",
        };
        f.write_str(name)
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed; carries upstream diagnostics when available
    Authentication(String),
    /// Requested resource was not found
    NotFound(String),
    /// The API rejected the request as invalid
    Validation(String),
    /// A caller-supplied argument failed local validation
    InvalidInput(String),
    /// Non-2xx response other than 400, 401 and 404
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport level failure (connect, timeout, body read)
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Response had an unexpected shape
    Deserialization(String),
}

impl AppError {
    /// Returns the taxonomy bucket this error belongs to
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Authentication(_) => ErrorKind::Authentication,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) | AppError::InvalidInput(_) => ErrorKind::Validation,
            AppError::Api { .. }
            | AppError::Network(_)
            | AppError::Json(_)
            | AppError::Deserialization(_) => ErrorKind::Api,
        }
    }

    /// Builds an error from a non-success HTTP status and its body
    ///
    /// 401 is classified as an authentication failure here; the client only
    /// calls this after its single retry has been spent.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => {
                AppError::Authentication(format!("unauthorized after token refresh: {body}"))
            }
            StatusCode::NOT_FOUND => AppError::NotFound(format!("resource not found: {body}")),
            StatusCode::BAD_REQUEST => AppError::Validation(format!("bad request: {body}")),
            _ => AppError::Api { status, body },
        }
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Api { status, body } => write!(f, "api error {status}: {body}"),
            AppError::Network(e) => write!(f, "request failed: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
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
