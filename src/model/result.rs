/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Uniform envelope returned to tool callers
//!
//! Tool runtimes cannot see Rust errors across the agent boundary, so every
//! tool-facing operation reports success and failure in the same shape.

use crate::error::{AppError, ErrorKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of a tool-facing operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResult<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Operation output on success
    pub payload: Option<T>,
    /// Error classification on failure
    pub error_kind: Option<ErrorKind>,
    /// Human-readable summary
    pub message: String,
}

impl<T> ApiResult<T> {
    /// Successful result
    pub fn ok(payload: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error_kind: None,
            message: message.into(),
        }
    }

    /// Failed result built from an error
    ///
    /// # Arguments
    /// * `context` - What was being attempted, e.g. "Failed to get report"
    /// * `error` - The error that stopped it
    pub fn err(context: &str, error: &AppError) -> Self {
        Self {
            success: false,
            payload: None,
            error_kind: Some(error.kind()),
            message: format!("{context}: {error}"),
        }
    }

    /// Converts an operation result into the envelope
    ///
    /// # Arguments
    /// * `result` - Operation outcome
    /// * `on_success` - Builds the success message from the payload
    /// * `context` - Failure message prefix
    pub fn from_result<F>(result: Result<T, AppError>, on_success: F, context: &str) -> Self
    where
        F: FnOnce(&T) -> String,
    {
        match result {
            Ok(payload) => {
                let message = on_success(&payload);
                Self::ok(payload, message)
            }
            Err(e) => {
                warn!("{}: {}", context, e);
                Self::err(context, &e)
            }
        }
    }

    /// True on success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Consumes the envelope, returning the payload if any
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }
}
