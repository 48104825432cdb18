/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Concur Client
//!
//! An authenticated client for the SAP Concur Expense REST API, shaped for
//! tool-style callers such as MCP agents.
//!
//! The crate handles:
//! - OAuth2 password-grant token acquisition and caching
//! - A single transparent retry when the API answers `401 Unauthorized`
//! - Table-driven translation between Concur's wire field names and the
//!   local record types
//! - A uniform [`model::result::ApiResult`] envelope for tool adapters
//!
//! ## Example
//! ```ignore
//! use concur_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config)?;
//!
//! let page = client.list_reports(&ListReportsRequest::new().with_limit(10)).await?;
//! for report in page.items {
//!     println!("{report}");
//! }
//! ```

/// Application layer: configuration, authentication, HTTP client and services
pub mod application;

/// Default values shared across the crate
pub mod constants;

/// Error types
pub mod error;

/// Wire and domain models
pub mod model;

/// Convenience re-exports
pub mod prelude;

/// Tool-facing adapters returning [`model::result::ApiResult`]
pub mod tools;

/// Environment and logging helpers
pub mod utils;

/// Re-exported configuration module
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
