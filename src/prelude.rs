/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Concur Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concur_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let report = client.get_report("ABC123").await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Concur client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Token management
pub use crate::application::auth::{AccessToken, Auth, decode_user_id};

/// Authenticated HTTP client
pub use crate::application::client::Client;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{ExpenseService, ReferenceDataService, ReportService};

/// Tool adapters
pub use crate::tools::{ConcurApi, ExpenseTools};

// ============================================================================
// MODELS
// ============================================================================

/// Expense entry models
pub use crate::model::entry::{ENTRY_FIELDS, ExpenseEntry, ExpenseUpdate, NewExpense};

/// Field mapping
pub use crate::model::mapping::{Access, FieldMap, FieldSpec};

/// Expense report models
pub use crate::model::report::{ExpenseReport, NewReport, REPORT_FIELDS, ReportUpdate};

/// Request models
pub use crate::model::requests::{ListExpensesRequest, ListReportsRequest, clamp_limit};

/// Response models
pub use crate::model::responses::{
    Catalog, ConnectionStatus, CreatedResource, ExpenseType, Page, PaymentType,
};

/// Result envelope
pub use crate::model::result::ApiResult;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
