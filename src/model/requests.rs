/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MIN_PAGE_LIMIT};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Clamps a requested page size into the range the list endpoints accept
#[must_use]
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(MIN_PAGE_LIMIT, MAX_PAGE_LIMIT)
}

fn offset_param(offset: &Option<String>) -> Option<(&'static str, String)> {
    offset
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "0")
        .map(|o| ("offset", o.to_string()))
}

/// Parameters for listing expense reports
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListReportsRequest {
    /// Requested page size, clamped to `[1, 100]` when sent
    pub limit: u32,
    /// Opaque cursor returned by a previous page
    pub offset: Option<String>,
    /// Restrict to reports owned by this user login
    pub user: Option<String>,
}

impl Default for ListReportsRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: None,
            user: None,
        }
    }
}

impl ListReportsRequest {
    /// Create parameters for the first page with the default size
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page cursor
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Set the user filter
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Effective page size
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        clamp_limit(self.limit)
    }

    /// Query string pairs for `GET expense/reports`
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.effective_limit().to_string())];
        params.extend(offset_param(&self.offset));
        if let Some(user) = self.user.as_deref().filter(|u| !u.trim().is_empty()) {
            params.push(("user", user.to_string()));
        }
        params
    }
}

/// Parameters for listing the expense entries of a report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListExpensesRequest {
    /// Report whose entries are listed
    pub report_id: String,
    /// Requested page size, clamped to `[1, 100]` when sent
    pub limit: u32,
    /// Opaque cursor returned by a previous page
    pub offset: Option<String>,
}

impl ListExpensesRequest {
    /// Create parameters for the first page of a report's entries
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            limit: DEFAULT_PAGE_LIMIT,
            offset: None,
        }
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page cursor
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Effective page size
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        clamp_limit(self.limit)
    }

    /// Query string pairs for `GET expense/entries`
    ///
    /// A zero or blank offset is omitted; the API rejects `offset=0`.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.effective_limit().to_string()),
            ("reportID", self.report_id.clone()),
        ];
        params.extend(offset_param(&self.offset));
        params
    }
}
