/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_COUNTRY_CODE, DEFAULT_CURRENCY_CODE};
use crate::model::mapping::{FieldMap, FieldSpec};
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Concur v3 `expense/reports` field table
pub const REPORT_TABLE: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID"),
    FieldSpec::writable("name", "Name"),
    FieldSpec::writable("purpose", "Purpose"),
    FieldSpec::writable("business_purpose", "BusinessPurpose"),
    FieldSpec::read_only("total_amount", "Total"),
    FieldSpec::writable("currency_code", "CurrencyCode"),
    FieldSpec::read_only("status", "ApprovalStatusName"),
    FieldSpec::read_only("workflow_step", "WorkflowStepName"),
    FieldSpec::read_only("owner", "OwnerName"),
    FieldSpec::read_only("submitted_at", "SubmitDate"),
    FieldSpec::read_only("created_at", "CreateDate"),
    FieldSpec::read_only("modified_at", "LastModifiedDate"),
    FieldSpec::writable("country", "Country"),
    FieldSpec::writable("policy_id", "PolicyID"),
    FieldSpec::read_only("version", "ReportVersion"),
];

/// Lookup over [`REPORT_TABLE`]
pub static REPORT_FIELDS: Lazy<FieldMap> = Lazy::new(|| FieldMap::new("report", REPORT_TABLE));

/// An expense report as seen by this client
///
/// The API is authoritative; every read re-fetches.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpenseReport {
    /// Report identifier
    #[serde(default)]
    pub id: String,
    /// Report name
    pub name: Option<String>,
    /// Free-text purpose
    pub purpose: Option<String>,
    /// Business purpose
    pub business_purpose: Option<String>,
    /// Report total in `currency_code`
    pub total_amount: Option<f64>,
    /// ISO 4217 currency code
    pub currency_code: Option<String>,
    /// Approval status name, e.g. "Not Submitted"
    pub status: Option<String>,
    /// Current workflow step name
    pub workflow_step: Option<String>,
    /// Owner's display name
    pub owner: Option<String>,
    /// Submission timestamp
    pub submitted_at: Option<String>,
    /// Creation timestamp
    pub created_at: Option<String>,
    /// Last modification timestamp
    pub modified_at: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Expense policy identifier
    pub policy_id: Option<String>,
    /// Server-side report version
    pub version: Option<i64>,
}

/// Payload for creating a report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReport {
    /// Report name
    pub name: String,
    /// Free-text purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Business purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    /// ISO 4217 currency code
    pub currency_code: String,
    /// Country code
    pub country: String,
    /// Expense policy identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

impl NewReport {
    /// Create a new report payload with just the name (required field)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: None,
            business_purpose: None,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            country: DEFAULT_COUNTRY_CODE.to_string(),
            policy_id: None,
        }
    }

    /// Set the purpose
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Set the business purpose
    pub fn with_business_purpose(mut self, business_purpose: impl Into<String>) -> Self {
        self.business_purpose = Some(business_purpose.into());
        self
    }

    /// Set the currency code
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = currency_code.into();
        self
    }

    /// Set the country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the policy id
    pub fn with_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }
}

/// Partial update for a report; only the fields that are set are sent
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// New business purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    /// New currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// New country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// New policy id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

impl ReportUpdate {
    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
