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

/// Concur v3 `expense/entries` field table
///
/// Codes and IDs are writable; their display names are read-only companions.
pub const ENTRY_TABLE: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID"),
    FieldSpec::writable("report_id", "ReportID"),
    FieldSpec::writable("expense_type", "ExpenseTypeCode"),
    FieldSpec::read_only("expense_type_name", "ExpenseTypeName"),
    FieldSpec::writable("amount", "TransactionAmount"),
    FieldSpec::writable("currency_code", "TransactionCurrencyCode"),
    FieldSpec::writable("transaction_date", "TransactionDate"),
    FieldSpec::writable("business_purpose", "BusinessPurpose"),
    FieldSpec::writable("vendor", "VendorDescription"),
    FieldSpec::writable("location", "LocationName"),
    FieldSpec::writable("country_code", "CountryCode"),
    FieldSpec::writable("payment_type", "PaymentTypeID"),
    FieldSpec::read_only("payment_type_name", "PaymentTypeName"),
    FieldSpec::read_only("receipt_required", "ReceiptRequired"),
    FieldSpec::read_only("has_receipt", "HasReceipt"),
];

/// Lookup over [`ENTRY_TABLE`]
pub static ENTRY_FIELDS: Lazy<FieldMap> = Lazy::new(|| FieldMap::new("expense", ENTRY_TABLE));

/// An expense entry belonging to a report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpenseEntry {
    /// Entry identifier
    #[serde(default)]
    pub id: String,
    /// Owning report identifier
    pub report_id: Option<String>,
    /// Expense type code, e.g. `MEALS`
    pub expense_type: Option<String>,
    /// Expense type display name
    pub expense_type_name: Option<String>,
    /// Transaction amount
    pub amount: Option<f64>,
    /// Transaction currency code
    pub currency_code: Option<String>,
    /// Transaction date
    pub transaction_date: Option<String>,
    /// Business purpose
    pub business_purpose: Option<String>,
    /// Vendor description
    pub vendor: Option<String>,
    /// Location name
    pub location: Option<String>,
    /// Country code
    pub country_code: Option<String>,
    /// Payment type identifier
    pub payment_type: Option<String>,
    /// Payment type display name
    pub payment_type_name: Option<String>,
    /// Whether a receipt is required
    pub receipt_required: Option<bool>,
    /// Whether a receipt is attached
    pub has_receipt: Option<bool>,
}

/// Payload for creating an expense entry
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    /// Report that receives the entry
    pub report_id: String,
    /// Expense type code
    pub expense_type: String,
    /// Transaction amount
    pub amount: f64,
    /// Transaction currency code
    pub currency_code: String,
    /// Transaction date (`YYYY-MM-DD`); today when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    /// Business purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    /// Vendor description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Location name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Country code
    pub country_code: String,
    /// Payment type identifier; falls back to the configured default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
}

impl NewExpense {
    /// Create a new expense payload with the required fields
    pub fn new(report_id: impl Into<String>, expense_type: impl Into<String>, amount: f64) -> Self {
        Self {
            report_id: report_id.into(),
            expense_type: expense_type.into(),
            amount,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            transaction_date: None,
            business_purpose: None,
            vendor: None,
            location: None,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            payment_type: None,
        }
    }

    /// Set the currency code
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = currency_code.into();
        self
    }

    /// Set the transaction date
    pub fn with_transaction_date(mut self, transaction_date: impl Into<String>) -> Self {
        self.transaction_date = Some(transaction_date.into());
        self
    }

    /// Set the business purpose
    pub fn with_business_purpose(mut self, business_purpose: impl Into<String>) -> Self {
        self.business_purpose = Some(business_purpose.into());
        self
    }

    /// Set the vendor
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the country code
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Set the payment type id
    pub fn with_payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = Some(payment_type.into());
        self
    }
}

/// Partial update for an expense entry; only the fields that are set are sent
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpenseUpdate {
    /// New expense type code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    /// New amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// New currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// New transaction date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    /// New business purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    /// New vendor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// New location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// New payment type id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
}

impl ExpenseUpdate {
    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
