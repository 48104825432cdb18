/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::mapping::FieldMap;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a list endpoint
///
/// Pages are never aggregated: follow `next_page` to fetch more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items on this page, mapped to local records
    pub items: Vec<T>,
    /// Number of items on this page
    pub count: usize,
    /// Total reported by the server, or `count` when it reports none
    pub total_count: u64,
    /// Page size that was requested
    pub limit: u32,
    /// Cursor this page was requested with
    pub offset: Option<String>,
    /// URL of the next page, when the server reports one
    pub next_page: Option<String>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Maps a Concur v3 list body (`Items`, `TotalCount`, `NextPage`)
    pub fn from_response(
        fields: &FieldMap,
        body: &Value,
        limit: u32,
        offset: Option<String>,
    ) -> Result<Self, AppError> {
        let object = body.as_object().ok_or_else(|| {
            AppError::Deserialization(format!("expected a {} list object", fields.resource()))
        })?;

        let items = match object.get("Items") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| fields.decode::<T>(item))
                .collect::<Result<Vec<T>, AppError>>()?,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(AppError::Deserialization(format!(
                    "{} list 'Items' is not an array",
                    fields.resource()
                )));
            }
        };

        let count = items.len();
        let total_count = object
            .get("TotalCount")
            .and_then(Value::as_u64)
            .unwrap_or(count as u64);
        let next_page = object
            .get("NextPage")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            items,
            count,
            total_count,
            limit,
            offset,
            next_page,
        })
    }
}

/// Identifier and URI of a newly created resource
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreatedResource {
    /// New resource identifier
    #[serde(rename(deserialize = "ID"), default)]
    pub id: String,
    /// New resource URI
    #[serde(rename(deserialize = "URI"), default)]
    pub uri: Option<String>,
}

/// An expense type usable when creating expenses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExpenseType {
    /// Code accepted by the v3 entries endpoint
    pub code: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Expense category code
    pub category: Option<String>,
    /// Spend category code (v4 only)
    pub spend_category: Option<String>,
    /// Expense type identifier
    pub expense_type_id: Option<String>,
    /// Description (v4 only)
    pub description: Option<String>,
    /// Whether the type has been deleted
    pub is_deleted: bool,
    /// Whether the type is shown on mobile
    pub show_on_mobile: bool,
}

/// v4 `expenseconfig/v4/expensetypes` item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseTypeV4 {
    expense_code: Option<String>,
    name: Option<String>,
    expense_category_code: Option<String>,
    spend_category_code: Option<String>,
    expense_type_id: Option<String>,
    description: Option<String>,
    is_deleted: Option<bool>,
    show_on_mobile: Option<bool>,
}

impl From<ExpenseTypeV4> for ExpenseType {
    fn from(value: ExpenseTypeV4) -> Self {
        Self {
            code: value.expense_code,
            name: value.name,
            category: value.expense_category_code,
            spend_category: value.spend_category_code,
            expense_type_id: value.expense_type_id,
            description: value.description,
            is_deleted: value.is_deleted.unwrap_or(false),
            show_on_mobile: value.show_on_mobile.unwrap_or(true),
        }
    }
}

/// v3 `expense/expensetypes` item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExpenseTypeV3 {
    code: Option<String>,
    name: Option<String>,
    category_code: Option<String>,
    #[serde(rename = "ID")]
    id: Option<String>,
}

impl From<ExpenseTypeV3> for ExpenseType {
    fn from(value: ExpenseTypeV3) -> Self {
        Self {
            code: value.code,
            name: value.name,
            category: value.category_code,
            spend_category: None,
            expense_type_id: value.id,
            description: None,
            is_deleted: false,
            show_on_mobile: true,
        }
    }
}

/// A payment type usable when creating expenses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentType {
    /// Payment type identifier, the value expected in `payment_type`
    pub id: Option<String>,
    /// Payment type code
    pub code: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Whether this is the user's default payment type
    pub is_default: bool,
}

/// v3 `expense/paymenttypes` item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PaymentTypeV3 {
    code: Option<String>,
    name: Option<String>,
    #[serde(rename = "ID")]
    id: Option<String>,
}

impl From<PaymentTypeV3> for PaymentType {
    fn from(value: PaymentTypeV3) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
            is_default: false,
        }
    }
}

/// v4 `expenseconfig/v4/users/{id}/paymenttypes` item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentTypeV4 {
    payment_type_id: Option<String>,
    payment_type_name: Option<String>,
    is_default: Option<bool>,
}

impl From<PaymentTypeV4> for PaymentType {
    fn from(value: PaymentTypeV4) -> Self {
        Self {
            id: value.payment_type_id.clone(),
            code: value.payment_type_id,
            name: value.payment_type_name,
            is_default: value.is_default.unwrap_or(false),
        }
    }
}

/// Reference data together with the API generation that served it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog<T> {
    /// Catalog entries
    pub items: Vec<T>,
    /// Number of entries
    pub count: usize,
    /// `v4` or `v3`
    pub api_version: String,
}

impl<T> Catalog<T> {
    /// Wraps catalog entries
    pub fn new(items: Vec<T>, api_version: impl Into<String>) -> Self {
        Self {
            count: items.len(),
            items,
            api_version: api_version.into(),
        }
    }
}

/// Result of a connectivity check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConnectionStatus {
    /// Length of the access token
    pub token_length: usize,
    /// First characters of the token, for diagnostics
    pub token_prefix: String,
    /// Seconds before the cached token expires
    pub expires_in_seconds: i64,
}

/// Items of a v4 list body, which is either a bare array or wraps it in `content`/`items`
pub(crate) fn v4_items(body: Value) -> Result<Vec<Value>, AppError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => ["content", "items"]
            .iter()
            .find_map(|key| match object.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| {
                AppError::Deserialization("v4 list has no 'content' or 'items' array".to_string())
            }),
        other => Err(AppError::Deserialization(format!(
            "expected a v4 list, got {other}"
        ))),
    }
}

/// Items of a v3 list body (`Items`)
pub(crate) fn v3_items(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut object) => match object.remove("Items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
