use crate::error::AppError;

/// Collection path of expense reports
pub const REPORTS_PATH: &str = "expense/reports";
/// Collection path of expense entries
pub const ENTRIES_PATH: &str = "expense/entries";
/// v3 expense type collection
pub const EXPENSE_TYPES_V3_PATH: &str = "expense/expensetypes";
/// v3 payment type collection
pub const PAYMENT_TYPES_V3_PATH: &str = "expense/paymenttypes";
/// v4 company expense types, relative to the API host
pub const EXPENSE_TYPES_V4_PATH: &str = "expenseconfig/v4/expensetypes";

/// Builds `{collection}/{id}`, rejecting ids that would escape the path segment
pub fn resource_path(collection: &str, id: &str) -> Result<String, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "an id is required for {collection}"
        )));
    }
    if id.contains(['/', '?', '#']) {
        return Err(AppError::InvalidInput(format!("invalid id '{id}'")));
    }
    Ok(format!("{collection}/{id}"))
}

/// v4 payment types of one user, relative to the API host
pub fn payment_types_v4_path(user_id: &str) -> String {
    format!("expenseconfig/v4/users/{user_id}/paymenttypes")
}
