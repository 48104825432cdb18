use crate::error::AppError;
use crate::model::entry::{ExpenseEntry, ExpenseUpdate, NewExpense};
use crate::model::requests::ListExpensesRequest;
use crate::model::responses::{CreatedResource, Page};
use async_trait::async_trait;

/// Interface for the expense entry service
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// Lists one page of a report's expense entries
    async fn list_expenses(
        &self,
        request: &ListExpensesRequest,
    ) -> Result<Page<ExpenseEntry>, AppError>;

    /// Gets a single expense entry by id
    async fn get_expense(&self, expense_id: &str) -> Result<ExpenseEntry, AppError>;

    /// Creates an expense entry
    ///
    /// The transaction date defaults to today (UTC) and the payment type to
    /// the configured default, when one is configured.
    async fn create_expense(&self, expense: &NewExpense) -> Result<CreatedResource, AppError>;

    /// Updates the fields set in `update`, leaving the others untouched
    async fn update_expense(
        &self,
        expense_id: &str,
        update: &ExpenseUpdate,
    ) -> Result<(), AppError>;

    /// Deletes an expense entry
    async fn delete_expense(&self, expense_id: &str) -> Result<(), AppError>;
}
