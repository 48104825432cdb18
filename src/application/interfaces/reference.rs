use crate::error::AppError;
use crate::model::responses::{Catalog, ConnectionStatus, ExpenseType, PaymentType};
use async_trait::async_trait;

/// Interface for configuration lookups and session diagnostics
#[async_trait]
pub trait ReferenceDataService: Send + Sync {
    /// Gets the company expense types, preferring the v4 configuration API
    async fn get_expense_types(&self) -> Result<Catalog<ExpenseType>, AppError>;

    /// Gets the payment types available to the current user
    async fn get_payment_types(&self) -> Result<Catalog<PaymentType>, AppError>;

    /// Acquires a token and reports on it without exposing it
    async fn test_connection(&self) -> Result<ConnectionStatus, AppError>;

    /// Gets the user id embedded in the access token
    async fn get_user_id(&self) -> Result<String, AppError>;
}
