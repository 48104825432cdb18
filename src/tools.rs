/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tool-facing adapters
//!
//! [`ExpenseTools`] exposes every client operation with primitive or struct
//! arguments and always answers with an [`ApiResult`]; errors are reported
//! inside the envelope, never returned. Registering these functions with an
//! MCP runtime is left to the caller.
//!
//! # Example
//! ```ignore
//! use concur_client::prelude::*;
//!
//! let tools = ExpenseTools::from_config(Config::new())?;
//! let result = tools.list_reports(10, None, None).await;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```

use crate::application::client::Client;
use crate::application::config::Config;
use crate::application::interfaces::expense::ExpenseService;
use crate::application::interfaces::reference::ReferenceDataService;
use crate::application::interfaces::report::ReportService;
use crate::error::AppError;
use crate::model::entry::{ExpenseEntry, ExpenseUpdate, NewExpense};
use crate::model::report::{ExpenseReport, NewReport, ReportUpdate};
use crate::model::requests::{ListExpensesRequest, ListReportsRequest};
use crate::model::responses::{
    Catalog, ConnectionStatus, CreatedResource, ExpenseType, Page, PaymentType,
};
use crate::model::result::ApiResult;
use std::sync::Arc;

/// Everything the tool layer needs from a backend
pub trait ConcurApi: ReportService + ExpenseService + ReferenceDataService {}

impl<T: ReportService + ExpenseService + ReferenceDataService> ConcurApi for T {}

/// Tool adapter over a [`ConcurApi`] backend
pub struct ExpenseTools<C: ConcurApi = Client> {
    api: Arc<C>,
}

impl ExpenseTools<Client> {
    /// Builds the tools over a new [`Client`]
    ///
    /// # Returns
    /// * `Err(AppError::Authentication)` - If any credential is missing
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        Ok(Self::new(Arc::new(Client::new(config)?)))
    }
}

impl<C: ConcurApi> ExpenseTools<C> {
    /// Wraps an existing backend
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }

    /// Gets the wrapped backend
    pub fn api(&self) -> &Arc<C> {
        &self.api
    }

    /// Lists expense reports
    pub async fn list_reports(
        &self,
        limit: u32,
        offset: Option<String>,
        user: Option<String>,
    ) -> ApiResult<Page<ExpenseReport>> {
        let request = ListReportsRequest {
            limit,
            offset,
            user,
        };
        ApiResult::from_result(
            self.api.list_reports(&request).await,
            |page| {
                format!(
                    "Retrieved {} of {} reports",
                    page.count, page.total_count
                )
            },
            "Failed to list reports",
        )
    }

    /// Gets one report
    pub async fn get_report_details(&self, report_id: &str) -> ApiResult<ExpenseReport> {
        ApiResult::from_result(
            self.api.get_report(report_id).await,
            |report| format!("Retrieved report {}", report.id),
            "Failed to get report",
        )
    }

    /// Creates a report
    pub async fn create_report(&self, report: NewReport) -> ApiResult<CreatedResource> {
        let name = report.name.clone();
        ApiResult::from_result(
            self.api.create_report(&report).await,
            |_| format!("Successfully created report: {name}"),
            "Failed to create report",
        )
    }

    /// Updates the given report fields
    pub async fn update_report(&self, report_id: &str, update: ReportUpdate) -> ApiResult<()> {
        ApiResult::from_result(
            self.api.update_report(report_id, &update).await,
            |_| format!("Successfully updated report {report_id}"),
            "Failed to update report",
        )
    }

    /// Deletes a report
    pub async fn delete_report(&self, report_id: &str) -> ApiResult<()> {
        ApiResult::from_result(
            self.api.delete_report(report_id).await,
            |_| format!("Successfully deleted report {report_id}"),
            "Failed to delete report",
        )
    }

    /// Lists the expense entries of a report
    pub async fn list_expenses(
        &self,
        report_id: &str,
        limit: u32,
        offset: Option<String>,
    ) -> ApiResult<Page<ExpenseEntry>> {
        let request = ListExpensesRequest {
            report_id: report_id.to_string(),
            limit,
            offset,
        };
        ApiResult::from_result(
            self.api.list_expenses(&request).await,
            |page| {
                format!(
                    "Retrieved {} of {} expenses for report {report_id}",
                    page.count, page.total_count
                )
            },
            "Failed to list expenses",
        )
    }

    /// Gets one expense entry
    pub async fn get_expense_details(&self, expense_id: &str) -> ApiResult<ExpenseEntry> {
        ApiResult::from_result(
            self.api.get_expense(expense_id).await,
            |expense| format!("Retrieved expense {}", expense.id),
            "Failed to get expense",
        )
    }

    /// Creates an expense entry
    pub async fn create_expense(&self, expense: NewExpense) -> ApiResult<CreatedResource> {
        let summary = format!("{} {}", expense.amount, expense.currency_code);
        ApiResult::from_result(
            self.api.create_expense(&expense).await,
            |_| format!("Successfully created expense entry for {summary}"),
            "Failed to create expense entry",
        )
    }

    /// Updates the given expense fields
    pub async fn update_expense(&self, expense_id: &str, update: ExpenseUpdate) -> ApiResult<()> {
        ApiResult::from_result(
            self.api.update_expense(expense_id, &update).await,
            |_| format!("Successfully updated expense entry {expense_id}"),
            "Failed to update expense entry",
        )
    }

    /// Deletes an expense entry
    pub async fn delete_expense(&self, expense_id: &str) -> ApiResult<()> {
        ApiResult::from_result(
            self.api.delete_expense(expense_id).await,
            |_| format!("Successfully deleted expense entry {expense_id}"),
            "Failed to delete expense entry",
        )
    }

    /// Lists the company expense types
    pub async fn get_expense_types(&self) -> ApiResult<Catalog<ExpenseType>> {
        ApiResult::from_result(
            self.api.get_expense_types().await,
            |catalog| {
                format!(
                    "Retrieved {} expense types from {} API",
                    catalog.count, catalog.api_version
                )
            },
            "Failed to retrieve expense types",
        )
    }

    /// Lists the user's payment types
    pub async fn get_payment_types(&self) -> ApiResult<Catalog<PaymentType>> {
        ApiResult::from_result(
            self.api.get_payment_types().await,
            |catalog| {
                format!(
                    "Retrieved {} payment types from {} API",
                    catalog.count, catalog.api_version
                )
            },
            "Failed to retrieve payment types",
        )
    }

    /// Checks that a token can be obtained
    pub async fn test_connection(&self) -> ApiResult<ConnectionStatus> {
        ApiResult::from_result(
            self.api.test_connection().await,
            |_| "Successfully connected to Concur API".to_string(),
            "Failed to connect to Concur API",
        )
    }

    /// Gets the current user's id
    pub async fn get_user_id(&self) -> ApiResult<String> {
        ApiResult::from_result(
            self.api.get_user_id().await,
            |id| format!("Current user is {id}"),
            "Failed to get user id",
        )
    }
}
