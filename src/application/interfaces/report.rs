use crate::error::AppError;
use crate::model::report::{ExpenseReport, NewReport, ReportUpdate};
use crate::model::requests::ListReportsRequest;
use crate::model::responses::{CreatedResource, Page};
use async_trait::async_trait;

/// Interface for the expense report service
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Lists one page of expense reports
    ///
    /// # Arguments
    /// * `request` - Page size (clamped to `[1, 100]`), cursor and optional user filter
    async fn list_reports(
        &self,
        request: &ListReportsRequest,
    ) -> Result<Page<ExpenseReport>, AppError>;

    /// Gets a single report by id
    async fn get_report(&self, report_id: &str) -> Result<ExpenseReport, AppError>;

    /// Creates a report
    async fn create_report(&self, report: &NewReport) -> Result<CreatedResource, AppError>;

    /// Updates the fields set in `update`, leaving the others untouched
    async fn update_report(&self, report_id: &str, update: &ReportUpdate) -> Result<(), AppError>;

    /// Deletes a report
    async fn delete_report(&self, report_id: &str) -> Result<(), AppError>;
}
