use crate::application::client::Client;
use crate::application::interfaces::report::ReportService;
use crate::application::services::types::{REPORTS_PATH, resource_path};
use crate::error::AppError;
use crate::model::report::{ExpenseReport, NewReport, REPORT_FIELDS, ReportUpdate};
use crate::model::requests::ListReportsRequest;
use crate::model::responses::{CreatedResource, Page};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ReportService for Client {
    async fn list_reports(
        &self,
        request: &ListReportsRequest,
    ) -> Result<Page<ExpenseReport>, AppError> {
        info!("Listing expense reports");

        let body: Value = self.get_with_query(REPORTS_PATH, &request.query()).await?;
        let page = Page::from_response(
            &REPORT_FIELDS,
            &body,
            request.effective_limit(),
            request.offset.clone(),
        )?;

        debug!(
            "Reports obtained: {} of {} available",
            page.count, page.total_count
        );
        Ok(page)
    }

    async fn get_report(&self, report_id: &str) -> Result<ExpenseReport, AppError> {
        let path = resource_path(REPORTS_PATH, report_id)?;
        debug!("Getting report {}", report_id);

        let body: Value = self.get(&path).await?;
        REPORT_FIELDS.decode(&body)
    }

    async fn create_report(&self, report: &NewReport) -> Result<CreatedResource, AppError> {
        if report.name.trim().is_empty() {
            return Err(AppError::InvalidInput("report name is required".to_string()));
        }
        let payload = REPORT_FIELDS.encode(report)?;
        info!("Creating report '{}'", report.name);

        let created: CreatedResource = self.post(REPORTS_PATH, &payload).await?;
        info!("Report created: {}", created.id);
        Ok(created)
    }

    async fn update_report(&self, report_id: &str, update: &ReportUpdate) -> Result<(), AppError> {
        let path = resource_path(REPORTS_PATH, report_id)?;
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "no report fields to update".to_string(),
            ));
        }
        let payload = REPORT_FIELDS.encode(update)?;
        if payload.is_empty() {
            return Err(AppError::InvalidInput(
                "no report fields to update".to_string(),
            ));
        }
        info!("Updating report {} ({} fields)", report_id, payload.len());

        self.put::<_, Value>(&path, &payload).await?;
        Ok(())
    }

    async fn delete_report(&self, report_id: &str) -> Result<(), AppError> {
        let path = resource_path(REPORTS_PATH, report_id)?;
        info!("Deleting report {}", report_id);

        self.delete::<Value>(&path).await?;
        Ok(())
    }
}
