use crate::application::client::Client;
use crate::application::interfaces::expense::ExpenseService;
use crate::application::services::types::{ENTRIES_PATH, resource_path};
use crate::error::AppError;
use crate::model::entry::{ENTRY_FIELDS, ExpenseEntry, ExpenseUpdate, NewExpense};
use crate::model::requests::ListExpensesRequest;
use crate::model::responses::{CreatedResource, Page};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

fn check_amount(amount: f64) -> Result<(), AppError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "expense amount must be a finite number, got {amount}"
        )))
    }
}

#[async_trait]
impl ExpenseService for Client {
    async fn list_expenses(
        &self,
        request: &ListExpensesRequest,
    ) -> Result<Page<ExpenseEntry>, AppError> {
        if request.report_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "a report id is required to list expenses".to_string(),
            ));
        }
        info!("Listing expenses of report {}", request.report_id);

        let body: Value = self.get_with_query(ENTRIES_PATH, &request.query()).await?;
        let page = Page::from_response(
            &ENTRY_FIELDS,
            &body,
            request.effective_limit(),
            request.offset.clone(),
        )?;

        debug!(
            "Expenses obtained: {} of {} available",
            page.count, page.total_count
        );
        Ok(page)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<ExpenseEntry, AppError> {
        let path = resource_path(ENTRIES_PATH, expense_id)?;
        debug!("Getting expense {}", expense_id);

        let body: Value = self.get(&path).await?;
        ENTRY_FIELDS.decode(&body)
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<CreatedResource, AppError> {
        if expense.report_id.trim().is_empty() || expense.expense_type.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "report id and expense type are required".to_string(),
            ));
        }
        check_amount(expense.amount)?;

        let mut expense = expense.clone();
        if expense.transaction_date.is_none() {
            expense.transaction_date = Some(Utc::now().format("%Y-%m-%d").to_string());
        }
        if expense.payment_type.is_none() {
            expense.payment_type = self.config().default_payment_type_id.clone();
        }

        let payload = ENTRY_FIELDS.encode(&expense)?;
        info!(
            "Creating {} expense of {} {} in report {}",
            expense.expense_type, expense.amount, expense.currency_code, expense.report_id
        );

        let created: CreatedResource = self.post(ENTRIES_PATH, &payload).await?;
        info!("Expense created: {}", created.id);
        Ok(created)
    }

    async fn update_expense(
        &self,
        expense_id: &str,
        update: &ExpenseUpdate,
    ) -> Result<(), AppError> {
        let path = resource_path(ENTRIES_PATH, expense_id)?;
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "no expense fields to update".to_string(),
            ));
        }
        if let Some(amount) = update.amount {
            check_amount(amount)?;
        }
        let payload = ENTRY_FIELDS.encode(update)?;
        if payload.is_empty() {
            return Err(AppError::InvalidInput(
                "no expense fields to update".to_string(),
            ));
        }
        info!("Updating expense {} ({} fields)", expense_id, payload.len());

        self.put::<_, Value>(&path, &payload).await?;
        Ok(())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), AppError> {
        let path = resource_path(ENTRIES_PATH, expense_id)?;
        info!("Deleting expense {}", expense_id);

        self.delete::<Value>(&path).await?;
        Ok(())
    }
}
