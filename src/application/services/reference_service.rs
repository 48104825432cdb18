use crate::application::client::Client;
use crate::application::interfaces::reference::ReferenceDataService;
use crate::application::services::types::{
    EXPENSE_TYPES_V3_PATH, EXPENSE_TYPES_V4_PATH, PAYMENT_TYPES_V3_PATH, payment_types_v4_path,
};
use crate::constants::TOKEN_PREFIX_LEN;
use crate::error::AppError;
use crate::model::responses::{
    Catalog, ConnectionStatus, ExpenseType, ExpenseTypeV3, ExpenseTypeV4, PaymentType,
    PaymentTypeV3, PaymentTypeV4, v3_items, v4_items,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

fn decode_items<W, T>(items: Vec<Value>) -> Result<Vec<T>, AppError>
where
    W: DeserializeOwned,
    T: From<W>,
{
    items
        .into_iter()
        .map(|item| -> Result<T, AppError> { Ok(T::from(serde_json::from_value::<W>(item)?)) })
        .collect()
}

impl Client {
    async fn expense_types_v4(&self) -> Result<Vec<ExpenseType>, AppError> {
        let body: Value = self.get(&self.host_url(EXPENSE_TYPES_V4_PATH)).await?;
        decode_items::<ExpenseTypeV4, _>(v4_items(body)?)
    }

    async fn expense_types_v3(&self) -> Result<Vec<ExpenseType>, AppError> {
        let body: Value = self.get(EXPENSE_TYPES_V3_PATH).await?;
        decode_items::<ExpenseTypeV3, _>(v3_items(body))
    }

    async fn payment_types_v3(&self) -> Result<Vec<PaymentType>, AppError> {
        let body: Value = self.get(PAYMENT_TYPES_V3_PATH).await?;
        decode_items::<PaymentTypeV3, _>(v3_items(body))
    }

    async fn payment_types_v4(&self) -> Result<Vec<PaymentType>, AppError> {
        let user_id = self.current_user_id().await?;
        let url = self.host_url(&payment_types_v4_path(&user_id));
        let body: Value = self.get(&url).await?;
        decode_items::<PaymentTypeV4, _>(v4_items(body)?)
    }
}

#[async_trait]
impl ReferenceDataService for Client {
    async fn get_expense_types(&self) -> Result<Catalog<ExpenseType>, AppError> {
        match self.expense_types_v4().await {
            Ok(items) => {
                info!("Retrieved {} expense types from v4 configuration", items.len());
                Ok(Catalog::new(items, "v4"))
            }
            Err(e) => {
                warn!("v4 expense types failed: {}, falling back to v3", e);
                let items = self.expense_types_v3().await?;
                info!("Retrieved {} expense types from v3", items.len());
                Ok(Catalog::new(items, "v3"))
            }
        }
    }

    async fn get_payment_types(&self) -> Result<Catalog<PaymentType>, AppError> {
        match self.payment_types_v3().await {
            Ok(items) => {
                info!("Retrieved {} payment types from v3", items.len());
                Ok(Catalog::new(items, "v3"))
            }
            Err(e) => {
                warn!("v3 payment types failed: {}, falling back to v4", e);
                let items = self.payment_types_v4().await?;
                info!("Retrieved {} payment types from v4", items.len());
                Ok(Catalog::new(items, "v4"))
            }
        }
    }

    async fn test_connection(&self) -> Result<ConnectionStatus, AppError> {
        let token = self.ensure_token().await?;
        let expires_in_seconds = self
            .auth()
            .cached_token()
            .await
            .map(|t| t.seconds_until_expiry())
            .unwrap_or_default();

        let prefix: String = token.chars().take(TOKEN_PREFIX_LEN).collect();
        let token_prefix = if token.chars().count() > TOKEN_PREFIX_LEN {
            format!("{prefix}...")
        } else {
            prefix
        };

        Ok(ConnectionStatus {
            token_length: token.len(),
            token_prefix,
            expires_in_seconds,
        })
    }

    async fn get_user_id(&self) -> Result<String, AppError> {
        self.current_user_id().await
    }
}
