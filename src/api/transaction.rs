//! Transaction endpoints: deposit, withdraw, transfer, history

use super::{ApiClient, ApiError};
use crate::types::{Transaction, TransferRequest};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRequest {
    pub account_number: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    pub async fn deposit(&self, request: &CashRequest) -> Result<Transaction, ApiError> {
        self.post_data("/transactions/deposit", request).await
    }

    pub async fn withdraw(&self, request: &CashRequest) -> Result<Transaction, ApiError> {
        self.post_data("/transactions/withdraw", request).await
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<Transaction, ApiError> {
        self.post_data("/transactions/transfer", request).await
    }

    pub async fn transaction_history(
        &self,
        account_number: &str,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_data(&format!("/transactions/history/{account_number}"))
            .await
    }

    /// History restricted to an inclusive date range (ISO dates).
    pub async fn transaction_history_between(
        &self,
        account_number: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_data(&format!(
            "/transactions/history/{account_number}/filter?startDate={start_date}&endDate={end_date}"
        ))
        .await
    }
}
