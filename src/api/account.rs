//! Account endpoints

use super::{ApiClient, ApiError};
use crate::types::Account;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_type: String,
    pub initial_deposit: f64,
}

impl ApiClient {
    pub async fn get_user_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_data("/accounts").await
    }

    pub async fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<Account, ApiError> {
        self.post_data("/accounts", request).await
    }
}
