use super::{ApiClient, ApiError};
use crate::types::{EmiRecord, Loan};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub loan_type: String,
    pub loan_amount: f64,
    pub tenure_months: i32,
    pub account_number: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayEmiRequest {
    pub installment_number: i32,
}

impl ApiClient {
    pub async fn apply_for_loan(&self, application: &LoanApplication) -> Result<Loan, ApiError> {
        self.post_data("/loans", application).await
    }

    pub async fn get_user_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get_data("/loans").await
    }

    pub async fn get_emi_schedule(&self, loan_id: i64) -> Result<Vec<EmiRecord>, ApiError> {
        self.get_data(&format!("/loans/{loan_id}/schedule")).await
    }

    pub async fn pay_emi(&self, loan_id: i64, request: &PayEmiRequest) -> Result<Loan, ApiError> {
        self.post_data(&format!("/loans/{loan_id}/pay-emi"), request)
            .await
    }
}
