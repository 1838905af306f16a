//! Beneficiary endpoints

use super::{ApiClient, ApiError};
use crate::types::Beneficiary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRequest {
    pub nickname: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

impl ApiClient {
    pub async fn get_beneficiaries(&self) -> Result<Vec<Beneficiary>, ApiError> {
        self.get_data("/beneficiaries").await
    }

    pub async fn add_beneficiary(
        &self,
        request: &BeneficiaryRequest,
    ) -> Result<Beneficiary, ApiError> {
        self.post_data("/beneficiaries", request).await
    }

    pub async fn delete_beneficiary(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/beneficiaries/{id}")).await
    }
}
