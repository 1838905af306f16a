//! Authentication endpoints. These return flat JSON rather than the
//! `{ data }` envelope the rest of the API uses.

use super::{ApiClient, ApiError};
use crate::types::LoginResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

/// Register/verify/resend endpoints answer with a status + message pair.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply from `/auth/validate`. The identity comes back as a bare
/// username plus role names, not a full user record.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponse {
    pub user: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_flat("/auth/login", request).await
    }

    pub async fn register_customer(
        &self,
        request: &RegisterRequest,
    ) -> Result<StatusMessage, ApiError> {
        self.post_flat("/auth/register/customer", request).await
    }

    pub async fn verify_email(
        &self,
        request: &VerifyEmailRequest,
    ) -> Result<StatusMessage, ApiError> {
        self.post_flat("/auth/verify-email", request).await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        let path = "/auth/resend-otp";
        debug!(path, "POST");
        self.send(self.http.post(self.url(path)).query(&[("email", email)]))
            .await?;
        Ok(())
    }

    /// Validate the stored token and fetch the identity it belongs to.
    pub async fn validate_token(&self) -> Result<ValidateResponse, ApiError> {
        self.get_flat("/auth/validate").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reply_carries_username_and_roles() {
        let body = r#"{"status":"valid","user":"jo@example.com","roles":["ROLE_CUSTOMER"]}"#;
        let reply: ValidateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(reply.user, "jo@example.com");
        assert_eq!(reply.roles, vec!["ROLE_CUSTOMER"]);
    }
}
