//! REST API client. One shared reqwest client, bearer token attached from
//! the session, `{ "data": ... }` envelopes unwrapped here.

mod account;
mod admin;
mod auth;
mod beneficiary;
mod kyc;
mod loan;
pub mod mock;
mod transaction;

pub use account::CreateAccountRequest;
pub use auth::{LoginRequest, RegisterRequest, StatusMessage, ValidateResponse, VerifyEmailRequest};
pub use beneficiary::BeneficiaryRequest;
pub use kyc::{KycStatusUpdate, KycSubmitRequest};
pub use loan::{LoanApplication, PayEmiRequest};
pub use transaction::CashRequest;

use crate::constants::{GENERIC_ERROR, SESSION_EXPIRED};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("Not found")]
    NotFound,
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Could not reach the server. Check your connection.")]
    Network(#[source] reqwest::Error),
    #[error("The server returned an unexpected response.")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Inline text shown next to the failed form.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Success envelope used by some handlers.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success HTTP status plus its body to an `ApiError`.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    let server_message = || {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    };
    match status {
        // Login failures carry a message ("Invalid credentials"); an
        // expired token usually does not.
        StatusCode::UNAUTHORIZED => {
            ApiError::Unauthorized(server_message().unwrap_or_else(|| SESSION_EXPIRED.to_string()))
        }
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => ApiError::Api {
            status: status.as_u16(),
            message: server_message().unwrap_or_else(|| GENERIC_ERROR.to_string()),
        },
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: Arc::new(Mutex::new(token)),
        }
    }

    pub fn set_token(&self, token: String) {
        *self.token.lock().unwrap() = Some(token);
    }

    pub fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, rb: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.lock().unwrap().as_deref() {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    /// Send a request and read the body, mapping HTTP-level failures.
    async fn send(&self, rb: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = self
            .authorize(rb)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;
        if status.is_success() {
            Ok(body)
        } else {
            warn!(status = status.as_u16(), "API request failed");
            Err(status_error(status, &body))
        }
    }

    /// Success bodies come in two shapes: some handlers wrap the payload
    /// in a `{"data": ...}` envelope, most return it bare. Prefer the
    /// envelope, fall back to the bare shape.
    fn parse_data<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
            return Ok(envelope.data);
        }
        serde_json::from_str(body).map_err(ApiError::Decode)
    }

    fn parse_flat<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(ApiError::Decode)
    }

    // --- enveloped helpers ---

    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let body = self.send(self.http.get(self.url(path))).await?;
        Self::parse_data(&body)
    }

    pub async fn post_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let body = self.send(self.http.post(self.url(path)).json(payload)).await?;
        Self::parse_data(&body)
    }

    pub async fn put_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let body = self.send(self.http.put(self.url(path)).json(payload)).await?;
        Self::parse_data(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    pub async fn post_multipart_data<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        debug!(path, "POST multipart");
        let body = self
            .send(self.http.post(self.url(path)).multipart(form))
            .await?;
        Self::parse_data(&body)
    }

    // --- flat (non-enveloped) helpers, used by the auth endpoints ---

    pub async fn get_flat<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let body = self.send(self.http.get(self.url(path))).await?;
        Self::parse_flat(&body)
    }

    pub async fn post_flat<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let body = self.send(self.http.post(self.url(path)).json(payload)).await?;
        Self::parse_flat(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Account, LoginResponse};

    #[test]
    fn unwraps_data_envelope() {
        let body = r#"{"data":[{"accountNumber":"AC123","accountType":"SAVINGS","balance":1500.25}]}"#;
        let accounts: Vec<Account> = ApiClient::parse_data(body).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_number, "AC123");
        assert_eq!(accounts[0].balance, 1500.25);
    }

    #[test]
    fn bare_success_body_parses_without_envelope() {
        let body = r#"[{"accountNumber":"AC123","accountType":"SAVINGS","balance":1500.25}]"#;
        let accounts: Vec<Account> = ApiClient::parse_data(body).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_number, "AC123");
    }

    #[test]
    fn login_response_is_flat() {
        let body = r#"{"token":"jwt","id":4,"username":"a@b.com","roles":["ROLE_ADMIN"]}"#;
        let login: LoginResponse = ApiClient::parse_flat(body).unwrap();
        assert_eq!(login.token, "jwt");
        assert_eq!(login.roles, vec!["ROLE_ADMIN"]);
    }

    #[test]
    fn error_statuses_map_to_taxonomy() {
        assert!(status_error(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(status_error(StatusCode::NOT_FOUND, "").is_not_found());

        let err = status_error(StatusCode::BAD_REQUEST, r#"{"message":"Insufficient balance"}"#);
        assert_eq!(err.user_message(), "Insufficient balance");
    }

    #[test]
    fn login_rejection_surfaces_the_server_message() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"status":"error","message":"Invalid credentials"}"#,
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid credentials");

        // Token expiry gives no usable body.
        let err = status_error(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.user_message(), SESSION_EXPIRED);
    }

    #[test]
    fn missing_server_message_falls_back() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "not even json");
        assert_eq!(err.user_message(), GENERIC_ERROR);

        let err = status_error(StatusCode::BAD_REQUEST, r#"{"message":"  "}"#);
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let result: Result<Vec<Account>, ApiError> = ApiClient::parse_data("{\"data\":42}");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
