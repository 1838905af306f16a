//! Server DTOs and common view-state types

use serde::{Deserialize, Serialize};

/// Authenticated user identity, as returned by `/auth/login` and `/auth/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(alias = "username")]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == "ROLE_ADMIN")
    }
}

/// Flat login response (not enveloped).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub transaction_type: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_account_number: Option<String>,
    #[serde(default)]
    pub to_account_number: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: i64,
    pub nickname: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn label(self) -> &'static str {
        match self {
            KycStatus::Pending => "PENDING",
            KycStatus::Approved => "APPROVED",
            KycStatus::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Passport,
    DriversLicense,
    NationalId,
    VoterId,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Passport,
        DocumentType::DriversLicense,
        DocumentType::NationalId,
        DocumentType::VoterId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::DriversLicense => "Driver's License",
            DocumentType::NationalId => "National ID",
            DocumentType::VoterId => "Voter ID",
        }
    }

    pub fn wire(self) -> &'static str {
        match self {
            DocumentType::Passport => "PASSPORT",
            DocumentType::DriversLicense => "DRIVERS_LICENSE",
            DocumentType::NationalId => "NATIONAL_ID",
            DocumentType::VoterId => "VOTER_ID",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub document_type: String,
    pub document_number: String,
    pub status: KycStatus,
    #[serde(default)]
    pub document_front_image_url: Option<String>,
    #[serde(default)]
    pub document_back_image_url: Option<String>,
    #[serde(default)]
    pub selfie_image_url: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmiStatus {
    Pending,
    Paid,
    Late,
    Defaulted,
}

impl EmiStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmiStatus::Pending => "PENDING",
            EmiStatus::Paid => "PAID",
            EmiStatus::Late => "LATE",
            EmiStatus::Defaulted => "DEFAULTED",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiRecord {
    pub installment_number: i32,
    pub due_date: String,
    pub amount: f64,
    pub principal_amount: f64,
    pub interest_amount: f64,
    pub remaining_principal: f64,
    pub status: EmiStatus,
    #[serde(default)]
    pub payment_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub loan_account_number: String,
    pub loan_type: String,
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub tenure_months: i32,
    pub status: String,
    pub emi_amount: f64,
    pub total_payable_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// User row in the admin dashboard. Most fields are optional because the
/// backend omits whatever the profile never filled in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// Transient transfer request. Never persisted client-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_number: String,
    pub to_account_number: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// State of a background request whose result the UI is waiting on.
///
/// One slot per form; at most one outstanding request per slot.
#[derive(Debug, Clone, Default)]
pub enum Remote<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
