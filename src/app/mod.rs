//! App module - contains the main application state and logic

mod actions;
mod admin;
mod auth;
mod banking;
mod kyc;
mod loans;
pub mod views;

use crate::api::{ApiClient, ValidateResponse};
use crate::emi::EmiQuote;
use crate::session::Session;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub(crate) use actions::Slot;

/// Which top-level screen is showing. Auth screens replace the whole window;
/// everything else renders inside the sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    VerifyEmail,
    Dashboard,
    Accounts,
    Transfer,
    Beneficiaries,
    Kyc,
    Loans,
    EmiCalculator,
    Admin,
}

impl Screen {
    pub fn requires_auth(self) -> bool {
        !matches!(self, Screen::Login | Screen::Register | Screen::VerifyEmail)
    }
}

/// Admin screen tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    KycReview,
    Users,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) screen: Screen,
    pub(crate) session: Option<Session>,
    /// Set by background tasks when the server answers 401.
    pub(crate) session_expired: Arc<Mutex<bool>>,
    pub(crate) logo_texture: Option<egui::TextureHandle>,

    // Login / register / verify forms
    pub(crate) login_email: String,
    pub(crate) login_password: String,
    pub(crate) remember_email: bool,
    pub(crate) login_slot: Slot<LoginResponse>,
    pub(crate) register_full_name: String,
    pub(crate) register_email: String,
    pub(crate) register_password: String,
    pub(crate) register_confirm: String,
    pub(crate) register_phone: String,
    pub(crate) register_dob: String,
    pub(crate) register_pan: String,
    pub(crate) register_aadhar: String,
    pub(crate) register_slot: Slot<crate::api::StatusMessage>,
    /// Email waiting on OTP verification after registering.
    pub(crate) verify_email_addr: String,
    pub(crate) verify_otp: String,
    pub(crate) verify_slot: Slot<crate::api::StatusMessage>,
    pub(crate) resend_slot: Slot<()>,
    /// Restored-session token check, runs once on startup.
    pub(crate) validate_slot: Slot<ValidateResponse>,
    pub(crate) validate_started: bool,

    // Accounts
    pub(crate) accounts_slot: Slot<Vec<Account>>,
    pub(crate) new_account_type: &'static str,
    pub(crate) new_account_deposit: String,
    pub(crate) create_account_slot: Slot<Account>,
    pub(crate) show_create_account: bool,

    // Transaction history + deposit/withdraw
    pub(crate) history_account: Option<String>,
    pub(crate) history_slot: Slot<Vec<Transaction>>,
    pub(crate) history_filter_on: bool,
    pub(crate) history_start_date: String,
    pub(crate) history_end_date: String,
    pub(crate) cash_deposit_mode: bool,
    pub(crate) cash_account: Option<String>,
    pub(crate) cash_amount: String,
    pub(crate) cash_description: String,
    pub(crate) cash_slot: Slot<Transaction>,

    // Transfer
    pub(crate) transfer_from: Option<String>,
    pub(crate) transfer_to: String,
    pub(crate) transfer_amount: String,
    pub(crate) transfer_description: String,
    pub(crate) transfer_slot: Slot<Transaction>,

    // Beneficiaries
    pub(crate) beneficiaries_slot: Slot<Vec<Beneficiary>>,
    pub(crate) show_add_beneficiary: bool,
    pub(crate) beneficiary_nickname: String,
    pub(crate) beneficiary_account: String,
    pub(crate) beneficiary_bank: String,
    pub(crate) beneficiary_ifsc: String,
    pub(crate) add_beneficiary_slot: Slot<Beneficiary>,
    pub(crate) delete_beneficiary_slot: Slot<()>,

    // KYC (customer side)
    /// `None` inside `Ready` means nothing submitted yet (404 from the server).
    pub(crate) kyc_status_slot: Slot<Option<KycSubmission>>,
    pub(crate) kyc_document_type: DocumentType,
    pub(crate) kyc_document_number: String,
    pub(crate) kyc_front_path: Option<PathBuf>,
    pub(crate) kyc_back_path: Option<PathBuf>,
    pub(crate) kyc_selfie_path: Option<PathBuf>,
    pub(crate) kyc_submit_slot: Slot<KycSubmission>,
    /// Preview textures keyed by file path. `None` = failed to decode.
    pub(crate) kyc_previews: HashMap<String, Option<egui::TextureHandle>>,

    // Admin
    pub(crate) admin_tab: AdminTab,
    pub(crate) admin_kyc_slot: Slot<Vec<KycSubmission>>,
    /// True when the list came from the canned fallback data.
    pub(crate) admin_kyc_is_sample: Arc<Mutex<bool>>,
    pub(crate) review_kyc_id: Option<i64>,
    pub(crate) review_rejection_reason: String,
    pub(crate) review_slot: Slot<KycSubmission>,
    pub(crate) admin_users_slot: Slot<Vec<AdminUser>>,
    pub(crate) delete_user_slot: Slot<()>,
    pub(crate) confirm_delete_user: Option<i64>,

    // Loans
    pub(crate) loans_slot: Slot<Vec<Loan>>,
    pub(crate) show_loan_form: bool,
    pub(crate) loan_type: &'static str,
    pub(crate) loan_amount: String,
    pub(crate) loan_tenure: String,
    pub(crate) loan_account: Option<String>,
    pub(crate) apply_loan_slot: Slot<Loan>,
    pub(crate) schedule_loan_id: Option<i64>,
    pub(crate) schedule_slot: Slot<Vec<EmiRecord>>,
    pub(crate) pay_emi_slot: Slot<Loan>,

    // EMI calculator (pure, no server round-trip)
    pub(crate) calc_principal: String,
    pub(crate) calc_rate: String,
    pub(crate) calc_tenure: String,
    pub(crate) calc_result: Option<Result<EmiQuote, String>>,

    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,

    // Settings / window state
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) api_base_url: String,
}

pub const ACCOUNT_TYPES: [&str; 2] = ["SAVINGS", "CURRENT"];
pub const LOAN_TYPES: [&str; 3] = ["PERSONAL_LOAN", "HOME_LOAN", "CAR_LOAN"];

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        session: Option<Session>,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let api_base_url = settings.api_base_or_default();
        let token = session.as_ref().map(|s| s.token.clone());
        let api = ApiClient::new(api_base_url.clone(), token);

        let screen = if session.is_some() {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        let login_email = settings.remembered_email.clone().unwrap_or_default();

        Self {
            api,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            screen,
            session,
            session_expired: Arc::new(Mutex::new(false)),
            logo_texture: None,
            remember_email: !login_email.is_empty(),
            login_email,
            login_password: String::new(),
            login_slot: Slot::default(),
            register_full_name: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm: String::new(),
            register_phone: String::new(),
            register_dob: String::new(),
            register_pan: String::new(),
            register_aadhar: String::new(),
            register_slot: Slot::default(),
            verify_email_addr: String::new(),
            verify_otp: String::new(),
            verify_slot: Slot::default(),
            resend_slot: Slot::default(),
            validate_slot: Slot::default(),
            validate_started: false,
            accounts_slot: Slot::default(),
            new_account_type: ACCOUNT_TYPES[0],
            new_account_deposit: String::new(),
            create_account_slot: Slot::default(),
            show_create_account: false,
            history_account: None,
            history_slot: Slot::default(),
            history_filter_on: false,
            history_start_date: String::new(),
            history_end_date: String::new(),
            cash_deposit_mode: true,
            cash_account: None,
            cash_amount: String::new(),
            cash_description: String::new(),
            cash_slot: Slot::default(),
            transfer_from: None,
            transfer_to: String::new(),
            transfer_amount: String::new(),
            transfer_description: String::new(),
            transfer_slot: Slot::default(),
            beneficiaries_slot: Slot::default(),
            show_add_beneficiary: false,
            beneficiary_nickname: String::new(),
            beneficiary_account: String::new(),
            beneficiary_bank: String::new(),
            beneficiary_ifsc: String::new(),
            add_beneficiary_slot: Slot::default(),
            delete_beneficiary_slot: Slot::default(),
            kyc_status_slot: Slot::default(),
            kyc_document_type: DocumentType::Passport,
            kyc_document_number: String::new(),
            kyc_front_path: None,
            kyc_back_path: None,
            kyc_selfie_path: None,
            kyc_submit_slot: Slot::default(),
            kyc_previews: HashMap::new(),
            admin_tab: AdminTab::KycReview,
            admin_kyc_slot: Slot::default(),
            admin_kyc_is_sample: Arc::new(Mutex::new(false)),
            review_kyc_id: None,
            review_rejection_reason: String::new(),
            review_slot: Slot::default(),
            admin_users_slot: Slot::default(),
            delete_user_slot: Slot::default(),
            confirm_delete_user: None,
            loans_slot: Slot::default(),
            show_loan_form: false,
            loan_type: LOAN_TYPES[0],
            loan_amount: String::new(),
            loan_tenure: "12".to_string(),
            loan_account: None,
            apply_loan_slot: Slot::default(),
            schedule_loan_id: None,
            schedule_slot: Slot::default(),
            pay_emi_slot: Slot::default(),
            calc_principal: "100000".to_string(),
            calc_rate: "10".to_string(),
            calc_tenure: "12".to_string(),
            calc_result: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            api_base_url,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            remembered_email: if self.remember_email && !self.login_email.is_empty() {
                Some(self.login_email.clone())
            } else {
                None
            },
            api_base_url: Some(self.api_base_url.clone()),
        };
        settings.save(&self.data_dir);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.user.is_admin())
    }

    /// Clear the session and all cached server data, back to the login screen.
    pub fn logout(&mut self) {
        self.api.clear_token();
        Session::clear(&self.data_dir);
        self.session = None;
        self.login_password.clear();
        self.reset_server_data();
        self.screen = Screen::Login;
    }

    /// Drop every slot holding data fetched for the previous user.
    fn reset_server_data(&mut self) {
        self.accounts_slot = Slot::default();
        self.history_slot = Slot::default();
        self.history_account = None;
        self.cash_account = None;
        self.transfer_from = None;
        self.loan_account = None;
        self.cash_slot = Slot::default();
        self.transfer_slot = Slot::default();
        self.beneficiaries_slot = Slot::default();
        self.add_beneficiary_slot = Slot::default();
        self.delete_beneficiary_slot = Slot::default();
        self.kyc_status_slot = Slot::default();
        self.kyc_submit_slot = Slot::default();
        self.admin_kyc_slot = Slot::default();
        self.admin_users_slot = Slot::default();
        self.review_slot = Slot::default();
        self.delete_user_slot = Slot::default();
        self.loans_slot = Slot::default();
        self.apply_loan_slot = Slot::default();
        self.schedule_slot = Slot::default();
        self.schedule_loan_id = None;
        self.pay_emi_slot = Slot::default();
        self.validate_slot = Slot::default();
        *self.session_expired.lock().unwrap() = false;
    }
}
