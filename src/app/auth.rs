//! Sign-in, registration and session restore logic.

use super::{App, Screen};
use crate::api::{LoginRequest, RegisterRequest, VerifyEmailRequest};
use crate::session::Session;
use crate::types::User;
use eframe::egui;
use tracing::info;

impl App {
    pub fn start_login(&mut self, ctx: &egui::Context) {
        if self.login_email.trim().is_empty() || self.login_password.is_empty() {
            return;
        }
        let api = self.api.clone();
        let request = LoginRequest {
            email: self.login_email.trim().to_string(),
            password: self.login_password.clone(),
        };
        self.spawn_into(ctx, &self.login_slot.clone(), async move {
            api.login(&request).await
        });
    }

    pub fn start_register(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        let request = RegisterRequest {
            full_name: self.register_full_name.trim().to_string(),
            email: self.register_email.trim().to_string(),
            password: self.register_password.clone(),
            phone: self.register_phone.trim().to_string(),
            date_of_birth: self.register_dob.trim().to_string(),
            pan_number: non_empty(&self.register_pan),
            aadhar_number: non_empty(&self.register_aadhar),
        };
        self.spawn_into(ctx, &self.register_slot.clone(), async move {
            api.register_customer(&request).await
        });
    }

    pub fn start_verify_email(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        let request = VerifyEmailRequest {
            email: self.verify_email_addr.clone(),
            otp: self.verify_otp.trim().to_string(),
        };
        self.spawn_into(ctx, &self.verify_slot.clone(), async move {
            api.verify_email(&request).await
        });
    }

    pub fn start_resend_otp(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        let email = self.verify_email_addr.clone();
        self.spawn_into(ctx, &self.resend_slot.clone(), async move {
            api.resend_otp(&email).await
        });
    }

    /// Check the restored token still works. Runs once, on the first frame
    /// after launching with a saved session.
    pub fn start_validate_session(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.validate_slot.clone(), async move {
            api.validate_token().await
        });
    }

    /// Consume finished auth requests and advance screens accordingly.
    pub fn poll_auth(&mut self) {
        if let Some(login) = self.login_slot.take_ready() {
            let user = User {
                id: login.id,
                email: login.username,
                roles: login.roles,
            };
            info!(user_id = user.id, "Signed in");
            self.api.set_token(login.token.clone());
            let session = Session {
                token: login.token,
                user,
            };
            session.save(&self.data_dir);
            self.session = Some(session);
            self.login_password.clear();
            self.save_settings();
            self.screen = Screen::Dashboard;
        }

        if let Some(reply) = self.register_slot.take_ready() {
            info!(status = ?reply.status, "Registered, awaiting email verification");
            self.verify_email_addr = self.register_email.trim().to_string();
            self.verify_otp.clear();
            self.screen = Screen::VerifyEmail;
            if let Some(message) = reply.message {
                self.show_toast(message);
            }
        }

        if let Some(reply) = self.verify_slot.take_ready() {
            self.login_email = self.verify_email_addr.clone();
            self.screen = Screen::Login;
            self.show_toast(
                reply
                    .message
                    .unwrap_or_else(|| "Email verified. You can sign in now.".to_string()),
            );
        }

        if self.resend_slot.take_ready().is_some() {
            self.show_toast("A new code is on its way.");
        }

        if let Some(reply) = self.validate_slot.take_ready() {
            // The reply carries username and roles only; roles may have
            // changed server-side since the session was saved.
            if let Some(session) = &mut self.session {
                session.user.email = reply.user;
                session.user.roles = reply.roles;
                session.save(&self.data_dir);
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
