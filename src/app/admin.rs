//! Admin-only actions: KYC review queue and user management.

use super::App;
use crate::api::{mock, KycStatusUpdate};
use crate::types::KycStatus;
use eframe::egui;
use tracing::warn;

impl App {
    /// Fetch the review queue. When the backend is unreachable (the hosted
    /// demo instance sleeps) the screen shows canned sample rows instead.
    pub fn load_admin_kyc(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        let is_sample = self.admin_kyc_is_sample.clone();
        self.spawn_into(ctx, &self.admin_kyc_slot.clone(), async move {
            match api.get_all_kyc_submissions().await {
                Ok(submissions) => {
                    *is_sample.lock().unwrap() = false;
                    Ok(submissions)
                }
                Err(e) if e.is_network() => {
                    warn!(error = %e, "Backend unreachable, using sample KYC data");
                    *is_sample.lock().unwrap() = true;
                    Ok(mock::sample_kyc_submissions())
                }
                Err(e) => Err(e),
            }
        });
    }

    pub fn start_kyc_decision(&mut self, ctx: &egui::Context, kyc_id: i64, approve: bool) {
        let reason = self.review_rejection_reason.trim().to_string();
        if !approve && reason.is_empty() {
            self.review_slot.set(crate::types::Remote::Failed(
                "A rejection needs a reason.".into(),
            ));
            return;
        }
        let api = self.api.clone();
        let update = KycStatusUpdate {
            status: if approve {
                KycStatus::Approved
            } else {
                KycStatus::Rejected
            },
            rejection_reason: if approve { None } else { Some(reason) },
        };
        self.spawn_into(ctx, &self.review_slot.clone(), async move {
            api.update_kyc_status(kyc_id, &update).await
        });
    }

    pub fn load_admin_users(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.admin_users_slot.clone(), async move {
            api.get_all_users().await
        });
    }

    pub fn start_delete_user(&mut self, ctx: &egui::Context, user_id: i64) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.delete_user_slot.clone(), async move {
            api.delete_user(user_id).await
        });
    }

    pub fn poll_admin(&mut self, ctx: &egui::Context) {
        if let Some(updated) = self.review_slot.take_ready() {
            self.review_kyc_id = None;
            self.review_rejection_reason.clear();
            self.show_toast(format!("Submission {}.", updated.status.label()));
            self.load_admin_kyc(ctx);
        }

        if self.delete_user_slot.take_ready().is_some() {
            self.confirm_delete_user = None;
            self.show_toast("User deleted.");
            self.load_admin_users(ctx);
        }
    }
}
