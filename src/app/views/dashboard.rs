//! Dashboard: balances at a glance, KYC state, open loans.

use crate::app::{App, Screen};
use crate::theme;
use crate::types::KycStatus;
use crate::ui::components::{detail_row, empty_hint, kyc_status_badge, loading_row};
use crate::utils::{format_money, mask_account};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_dashboard(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.accounts_slot.is_idle() {
            self.load_accounts(ctx);
        }
        if self.kyc_status_slot.is_idle() {
            self.load_kyc_status(ctx);
        }
        if self.loans_slot.is_idle() {
            self.load_loans(ctx);
        }

        let name = self
            .session
            .as_ref()
            .map(|s| s.user.email.clone())
            .unwrap_or_default();
        ui.label(
            egui::RichText::new(format!("Welcome back, {name}"))
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_XL);

        // Top row: balance + KYC
        ui.horizontal_top(|ui| {
            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(260.0);
                ui.label(
                    egui::RichText::new("TOTAL BALANCE")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_SM);
                match &*self.accounts_slot.get() {
                    crate::types::Remote::Ready(accounts) => {
                        let total: f64 = accounts.iter().map(|a| a.balance).sum();
                        ui.label(
                            egui::RichText::new(format_money(total))
                                .size(24.0)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "{} account{}",
                                accounts.len(),
                                if accounts.len() == 1 { "" } else { "s" }
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                        );
                    }
                    crate::types::Remote::Failed(message) => {
                        ui.label(
                            egui::RichText::new(message)
                                .size(theme::FONT_LABEL)
                                .color(theme::STATUS_ERROR),
                        );
                    }
                    _ => loading_row(ui, "Loading accounts..."),
                }
            });

            ui.add_space(theme::SPACING_LG);

            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(260.0);
                ui.label(
                    egui::RichText::new("IDENTITY VERIFICATION")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_SM);
                match &*self.kyc_status_slot.get() {
                    crate::types::Remote::Ready(Some(submission)) => {
                        ui.horizontal(|ui| {
                            kyc_status_badge(ui, submission.status);
                        });
                        if submission.status == KycStatus::Rejected {
                            if let Some(reason) = &submission.rejection_reason {
                                ui.label(
                                    egui::RichText::new(reason)
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_MUTED),
                                );
                            }
                        }
                    }
                    crate::types::Remote::Ready(None) => {
                        ui.label(
                            egui::RichText::new("Not submitted")
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        );
                        if ui
                            .add(theme::button_accent(format!(
                                "{} Verify now",
                                icons::IDENTIFICATION_CARD
                            )))
                            .clicked()
                        {
                            self.screen = Screen::Kyc;
                        }
                    }
                    crate::types::Remote::Failed(message) => {
                        ui.label(
                            egui::RichText::new(message)
                                .size(theme::FONT_LABEL)
                                .color(theme::STATUS_ERROR),
                        );
                    }
                    _ => loading_row(ui, "Checking..."),
                }
            });
        });

        ui.add_space(theme::SPACING_XL);

        // Accounts list
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width().min(560.0));
            ui.label(
                egui::RichText::new("YOUR ACCOUNTS")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_MD);
            match &*self.accounts_slot.get() {
                crate::types::Remote::Ready(accounts) if accounts.is_empty() => {
                    empty_hint(ui, "No accounts yet. Open one from the Accounts screen.");
                }
                crate::types::Remote::Ready(accounts) => {
                    for account in accounts {
                        detail_row(
                            ui,
                            &format!(
                                "{} {}",
                                account.account_type,
                                mask_account(&account.account_number)
                            ),
                            &format_money(account.balance),
                        );
                        ui.add_space(theme::SPACING_SM);
                    }
                }
                crate::types::Remote::Failed(_) => {}
                _ => loading_row(ui, "Loading..."),
            }
        });

        ui.add_space(theme::SPACING_XL);

        // Open loans summary
        if let crate::types::Remote::Ready(loans) = &*self.loans_slot.get() {
            if !loans.is_empty() {
                theme::card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("ACTIVE LOANS")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                    ui.add_space(theme::SPACING_MD);
                    for loan in loans {
                        detail_row(
                            ui,
                            &format!("{} ({})", loan.loan_type, loan.status),
                            &format!(
                                "{} / month, {} outstanding",
                                format_money(loan.emi_amount),
                                format_money(loan.total_payable_amount - loan.paid_amount)
                            ),
                        );
                        ui.add_space(theme::SPACING_SM);
                    }
                });
            }
        }
    }
}
