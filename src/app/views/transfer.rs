//! Fund transfer screen.

use crate::app::views::accounts::account_picker;
use crate::app::App;
use crate::theme;
use crate::ui::components::{error_text, field_label, loading_row, section_heading, text_field};
use crate::utils::mask_account;
use eframe::egui;

impl App {
    pub fn render_transfer(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.accounts_slot.is_idle() {
            self.load_accounts(ctx);
        }
        if self.beneficiaries_slot.is_idle() {
            self.load_beneficiaries(ctx);
        }

        ui.label(
            egui::RichText::new("Transfer")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_LG);

        let accounts = self.accounts_slot.get().ready().cloned();
        let Some(accounts) = accounts else {
            if let Some(message) = self.accounts_slot.error() {
                error_text(ui, &message);
            } else {
                loading_row(ui, "Loading accounts...");
            }
            return;
        };
        if accounts.is_empty() {
            error_text(ui, "Open an account before making transfers.");
            return;
        }

        if self.transfer_from.is_none() {
            self.transfer_from = accounts.first().map(|a| a.account_number.clone());
        }

        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(theme::FORM_WIDTH + 2.0 * theme::SPACING_XL);
            section_heading(ui, "Send money");

            field_label(ui, "FROM");
            account_picker(ui, "transfer_from", &accounts, &mut self.transfer_from);
            ui.add_space(theme::SPACING_MD);

            field_label(ui, "TO ACCOUNT NUMBER");
            ui.add(
                egui::TextEdit::singleline(&mut self.transfer_to)
                    .desired_width(theme::FORM_WIDTH),
            );

            // Quick-pick from saved beneficiaries
            let beneficiaries = self.beneficiaries_slot.get().ready().cloned();
            if let Some(beneficiaries) = beneficiaries.filter(|b| !b.is_empty()) {
                ui.add_space(theme::SPACING_SM);
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new("Saved:")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                    for beneficiary in &beneficiaries {
                        if ui
                            .small_button(&beneficiary.nickname)
                            .on_hover_text(mask_account(&beneficiary.account_number))
                            .clicked()
                        {
                            self.transfer_to = beneficiary.account_number.clone();
                        }
                    }
                });
            }
            ui.add_space(theme::SPACING_MD);

            text_field(ui, "AMOUNT", &mut self.transfer_amount);
            text_field(ui, "DESCRIPTION (OPTIONAL)", &mut self.transfer_description);

            if self.transfer_slot.is_loading() {
                loading_row(ui, "Transferring...");
            } else {
                if ui
                    .add(theme::button_accent("Transfer").min_size(egui::vec2(
                        theme::FORM_WIDTH,
                        theme::BUTTON_HEIGHT_LARGE,
                    )))
                    .clicked()
                {
                    self.start_transfer(ctx);
                }
                if let Some(message) = self.transfer_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }
        });
    }
}
