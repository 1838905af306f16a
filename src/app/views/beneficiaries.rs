//! Saved beneficiaries screen.

use crate::app::App;
use crate::theme;
use crate::ui::components::{empty_hint, error_text, loading_row, section_heading, text_field};
use crate::utils::mask_account;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_beneficiaries(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.beneficiaries_slot.is_idle() {
            self.load_beneficiaries(ctx);
        }

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Beneficiaries")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button_accent(format!("{} Add", icons::PLUS)))
                    .clicked()
                {
                    self.show_add_beneficiary = true;
                }
            });
        });
        ui.add_space(theme::SPACING_LG);

        if let Some(message) = self.delete_beneficiary_slot.error() {
            error_text(ui, &message);
            ui.add_space(theme::SPACING_SM);
        }

        let beneficiaries = self.beneficiaries_slot.get().ready().cloned();
        match &beneficiaries {
            None => {
                if let Some(message) = self.beneficiaries_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading beneficiaries...");
                }
            }
            Some(list) if list.is_empty() => {
                empty_hint(ui, "No beneficiaries saved yet.");
            }
            Some(list) => {
                for beneficiary in list {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_min_width(ui.available_width().min(520.0));
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&beneficiary.nickname)
                                        .size(theme::FONT_BODY)
                                        .strong(),
                                );
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} · {} · {}",
                                        mask_account(&beneficiary.account_number),
                                        beneficiary.bank_name,
                                        beneficiary.ifsc_code
                                    ))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_MUTED),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let deleting = self.delete_beneficiary_slot.is_loading();
                                    if ui
                                        .add_enabled(
                                            !deleting,
                                            theme::button_danger(icons::TRASH),
                                        )
                                        .clicked()
                                    {
                                        self.start_delete_beneficiary(ctx, beneficiary.id);
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(theme::SPACING_SM);
                }
            }
        }

        self.render_add_beneficiary_modal(ctx);
    }

    fn render_add_beneficiary_modal(&mut self, ctx: &egui::Context) {
        if !self.show_add_beneficiary {
            return;
        }
        let modal = egui::Modal::new(egui::Id::new("add_beneficiary_modal"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(360.0);
                section_heading(ui, "Add beneficiary");

                text_field(ui, "NICKNAME", &mut self.beneficiary_nickname);
                text_field(ui, "ACCOUNT NUMBER", &mut self.beneficiary_account);
                text_field(ui, "BANK NAME", &mut self.beneficiary_bank);
                text_field(ui, "IFSC CODE", &mut self.beneficiary_ifsc);

                if self.add_beneficiary_slot.is_loading() {
                    loading_row(ui, "Saving...");
                } else {
                    ui.horizontal(|ui| {
                        if ui.add(theme::button_accent("Save")).clicked() {
                            self.start_add_beneficiary(ctx);
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            self.show_add_beneficiary = false;
                            let _ = self.add_beneficiary_slot.take_error();
                        }
                    });
                    if let Some(message) = self.add_beneficiary_slot.error() {
                        ui.add_space(theme::SPACING_SM);
                        error_text(ui, &message);
                    }
                }
            });
        if modal.should_close() {
            self.show_add_beneficiary = false;
        }
    }
}
