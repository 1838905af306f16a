//! Loans screen: list, application form, EMI schedule and payment.

use crate::app::views::accounts::account_picker;
use crate::app::{App, LOAN_TYPES};
use crate::emi;
use crate::theme;
use crate::types::EmiStatus;
use crate::ui::components::{
    detail_row, emi_status_badge, empty_hint, error_text, field_label, loading_row,
    section_heading, text_field,
};
use crate::utils::{format_date, format_money};
use bigdecimal::{BigDecimal, FromPrimitive};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_loans(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.loans_slot.is_idle() {
            self.load_loans(ctx);
        }
        if self.accounts_slot.is_idle() {
            self.load_accounts(ctx);
        }

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Loans")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button_accent(format!("{} Apply", icons::PLUS)))
                    .clicked()
                {
                    self.show_loan_form = true;
                }
            });
        });
        ui.add_space(theme::SPACING_LG);

        let loans = self.loans_slot.get().ready().cloned();
        match &loans {
            None => {
                if let Some(message) = self.loans_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading loans...");
                }
            }
            Some(list) if list.is_empty() => {
                empty_hint(ui, "No loans yet.");
            }
            Some(list) => {
                for loan in list {
                    self.render_loan_card(ctx, ui, loan);
                    ui.add_space(theme::SPACING_MD);
                }
            }
        }

        self.render_schedule(ctx, ui);
        self.render_apply_modal(ctx);
    }

    fn render_loan_card(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, loan: &crate::types::Loan) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width().min(560.0));
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&loan.loan_type)
                        .size(theme::FONT_BODY)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(&loan.loan_account_number)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = match loan.status.as_str() {
                        "APPROVED" | "DISBURSED" | "ACTIVE" => theme::STATUS_SUCCESS,
                        "REJECTED" | "DEFAULTED" => theme::STATUS_ERROR,
                        "CLOSED" => theme::TEXT_DIM,
                        _ => theme::STATUS_WARNING,
                    };
                    crate::ui::components::status_badge(ui, &loan.status, color);
                });
            });
            ui.add_space(theme::SPACING_SM);
            detail_row(ui, "Principal", &format_money(loan.loan_amount));
            detail_row(
                ui,
                "Rate / tenure",
                &format!("{}% · {} months", loan.interest_rate, loan.tenure_months),
            );
            detail_row(ui, "EMI", &format_money(loan.emi_amount));
            detail_row(
                ui,
                "Paid so far",
                &format!(
                    "{} of {}",
                    format_money(loan.paid_amount),
                    format_money(loan.total_payable_amount)
                ),
            );
            if let Some(reason) = &loan.rejection_reason {
                ui.label(
                    egui::RichText::new(reason)
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_ERROR),
                );
            }
            ui.add_space(theme::SPACING_SM);
            if ui
                .add(theme::button(format!("{} Schedule", icons::CALENDAR_BLANK)))
                .clicked()
            {
                if self.schedule_loan_id == Some(loan.id) {
                    self.schedule_loan_id = None;
                } else {
                    self.load_schedule(ctx, loan.id);
                }
            }
        });
    }

    fn render_schedule(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let Some(loan_id) = self.schedule_loan_id else {
            return;
        };
        ui.add_space(theme::SPACING_LG);
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width().min(640.0));
            section_heading(ui, "Repayment schedule");

            let schedule = self.schedule_slot.get().ready().cloned();
            let Some(schedule) = schedule else {
                if let Some(message) = self.schedule_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading schedule...");
                }
                return;
            };

            let next_pending = schedule
                .iter()
                .find(|emi| matches!(emi.status, EmiStatus::Pending | EmiStatus::Late))
                .map(|emi| emi.installment_number);

            if let Some(installment) = next_pending {
                if self.pay_emi_slot.is_loading() {
                    loading_row(ui, "Paying...");
                } else {
                    if ui
                        .add(theme::button_accent(format!(
                            "{} Pay installment #{installment}",
                            icons::CURRENCY_INR
                        )))
                        .clicked()
                    {
                        self.start_pay_emi(ctx, loan_id, installment);
                    }
                    if let Some(message) = self.pay_emi_slot.error() {
                        error_text(ui, &message);
                    }
                }
                ui.add_space(theme::SPACING_MD);
            }

            egui::ScrollArea::vertical()
                .max_height(300.0)
                .show(ui, |ui| {
                    egui::Grid::new("emi_schedule")
                        .num_columns(7)
                        .spacing([theme::SPACING_XL, theme::SPACING_SM])
                        .striped(true)
                        .show(ui, |ui| {
                            for header in
                                ["#", "DUE", "AMOUNT", "PRINCIPAL", "INTEREST", "BALANCE", "STATUS"]
                            {
                                ui.label(
                                    egui::RichText::new(header)
                                        .size(theme::FONT_CAPTION)
                                        .color(theme::TEXT_DIM),
                                );
                            }
                            ui.end_row();
                            for emi in &schedule {
                                ui.label(emi.installment_number.to_string());
                                ui.label(format_date(&emi.due_date));
                                ui.label(format_money(emi.amount));
                                ui.label(format_money(emi.principal_amount));
                                ui.label(format_money(emi.interest_amount));
                                ui.label(format_money(emi.remaining_principal));
                                ui.horizontal(|ui| {
                                    emi_status_badge(ui, emi.status);
                                    if let Some(paid_on) = &emi.payment_date {
                                        ui.label(
                                            egui::RichText::new(format_date(paid_on))
                                                .size(theme::FONT_CAPTION)
                                                .color(theme::TEXT_DIM),
                                        );
                                    }
                                });
                                ui.end_row();
                            }
                        });
                });
        });
    }

    fn render_apply_modal(&mut self, ctx: &egui::Context) {
        if !self.show_loan_form {
            return;
        }
        let accounts = self.accounts_slot.get().ready().cloned().unwrap_or_default();
        let modal = egui::Modal::new(egui::Id::new("apply_loan_modal"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(360.0);
                section_heading(ui, "Apply for a loan");

                field_label(ui, "TYPE");
                egui::ComboBox::from_id_salt("loan_type")
                    .selected_text(self.loan_type)
                    .show_ui(ui, |ui| {
                        for loan_type in LOAN_TYPES {
                            ui.selectable_value(&mut self.loan_type, loan_type, loan_type);
                        }
                    });
                ui.add_space(theme::SPACING_MD);

                text_field(ui, "AMOUNT", &mut self.loan_amount);
                text_field(ui, "TENURE (MONTHS)", &mut self.loan_tenure);

                if self.loan_account.is_none() {
                    self.loan_account = accounts.first().map(|a| a.account_number.clone());
                }
                field_label(ui, "LINKED ACCOUNT");
                account_picker(ui, "loan_account", &accounts, &mut self.loan_account);
                ui.add_space(theme::SPACING_MD);

                // Instant EMI preview from the local calculator, 10% placeholder
                // rate until the bank sets the real one on approval
                if let (Ok(amount), Ok(tenure)) = (
                    self.loan_amount.trim().parse::<f64>(),
                    self.loan_tenure.trim().parse::<u32>(),
                ) {
                    if let Some(principal) = BigDecimal::from_f64(amount) {
                        let rate = BigDecimal::from(10u32);
                        if let Ok(quote) = emi::calculate(&principal, &rate, tenure) {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Indicative EMI at 10%: {}/month",
                                    quote.emi
                                ))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                            );
                            ui.add_space(theme::SPACING_MD);
                        }
                    }
                }

                if self.apply_loan_slot.is_loading() {
                    loading_row(ui, "Submitting...");
                } else {
                    ui.horizontal(|ui| {
                        if ui.add(theme::button_accent("Apply")).clicked() {
                            self.start_apply_loan(ctx);
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            self.show_loan_form = false;
                            let _ = self.apply_loan_slot.take_error();
                        }
                    });
                    if let Some(message) = self.apply_loan_slot.error() {
                        ui.add_space(theme::SPACING_SM);
                        error_text(ui, &message);
                    }
                }
            });
        if modal.should_close() {
            self.show_loan_form = false;
        }
    }
}
