//! Accounts screen: balances, opening accounts, cash in/out, history.

use crate::app::{App, ACCOUNT_TYPES};
use crate::theme;
use crate::ui::components::{
    empty_hint, error_text, field_label, loading_row, section_heading, text_field,
};
use crate::utils::{format_date, format_money, mask_account};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_accounts(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.accounts_slot.is_idle() {
            self.load_accounts(ctx);
        }

        let accounts = self.accounts_slot.get().ready().cloned();

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Accounts")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button_accent(format!("{} Open account", icons::PLUS)))
                    .clicked()
                {
                    self.show_create_account = true;
                }
                if ui.add(theme::button(icons::ARROWS_CLOCKWISE)).clicked() {
                    self.load_accounts(ctx);
                }
            });
        });
        ui.add_space(theme::SPACING_LG);

        match &accounts {
            None => {
                if let Some(message) = self.accounts_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading accounts...");
                }
            }
            Some(accounts) if accounts.is_empty() => {
                empty_hint(ui, "You have no accounts yet.");
            }
            Some(accounts) => {
                ui.horizontal_wrapped(|ui| {
                    for account in accounts {
                        theme::card_frame().show(ui, |ui| {
                            ui.set_min_width(220.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&account.account_type)
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                );
                                if let Some(status) = &account.status {
                                    if status != "ACTIVE" {
                                        ui.label(
                                            egui::RichText::new(status)
                                                .size(theme::FONT_CAPTION)
                                                .color(theme::STATUS_WARNING),
                                        );
                                    }
                                }
                            });
                            ui.label(
                                egui::RichText::new(format_money(account.balance))
                                    .size(20.0)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(mask_account(&account.account_number))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                    }
                });
            }
        }

        ui.add_space(theme::SPACING_XL);

        if let Some(accounts) = &accounts {
            if !accounts.is_empty() {
                ui.horizontal_top(|ui| {
                    self.render_cash_form(ctx, ui, accounts);
                    ui.add_space(theme::SPACING_LG);
                    self.render_history(ctx, ui, accounts);
                });
            }
        }

        self.render_create_account_modal(ctx);
    }

    fn render_cash_form(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        accounts: &[crate::types::Account],
    ) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(300.0);
            section_heading(ui, "Cash");
            theme::segmented_toggle(ui, "DEPOSIT", "WITHDRAW", &mut self.cash_deposit_mode);
            ui.add_space(theme::SPACING_MD);

            if self.cash_account.is_none() {
                self.cash_account = accounts.first().map(|a| a.account_number.clone());
            }
            field_label(ui, "ACCOUNT");
            account_picker(ui, "cash_account", accounts, &mut self.cash_account);
            ui.add_space(theme::SPACING_MD);

            text_field(ui, "AMOUNT", &mut self.cash_amount);
            text_field(ui, "DESCRIPTION (OPTIONAL)", &mut self.cash_description);

            if self.cash_slot.is_loading() {
                loading_row(ui, "Processing...");
            } else {
                let label = if self.cash_deposit_mode {
                    "Deposit"
                } else {
                    "Withdraw"
                };
                if ui.add(theme::button_accent(label)).clicked() {
                    self.start_cash_movement(ctx);
                }
                if let Some(message) = self.cash_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }
        });
    }

    fn render_history(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        accounts: &[crate::types::Account],
    ) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(420.0);
            section_heading(ui, "History");

            if self.history_account.is_none() {
                self.history_account = accounts.first().map(|a| a.account_number.clone());
            }
            ui.horizontal(|ui| {
                let before = self.history_account.clone();
                account_picker(ui, "history_account", accounts, &mut self.history_account);
                if self.history_account != before {
                    self.load_history(ctx);
                }
                if ui.add(theme::button(icons::ARROWS_CLOCKWISE)).clicked() {
                    self.load_history(ctx);
                }
            });
            ui.add_space(theme::SPACING_MD);

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.history_filter_on, "Date range");
                if self.history_filter_on {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.history_start_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(100.0),
                    );
                    ui.label(egui::RichText::new("to").color(theme::TEXT_DIM));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.history_end_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(100.0),
                    );
                    if ui.add(theme::button("Apply")).clicked() {
                        self.load_history(ctx);
                    }
                }
            });
            ui.add_space(theme::SPACING_MD);

            // Trigger the first load once an account is selected
            if self.history_slot.is_idle() && self.history_account.is_some() {
                self.load_history(ctx);
            }

            let transactions = self.history_slot.get().ready().cloned();
            match &transactions {
                None => {
                    if let Some(message) = self.history_slot.error() {
                        error_text(ui, &message);
                    } else {
                        loading_row(ui, "Loading history...");
                    }
                }
                Some(txs) if txs.is_empty() => {
                    empty_hint(ui, "No transactions in this period.");
                }
                Some(txs) => {
                    egui::ScrollArea::vertical()
                        .max_height(320.0)
                        .show(ui, |ui| {
                            for tx in txs {
                                let response = ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(format_date(&tx.timestamp))
                                            .size(theme::FONT_SMALL)
                                            .color(theme::TEXT_DIM),
                                    );
                                    ui.label(
                                        egui::RichText::new(&tx.transaction_type)
                                            .size(theme::FONT_LABEL)
                                            .color(theme::TEXT_SECONDARY),
                                    );
                                    if let Some(description) = &tx.description {
                                        ui.label(
                                            egui::RichText::new(description)
                                                .size(theme::FONT_SMALL)
                                                .color(theme::TEXT_MUTED),
                                        );
                                    }
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                egui::RichText::new(format_money(tx.amount))
                                                    .size(theme::FONT_LABEL)
                                                    .color(theme::TEXT_PRIMARY),
                                            );
                                        },
                                    );
                                });
                                // Counterparty details on hover
                                let mut hover = format!("Transaction #{}", tx.id);
                                if let Some(from) = &tx.from_account_number {
                                    hover.push_str(&format!("\nFrom {}", mask_account(from)));
                                }
                                if let Some(to) = &tx.to_account_number {
                                    hover.push_str(&format!("\nTo {}", mask_account(to)));
                                }
                                response.response.on_hover_text(hover);
                                ui.separator();
                            }
                        });
                }
            }
        });
    }

    fn render_create_account_modal(&mut self, ctx: &egui::Context) {
        if !self.show_create_account {
            return;
        }
        let modal = egui::Modal::new(egui::Id::new("create_account_modal"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                section_heading(ui, "Open an account");

                field_label(ui, "TYPE");
                ui.horizontal(|ui| {
                    for account_type in ACCOUNT_TYPES {
                        ui.selectable_value(
                            &mut self.new_account_type,
                            account_type,
                            account_type,
                        );
                    }
                });
                ui.add_space(theme::SPACING_MD);
                text_field(ui, "INITIAL DEPOSIT", &mut self.new_account_deposit);

                if self.create_account_slot.is_loading() {
                    loading_row(ui, "Opening...");
                } else {
                    ui.horizontal(|ui| {
                        if ui.add(theme::button_accent("Open")).clicked() {
                            self.start_create_account(ctx);
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            self.show_create_account = false;
                            let _ = self.create_account_slot.take_error();
                        }
                    });
                    if let Some(message) = self.create_account_slot.error() {
                        ui.add_space(theme::SPACING_SM);
                        error_text(ui, &message);
                    }
                }
            });
        if modal.should_close() {
            self.show_create_account = false;
        }
    }
}

/// Combo box over the user's account numbers.
pub(super) fn account_picker(
    ui: &mut egui::Ui,
    id: &str,
    accounts: &[crate::types::Account],
    selected: &mut Option<String>,
) {
    let current = selected
        .as_deref()
        .map(mask_account)
        .unwrap_or_else(|| "Select account".to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for account in accounts {
                let label = format!(
                    "{} {} ({})",
                    account.account_type,
                    mask_account(&account.account_number),
                    format_money(account.balance)
                );
                ui.selectable_value(
                    selected,
                    Some(account.account_number.clone()),
                    label,
                );
            }
        });
}
