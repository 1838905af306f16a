//! Admin screens: KYC review queue and user management.

use crate::app::{AdminTab, App};
use crate::theme;
use crate::ui::components::{
    empty_hint, error_text, field_label, kyc_status_badge, loading_row, section_heading,
};
use crate::utils::format_date;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

impl App {
    pub fn render_admin(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Administration")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_LG);

        let mut kyc_tab = self.admin_tab == AdminTab::KycReview;
        if theme::segmented_toggle(ui, "KYC", "USERS", &mut kyc_tab) {
            self.admin_tab = if kyc_tab {
                AdminTab::KycReview
            } else {
                AdminTab::Users
            };
        }
        ui.add_space(theme::SPACING_LG);

        match self.admin_tab {
            AdminTab::KycReview => self.render_kyc_queue(ctx, ui),
            AdminTab::Users => self.render_user_table(ctx, ui),
        }
    }

    fn render_kyc_queue(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.admin_kyc_slot.is_idle() {
            self.load_admin_kyc(ctx);
        }

        ui.horizontal(|ui| {
            section_heading(ui, "Review queue");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.add(theme::button(icons::ARROWS_CLOCKWISE)).clicked() {
                    self.load_admin_kyc(ctx);
                }
            });
        });

        if *self.admin_kyc_is_sample.lock().unwrap() {
            ui.label(
                egui::RichText::new(format!(
                    "{} Backend unreachable; showing sample data.",
                    icons::PLUGS
                ))
                .size(theme::FONT_LABEL)
                .color(theme::STATUS_WARNING),
            );
            ui.add_space(theme::SPACING_MD);
        }

        let submissions = self.admin_kyc_slot.get().ready().cloned();
        match &submissions {
            None => {
                if let Some(message) = self.admin_kyc_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading submissions...");
                }
            }
            Some(list) if list.is_empty() => {
                empty_hint(ui, "Nothing waiting for review.");
            }
            Some(list) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for submission in list {
                        theme::card_frame().show(ui, |ui| {
                            ui.set_min_width(ui.available_width().min(640.0));
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} · {}",
                                            submission.document_type,
                                            submission.document_number
                                        ))
                                        .size(theme::FONT_BODY)
                                        .strong(),
                                    );
                                    let mut meta = format!("#{}", submission.id);
                                    if let Some(user_id) = submission.user_id {
                                        meta.push_str(&format!(" · user {user_id}"));
                                    }
                                    if let Some(submitted_at) = &submission.submitted_at {
                                        meta.push_str(&format!(
                                            " · submitted {}",
                                            format_date(submitted_at)
                                        ));
                                    }
                                    ui.label(
                                        egui::RichText::new(meta)
                                            .size(theme::FONT_SMALL)
                                            .color(theme::TEXT_MUTED),
                                    );
                                    if let Some(reason) = &submission.rejection_reason {
                                        ui.label(
                                            egui::RichText::new(reason)
                                                .size(theme::FONT_SMALL)
                                                .color(theme::STATUS_ERROR),
                                        );
                                    }
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if submission.status
                                            == crate::types::KycStatus::Pending
                                            && ui.add(theme::button_accent("Review")).clicked()
                                        {
                                            self.review_kyc_id = Some(submission.id);
                                            self.review_rejection_reason.clear();
                                            let _ = self.review_slot.take_error();
                                        }
                                        kyc_status_badge(ui, submission.status);
                                    },
                                );
                            });
                        });
                        ui.add_space(theme::SPACING_SM);
                    }
                });
            }
        }

        self.render_review_modal(ctx);
    }

    fn render_review_modal(&mut self, ctx: &egui::Context) {
        let Some(kyc_id) = self.review_kyc_id else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("kyc_review_modal"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(360.0);
                section_heading(ui, "Review submission");

                let submission = self
                    .admin_kyc_slot
                    .get()
                    .ready()
                    .and_then(|list| list.iter().find(|s| s.id == kyc_id).cloned());
                if let Some(submission) = &submission {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} · {}",
                            submission.document_type, submission.document_number
                        ))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_SECONDARY),
                    );
                    for (label, url) in [
                        ("Front", &submission.document_front_image_url),
                        ("Back", &submission.document_back_image_url),
                        ("Selfie", &submission.selfie_image_url),
                    ] {
                        if let Some(url) = url {
                            ui.hyperlink_to(
                                egui::RichText::new(format!("{label} image"))
                                    .size(theme::FONT_SMALL),
                                url,
                            );
                        }
                    }
                    ui.add_space(theme::SPACING_MD);
                }

                field_label(ui, "REJECTION REASON (REQUIRED TO REJECT)");
                ui.add(
                    egui::TextEdit::multiline(&mut self.review_rejection_reason)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(theme::SPACING_MD);

                if self.review_slot.is_loading() {
                    loading_row(ui, "Saving decision...");
                } else {
                    ui.horizontal(|ui| {
                        if ui
                            .add(theme::button_accent(format!("{} Approve", icons::CHECK)))
                            .clicked()
                        {
                            self.start_kyc_decision(ctx, kyc_id, true);
                        }
                        if ui
                            .add(theme::button_danger(format!("{} Reject", icons::X)))
                            .clicked()
                        {
                            self.start_kyc_decision(ctx, kyc_id, false);
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            self.review_kyc_id = None;
                        }
                    });
                    if let Some(message) = self.review_slot.error() {
                        ui.add_space(theme::SPACING_SM);
                        error_text(ui, &message);
                    }
                }
            });
        if modal.should_close() {
            self.review_kyc_id = None;
        }
    }

    fn render_user_table(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.admin_users_slot.is_idle() {
            self.load_admin_users(ctx);
        }

        ui.horizontal(|ui| {
            section_heading(ui, "Users");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.add(theme::button(icons::ARROWS_CLOCKWISE)).clicked() {
                    self.load_admin_users(ctx);
                }
            });
        });

        let users = self.admin_users_slot.get().ready().cloned();
        match &users {
            None => {
                if let Some(message) = self.admin_users_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Loading users...");
                }
            }
            Some(list) if list.is_empty() => {
                empty_hint(ui, "No users found.");
            }
            Some(list) => {
                let my_id = self.session.as_ref().map(|s| s.user.id);
                let mut delete_clicked = None;
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(140.0))
                    .column(Column::remainder())
                    .column(Column::auto().at_least(120.0))
                    .column(Column::auto().at_least(90.0))
                    .column(Column::auto().at_least(40.0))
                    .header(22.0, |mut header| {
                        for title in ["NAME", "EMAIL", "ROLES", "JOINED", ""] {
                            header.col(|ui| {
                                ui.label(
                                    egui::RichText::new(title)
                                        .size(theme::FONT_CAPTION)
                                        .color(theme::TEXT_DIM),
                                );
                            });
                        }
                    })
                    .body(|mut body| {
                        for user in list {
                            body.row(theme::ROW_HEIGHT, |mut row| {
                                row.col(|ui| {
                                    let mut hover = format!("#{}", user.id);
                                    if let Some(phone) = &user.phone {
                                        hover.push_str(&format!(" · {phone}"));
                                    }
                                    if let Some(status) = &user.status {
                                        hover.push_str(&format!(" · {status}"));
                                    }
                                    ui.label(user.display_name()).on_hover_text(hover);
                                });
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(&user.email)
                                            .color(theme::TEXT_MUTED),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(user.roles.join(", "))
                                            .size(theme::FONT_SMALL)
                                            .color(theme::TEXT_DIM),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(
                                        user.created_at
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "N/A".to_string()),
                                    );
                                });
                                row.col(|ui| {
                                    // Cannot delete yourself
                                    if Some(user.id) != my_id
                                        && ui.add(theme::button_danger(icons::TRASH)).clicked()
                                    {
                                        delete_clicked = Some(user.id);
                                    }
                                });
                            });
                        }
                    });
                if delete_clicked.is_some() {
                    self.confirm_delete_user = delete_clicked;
                }
            }
        }

        self.render_delete_user_modal(ctx);
    }

    fn render_delete_user_modal(&mut self, ctx: &egui::Context) {
        let Some(user_id) = self.confirm_delete_user else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("delete_user_modal"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                section_heading(ui, "Delete user?");
                ui.label(
                    egui::RichText::new(
                        "This removes the user and their access. It cannot be undone.",
                    )
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
                );
                ui.add_space(theme::SPACING_MD);
                if self.delete_user_slot.is_loading() {
                    loading_row(ui, "Deleting...");
                } else {
                    ui.horizontal(|ui| {
                        if ui.add(theme::button_danger("Delete")).clicked() {
                            self.start_delete_user(ctx, user_id);
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            self.confirm_delete_user = None;
                        }
                    });
                    if let Some(message) = self.delete_user_slot.error() {
                        ui.add_space(theme::SPACING_SM);
                        error_text(ui, &message);
                    }
                }
            });
        if modal.should_close() {
            self.confirm_delete_user = None;
        }
    }
}
