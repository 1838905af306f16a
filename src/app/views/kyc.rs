//! Customer KYC screen: current status, or the submission form.

use crate::app::kyc::KycImage;
use crate::app::App;
use crate::theme;
use crate::types::{DocumentType, KycStatus};
use crate::ui::components::{
    detail_row, error_text, field_label, kyc_status_badge, loading_row, section_heading,
    text_field,
};
use crate::utils::format_date;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::path::PathBuf;

impl App {
    pub fn render_kyc(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.kyc_status_slot.is_idle() {
            self.load_kyc_status(ctx);
        }

        ui.label(
            egui::RichText::new("Identity verification")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_LG);

        let status = self.kyc_status_slot.get().ready().cloned();
        match status {
            None => {
                if let Some(message) = self.kyc_status_slot.error() {
                    error_text(ui, &message);
                } else {
                    loading_row(ui, "Checking status...");
                }
            }
            // Rejected submissions can be redone
            Some(Some(submission)) if submission.status != KycStatus::Rejected => {
                self.render_status_card(ui, &submission);
            }
            Some(previous) => {
                if let Some(submission) = &previous {
                    self.render_status_card(ui, submission);
                    ui.add_space(theme::SPACING_XL);
                }
                self.render_submit_form(ctx, ui);
            }
        }
    }

    fn render_status_card(&mut self, ui: &mut egui::Ui, submission: &crate::types::KycSubmission) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(420.0);
            ui.horizontal(|ui| {
                section_heading(ui, "Your submission");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    kyc_status_badge(ui, submission.status);
                });
            });
            detail_row(ui, "Document", &submission.document_type);
            detail_row(ui, "Number", &submission.document_number);
            if let Some(submitted_at) = &submission.submitted_at {
                detail_row(ui, "Submitted", &format_date(submitted_at));
            }
            if let Some(verified_at) = &submission.verified_at {
                detail_row(ui, "Reviewed", &format_date(verified_at));
            }
            if let Some(verified_by) = &submission.verified_by {
                detail_row(ui, "Reviewed by", verified_by);
            }
            if let Some(reason) = &submission.rejection_reason {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("{} {}", icons::WARNING, reason))
                        .size(theme::FONT_LABEL)
                        .color(theme::STATUS_ERROR),
                );
            }
        });
    }

    fn render_submit_form(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(theme::FORM_WIDTH + 2.0 * theme::SPACING_XL);
            section_heading(ui, "Submit documents");

            field_label(ui, "DOCUMENT TYPE");
            egui::ComboBox::from_id_salt("kyc_document_type")
                .selected_text(self.kyc_document_type.label())
                .show_ui(ui, |ui| {
                    for document_type in DocumentType::ALL {
                        ui.selectable_value(
                            &mut self.kyc_document_type,
                            document_type,
                            document_type.label(),
                        );
                    }
                });
            ui.add_space(theme::SPACING_MD);

            text_field(ui, "DOCUMENT NUMBER", &mut self.kyc_document_number);

            ui.horizontal_top(|ui| {
                self.image_slot(ctx, ui, "FRONT", KycImage::Front);
                self.image_slot(ctx, ui, "BACK (OPTIONAL)", KycImage::Back);
                self.image_slot(ctx, ui, "SELFIE", KycImage::Selfie);
            });
            ui.add_space(theme::SPACING_LG);

            if self.kyc_submit_slot.is_loading() {
                loading_row(ui, "Uploading...");
            } else {
                if ui
                    .add(theme::button_accent("Submit for review").min_size(egui::vec2(
                        theme::FORM_WIDTH,
                        theme::BUTTON_HEIGHT_LARGE,
                    )))
                    .clicked()
                {
                    self.start_submit_kyc(ctx);
                }
                if let Some(message) = self.kyc_submit_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }
        });
    }

    /// One picker tile: dashed placeholder or the picked image's preview.
    fn image_slot(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        label: &str,
        which: KycImage,
    ) {
        let path: Option<PathBuf> = match which {
            KycImage::Front => self.kyc_front_path.clone(),
            KycImage::Back => self.kyc_back_path.clone(),
            KycImage::Selfie => self.kyc_selfie_path.clone(),
        };
        ui.vertical(|ui| {
            field_label(ui, label);
            let tile = egui::vec2(120.0, 90.0);
            match &path {
                Some(path) => {
                    if let Some(texture) = self.kyc_preview(ctx, path) {
                        let response = ui
                            .add(
                                egui::Image::new(egui::load::SizedTexture::new(
                                    texture.id(),
                                    tile,
                                ))
                                .sense(egui::Sense::click()),
                            )
                            .on_hover_text(path.to_string_lossy());
                        if response.clicked() {
                            self.pick_kyc_image(which);
                        }
                    } else {
                        error_text(ui, "Could not read image");
                    }
                }
                None => {
                    let (rect, response) =
                        ui.allocate_exact_size(tile, egui::Sense::click());
                    if ui.is_rect_visible(rect) {
                        let painter = ui.painter();
                        let stroke_color = if response.hovered() {
                            theme::ACCENT
                        } else {
                            theme::BORDER_DEFAULT
                        };
                        painter.rect_stroke(
                            rect,
                            theme::RADIUS_DEFAULT,
                            egui::Stroke::new(1.0, stroke_color),
                            egui::StrokeKind::Inside,
                        );
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            icons::PLUS,
                            egui::FontId::proportional(20.0),
                            theme::TEXT_DIM,
                        );
                    }
                    if response.clicked() {
                        self.pick_kyc_image(which);
                    }
                }
            }
        });
        ui.add_space(theme::SPACING_MD);
    }
}
