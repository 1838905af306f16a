//! Reusable UI components shared across screens.

use crate::theme;
use crate::types::{EmiStatus, KycStatus};
use eframe::egui;

/// Small colored pill for statuses (KYC, loan, EMI).
pub fn status_badge(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
    let text = egui::RichText::new(label)
        .size(theme::FONT_CAPTION)
        .color(color);
    let galley = egui::WidgetText::from(text).into_galley(
        ui,
        Some(egui::TextWrapMode::Extend),
        f32::INFINITY,
        egui::FontId::proportional(theme::FONT_CAPTION),
    );
    let padding = egui::vec2(8.0, 0.0);
    let size = egui::vec2(
        galley.size().x + padding.x * 2.0,
        theme::BADGE_HEIGHT,
    );
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(
            rect,
            theme::BADGE_HEIGHT / 2.0,
            color.linear_multiply(0.15),
        );
        painter.galley(
            rect.center() - galley.size() / 2.0,
            galley,
            color,
        );
    }
}

pub fn kyc_status_badge(ui: &mut egui::Ui, status: KycStatus) {
    let color = match status {
        KycStatus::Pending => theme::STATUS_WARNING,
        KycStatus::Approved => theme::STATUS_SUCCESS,
        KycStatus::Rejected => theme::STATUS_ERROR,
    };
    status_badge(ui, status.label(), color);
}

pub fn emi_status_badge(ui: &mut egui::Ui, status: EmiStatus) {
    let color = match status {
        EmiStatus::Pending => theme::STATUS_WARNING,
        EmiStatus::Paid => theme::STATUS_SUCCESS,
        EmiStatus::Late | EmiStatus::Defaulted => theme::STATUS_ERROR,
    };
    status_badge(ui, status.label(), color);
}

/// Inline error text under a form.
pub fn error_text(ui: &mut egui::Ui, message: &str) {
    ui.label(
        egui::RichText::new(message)
            .size(theme::FONT_LABEL)
            .color(theme::STATUS_ERROR),
    );
}

/// Spinner with a label, for sections waiting on the server.
pub fn loading_row(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        ui.add(egui::Spinner::new().size(14.0).color(theme::ACCENT));
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        );
    });
}

/// Muted label above an input.
pub fn field_label(ui: &mut egui::Ui, label: &str) {
    ui.label(
        egui::RichText::new(label)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_DIM),
    );
}

/// Labeled single-line text input at form width.
pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    field_label(ui, label);
    let response = ui.add(
        egui::TextEdit::singleline(value).desired_width(theme::FORM_WIDTH),
    );
    ui.add_space(theme::SPACING_MD);
    response
}

/// Labeled password input at form width.
pub fn password_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    field_label(ui, label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .password(true)
            .desired_width(theme::FORM_WIDTH),
    );
    ui.add_space(theme::SPACING_MD);
    response
}

/// Section heading at the top of a card.
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_MD);
}

/// Key/value row for detail cards.
pub fn detail_row(ui: &mut egui::Ui, key: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    });
}

/// Centered hint when a list has nothing to show.
pub fn empty_hint(ui: &mut egui::Ui, text: &str) {
    ui.add_space(theme::SPACING_XL);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(theme::SPACING_XL);
}
