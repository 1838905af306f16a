//! Standalone EMI calculator. Runs entirely locally.

use crate::app::App;
use crate::emi;
use crate::theme;
use crate::ui::components::{detail_row, error_text, section_heading, text_field};
use bigdecimal::BigDecimal;
use eframe::egui;
use std::str::FromStr;

impl App {
    pub fn render_emi_calculator(&mut self, _ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("EMI calculator")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new("Estimate the monthly installment for a loan before applying.")
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(theme::SPACING_LG);

        ui.horizontal_top(|ui| {
            theme::card_frame().show(ui, |ui| {
                ui.set_min_width(theme::FORM_WIDTH + 2.0 * theme::SPACING_XL);
                section_heading(ui, "Loan terms");
                text_field(ui, "PRINCIPAL", &mut self.calc_principal);
                text_field(ui, "ANNUAL RATE (%)", &mut self.calc_rate);
                text_field(ui, "TENURE (MONTHS)", &mut self.calc_tenure);
                ui.add_space(theme::SPACING_SM);
                if ui
                    .add(theme::button_accent("Calculate").min_size(egui::vec2(
                        theme::FORM_WIDTH,
                        theme::BUTTON_HEIGHT_LARGE,
                    )))
                    .clicked()
                {
                    self.calc_result = Some(self.run_calculation());
                }
            });

            ui.add_space(theme::SPACING_LG);

            if let Some(result) = &self.calc_result {
                theme::card_frame().show(ui, |ui| {
                    ui.set_min_width(280.0);
                    section_heading(ui, "Result");
                    match result {
                        Ok(quote) => {
                            ui.label(
                                egui::RichText::new(format!("₹{} / month", quote.emi))
                                    .size(24.0)
                                    .strong()
                                    .color(theme::ACCENT_LIGHT),
                            );
                            ui.add_space(theme::SPACING_MD);
                            detail_row(ui, "Total payable", &format!("₹{}", quote.total_payable));
                            detail_row(ui, "Total interest", &format!("₹{}", quote.total_interest));
                        }
                        Err(message) => error_text(ui, message),
                    }
                });
            }
        });
    }

    fn run_calculation(&self) -> Result<emi::EmiQuote, String> {
        let principal = BigDecimal::from_str(self.calc_principal.trim())
            .map_err(|_| "Enter a valid principal.".to_string())?;
        let rate = BigDecimal::from_str(self.calc_rate.trim())
            .map_err(|_| "Enter a valid rate.".to_string())?;
        let tenure: u32 = self
            .calc_tenure
            .trim()
            .parse()
            .map_err(|_| "Enter a valid tenure.".to_string())?;
        emi::calculate(&principal, &rate, tenure).map_err(|e| e.to_string())
    }
}
