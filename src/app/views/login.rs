//! Auth screens: sign in, register, email verification.

use crate::app::{App, Screen};
use crate::theme;
use crate::ui::components::{error_text, loading_row, password_field, text_field};
use crate::utils;
use eframe::egui;

impl App {
    /// Centered card layout shared by the three auth screens.
    fn auth_card(
        &mut self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                let card_width = theme::FORM_WIDTH + 2.0 * theme::SPACING_XL;
                let top = (ui.available_height() * 0.12).max(24.0);
                ui.add_space(top);
                ui.vertical_centered(|ui| {
                    // Logo above the card
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(256);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                    let logo_w = 96.0;
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(logo_w, logo_w * aspect),
                    ));
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(crate::constants::APP_NAME)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                    ui.add_space(theme::SPACING_XL);

                    ui.allocate_ui_with_layout(
                        egui::vec2(card_width, 0.0),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            theme::card_frame().show(ui, |ui| {
                                ui.set_width(theme::FORM_WIDTH);
                                add_contents(self, ui);
                            });
                        },
                    );
                });
            });
    }

    pub fn render_login(&mut self, ctx: &egui::Context) {
        self.auth_card(ctx, |app, ui| {
            ui.label(
                egui::RichText::new("Sign in")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.add_space(theme::SPACING_LG);

            text_field(ui, "EMAIL", &mut app.login_email);
            let password_response = password_field(ui, "PASSWORD", &mut app.login_password);
            ui.checkbox(&mut app.remember_email, "Remember my email");
            ui.add_space(theme::SPACING_LG);

            let submitted = password_response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if app.login_slot.is_loading() {
                loading_row(ui, "Signing in...");
            } else {
                if ui
                    .add(theme::button_accent("Sign in").min_size(egui::vec2(
                        theme::FORM_WIDTH,
                        theme::BUTTON_HEIGHT_LARGE,
                    )))
                    .clicked()
                    || submitted
                {
                    app.start_login(ctx);
                }
                if let Some(message) = app.login_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }

            ui.add_space(theme::SPACING_LG);
            ui.separator();
            ui.add_space(theme::SPACING_MD);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("New here?")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                );
                if ui.link("Create an account").clicked() {
                    let _ = app.register_slot.take_error();
                    app.screen = Screen::Register;
                }
            });
        });
    }

    pub fn render_register(&mut self, ctx: &egui::Context) {
        self.auth_card(ctx, |app, ui| {
            ui.label(
                egui::RichText::new("Create account")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.add_space(theme::SPACING_LG);

            text_field(ui, "FULL NAME", &mut app.register_full_name);
            text_field(ui, "EMAIL", &mut app.register_email);
            password_field(ui, "PASSWORD", &mut app.register_password);
            password_field(ui, "CONFIRM PASSWORD", &mut app.register_confirm);
            text_field(ui, "PHONE", &mut app.register_phone);
            text_field(ui, "DATE OF BIRTH (YYYY-MM-DD)", &mut app.register_dob);
            text_field(ui, "PAN NUMBER (OPTIONAL)", &mut app.register_pan);
            text_field(ui, "AADHAR NUMBER (OPTIONAL)", &mut app.register_aadhar);
            ui.add_space(theme::SPACING_LG);

            let mismatch = !app.register_confirm.is_empty()
                && app.register_password != app.register_confirm;
            if mismatch {
                error_text(ui, "Passwords do not match.");
                ui.add_space(theme::SPACING_SM);
            }

            let incomplete = app.register_full_name.trim().is_empty()
                || app.register_email.trim().is_empty()
                || app.register_password.is_empty()
                || app.register_dob.trim().is_empty();

            if app.register_slot.is_loading() {
                loading_row(ui, "Creating account...");
            } else {
                let button = theme::button_accent("Register").min_size(egui::vec2(
                    theme::FORM_WIDTH,
                    theme::BUTTON_HEIGHT_LARGE,
                ));
                if ui.add_enabled(!mismatch && !incomplete, button).clicked() {
                    app.start_register(ctx);
                }
                if let Some(message) = app.register_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }

            ui.add_space(theme::SPACING_MD);
            if ui.link("Back to sign in").clicked() {
                app.screen = Screen::Login;
            }
        });
    }

    pub fn render_verify_email(&mut self, ctx: &egui::Context) {
        self.auth_card(ctx, |app, ui| {
            ui.label(
                egui::RichText::new("Verify your email")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(format!(
                    "We sent a one-time code to {}.",
                    app.verify_email_addr
                ))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
            );
            ui.add_space(theme::SPACING_LG);

            text_field(ui, "VERIFICATION CODE", &mut app.verify_otp);
            ui.add_space(theme::SPACING_MD);

            if app.verify_slot.is_loading() {
                loading_row(ui, "Verifying...");
            } else {
                let button = theme::button_accent("Verify").min_size(egui::vec2(
                    theme::FORM_WIDTH,
                    theme::BUTTON_HEIGHT_LARGE,
                ));
                if ui
                    .add_enabled(!app.verify_otp.trim().is_empty(), button)
                    .clicked()
                {
                    app.start_verify_email(ctx);
                }
                if let Some(message) = app.verify_slot.error() {
                    ui.add_space(theme::SPACING_SM);
                    error_text(ui, &message);
                }
            }

            ui.add_space(theme::SPACING_MD);
            ui.horizontal(|ui| {
                if app.resend_slot.is_loading() {
                    loading_row(ui, "Sending...");
                } else if ui.link("Resend code").clicked() {
                    app.start_resend_otp(ctx);
                }
            });
            if let Some(message) = app.resend_slot.error() {
                error_text(ui, &message);
            }

            ui.add_space(theme::SPACING_MD);
            if ui.link("Back to sign in").clicked() {
                app.screen = Screen::Login;
            }
        });
    }
}
