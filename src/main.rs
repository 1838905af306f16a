#![windows_subsystem = "windows"]
//! BMS Banking Client - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod emi;
mod session;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, Screen};
use constants::*;
use eframe::egui;
use session::Session;
use tracing::info;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "bms-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bms_client=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "BMS client starting");

    let settings = settings::Settings::load(&data_dir);
    let session = Session::load(&data_dir);

    // Load saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1180.0, 760.0)))
        .with_min_inner_size([980.0, 640.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the bundled SVG
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, session, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Check the restored token once, on the first frame of a saved session
        if self.session.is_some() && !self.validate_started {
            self.validate_started = true;
            self.start_validate_session(ctx);
        }

        // A 401 from any authenticated background request forces a fresh sign-in
        if std::mem::take(&mut *self.session_expired.lock().unwrap()) {
            self.logout();
            self.show_toast(SESSION_EXPIRED);
        }

        if self.session.is_none() && self.screen.requires_auth() {
            self.screen = Screen::Login;
        }

        // Consume finished background requests
        self.poll_auth();
        self.poll_banking(ctx);
        self.poll_kyc(ctx);
        self.poll_loans(ctx);
        self.poll_admin(ctx);

        match self.screen {
            Screen::Login => self.render_login(ctx),
            Screen::Register => self.render_register(ctx),
            Screen::VerifyEmail => self.render_verify_email(ctx),
            _ => self.render_shell(ctx),
        }

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down");
        self.save_settings();
    }
}

const NAV_ITEMS: [(Screen, &str, &str); 7] = [
    (Screen::Dashboard, egui_phosphor::regular::HOUSE, "Dashboard"),
    (Screen::Accounts, egui_phosphor::regular::WALLET, "Accounts"),
    (
        Screen::Transfer,
        egui_phosphor::regular::PAPER_PLANE_TILT,
        "Transfer",
    ),
    (
        Screen::Beneficiaries,
        egui_phosphor::regular::USERS,
        "Beneficiaries",
    ),
    (
        Screen::Kyc,
        egui_phosphor::regular::IDENTIFICATION_CARD,
        "Verification",
    ),
    (Screen::Loans, egui_phosphor::regular::BANK, "Loans"),
    (
        Screen::EmiCalculator,
        egui_phosphor::regular::CALCULATOR,
        "EMI Calculator",
    ),
];

impl App {
    /// Sidebar + central panel layout for the signed-in screens.
    fn render_shell(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new().fill(theme::BG_BASE).inner_margin(
                    egui::Margin {
                        left: 12,
                        right: 12,
                        top: 0,
                        bottom: 12,
                    },
                ),
            )
            .show(ctx, |ui| {
                ui.add_space(18.0);
                ui.vertical_centered(|ui| {
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
                    let logo_w = 64.0;
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(logo_w, logo_w * aspect),
                    ));
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(16.0);

                for (screen, icon, label) in NAV_ITEMS {
                    self.nav_item(ui, screen, icon, label);
                }
                if self.is_admin() {
                    ui.add_space(theme::SPACING_MD);
                    ui.separator();
                    ui.add_space(theme::SPACING_MD);
                    self.nav_item(
                        ui,
                        Screen::Admin,
                        egui_phosphor::regular::SHIELD_STAR,
                        "Admin",
                    );
                }

                // Bottom: identity + sign out + version
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{APP_VERSION}"))
                            .size(theme::FONT_CAPTION)
                            .color(theme::TEXT_DIM),
                    );
                    ui.add_space(4.0);
                    if ui
                        .add(theme::button(format!(
                            "{} Sign out",
                            egui_phosphor::regular::SIGN_OUT
                        )))
                        .clicked()
                    {
                        self.save_settings();
                        self.logout();
                    }
                    ui.add_space(4.0);
                    if let Some(session) = &self.session {
                        ui.label(
                            egui::RichText::new(&session.user.email)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                egui::ScrollArea::vertical().show(ui, |ui| match self.screen {
                    Screen::Dashboard => self.render_dashboard(ctx, ui),
                    Screen::Accounts => self.render_accounts(ctx, ui),
                    Screen::Transfer => self.render_transfer(ctx, ui),
                    Screen::Beneficiaries => self.render_beneficiaries(ctx, ui),
                    Screen::Kyc => self.render_kyc(ctx, ui),
                    Screen::Loans => self.render_loans(ctx, ui),
                    Screen::EmiCalculator => self.render_emi_calculator(ctx, ui),
                    Screen::Admin => self.render_admin(ctx, ui),
                    _ => {}
                });
            });
    }

    /// One sidebar entry, painted flat with an accent bar when active.
    fn nav_item(&mut self, ui: &mut egui::Ui, screen: Screen, icon: &str, label: &str) {
        let active = self.screen == screen;
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, theme::ROW_HEIGHT), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if active {
                painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
                let bar = egui::Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
                painter.rect_filled(bar, 1.5, theme::ACCENT);
            } else if response.hovered() {
                painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            let text_color = if active {
                theme::TEXT_PRIMARY
            } else {
                theme::TEXT_MUTED
            };
            painter.text(
                egui::pos2(rect.min.x + 12.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                icon,
                egui::FontId::proportional(15.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.min.x + 36.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                egui::FontId::proportional(theme::FONT_LABEL),
                text_color,
            );
        }

        if response.clicked() && !active {
            self.screen = screen;
        }
    }

    /// Toast notification: bottom-right, 3s visible then fade, pause on hover.
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x17,
                        0x16,
                        0x21,
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&msg).color(
                            egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
