#![windows_subsystem = "windows"]
//! Portfolio Showcase - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod animation;
mod app;
mod assets;
mod background;
mod constants;
mod contact;
mod content;
mod error;
mod settings;
mod tabs;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, Section};
use constants::*;
use eframe::egui;
use tracing::{info, warn};
use ui::components::{content_column, reveal};
use utils::{get_data_dir, rasterize_icon};

/// Daily rolling log file under `<data dir>/logs`. Drop the guard only at exit.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = data_dir.join("logs");
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("cannot create {}: {e}", log_dir.display());
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "portfolio-showcase.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_showcase=debug"));

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

    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Portfolio Showcase starting");

    // Restore the last window geometry
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1440.0, 900.0)))
        .with_min_inner_size([960.0, 640.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the embedded SVG
    match rasterize_icon(64) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Window icon could not be rasterized"),
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
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("form-delivery")
                .enable_all()
                .build()?;
            let mut app = App::new(cc, settings, data_dir, runtime);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Remembered for settings.json
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let now = ctx.input(|i| i.time);
        self.poll_contact(ctx, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_hero(ui, now);

                        for section in Section::ALL {
                            ui.add_space(theme::SECTION_GAP);
                            let progress = self.reveals.progress(section, now);
                            let laid_out = ui.scope(|ui| {
                                content_column(ui, |ui| {
                                    reveal(ui, progress, |ui| match section {
                                        Section::About => self.render_about(ui, now),
                                        Section::Skills => self.render_skills(ui, now),
                                        Section::Projects => self.render_projects(ui),
                                        Section::Contact => self.render_contact(ui, now),
                                    })
                                })
                            });
                            self.reveals.observe(ui, section, laid_out.response.rect, now);
                            if self.reveals.is_animating(section, now) {
                                ui.ctx().request_repaint();
                            }
                        }

                        ui.add_space(theme::SECTION_GAP);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}  {} v{}",
                                    egui_phosphor::regular::HEART,
                                    APP_NAME,
                                    APP_VERSION
                                ))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                            );
                        });
                        ui.add_space(theme::SPACING_XL);
                    });
            });

        // Case study modal sits above everything
        self.render_project_modal(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.teardown();
        self.save_settings();
    }
}
