//! About section: tab pills, the preset-styled profile image and the tab panels

use super::App;
use crate::constants::PROFILE_IMAGE;
use crate::content::{
    AboutTab, ABOUT_INTRO, FACTS, JOURNEY_PARAGRAPHS, OWNER_FIRST_NAME, OWNER_LAST_NAME,
    PHILOSOPHY_ATTRIBUTION, PHILOSOPHY_QUOTE, PROFILE_CAPTION, VALUES,
};
use crate::theme;
use crate::types::Accent;
use crate::ui::components::{
    icon_badge, image_placeholder, reveal, section_heading, styled_image, tab_pill,
};
use eframe::egui;

impl App {
    pub(crate) fn render_about(&mut self, ui: &mut egui::Ui, now: f64) {
        section_heading(ui, "About", "Me", ABOUT_INTRO);

        // Tab bar
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD + 4.0;
            for (i, tab) in AboutTab::ALL.into_iter().enumerate() {
                let active = self.about_tabs.is_active(i);
                if tab_pill(ui, tab.icon(), tab.title(), active, tab.accent()).clicked() {
                    self.about_tabs.select(i, now);
                }
            }
        });
        ui.add_space(theme::SPACING_XL * 2.0);

        ui.columns(2, |cols| {
            self.render_profile(&mut cols[0], now);
            self.render_about_panel(&mut cols[1], now);
        });

        if self.about_tabs.is_animating(now) {
            ui.ctx().request_repaint();
        }
    }

    fn render_profile(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(theme::PROFILE_IMAGE_SIZE, theme::PROFILE_IMAGE_SIZE),
                egui::Sense::hover(),
            );
            if ui.is_rect_visible(rect) {
                let painter = ui.painter();
                let style = self.about_tabs.image_style(now);

                // Glow ring behind the photo
                painter.rect_filled(
                    rect.expand(6.0 * style.scale),
                    theme::RADIUS_CARD,
                    theme::fade(theme::ACCENT, 0.25),
                );
                match self.images.texture(ui.ctx(), PROFILE_IMAGE) {
                    Some(texture) => styled_image(painter, texture.id(), rect, style),
                    None => image_placeholder(painter, rect, Accent::Purple),
                }
            }

            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new(format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}"))
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(PROFILE_CAPTION)
                    .size(theme::FONT_LABEL)
                    .color(theme::ACCENT_LIGHT),
            );
        });
    }

    fn render_about_panel(&self, ui: &mut egui::Ui, now: f64) {
        let tab = AboutTab::ALL[self.about_tabs.active()];
        let progress = self.about_tabs.panel_progress(now);

        reveal(ui, progress, |ui| {
            theme::card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    icon_badge(ui, tab.icon(), tab.accent(), 40.0);
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(tab.heading())
                            .size(theme::FONT_TITLE + 4.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                });
                ui.add_space(theme::SPACING_LG);

                match tab {
                    AboutTab::Journey => journey(ui),
                    AboutTab::Values => values(ui),
                    AboutTab::Facts => facts(ui),
                    AboutTab::Philosophy => philosophy(ui),
                }
            });
        });
    }
}

fn body(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(theme::FONT_BODY + 1.0)
        .color(theme::TEXT_SECONDARY)
}

fn journey(ui: &mut egui::Ui) {
    for paragraph in JOURNEY_PARAGRAPHS {
        ui.label(body(paragraph));
        ui.add_space(theme::SPACING_MD);
    }
}

fn values(ui: &mut egui::Ui) {
    egui::Grid::new("about_values")
        .num_columns(2)
        .spacing([theme::SPACING_LG, theme::SPACING_LG])
        .show(ui, |ui| {
            for (i, value) in VALUES.iter().enumerate() {
                let (bg, _) = theme::accent_colors(value.accent);
                egui::Frame::new()
                    .fill(bg)
                    .corner_radius(theme::RADIUS_LARGE)
                    .inner_margin(egui::Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(200.0);
                        ui.horizontal(|ui| {
                            icon_badge(ui, value.icon, value.accent, 32.0);
                            ui.label(
                                egui::RichText::new(value.title)
                                    .size(theme::FONT_BODY)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            );
                        });
                        ui.label(
                            egui::RichText::new(value.description)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn facts(ui: &mut egui::Ui) {
    for (label, value) in FACTS {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(label)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(value)
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
            });
        });
        ui.separator();
    }
}

fn philosophy(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new(PHILOSOPHY_QUOTE)
            .size(theme::FONT_HEADING + 2.0)
            .italics()
            .color(theme::TEXT_SECONDARY),
    );
    ui.add_space(theme::SPACING_MD);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        ui.label(
            egui::RichText::new(PHILOSOPHY_ATTRIBUTION)
                .size(theme::FONT_LABEL)
                .color(theme::ACCENT_LIGHT),
        );
    });
}
