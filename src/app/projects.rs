//! Projects section: case study cards and the detail modal

use super::App;
use crate::content::{Project, PROJECTS, PROJECTS_INTRO};
use crate::theme;
use crate::ui::components::{
    cover_image, image_placeholder, section_heading, tag_chip, vertical_gradient,
};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::debug;

const CARD_LIFT: f32 = 6.0;
const THUMB_SIZE: egui::Vec2 = egui::vec2(180.0, 120.0);

impl App {
    pub(crate) fn render_projects(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Featured", "Projects", PROJECTS_INTRO);

        let hovered_before = self.hovered_project;
        let mut hovered = None;
        let mut clicked = None;

        ui.columns(2, |cols| {
            for (i, project) in PROJECTS.iter().enumerate() {
                let ui = &mut cols[i % 2];
                let lifted = hovered_before == Some(i);
                ui.add_space(if lifted { 0.0 } else { CARD_LIFT });
                let response = self.project_card(ui, project, lifted);
                ui.add_space(if lifted { CARD_LIFT } else { 0.0 } + theme::SPACING_XL);

                if response.contains_pointer() {
                    hovered = Some(i);
                }
                if response.clicked() {
                    clicked = Some(i);
                }
            }
        });

        if hovered != hovered_before {
            ui.ctx().request_repaint();
        }
        self.hovered_project = hovered;
        if let Some(i) = clicked {
            debug!(project = PROJECTS[i].title, "Opening case study");
            self.selected_project = Some(i);
        }
    }

    fn project_card(&mut self, ui: &mut egui::Ui, project: &Project, hovered: bool) -> egui::Response {
        let mut frame = theme::card_frame().inner_margin(egui::Margin::ZERO);
        if hovered {
            frame = frame
                .stroke(egui::Stroke::new(theme::STROKE_MEDIUM, theme::fade(theme::ACCENT, 0.6)))
                .shadow(egui::epaint::Shadow {
                    offset: [0, 12],
                    blur: 28,
                    spread: 0,
                    color: egui::Color32::from_black_alpha(120),
                });
        }

        let inner = frame.show(ui, |ui| {
            let width = ui.available_width();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(width, theme::PROJECT_CARD_HEIGHT),
                egui::Sense::hover(),
            );
            if ui.is_rect_visible(rect) {
                let painter = ui.painter_at(rect);
                match self.images.texture(ui.ctx(), project.image) {
                    Some(texture) => cover_image(&painter, &texture, rect),
                    None => image_placeholder(&painter, rect, project.accent),
                }
                if hovered {
                    paint_card_overlay(&painter, rect, project);
                }
            }

            egui::Frame::new()
                .inner_margin(egui::Margin::same(28))
                .show(ui, |ui| {
                    let title_color = if hovered {
                        theme::ACCENT_LIGHT
                    } else {
                        theme::TEXT_PRIMARY
                    };
                    ui.label(
                        egui::RichText::new(project.title)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(title_color),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(project.description)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_LG);
                    ui.horizontal_wrapped(|ui| {
                        for tag in project.tags {
                            tag_chip(ui, tag, project.accent);
                        }
                    });
                });
        });

        inner.response.interact(egui::Sense::click())
    }

    pub(crate) fn render_project_modal(&mut self, ctx: &egui::Context) {
        let Some(index) = self.selected_project else {
            return;
        };
        let project = &PROJECTS[index];
        let mut close = false;

        let max_height = ctx.screen_rect().height() * 0.85;
        let modal = egui::Modal::new(egui::Id::new("project_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_width(760.0_f32.min(ctx.screen_rect().width() - 80.0));

            // Title bar with close button
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(project.category)
                            .size(theme::FONT_LABEL)
                            .color(theme::ACCENT_LIGHT),
                    );
                    ui.label(
                        egui::RichText::new(project.title)
                            .size(theme::FONT_TITLE + 6.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui
                        .add(egui::Button::new(egui::RichText::new(icons::X).size(18.0)).frame(false))
                        .on_hover_text("Close")
                        .clicked()
                    {
                        close = true;
                    }
                });
            });
            ui.add_space(theme::SPACING_LG);

            egui::ScrollArea::vertical()
                .max_height(max_height - 120.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    self.render_case_study(ui, project);
                });
        });

        if close || modal_response.should_close() {
            debug!(project = project.title, "Case study closed");
            self.selected_project = None;
        }
    }

    fn render_case_study(&mut self, ui: &mut egui::Ui, project: &Project) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 260.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        match self.images.texture(ui.ctx(), project.image) {
            Some(texture) => cover_image(&painter, &texture, rect),
            None => image_placeholder(&painter, rect, project.accent),
        }
        ui.add_space(theme::SPACING_XL);

        case_heading(ui, icons::TARGET, "Problem Statement");
        ui.label(body(project.problem_statement));

        case_heading(ui, icons::PATH, "Design Process");
        for (i, step) in project.design_process.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}.", i + 1))
                        .strong()
                        .color(theme::ACCENT_LIGHT),
                );
                ui.label(body(step));
            });
        }

        case_heading(ui, icons::STAR, "Key Features");
        for feature in project.key_features {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(icons::CHECK_CIRCLE).color(theme::STATUS_SUCCESS));
                ui.label(body(feature));
            });
        }

        if !project.wireframes.is_empty() {
            case_heading(ui, icons::PENCIL_SIMPLE_LINE, "Wireframes");
            self.thumbnail_row(ui, project, project.wireframes);
        }
        if !project.final_ui.is_empty() {
            case_heading(ui, icons::DEVICES, "Final UI");
            self.thumbnail_row(ui, project, project.final_ui);
        }

        case_heading(ui, icons::TROPHY, "Results");
        ui.label(body(project.results));
        ui.add_space(theme::SPACING_MD);
    }

    fn thumbnail_row(&mut self, ui: &mut egui::Ui, project: &Project, images: &[&str]) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
            for path in images {
                let (rect, _) = ui.allocate_exact_size(THUMB_SIZE, egui::Sense::hover());
                if !ui.is_rect_visible(rect) {
                    continue;
                }
                let painter = ui.painter_at(rect);
                match self.images.texture(ui.ctx(), path) {
                    Some(texture) => cover_image(&painter, &texture, rect),
                    None => image_placeholder(&painter, rect, project.accent),
                }
                painter.rect_stroke(
                    rect,
                    theme::RADIUS_DEFAULT,
                    egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
                    egui::StrokeKind::Inside,
                );
            }
        });
    }
}

/// Darkening wash, category chip and the "View Case Study" call to action
fn paint_card_overlay(painter: &egui::Painter, rect: egui::Rect, project: &Project) {
    let top = rect.with_max_y(rect.center().y);
    let bottom = rect.with_min_y(rect.center().y);
    vertical_gradient(painter, top, egui::Color32::TRANSPARENT, egui::Color32::from_black_alpha(50));
    vertical_gradient(painter, bottom, egui::Color32::from_black_alpha(50), egui::Color32::from_black_alpha(150));

    let cta = format!("{}  View Case Study", icons::EYE);
    let galley = painter.layout_no_wrap(
        cta,
        egui::FontId::proportional(theme::FONT_BODY),
        egui::Color32::from_gray(30),
    );
    let pill = egui::Rect::from_center_size(rect.center(), galley.size() + egui::vec2(40.0, 20.0));
    painter.rect_filled(pill, pill.height() / 2.0, egui::Color32::from_white_alpha(242));
    painter.galley(pill.center() - galley.size() / 2.0, galley, egui::Color32::from_gray(30));

    painter.text(
        rect.left_bottom() + egui::vec2(20.0, -20.0),
        egui::Align2::LEFT_BOTTOM,
        project.category,
        egui::FontId::proportional(theme::FONT_LABEL),
        egui::Color32::WHITE,
    );
}

fn case_heading(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.add_space(theme::SPACING_LG);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(20.0).color(theme::ACCENT_LIGHT));
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING + 2.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
    });
    ui.add_space(theme::SPACING_SM);
}

fn body(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(theme::FONT_BODY)
        .color(theme::TEXT_SECONDARY)
}
