//! Skills section: category pills, skill cards with animated bars, and the process row

use super::{App, Section};
use crate::animation::{Easing, Tween};
use crate::constants::{SKILL_BAR_DELAY_SECS, SKILL_BAR_SECS, SKILL_BAR_STAGGER_SECS};
use crate::content::{SkillCategory, PROCESS_STEPS, SKILLS_INTRO, SKILL_CATEGORIES};
use crate::theme;
use crate::types::Accent;
use crate::ui::components::{icon_badge, section_heading, skill_bar, tab_pill};
use eframe::egui;

const CARD_COLUMNS: usize = 3;

impl App {
    pub(crate) fn render_skills(&mut self, ui: &mut egui::Ui, now: f64) {
        section_heading(ui, "Skills &", "Expertise", SKILLS_INTRO);

        // Category pills, centered
        ui.vertical_centered(|ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_MD + 4.0;
                for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
                    let active = self.skill_tabs.is_active(i);
                    if tab_pill(ui, category.icon, category.title, active, category.accent)
                        .clicked()
                    {
                        self.skill_tabs.select(i, now);
                    }
                }
            });
        });
        ui.add_space(theme::SPACING_XL * 2.0);

        let bars_from = self.reveals.seen(Section::Skills);
        let hovered_before = self.hovered_skill;
        let mut hovered = None;

        ui.columns(CARD_COLUMNS, |cols| {
            for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
                let ui = &mut cols[i % CARD_COLUMNS];
                let active = self.skill_tabs.is_active(i);
                let expanded = hovered_before == Some(i);
                let response = skill_card(ui, category, active, expanded, bars_from, now);
                if response.contains_pointer() {
                    hovered = Some(i);
                }
                ui.add_space(theme::SPACING_XL);
            }
        });
        self.hovered_skill = hovered;

        let bars_running = bars_animating(bars_from, now);
        if bars_running || self.skill_tabs.is_animating(now) {
            ui.ctx().request_repaint();
        }

        ui.add_space(theme::SPACING_XL);
        render_process(ui);
    }
}

/// Whether any skill bar is still filling. Bars start when the section is first
/// seen, so unseen bars are idle.
fn bars_animating(bars_from: Option<f64>, now: f64) -> bool {
    let Some(start) = bars_from else {
        return false;
    };
    let longest = SKILL_CATEGORIES
        .iter()
        .map(|c| c.skills.len())
        .max()
        .unwrap_or(0);
    // The last bar starts after one stagger less than the longest list
    let end = SKILL_BAR_DELAY_SECS
        + SKILL_BAR_STAGGER_SECS * longest.saturating_sub(1) as f32
        + SKILL_BAR_SECS;
    now - start < end as f64
}

fn skill_card(
    ui: &mut egui::Ui,
    category: &SkillCategory,
    active: bool,
    expanded: bool,
    bars_from: Option<f64>,
    now: f64,
) -> egui::Response {
    let mut frame = theme::card_frame();
    if active {
        frame = frame.stroke(egui::Stroke::new(
            theme::STROKE_THICK,
            theme::fade(theme::ACCENT, 0.5),
        ));
    }

    frame
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                icon_badge(ui, category.icon, category.accent, 48.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(category.title)
                            .size(theme::FONT_TITLE - 2.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(category.description)
                            .size(theme::FONT_SMALL + 1.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
            ui.add_space(theme::SPACING_XL);

            for (j, skill) in category.skills.iter().enumerate() {
                let progress = bars_from.map_or(0.0, |t| {
                    Tween::new(t, SKILL_BAR_SECS, Easing::EaseOut)
                        .with_delay(SKILL_BAR_DELAY_SECS + SKILL_BAR_STAGGER_SECS * j as f32)
                        .progress(now)
                });

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(skill.name)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}%", skill.level))
                                .size(theme::FONT_SMALL)
                                .monospace()
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
                skill_bar(ui, skill.level, progress, category.accent);
                if expanded {
                    ui.label(
                        egui::RichText::new(skill.description)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                }
                ui.add_space(theme::SPACING_MD + 4.0);
            }
        })
        .response
}

fn render_process(ui: &mut egui::Ui) {
    theme::tinted_card_frame(Accent::Purple).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Design Process Expertise")
                    .size(theme::FONT_TITLE + 2.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.add_space(theme::SPACING_XL);

        ui.columns(PROCESS_STEPS.len(), |cols| {
            for (ui, step) in cols.iter_mut().zip(PROCESS_STEPS.iter()) {
                ui.vertical_centered(|ui| {
                    icon_badge(ui, step.icon, step.accent, 56.0);
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(step.title)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(step.description)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_idle_until_section_seen() {
        assert!(!bars_animating(None, 0.0));
        assert!(!bars_animating(None, 1_000.0));
    }

    #[test]
    fn bars_run_then_settle() {
        assert!(bars_animating(Some(10.0), 10.0));
        assert!(bars_animating(Some(10.0), 10.5));
        assert!(!bars_animating(Some(10.0), 60.0));
    }
}
