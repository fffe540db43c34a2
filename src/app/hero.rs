//! Hero section: ambient shapes, soft blobs, floating icons and the title block

use super::App;
use crate::animation::{oscillate, Easing, KeyframeTrack, Tween};
use crate::constants::SECTION_REVEAL_SECS;
use crate::content::{HERO_BADGE, HERO_SUBTITLE, OWNER_FIRST_NAME, OWNER_LAST_NAME};
use crate::theme;
use crate::ui::components::{gradient_rect, reveal};
use eframe::egui;
use egui_phosphor::regular as icons;

const BLOB_LAYERS: usize = 10;

struct Blob {
    /// Center as a fraction of the hero rect
    anchor: (f32, f32),
    radius: f32,
    colors: [egui::Color32; 2],
    scale: KeyframeTrack,
    rotate: KeyframeTrack,
}

const BLOBS: [Blob; 3] = [
    Blob {
        anchor: (1.0, 0.0),
        radius: 160.0,
        colors: [
            egui::Color32::from_rgb(0xc0, 0x84, 0xfc),
            egui::Color32::from_rgb(0xf4, 0x72, 0xb6),
        ],
        scale: KeyframeTrack::new(&[1.0, 1.2, 1.0], 8.0, Easing::EaseInOut),
        rotate: KeyframeTrack::new(&[0.0, 180.0, 360.0], 8.0, Easing::EaseInOut),
    },
    Blob {
        anchor: (0.0, 1.0),
        radius: 160.0,
        colors: [
            egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
            egui::Color32::from_rgb(0x22, 0xd3, 0xee),
        ],
        scale: KeyframeTrack::new(&[1.2, 1.0, 1.2], 10.0, Easing::EaseInOut),
        rotate: KeyframeTrack::new(&[360.0, 180.0, 0.0], 10.0, Easing::EaseInOut),
    },
    Blob {
        anchor: (0.5, 0.5),
        radius: 192.0,
        colors: [
            egui::Color32::from_rgb(0x81, 0x8c, 0xf8),
            egui::Color32::from_rgb(0xc0, 0x84, 0xfc),
        ],
        scale: KeyframeTrack::new(&[1.0, 1.1, 1.0], 15.0, Easing::Linear),
        rotate: KeyframeTrack::new(&[0.0, 360.0], 15.0, Easing::Linear),
    },
];

const FLOAT: KeyframeTrack = KeyframeTrack::new(&[-10.0, 10.0, -10.0], 3.0, Easing::EaseInOut);
const SCROLL_HINT: KeyframeTrack = KeyframeTrack::new(&[0.0, 10.0, 0.0], 2.0, Easing::EaseInOut);

impl App {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui, now: f64) {
        let height = ui.clip_rect().height().max(theme::HERO_MIN_HEIGHT);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        gradient_rect(&painter, rect, theme::BG_BASE, theme::BG_HERO);

        if let Some(background) = self.background.as_mut() {
            background.show(ui, rect);
        }

        let t = self.elapsed(now);
        for blob in &BLOBS {
            paint_blob(&painter, rect, blob, t);
        }
        paint_floating_icons(&painter, rect, t);

        // Title block, items staggered in after the container fades up
        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink2(egui::vec2(theme::SPACING_XL, 0.0)))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        content.add_space(((height - 460.0) / 2.0).max(theme::SPACING_XL));
        let item = |i: usize| {
            Tween::new(self.started_at, SECTION_REVEAL_SECS, Easing::EaseOut)
                .with_delay(0.2 * (i + 1) as f32)
                .progress(now)
        };

        reveal(&mut content, item(0), |ui| {
            let pulse = 0.75 + oscillate(t, 2.0, 0.25, 0.0);
            egui::Frame::new()
                .fill(theme::fade(theme::BG_ELEVATED, 0.9))
                .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::fade(theme::ACCENT, 0.6)))
                .corner_radius(theme::RADIUS_CARD * 2.0)
                .inner_margin(egui::Margin::symmetric(28, 14))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(icons::SPARKLE)
                                .size(20.0)
                                .color(theme::fade(theme::ACCENT_LIGHT, pulse)),
                        );
                        ui.label(
                            egui::RichText::new(HERO_BADGE)
                                .size(theme::FONT_HEADING + 1.0)
                                .color(theme::ACCENT_LIGHT),
                        );
                    });
                });
        });

        content.add_space(theme::SPACING_XL + 8.0);
        reveal(&mut content, item(1), |ui| {
            ui.label(gradient_title(OWNER_FIRST_NAME));
            ui.label(
                egui::RichText::new(OWNER_LAST_NAME)
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });

        content.add_space(theme::SPACING_XL + 8.0);
        reveal(&mut content, item(2), |ui| {
            ui.set_max_width(760.0);
            ui.label(
                egui::RichText::new(HERO_SUBTITLE)
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_MUTED),
            );
        });

        content.add_space(theme::SPACING_XL * 2.0);
        reveal(&mut content, item(3), |ui| {
            let dy = SCROLL_HINT.sample(t);
            ui.add_space(dy);
            ui.label(
                egui::RichText::new(icons::ARROW_DOWN)
                    .size(32.0)
                    .color(theme::TEXT_DIM),
            );
        });

        // Blobs and floating icons loop forever while the hero is on screen
        ui.ctx().request_repaint();
    }
}

/// Soft disc built from stacked translucent circles; the two tints orbit with `rotate`
fn paint_blob(painter: &egui::Painter, rect: egui::Rect, blob: &Blob, t: f64) {
    let center = egui::pos2(
        rect.left() + rect.width() * blob.anchor.0,
        rect.top() + rect.height() * blob.anchor.1,
    );
    let radius = blob.radius * blob.scale.sample(t);
    let angle = blob.rotate.sample(t).to_radians();
    let offset = egui::vec2(angle.cos(), angle.sin()) * radius * 0.25;

    for (color, center) in [(blob.colors[0], center - offset), (blob.colors[1], center + offset)] {
        for layer in 0..BLOB_LAYERS {
            let k = layer as f32 / BLOB_LAYERS as f32;
            painter.circle_filled(center, radius * (1.0 - 0.7 * k), theme::fade(color, 0.02));
        }
    }
}

fn paint_floating_icons(painter: &egui::Painter, rect: egui::Rect, t: f64) {
    let floating = [
        (icons::CODE, egui::pos2(rect.left() + 60.0, rect.top() + 100.0), 0.0, 0xc0_84_fc),
        (icons::PALETTE, egui::pos2(rect.right() - 100.0, rect.top() + 148.0), 1.0, 0x60_a5_fa),
        (icons::LIGHTNING, egui::pos2(rect.left() + 100.0, rect.bottom() - 148.0), 2.0, 0xf4_72_b6),
    ];
    for (icon, pos, delay, rgb) in floating {
        let color = egui::Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
        painter.text(
            pos + egui::vec2(0.0, FLOAT.delayed(delay).sample(t)),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(40.0),
            theme::fade(color, 0.3),
        );
    }
}

/// First name drawn with a purple -> pink -> blue sweep, one color per glyph
fn gradient_title(text: &str) -> egui::text::LayoutJob {
    let stops = [theme::ACCENT, theme::ACCENT_PINK, theme::ACCENT_END];
    let count = text.chars().count().max(2) - 1;
    let mut job = egui::text::LayoutJob::default();
    for (i, ch) in text.chars().enumerate() {
        let t = i as f32 / count as f32 * (stops.len() - 1) as f32;
        let seg = (t.floor() as usize).min(stops.len() - 2);
        let color = theme::lerp_color(stops[seg], stops[seg + 1], t - seg as f32);
        job.append(
            &ch.to_string(),
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(theme::FONT_DISPLAY),
                color,
                ..Default::default()
            },
        );
    }
    job
}
