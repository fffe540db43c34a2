//! Reusable UI components
//!
//! Standalone painters and widgets shared by the page sections.

use crate::theme;
use crate::types::{Accent, ImagePreset};
use eframe::egui;

/// Pixels the camera sits in front of the image plane when tilting it
const TILT_PERSPECTIVE: f32 = 1000.0;

/// Lay out `add_contents` in a centered column no wider than the content width
pub fn content_column<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let available = ui.available_width();
    let width = (available - 2.0 * theme::SPACING_XL).min(theme::CONTENT_MAX_WIDTH);
    let side = ((available - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

/// Fade and rise a block in; `progress` runs 0 -> 1
pub fn reveal<R>(
    ui: &mut egui::Ui,
    progress: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let progress = progress.clamp(0.0, 1.0);
    ui.add_space(30.0 * (1.0 - progress));
    ui.scope(|ui| {
        ui.multiply_opacity(progress);
        add_contents(ui)
    })
    .inner
}

/// Centered section title with the second half in the accent color, plus intro copy
pub fn section_heading(ui: &mut egui::Ui, plain: &str, accented: &str, intro: &str) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let title_width = ui.fonts(|f| {
                let font = egui::FontId::proportional(theme::FONT_SECTION_TITLE);
                f.layout_no_wrap(format!("{plain} {accented}"), font, theme::TEXT_PRIMARY)
                    .size()
                    .x
            });
            ui.add_space(((ui.available_width() - title_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = 10.0;
            ui.label(
                egui::RichText::new(plain)
                    .size(theme::FONT_SECTION_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(accented)
                    .size(theme::FONT_SECTION_TITLE)
                    .strong()
                    .color(theme::ACCENT_LIGHT),
            );
        });
        ui.add_space(theme::SPACING_LG);
        ui.set_max_width(720.0);
        ui.label(
            egui::RichText::new(intro)
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_MUTED),
        );
    });
    ui.add_space(theme::SPACING_XL * 2.0);
}

/// Rounded square holding an icon on its accent wash
pub fn icon_badge(ui: &mut egui::Ui, icon: &str, accent: Accent, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let (bg, strong) = theme::accent_colors(accent);
        let painter = ui.painter();
        painter.rect_filled(rect, size * 0.25, bg);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.5),
            strong,
        );
    }
    response
}

/// Clickable pill used by both tab bars
pub fn tab_pill(
    ui: &mut egui::Ui,
    icon: &str,
    label: &str,
    active: bool,
    accent: Accent,
) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_LABEL + 1.0);
    let text = format!("{icon}  {label}");
    let color = if active { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED };
    let galley = ui.fonts(|f| f.layout_no_wrap(text, font, color));
    let size = egui::vec2(galley.size().x + 2.0 * theme::SPACING_LG + 8.0, theme::PILL_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (_, strong) = theme::accent_colors(accent);
        let base = if active { strong } else { theme::BG_ELEVATED };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::PILL_HEIGHT / 2.0, fill);
        if !active {
            painter.rect_stroke(
                draw_rect,
                theme::PILL_HEIGHT / 2.0,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
                egui::StrokeKind::Inside,
            );
        }
        painter.galley(
            draw_rect.center() - galley.size() / 2.0,
            galley,
            color,
        );
    }

    response
}

/// Small rounded label, e.g. a project tag
pub fn tag_chip(ui: &mut egui::Ui, text: &str, accent: Accent) {
    let (bg, strong) = theme::accent_colors(accent);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(theme::lighten(strong, 0.3)),
            );
        });
}

/// Skill level bar. `progress` scales the filled width during the intro animation.
pub fn skill_bar(ui: &mut egui::Ui, level: u8, progress: f32, accent: Accent) {
    let width = ui.available_width();
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(width, theme::SKILL_BAR_HEIGHT), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    let radius = theme::SKILL_BAR_HEIGHT / 2.0;
    painter.rect_filled(rect, radius, theme::BG_SURFACE);

    let fraction = (level.min(100) as f32 / 100.0) * progress.clamp(0.0, 1.0);
    if fraction > 0.0 {
        let (_, strong) = theme::accent_colors(accent);
        let mut filled = rect;
        filled.set_width(rect.width() * fraction);
        painter.rect_filled(filled, radius, strong);
    }
}

/// Left-to-right two-color fill
pub fn gradient_rect(painter: &egui::Painter, rect: egui::Rect, left: egui::Color32, right: egui::Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Top-to-bottom two-color fill
pub fn vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: egui::Color32, bottom: egui::Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Stand-in for an image that could not be shown at all
pub fn image_placeholder(painter: &egui::Painter, rect: egui::Rect, accent: Accent) {
    let (_, strong) = theme::accent_colors(accent);
    gradient_rect(
        painter,
        rect,
        theme::fade(strong, 0.35),
        theme::fade(theme::ACCENT_END, 0.35),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::IMAGE,
        egui::FontId::proportional((rect.height() * 0.25).min(48.0)),
        theme::fade(theme::TEXT_PRIMARY, 0.6),
    );
}

/// Fill `rect` with a texture, cropping it to the rect's aspect ratio
pub fn cover_image(painter: &egui::Painter, texture: &egui::TextureHandle, rect: egui::Rect) {
    painter.image(
        texture.id(),
        rect,
        cover_uv(texture.size_vec2(), rect.size()),
        egui::Color32::WHITE,
    );
}

/// UV window that crops an image of `image` size to the aspect of `target`, centered
pub fn cover_uv(image: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let w = target_aspect / image_aspect;
        egui::Rect::from_min_max(egui::pos2((1.0 - w) / 2.0, 0.0), egui::pos2((1.0 + w) / 2.0, 1.0))
    } else {
        let h = image_aspect / target_aspect;
        egui::Rect::from_min_max(egui::pos2(0.0, (1.0 - h) / 2.0), egui::pos2(1.0, (1.0 + h) / 2.0))
    }
}

/// Paint a texture into `rect`, honoring a scale/tilt/brightness/saturation style.
///
/// Tilt is a rotation about the vertical axis seen through a fixed perspective,
/// so the far edge shrinks. Brightness and saturation are approximated with
/// translucent overlays since the painter has no color filters.
pub fn styled_image(
    painter: &egui::Painter,
    texture: egui::TextureId,
    rect: egui::Rect,
    style: ImagePreset,
) {
    let corners = tilted_quad(rect, style.scale, style.tilt_deg);
    let uv = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];

    let mut mesh = egui::Mesh::with_texture(texture);
    for (pos, uv) in corners.iter().zip(uv) {
        mesh.vertices.push(egui::epaint::Vertex {
            pos: *pos,
            uv,
            color: egui::Color32::WHITE,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    let overlay = style_overlay(style);
    if overlay.a() > 0 {
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            overlay,
            egui::Stroke::NONE,
        ));
    }
}

/// Corners (top-left, top-right, bottom-right, bottom-left) of `rect` scaled
/// about its center and rotated `tilt_deg` about the vertical axis.
pub fn tilted_quad(rect: egui::Rect, scale: f32, tilt_deg: f32) -> [egui::Pos2; 4] {
    let center = rect.center();
    let half_w = rect.width() * scale / 2.0;
    let half_h = rect.height() * scale / 2.0;
    let (sin, cos) = tilt_deg.to_radians().sin_cos();

    let edge = |side: f32| {
        let x = side * half_w * cos;
        let z = side * half_w * sin;
        let k = TILT_PERSPECTIVE / (TILT_PERSPECTIVE + z);
        (x * k, half_h * k)
    };
    let (lx, lh) = edge(-1.0);
    let (rx, rh) = edge(1.0);
    [
        center + egui::vec2(lx, -lh),
        center + egui::vec2(rx, -rh),
        center + egui::vec2(rx, rh),
        center + egui::vec2(lx, rh),
    ]
}

fn style_overlay(style: ImagePreset) -> egui::Color32 {
    let b = style.brightness - 1.0;
    let s = style.saturation - 1.0;
    if b.abs() < 1e-3 && s.abs() < 1e-3 {
        return egui::Color32::TRANSPARENT;
    }
    // Brighter washes towards white, darker towards black, saturation boosts the accent
    let base = if b >= 0.0 {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    };
    let tint = if s > 0.0 {
        theme::lerp_color(base, theme::ACCENT_PINK, (s * 2.0).min(1.0))
    } else {
        theme::lerp_color(base, egui::Color32::GRAY, (-s * 2.0).min(1.0))
    };
    let alpha = (b.abs() * 0.6 + s.abs() * 0.15).min(0.35);
    theme::fade(tint, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> egui::Rect {
        egui::Rect::from_center_size(egui::pos2(100.0, 100.0), egui::vec2(200.0, 200.0))
    }

    #[test]
    fn neutral_quad_is_the_rect() {
        let [tl, tr, br, bl] = tilted_quad(square(), 1.0, 0.0);
        assert_eq!(tl, square().left_top());
        assert_eq!(tr, square().right_top());
        assert_eq!(br, square().right_bottom());
        assert_eq!(bl, square().left_bottom());
    }

    #[test]
    fn positive_tilt_pushes_right_edge_away() {
        let [tl, tr, br, bl] = tilted_quad(square(), 1.0, 2.0);
        let left_h = bl.y - tl.y;
        let right_h = br.y - tr.y;
        assert!(right_h < left_h);
        assert!(right_h < 200.0 && left_h > 200.0);
    }

    #[test]
    fn scale_grows_about_center() {
        let [tl, _, br, _] = tilted_quad(square(), 1.1, 0.0);
        assert!((br.x - tl.x - 220.0).abs() < 1e-3);
        assert!(((tl.x + br.x) / 2.0 - 100.0).abs() < 1e-3);
    }

    #[test]
    fn cover_crops_the_long_side() {
        let wide = cover_uv(egui::vec2(400.0, 100.0), egui::vec2(200.0, 100.0));
        assert!((wide.min.x - 0.25).abs() < 1e-6 && (wide.max.x - 0.75).abs() < 1e-6);
        assert_eq!((wide.min.y, wide.max.y), (0.0, 1.0));

        let tall = cover_uv(egui::vec2(100.0, 400.0), egui::vec2(100.0, 100.0));
        assert!((tall.min.y - 0.375).abs() < 1e-6 && (tall.max.y - 0.625).abs() < 1e-6);

        let same = cover_uv(egui::vec2(64.0, 64.0), egui::vec2(10.0, 10.0));
        assert_eq!(same, egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)));
    }

    #[test]
    fn neutral_style_has_no_overlay() {
        assert_eq!(style_overlay(ImagePreset::NEUTRAL), egui::Color32::TRANSPARENT);
        let dimmed = ImagePreset {
            brightness: 0.95,
            ..ImagePreset::NEUTRAL
        };
        assert!(style_overlay(dimmed).a() > 0);
    }
}
