//! Centralized theme constants for the portfolio
//! Palette, sizing and frame helpers shared by every section

use crate::types::Accent;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x11, 0x0f, 0x1a); // near-black violet
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1f, 0x1d, 0x2b); // gray-800 tinted
pub const BG_INPUT: Color32 = Color32::from_rgb(0x17, 0x15, 0x22);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x2a, 0x27, 0x3a);
pub const BG_HERO: Color32 = Color32::from_rgb(0x14, 0x10, 0x24); // purple-950 wash

// =============================================================================
// COLORS - Accent (purple -> blue gradient ends)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x93, 0x33, 0xea); // purple-600
pub const ACCENT_END: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const ACCENT_PINK: Color32 = Color32::from_rgb(0xec, 0x48, 0x99); // pink-500
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0xc0, 0x84, 0xfc); // purple-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2e, 0x2b, 0x3f);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x44, 0x40, 0x5c);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Accents used by content
// =============================================================================
/// Returns (bg_color ~12% alpha, strong color)
pub fn accent_colors(accent: Accent) -> (Color32, Color32) {
    let strong = match accent {
        Accent::Purple => Color32::from_rgb(0xa8, 0x55, 0xf7), // purple-500
        Accent::Blue => Color32::from_rgb(0x3b, 0x82, 0xf6),   // blue-500
        Accent::Green => Color32::from_rgb(0x22, 0xc5, 0x5e),  // green-500
        Accent::Pink => Color32::from_rgb(0xec, 0x48, 0x99),   // pink-500
        Accent::Indigo => Color32::from_rgb(0x63, 0x66, 0xf1), // indigo-500
        Accent::Orange => Color32::from_rgb(0xf9, 0x73, 0x16), // orange-500
    };
    (
        Color32::from_rgba_unmultiplied(strong.r(), strong.g(), strong.b(), 30),
        strong,
    )
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 72.0;
pub const FONT_SECTION_TITLE: f32 = 40.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 17.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
pub const HERO_MIN_HEIGHT: f32 = 640.0;
pub const PROFILE_IMAGE_SIZE: f32 = 288.0;
pub const PROJECT_CARD_HEIGHT: f32 = 200.0;
pub const SKILL_BAR_HEIGHT: f32 = 6.0;
pub const PILL_HEIGHT: f32 = 36.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 16.0;
pub const RADIUS_CARD: f32 = 24.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;
pub const SECTION_GAP: f32 = 96.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_INPUT;
    visuals.faint_bg_color = BG_SURFACE;
    visuals.hyperlink_color = ACCENT_LIGHT;
    visuals.selection.bg_fill = Color32::from_rgb(0x4c, 0x1d, 0x95); // purple-900
    visuals.selection.stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_CARD as u8);
    visuals.popup_shadow.offset = [0, 8];
    visuals.popup_shadow.blur = 24;
    visuals.popup_shadow.color = Color32::from_black_alpha(100);

    let w = &mut visuals.widgets;
    w.noninteractive = widget_look(BG_ELEVATED, BG_SURFACE, BORDER_SUBTLE, TEXT_SECONDARY);
    w.inactive = widget_look(BG_INPUT, BG_ELEVATED, BORDER_SUBTLE, TEXT_SECONDARY);
    w.hovered = widget_look(BG_SURFACE, Color32::from_rgb(0x35, 0x31, 0x4a), BORDER_DEFAULT, TEXT_PRIMARY);
    w.active = widget_look(PRESSED, PRESSED, ACCENT, TEXT_PRIMARY);
    w.active.expansion = -1.0;
    w.open = widget_look(BG_SURFACE, BG_ELEVATED, BORDER_SUBTLE, TEXT_PRIMARY);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_MD);
        style.spacing.button_padding = egui::vec2(16.0, SPACING_MD);
        style.spacing.scroll.floating = true;
        style.spacing.scroll.bar_width = 6.0;
    });
}

const PRESSED: Color32 = Color32::from_rgb(0x3b, 0x36, 0x52);

fn widget_look(fill: Color32, weak: Color32, border: Color32, text: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: weak,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, border),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, text),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x1f, 0x1d, 0x2b, 220))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8 + 8))
}

/// Card tinted with an accent wash, used for gradient-looking panels
pub fn tinted_card_frame(accent: Accent) -> egui::Frame {
    let (bg, strong) = accent_colors(accent);
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(
            STROKE_DEFAULT,
            Color32::from_rgba_unmultiplied(strong.r(), strong.g(), strong.b(), 70),
        ))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8 + 8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x18, 0x16, 0x23))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_CARD)
        .inner_margin(SPACING_XL)
}

pub fn input_frame(focused: bool) -> egui::Frame {
    let stroke = if focused {
        egui::Stroke::new(STROKE_THICK, ACCENT)
    } else {
        egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT)
    };
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(stroke)
        .corner_radius(RADIUS_LARGE - 4.0)
        .inner_margin(egui::Margin::symmetric(14, 10))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Filled primary button
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY).strong())
        .fill(ACCENT)
        .corner_radius(RADIUS_LARGE)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect.expand(1.0))
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Same color with alpha scaled by `opacity` in [0, 1]
pub fn fade(c: Color32, opacity: f32) -> Color32 {
    let a = (c.a() as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_towards_white() {
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        assert_eq!(lighten(ACCENT, 0.0), ACCENT);
    }

    #[test]
    fn fade_scales_alpha() {
        assert_eq!(fade(Color32::WHITE, 0.0).a(), 0);
        assert_eq!(fade(Color32::WHITE, 1.0).a(), 255);
        assert_eq!(fade(Color32::WHITE, 4.0).a(), 255);
    }
}
