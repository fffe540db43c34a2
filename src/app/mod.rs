//! Page state shared by the hero and the four content sections

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

use crate::animation::{Easing, Tween};
use crate::assets::ImageStore;
use crate::background::AmbientBackground;
use crate::constants::*;
use crate::contact::ContactForm;
use crate::content::{ABOUT_PRESETS, SKILL_CATEGORIES};
use crate::settings::Settings;
use crate::tabs::TabController;
use crate::theme;
use crate::types::FormField;
use eframe::egui;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

/// Page sections below the hero, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub(crate) const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];
}

/// When each section first came on screen. Drives the one-shot fade-ups.
#[derive(Debug, Default)]
pub(crate) struct SectionReveals {
    seen: [Option<f64>; 4],
}

impl SectionReveals {
    /// Record a sighting of `section`, laid out this frame at `rect`.
    /// Any overlap with the visible area counts, so a section entered from
    /// below or jumped into by the scrollbar is revealed as well.
    pub(crate) fn observe(
        &mut self,
        ui: &egui::Ui,
        section: Section,
        rect: egui::Rect,
        now: f64,
    ) -> Option<f64> {
        let slot = &mut self.seen[section as usize];
        if slot.is_none() && ui.is_rect_visible(rect) {
            debug!(?section, "Section revealed");
            *slot = Some(now);
        }
        *slot
    }

    pub(crate) fn seen(&self, section: Section) -> Option<f64> {
        self.seen[section as usize]
    }

    /// Fade-up progress, 0 until the section has been on screen
    pub(crate) fn progress(&self, section: Section, now: f64) -> f32 {
        self.seen(section).map_or(0.0, |t| {
            Tween::new(t, SECTION_REVEAL_SECS, Easing::EaseOut).progress(now)
        })
    }

    /// True only while a seen section is still fading in.
    pub(crate) fn is_animating(&self, section: Section, now: f64) -> bool {
        self.seen(section).is_some() && self.progress(section, now) < 1.0
    }
}

pub struct App {
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Form delivery
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) http: reqwest::Client,
    pub(crate) cancel_token: CancellationToken,
    // Hero
    pub(crate) background: Option<AmbientBackground>,
    // About / Skills
    pub(crate) about_tabs: TabController,
    pub(crate) skill_tabs: TabController,
    pub(crate) hovered_skill: Option<usize>,
    // Projects
    pub(crate) hovered_project: Option<usize>,
    pub(crate) selected_project: Option<usize>,
    // Contact
    pub(crate) contact: ContactForm,
    pub(crate) contact_missing: Vec<FormField>,
    // Assets
    pub(crate) images: ImageStore,
    /// egui time of the first frame; drives the hero intro
    pub(crate) started_at: f64,
    pub(crate) reveals: SectionReveals,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let now = cc.egui_ctx.input(|i| i.time);
        let surface = cc.egui_ctx.screen_rect().size();

        let background = if settings.show_background {
            Some(AmbientBackground::activate(
                settings.shape_count,
                surface,
                now,
                &mut rand::rng(),
            ))
        } else {
            debug!("Ambient background disabled in settings");
            None
        };

        let http = reqwest::Client::builder()
            .user_agent(format!("PortfolioShowcase/{}", APP_VERSION))
            .build()
            .unwrap_or_default();

        let images = ImageStore::new(settings.assets_dir_or_default());
        let contact = ContactForm::new(settings.submit_reset_delay());

        info!(
            shapes = background.as_ref().map_or(0, |b| b.shapes().len()),
            endpoint = %settings.form_endpoint,
            "Portfolio initialized"
        );

        Self {
            settings,
            data_dir,
            runtime,
            http,
            cancel_token: CancellationToken::new(),
            background,
            about_tabs: TabController::with_presets(&ABOUT_PRESETS),
            skill_tabs: TabController::new(SKILL_CATEGORIES.len()),
            hovered_skill: None,
            hovered_project: None,
            selected_project: None,
            contact,
            contact_missing: Vec::new(),
            images,
            started_at: now,
            reveals: SectionReveals::default(),
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    /// Seconds since the first frame
    pub(crate) fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    /// Stop everything that could still touch the view after it is gone.
    pub(crate) fn teardown(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.deactivate();
        }
        self.contact.teardown();
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observe `rect` in one headless frame whose visible area is `clip`.
    fn sighting(
        reveals: &mut SectionReveals,
        section: Section,
        rect: egui::Rect,
        clip: egui::Rect,
        now: f64,
    ) -> Option<f64> {
        let ctx = egui::Context::default();
        let mut seen = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.set_clip_rect(clip);
                seen = reveals.observe(ui, section, rect, now);
            });
        });
        seen
    }

    fn rect(top: f32, bottom: f32) -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(0.0, top), egui::pos2(800.0, bottom))
    }

    #[test]
    fn unseen_section_is_hidden_and_idle() {
        let reveals = SectionReveals::default();
        for section in Section::ALL {
            assert_eq!(reveals.seen(section), None);
            assert_eq!(reveals.progress(section, 100.0), 0.0);
            assert!(!reveals.is_animating(section, 100.0));
        }
    }

    #[test]
    fn section_entered_from_below_is_revealed() {
        let mut reveals = SectionReveals::default();
        let view = rect(0.0, 600.0);

        // Scrolled past: the section sits entirely above the view
        assert_eq!(sighting(&mut reveals, Section::Skills, rect(-2400.0, -1200.0), view, 1.0), None);

        // Scrolling back up brings its lower half in while its top is still off screen
        let seen = sighting(&mut reveals, Section::Skills, rect(-700.0, 500.0), view, 2.0);
        assert_eq!(seen, Some(2.0));
        assert!(reveals.is_animating(Section::Skills, 2.0));
        assert_eq!(reveals.seen(Section::Projects), None);
    }

    #[test]
    fn first_sighting_is_kept_and_fade_completes() {
        let mut reveals = SectionReveals::default();
        let view = rect(0.0, 600.0);
        sighting(&mut reveals, Section::Contact, rect(550.0, 1400.0), view, 3.0);
        sighting(&mut reveals, Section::Contact, rect(0.0, 850.0), view, 9.0);

        assert_eq!(reveals.seen(Section::Contact), Some(3.0));
        let done = 3.0 + SECTION_REVEAL_SECS as f64;
        assert_eq!(reveals.progress(Section::Contact, done), 1.0);
        assert!(!reveals.is_animating(Section::Contact, done));
    }
}
