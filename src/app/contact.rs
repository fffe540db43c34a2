//! Contact section: contact methods, the form, and background delivery of submissions

use super::App;
use crate::content::{ContactMethod, CONTACT_INTRO, CONTACT_METHODS};
use crate::error::{SubmitError, SubmitRejected};
use crate::theme;
use crate::types::{FormDraft, FormField};
use crate::ui::components::{icon_badge, section_heading};
use eframe::egui;
use egui_phosphor::regular as icons;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// POST the draft as a urlencoded form and treat any non-2xx as a rejection.
async fn post_submission(
    client: &reqwest::Client,
    endpoint: &str,
    draft: &FormDraft,
) -> Result<(), SubmitError> {
    let response = client
        .post(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(draft)
        .send()
        .await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// Deliver one submission, giving up as soon as `token` is cancelled.
async fn deliver(
    client: reqwest::Client,
    endpoint: String,
    draft: FormDraft,
    token: CancellationToken,
) {
    let result = tokio::select! {
        _ = token.cancelled() => Err(SubmitError::Cancelled),
        result = post_submission(&client, &endpoint, &draft) => result,
    };
    match result {
        Ok(()) => info!(endpoint = %endpoint, "Contact form delivered"),
        Err(SubmitError::Cancelled) => debug!("Contact form delivery cancelled"),
        Err(e) => warn!(error = %e, endpoint = %endpoint, "Contact form delivery failed"),
    }
}

impl App {
    /// Hand a submission to the runtime. The outcome is only logged.
    pub(crate) fn spawn_submission(&self, draft: FormDraft) {
        let client = self.http.clone();
        let endpoint = self.settings.form_endpoint.clone();
        let token = self.cancel_token.clone();
        self.runtime.spawn(deliver(client, endpoint, draft, token));
    }

    /// Fire the post-submit reset when due and schedule a repaint for its deadline.
    pub(crate) fn poll_contact(&mut self, ctx: &egui::Context, now: f64) {
        self.contact.poll(now);
        if let Some(remaining) = self.contact.time_until_reset(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn submit_contact(&mut self, now: f64) {
        match self.contact.submit(now) {
            Ok(draft) => {
                info!(subject = %draft.subject, "Contact form submitted");
                self.contact_missing.clear();
                self.spawn_submission(draft);
            }
            Err(SubmitRejected::MissingFields(fields)) => {
                let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
                debug!(missing = ?keys, "Contact form incomplete");
                self.contact_missing = fields;
            }
            Err(e) => debug!(error = %e, "Contact form submit ignored"),
        }
    }

    pub(crate) fn render_contact(&mut self, ui: &mut egui::Ui, now: f64) {
        section_heading(ui, "Let's", "Connect", CONTACT_INTRO);

        ui.columns(2, |cols| {
            render_methods(&mut cols[0]);
            theme::card_frame().show(&mut cols[1], |ui| {
                if self.contact.is_submitted() {
                    render_success(ui);
                } else {
                    self.render_form(ui, now);
                }
            });
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.label(
            egui::RichText::new("Send a Message")
                .size(theme::FONT_TITLE + 2.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_LG);

        let mut enter_pressed = false;
        for field in FormField::ALL {
            ui.label(
                egui::RichText::new(field.label())
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(theme::SPACING_SM);

            let focused = self.contact.focused == Some(field);
            let missing = self.contact_missing.contains(&field);
            let mut frame = theme::input_frame(focused);
            if missing {
                frame = frame.stroke(egui::Stroke::new(theme::STROKE_MEDIUM, theme::STATUS_ERROR));
            }

            let mut value = self.contact.draft.field(field).to_owned();
            let response = frame
                .show(ui, |ui| {
                    let edit = if field == FormField::Message {
                        egui::TextEdit::multiline(&mut value).desired_rows(5)
                    } else {
                        egui::TextEdit::singleline(&mut value)
                    };
                    ui.add(
                        edit.frame(false)
                            .hint_text(field.placeholder())
                            .desired_width(f32::INFINITY)
                            .font(egui::FontId::proportional(theme::FONT_BODY))
                            .text_color(theme::TEXT_PRIMARY),
                    )
                })
                .inner;

            if response.changed() {
                self.contact.set_field(field, value);
                self.contact_missing.retain(|f| *f != field);
            }
            if response.gained_focus() {
                self.contact.focused = Some(field);
            } else if response.lost_focus() && focused {
                self.contact.focused = None;
                enter_pressed |= field != FormField::Message
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
            }
            ui.add_space(theme::SPACING_MD + 4.0);
        }

        if !self.contact_missing.is_empty() {
            ui.label(
                egui::RichText::new("Please fill in every field.")
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_ERROR),
            );
            ui.add_space(theme::SPACING_SM);
        }

        ui.add_space(theme::SPACING_MD);
        let send = ui.add_sized(
            [ui.available_width(), 48.0],
            theme::button_accent(format!("{}  Send Message", icons::PAPER_PLANE_TILT)),
        );
        if send.clicked() || enter_pressed {
            self.submit_contact(now);
        }
    }
}

fn render_methods(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Get in Touch")
            .size(theme::FONT_TITLE + 2.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_LG);
    for method in &CONTACT_METHODS {
        contact_method(ui, method);
        ui.add_space(theme::SPACING_MD);
    }
}

fn contact_method(ui: &mut egui::Ui, method: &ContactMethod) {
    let response = theme::card_frame()
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                icon_badge(ui, method.icon, method.accent, 44.0);
                ui.add_space(theme::SPACING_SM);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(method.title)
                            .size(theme::FONT_BODY)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(method.value)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
        })
        .response;

    let Some(link) = method.link else {
        return;
    };
    let response = response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(link);
    if response.clicked() {
        if let Err(e) = open::that(link) {
            warn!(error = %e, link, "Failed to open contact link");
        }
    }
}

fn render_success(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_XL * 2.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 80.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 40.0, theme::STATUS_SUCCESS);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icons::CHECK_CIRCLE,
            egui::FontId::proportional(48.0),
            theme::TEXT_PRIMARY,
        );
        ui.add_space(theme::SPACING_XL);
        ui.label(
            egui::RichText::new("Message Sent!")
                .size(theme::FONT_TITLE + 2.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new("Thank you for reaching out. I'll get back to you soon!")
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(theme::SPACING_XL * 2.0);
    });
}
