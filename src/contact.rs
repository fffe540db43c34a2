//! Contact form draft handler
//!
//! Owns the four field strings and the optimistic "submitted" flag. A
//! successful local submit arms a one-shot reset timer; the timer is polled
//! from the UI loop and disarmed by `teardown` so it can never fire into a
//! view that is gone.

use crate::error::SubmitRejected;
use crate::types::{FormDraft, FormField};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResetTimer {
    deadline: f64,
}

pub struct ContactForm {
    pub draft: FormDraft,
    pub focused: Option<FormField>,
    submitted: bool,
    reset_delay: Duration,
    timer: Option<ResetTimer>,
}

impl ContactForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            draft: FormDraft::default(),
            focused: None,
            submitted: false,
            reset_delay,
            timer: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[cfg(test)]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Replace one field's value (one input event).
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Fields that fail the local "required" check.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.draft.field(*f).trim().is_empty())
            .collect()
    }

    /// Accept the draft for delivery. Returns the payload to post.
    pub fn submit(&mut self, now: f64) -> Result<FormDraft, SubmitRejected> {
        if self.submitted {
            return Err(SubmitRejected::AlreadySubmitted);
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }
        self.submitted = true;
        self.focused = None;
        self.timer = Some(ResetTimer {
            deadline: now + self.reset_delay.as_secs_f64(),
        });
        Ok(self.draft.clone())
    }

    /// Fire the reset timer if it is due. Returns true when the form was reset.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.timer {
            Some(timer) if now >= timer.deadline => {
                self.timer = None;
                self.submitted = false;
                self.draft.clear();
                debug!("Contact form reset after submit");
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending reset, used to schedule the next repaint.
    pub fn time_until_reset(&self, now: f64) -> Option<Duration> {
        self.timer
            .map(|t| Duration::from_secs_f64((t.deadline - now).max(0.0)))
    }

    /// Cancel the pending reset. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.timer.take().is_some() {
            debug!("Pending contact form reset cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(Duration::from_millis(3000));
        form.set_field(FormField::Name, "A");
        form.set_field(FormField::Email, "a@x.com");
        form.set_field(FormField::Subject, "S");
        form.set_field(FormField::Message, "M");
        form
    }

    #[test]
    fn submit_flags_immediately_and_resets_after_delay() {
        let mut form = filled();
        let payload = form.submit(100.0).expect("all fields present");
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "a@x.com");
        assert!(form.is_submitted());

        // Not yet
        assert!(!form.poll(102.999));
        assert!(form.is_submitted());
        assert_eq!(form.draft.subject, "S");

        assert!(form.poll(103.0));
        assert!(!form.is_submitted());
        assert!(form.draft.is_empty());
        assert!(!form.is_timer_armed());

        // Fires once
        assert!(!form.poll(200.0));
    }

    #[test]
    fn missing_fields_block_submit() {
        let mut form = filled();
        form.set_field(FormField::Email, "   ");
        form.set_field(FormField::Message, "");
        let err = form.submit(0.0).unwrap_err();
        assert_eq!(
            err,
            SubmitRejected::MissingFields(vec![FormField::Email, FormField::Message])
        );
        assert!(!form.is_submitted());
        assert!(!form.is_timer_armed());
        assert_eq!(form.draft.name, "A");
    }

    #[test]
    fn submit_is_not_reentrant() {
        let mut form = filled();
        form.submit(0.0).unwrap();
        assert_eq!(form.submit(1.0), Err(SubmitRejected::AlreadySubmitted));
        // The original deadline stands
        assert_eq!(form.time_until_reset(1.0), Some(Duration::from_secs(2)));
    }

    #[test]
    fn teardown_cancels_pending_reset() {
        let mut form = filled();
        form.submit(0.0).unwrap();
        form.teardown();
        assert!(!form.is_timer_armed());
        assert!(!form.poll(10_000.0));
        assert_eq!(form.draft.message, "M");
        form.teardown();
    }

    #[test]
    fn time_until_reset_saturates_at_zero() {
        let mut form = filled();
        assert_eq!(form.time_until_reset(0.0), None);
        form.submit(0.0).unwrap();
        assert_eq!(form.time_until_reset(5.0), Some(Duration::ZERO));
    }
}
