//! Common types and data structures

use serde::Serialize;

/// Visual style bundle applied to the About image for one tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePreset {
    pub scale: f32,
    /// Rotation around the vertical axis, degrees
    pub tilt_deg: f32,
    pub brightness: f32,
    pub saturation: f32,
}

impl ImagePreset {
    pub const NEUTRAL: ImagePreset = ImagePreset {
        scale: 1.0,
        tilt_deg: 0.0,
        brightness: 1.0,
        saturation: 1.0,
    };

    pub fn lerp(&self, to: &ImagePreset, t: f32) -> ImagePreset {
        if t >= 1.0 {
            return *to;
        }
        if t <= 0.0 {
            return *self;
        }
        let mix = |a: f32, b: f32| a + (b - a) * t;
        ImagePreset {
            scale: mix(self.scale, to.scale),
            tilt_deg: mix(self.tilt_deg, to.tilt_deg),
            brightness: mix(self.brightness, to.brightness),
            saturation: mix(self.saturation, to.saturation),
        }
    }
}

/// Named accent used by content tables; resolved to colors in `theme`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Blue,
    Green,
    Pink,
    Indigo,
    Orange,
}

/// Contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Form-encoded field name
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your full name",
            FormField::Email => "your.email@example.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project or just say hello!",
        }
    }
}

/// Draft of the contact form. Serializes to the four posted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lerp_snaps_to_endpoints() {
        let to = ImagePreset {
            scale: 1.02,
            tilt_deg: 2.0,
            brightness: 1.05,
            saturation: 1.2,
        };
        assert_eq!(ImagePreset::NEUTRAL.lerp(&to, 1.0), to);
        assert_eq!(ImagePreset::NEUTRAL.lerp(&to, 0.0), ImagePreset::NEUTRAL);
        let mid = ImagePreset::NEUTRAL.lerp(&to, 0.5);
        assert!((mid.tilt_deg - 1.0).abs() < 1e-6);
    }

    #[test]
    fn draft_serializes_with_form_keys() {
        let draft = FormDraft {
            name: "A".into(),
            email: "a@x.com".into(),
            subject: "S".into(),
            message: "M".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        for field in FormField::ALL {
            assert_eq!(json[field.key()], draft.field(field));
        }
    }

    #[test]
    fn draft_field_access_round_trips() {
        let mut draft = FormDraft::default();
        assert!(draft.is_empty());
        draft.field_mut(FormField::Subject).push_str("Hi");
        assert_eq!(draft.subject, "Hi");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
