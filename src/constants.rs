//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Portfolio Showcase";

/// Hosted form-processing endpoint that receives contact submissions
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xovlbevp";

/// Substituted once for any image reference that fails to load
pub const FALLBACK_IMAGE: &str = "/placeholder-image.jpg";
pub const PROFILE_IMAGE: &str = "/Me.jpeg";

/// Ambient background defaults
pub const DEFAULT_SHAPE_COUNT: usize = 15;
pub const SHAPE_SPREAD: f32 = 10.0;
pub const SHAPE_OPACITY: f32 = 0.6;
pub const SHAPE_SATURATION: f32 = 0.7;
pub const SHAPE_LIGHTNESS: f32 = 0.5;

/// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

/// Contact form reset after a submit (ms)
pub const DEFAULT_SUBMIT_RESET_MS: u64 = 3000;

/// Transition timings (seconds)
pub const TAB_TRANSITION_SECS: f32 = 0.4;
pub const PRESET_TRANSITION_SECS: f32 = 0.6;
pub const SECTION_REVEAL_SECS: f32 = 0.6;
pub const SKILL_BAR_SECS: f32 = 1.5;
pub const SKILL_BAR_DELAY_SECS: f32 = 0.2;
pub const SKILL_BAR_STAGGER_SECS: f32 = 0.1;
