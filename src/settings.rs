//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_SHAPE_COUNT, DEFAULT_SUBMIT_RESET_MS, FORM_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Ambient background
    pub show_background: bool,
    pub shape_count: usize,

    // Contact form
    pub form_endpoint: String,
    pub submit_reset_ms: u64,

    // Paths
    pub assets_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            show_background: true,
            shape_count: DEFAULT_SHAPE_COUNT,
            form_endpoint: FORM_ENDPOINT.to_string(),
            submit_reset_ms: DEFAULT_SUBMIT_RESET_MS,
            assets_dir: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn assets_dir_or_default(&self) -> PathBuf {
        self.assets_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"))
    }

    pub fn submit_reset_delay(&self) -> Duration {
        Duration::from_millis(self.submit_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.shape_count, 15);
        assert_eq!(settings.submit_reset_delay(), Duration::from_millis(3000));
        assert_eq!(settings.assets_dir_or_default(), PathBuf::from("assets"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            show_background: false,
            shape_count: 24,
            assets_dir: Some("/srv/portfolio/public".into()),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{ "shape_count": 3 }"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.shape_count, 3);
        assert_eq!(settings.form_endpoint, FORM_ENDPOINT);
        assert!(settings.show_background);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }
}
