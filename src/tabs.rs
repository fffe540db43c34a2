//! Tabbed content controller
//!
//! Holds the active index into a fixed list of panels. `select` is the only
//! mutator; changing the index starts the panel enter transition and, when a
//! preset table is attached, blends the image style towards the new entry.

use crate::animation::{Easing, Tween};
use crate::constants::{PRESET_TRANSITION_SECS, TAB_TRANSITION_SECS};
use crate::types::ImagePreset;

pub struct TabController {
    active: usize,
    len: usize,
    presets: Option<&'static [ImagePreset]>,
    /// Style shown when the current blend started
    blend_from: ImagePreset,
    panel_tween: Option<Tween>,
    preset_tween: Option<Tween>,
}

impl TabController {
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a tab set needs at least one panel");
        Self {
            active: 0,
            len,
            presets: None,
            blend_from: ImagePreset::NEUTRAL,
            panel_tween: None,
            preset_tween: None,
        }
    }

    /// Controller whose panels each carry a fixed image preset.
    pub fn with_presets(presets: &'static [ImagePreset]) -> Self {
        let mut tabs = Self::new(presets.len());
        tabs.presets = Some(presets);
        tabs.blend_from = presets[0];
        tabs
    }

    pub fn active(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Switch panels. `index` must be within the fixed tab list.
    pub fn select(&mut self, index: usize, now: f64) {
        assert!(
            index < self.len,
            "tab index {index} out of range for {} tabs",
            self.len
        );
        if index == self.active {
            return;
        }
        self.blend_from = self.image_style(now);
        self.active = index;
        self.panel_tween = Some(Tween::new(now, TAB_TRANSITION_SECS, Easing::EaseOut));
        if self.presets.is_some() {
            self.preset_tween = Some(Tween::new(now, PRESET_TRANSITION_SECS, Easing::EaseOut));
        }
    }

    /// The table entry for the active tab.
    pub fn preset(&self) -> Option<ImagePreset> {
        self.presets.map(|table| table[self.active])
    }

    /// Style to draw at `now`: blends towards `preset()` and lands on it exactly.
    pub fn image_style(&self, now: f64) -> ImagePreset {
        let Some(target) = self.preset() else {
            return ImagePreset::NEUTRAL;
        };
        match self.preset_tween {
            Some(tween) => self.blend_from.lerp(&target, tween.progress(now)),
            None => target,
        }
    }

    /// Panel enter progress in [0, 1]; 1 when no transition is running.
    pub fn panel_progress(&self, now: f64) -> f32 {
        self.panel_tween.map_or(1.0, |t| t.progress(now))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        let running = |t: &Option<Tween>| t.is_some_and(|t| !t.is_finished(now));
        running(&self.panel_tween) || running(&self.preset_tween)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ABOUT_PRESETS;

    #[test]
    fn starts_on_first_tab() {
        let tabs = TabController::with_presets(&ABOUT_PRESETS);
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs.preset(), Some(ABOUT_PRESETS[0]));
        assert_eq!(tabs.image_style(0.0), ABOUT_PRESETS[0]);
        assert_eq!(tabs.panel_progress(0.0), 1.0);
    }

    #[test]
    fn reselecting_is_idempotent() {
        for i in 0..ABOUT_PRESETS.len() {
            let mut tabs = TabController::with_presets(&ABOUT_PRESETS);
            tabs.select(i, 1.0);
            let progress = tabs.panel_progress(1.2);
            let style = tabs.image_style(1.2);
            tabs.select(i, 1.1);
            assert_eq!(tabs.active(), i);
            assert_eq!(tabs.preset(), Some(ABOUT_PRESETS[i]));
            assert_eq!(tabs.panel_progress(1.2), progress);
            assert_eq!(tabs.image_style(1.2), style);
        }
    }

    #[test]
    fn preset_matches_table_after_any_switch_sequence() {
        let mut tabs = TabController::with_presets(&ABOUT_PRESETS);
        let sequence = [3, 1, 1, 0, 2, 3, 3, 0, 1, 2, 0, 3];
        let mut now = 0.0;
        for &i in &sequence {
            // Switch mid-transition half of the time
            now += 0.25;
            tabs.select(i, now);
            assert_eq!(tabs.preset(), Some(ABOUT_PRESETS[i]));
        }
        let settled = now + PRESET_TRANSITION_SECS as f64 + 0.01;
        assert_eq!(tabs.image_style(settled), ABOUT_PRESETS[3]);
        assert!(!tabs.is_animating(settled));
    }

    #[test]
    fn switch_starts_transitions() {
        let mut tabs = TabController::with_presets(&ABOUT_PRESETS);
        tabs.select(2, 10.0);
        assert_eq!(tabs.panel_progress(10.0), 0.0);
        assert!(tabs.is_animating(10.1));
        let mid = tabs.image_style(10.3);
        assert_ne!(mid, ABOUT_PRESETS[0]);
        assert_ne!(mid, ABOUT_PRESETS[2]);
        assert_eq!(tabs.image_style(11.0), ABOUT_PRESETS[2]);
        assert_eq!(tabs.panel_progress(11.0), 1.0);
    }

    #[test]
    fn plain_controller_has_no_preset() {
        let mut tabs = TabController::new(5);
        tabs.select(4, 0.0);
        assert_eq!(tabs.active(), 4);
        assert!(tabs.is_active(4));
        assert_eq!(tabs.preset(), None);
        assert_eq!(tabs.image_style(5.0), ImagePreset::NEUTRAL);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_is_a_programming_error() {
        let mut tabs = TabController::new(4);
        tabs.select(4, 0.0);
    }
}
