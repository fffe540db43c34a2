//! Animation timelines: easing curves, one-shot tweens and looping keyframe tracks
//!
//! All timing is driven by `egui`'s input clock (`ctx.input(|i| i.time)`), so
//! every function here takes `now` in seconds and is pure.

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier (P0 = 0,0 and P3 = 1,1) at x.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let bez = |a: f32, b: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a + 3.0 * mt * t * t * b + t * t * t
    };
    let bez_dx = |a: f32, b: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * a + 6.0 * mt * t * (b - a) + 3.0 * t * t * (1.0 - b)
    };

    // Newton first, bisection if the slope flattens out
    let mut t = x;
    for _ in 0..8 {
        let err = bez(x1, x2, t) - x;
        if err.abs() < 1e-5 {
            return bez(y1, y2, t);
        }
        let d = bez_dx(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let v = bez(x1, x2, t);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    bez(y1, y2, t)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One-shot animation anchored at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f64, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            duration,
            delay: 0.0,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.start) as f32 - self.delay;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || elapsed >= self.duration {
            return 1.0;
        }
        self.easing.apply(elapsed / self.duration)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        (now - self.start) as f32 >= self.delay + self.duration
    }
}

/// Looping track over evenly spaced keyframes, e.g. `[-10, 10, -10]`.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeTrack {
    pub values: &'static [f32],
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl KeyframeTrack {
    pub const fn new(values: &'static [f32], duration: f32, easing: Easing) -> Self {
        Self {
            values,
            duration,
            delay: 0.0,
            easing,
        }
    }

    pub const fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn sample(&self, now: f64) -> f32 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let elapsed = (now as f32 - self.delay).max(0.0);
                let cycle = if self.duration > 0.0 {
                    (elapsed / self.duration).fract()
                } else {
                    0.0
                };
                let segments = (values.len() - 1) as f32;
                let pos = cycle * segments;
                let idx = (pos.floor() as usize).min(values.len() - 2);
                let local = self.easing.apply(pos - idx as f32);
                lerp(values[idx], values[idx + 1], local)
            }
        }
    }
}

/// Plain sine oscillation, used where a keyframe table would be overkill.
pub fn oscillate(now: f64, period: f32, amplitude: f32, phase: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    ((now as f32 / period) * TAU + phase).sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn easing_is_monotone() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = easing.apply(step as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{easing:?} went backwards at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_out_leads_and_ease_in_lags() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn tween_respects_delay_and_clamps() {
        let tween = Tween::new(10.0, 1.0, Easing::Linear).with_delay(0.5);
        assert_eq!(tween.progress(9.0), 0.0);
        assert_eq!(tween.progress(10.4), 0.0);
        assert!((tween.progress(11.0) - 0.5).abs() < 1e-4);
        assert_eq!(tween.progress(20.0), 1.0);
        assert!(!tween.is_finished(11.2));
        assert!(tween.is_finished(11.5));
    }

    #[test]
    fn zero_duration_tween_completes_immediately() {
        let tween = Tween::new(0.0, 0.0, Easing::EaseOut);
        assert_eq!(tween.progress(0.001), 1.0);
    }

    #[test]
    fn keyframes_loop() {
        let track = KeyframeTrack::new(&[-10.0, 10.0, -10.0], 2.0, Easing::Linear);
        assert!((track.sample(0.0) + 10.0).abs() < 1e-4);
        assert!((track.sample(1.0) - 10.0).abs() < 1e-4);
        assert!((track.sample(0.5) - 0.0).abs() < 1e-4);
        assert!((track.sample(2.5) - track.sample(0.5)).abs() < 1e-4);
    }

    #[test]
    fn keyframes_degenerate_tracks() {
        assert_eq!(KeyframeTrack::new(&[], 1.0, Easing::Linear).sample(3.0), 0.0);
        assert_eq!(KeyframeTrack::new(&[4.0], 1.0, Easing::Linear).sample(3.0), 4.0);
    }

    #[test]
    fn delayed_track_holds_first_value() {
        let track = KeyframeTrack::new(&[1.0, 2.0], 1.0, Easing::Linear).delayed(2.0);
        assert_eq!(track.sample(1.0), 1.0);
    }
}
