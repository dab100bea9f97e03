//! Scalar blending helpers for tick-driven transitions.
//!
//! The crouch eye-height/capsule transition is a fixed-duration two-point
//! blend advanced once per tick; the zoom FOV transition is a rate-based
//! lerp toward a moving target. Both are plain incremental state - no
//! scheduler or coroutine is involved.

use bevy::prelude::*;

/// A fixed-duration linear blend between two scalar values.
///
/// `start` captures the current value and resets the clock; `advance`
/// moves toward the target and snaps exactly onto it at completion.
/// Starting a new blend discards any in-flight one - last start wins.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScalarBlend {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    active: bool,
}

impl ScalarBlend {
    /// Create an inactive blend resting at `value`.
    pub fn at(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
            active: false,
        }
    }

    /// Begin a new blend from `from` to `to` over `duration` seconds.
    pub fn start(&mut self, from: f32, to: f32, duration: f32) {
        self.from = from;
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration;
        self.active = true;
    }

    /// Advance by `dt` seconds and return the current value.
    ///
    /// Snaps exactly onto the target once elapsed reaches the duration,
    /// after which the blend reports inactive.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.active {
            return self.to;
        }
        self.elapsed += dt;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.active = false;
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }

    /// Whether a blend is still in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The value the blend is heading toward (or resting at).
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Rate-based lerp toward a target, in the style of `Mathf.Lerp(current,
/// target, speed * dt)`: the step never overshoots and decays
/// exponentially as current approaches target.
pub fn exp_lerp(current: f32, target: f32, speed: f32, dt: f32) -> f32 {
    let t = (speed * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_interpolates_linearly() {
        let mut blend = ScalarBlend::at(0.0);
        blend.start(0.0, 1.0, 0.2);
        assert!((blend.advance(0.1) - 0.5).abs() < 1e-6);
        assert!(blend.is_active());
    }

    #[test]
    fn blend_snaps_to_target_at_completion() {
        let mut blend = ScalarBlend::at(1.8);
        blend.start(1.8, 1.0, 0.2);
        // Uneven steps that overshoot the duration
        blend.advance(0.15);
        let value = blend.advance(0.15);
        assert_eq!(value, 1.0);
        assert!(!blend.is_active());
        // Further advances hold the target
        assert_eq!(blend.advance(0.1), 1.0);
    }

    #[test]
    fn restart_discards_in_flight_blend() {
        let mut blend = ScalarBlend::at(0.0);
        blend.start(0.0, 1.0, 0.2);
        let midway = blend.advance(0.1);
        // Toggle back before completion - two-point blend from the
        // captured midway value, no three-way mixing
        blend.start(midway, 0.0, 0.2);
        assert!((blend.advance(0.1) - midway * 0.5).abs() < 1e-6);
        assert_eq!(blend.advance(0.2), 0.0);
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let mut blend = ScalarBlend::at(0.0);
        blend.start(0.0, 5.0, 0.0);
        assert_eq!(blend.advance(0.016), 5.0);
        assert!(!blend.is_active());
    }

    #[test]
    fn exp_lerp_never_overshoots() {
        let mut fov = 60.0;
        for _ in 0..1000 {
            fov = exp_lerp(fov, 40.0, 10.0, 0.5);
            assert!(fov >= 40.0);
        }
        assert!((fov - 40.0).abs() < 1e-3);
    }
}
