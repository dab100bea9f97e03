//! Player-related components and the locomotion state machine.
//!
//! The state transitions live in plain methods on [`LocomotionState`] so
//! they can be exercised without a physics world; the systems in
//! `movement.rs` and `crouch.rs` feed them input snapshots and probe
//! results each tick.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::ScalarBlend;

/// Marker component for the player entity (the body; yaw lives on its
/// transform).
#[derive(Component)]
pub struct Player;

/// Marker for instances driven by local input.
///
/// Remote or scripted characters never carry this, so none of the
/// input-driven systems tick them.
#[derive(Component)]
pub struct LocallyControlled;

/// Marker component for the player's camera (the head; pitch applies
/// here only, so vertical look never rotates movement direction).
#[derive(Component)]
pub struct PlayerCamera;

/// Marker for the attachment point held items are reparented under.
/// Child of the camera, so held items follow the look direction.
#[derive(Component)]
pub struct HoldAnchor;

/// Camera rig state: smoothed eye height plus head-bob phase.
#[derive(Component)]
pub struct EyeRig {
    /// Blends between standing and crouched eye offsets.
    pub height: ScalarBlend,
    /// Head-bob sine phase, reset when idle or airborne.
    pub bob_timer: f32,
}

/// A crouch state change that needs its side effects applied (capsule
/// swap, eye blend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrouchTransition {
    Entered,
    Stood,
}

/// Movement speed mode, resolved fresh every tick from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedMode {
    #[default]
    Walk,
    Sprint,
    Crouch,
}

/// Tracks player locomotion state for physics.
///
/// Mutated exactly once per tick by the movement/crouch systems.
#[derive(Component)]
pub struct LocomotionState {
    /// Only the y component integrates; horizontal motion is recomputed
    /// from input every tick.
    pub velocity: Vec3,
    pub is_grounded: bool,
    pub crouching: bool,
    pub zooming: bool,
    /// Head pitch in degrees, clamped to [-90, 90]. Body yaw lives in
    /// the player transform's rotation.
    pub pitch: f32,
    pub mode: SpeedMode,
    /// Armed while airborne; cleared on ground contact.
    pub midair_crouch_boosted: bool,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            is_grounded: true,
            crouching: false,
            zooming: false,
            pitch: 0.0,
            mode: SpeedMode::Walk,
            midair_crouch_boosted: false,
        }
    }
}

impl LocomotionState {
    /// Record the ground probe result for this tick.
    ///
    /// On contact while descending, vertical velocity clamps to the
    /// stick value so the capsule stays pressed against the ground
    /// through probe detection gaps, and the mid-air crouch-boost flag
    /// rearms.
    pub fn apply_grounding(&mut self, grounded: bool, config: &PlayerConfig) {
        self.is_grounded = grounded;
        if grounded && self.velocity.y < 0.0 {
            self.velocity.y = config.ground_stick_velocity;
            self.midair_crouch_boosted = false;
        }
    }

    /// Resolve the speed mode from held keys. Crouch wins over sprint;
    /// sprint is unavailable while still crouched (e.g. stuck under an
    /// overhang with the key released).
    pub fn resolve_mode(&self, crouch_held: bool, sprint_held: bool) -> SpeedMode {
        if crouch_held {
            SpeedMode::Crouch
        } else if sprint_held && !self.crouching {
            SpeedMode::Sprint
        } else {
            SpeedMode::Walk
        }
    }

    /// Movement speed for the current mode, in units per second.
    pub fn speed(&self, config: &PlayerConfig) -> f32 {
        match self.mode {
            SpeedMode::Walk => config.walk_speed,
            SpeedMode::Sprint => config.sprint_speed,
            SpeedMode::Crouch => config.crouch_speed,
        }
    }

    /// Resolve crouch entry/exit for one tick from the held key and the
    /// clearance probe result.
    ///
    /// Standing back up happens only on a tick where the key is released
    /// AND the probe reports headroom; while blocked the state stays
    /// crouched and the caller re-runs the probe next tick - there is no
    /// timeout. Crouching mid-air arms the crouch-boost flag.
    pub fn resolve_crouch(
        &mut self,
        crouch_held: bool,
        clearance_clear: bool,
    ) -> Option<CrouchTransition> {
        if crouch_held {
            if self.crouching {
                return None;
            }
            self.crouching = true;
            if !self.is_grounded {
                self.midair_crouch_boosted = true;
            }
            return Some(CrouchTransition::Entered);
        }
        if self.crouching && clearance_clear {
            self.crouching = false;
            return Some(CrouchTransition::Stood);
        }
        None
    }

    /// Attempt a jump. Only fires while grounded; returns whether the
    /// impulse was applied.
    ///
    /// The initial velocity is the closed form for reaching exactly
    /// `jump_height` under constant effective gravity.
    pub fn try_jump(&mut self, config: &PlayerConfig) -> bool {
        if !self.is_grounded {
            return false;
        }
        self.velocity.y = (config.jump_height * -2.0 * config.effective_gravity()).sqrt();
        true
    }

    /// Integrate gravity for one tick. Falling applies the heavier fall
    /// multiplier for a snappier arc.
    pub fn integrate_gravity(&mut self, config: &PlayerConfig, dt: f32) {
        let gravity = config.effective_gravity();
        if self.velocity.y < 0.0 {
            self.velocity.y += gravity * config.fall_multiplier * dt;
        } else {
            self.velocity.y += gravity * dt;
        }
    }

    /// Apply a look delta: pitch accumulates (clamped to straight up /
    /// straight down), and the yaw delta to rotate the body by is
    /// returned in radians.
    pub fn apply_look(&mut self, look_delta: Vec2, config: &PlayerConfig, dt: f32) -> f32 {
        let scale = config.mouse_sensitivity * dt;
        self.pitch -= look_delta.y * scale;
        self.pitch = self.pitch.clamp(-90.0, 90.0);
        (-look_delta.x * scale).to_radians()
    }
}

/// Tunable player parameters, loadable from `assets/config/player.ron`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base movement speed in units per second
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    /// Apex height of a jump, in units
    pub jump_height: f32,
    /// Base gravity acceleration (negative = down)
    pub base_gravity: f32,
    /// Multiplier for overall gravity strength
    pub gravity_multiplier: f32,
    /// Extra gravity while falling
    pub fall_multiplier: f32,
    /// Downward velocity clamped to on ground contact
    pub ground_stick_velocity: f32,
    /// Look speed in degrees per second per unit of mouse delta
    pub mouse_sensitivity: f32,
    /// Capsule height while standing / crouched, in units
    pub stand_height: f32,
    pub crouch_height: f32,
    /// Capsule radius
    pub capsule_radius: f32,
    /// Camera offset above the body origin while standing / crouched
    pub eye_height_standing: f32,
    pub eye_height_crouched: f32,
    /// Seconds for the crouch eye-height transition
    pub crouch_blend_duration: f32,
    /// Field of view in degrees, default and zoomed
    pub default_fov: f32,
    pub zoom_fov: f32,
    /// Lerp rate for the zoom FOV transition
    pub zoom_speed: f32,
    /// Head bob frequency/amplitude while walking and sprinting
    pub walk_bob_speed: f32,
    pub walk_bob_amount: f32,
    pub sprint_bob_speed: f32,
    pub sprint_bob_amount: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 10.0,
            crouch_speed: 2.5,
            jump_height: 2.0,
            base_gravity: -9.81,
            gravity_multiplier: 2.0,
            fall_multiplier: 2.5,
            ground_stick_velocity: -2.0,
            mouse_sensitivity: 100.0,
            stand_height: 1.8,
            crouch_height: 1.0,
            capsule_radius: 0.3,
            eye_height_standing: 0.6,
            eye_height_crouched: 0.1,
            crouch_blend_duration: 0.2,
            default_fov: 60.0,
            zoom_fov: 40.0,
            zoom_speed: 10.0,
            walk_bob_speed: 10.0,
            walk_bob_amount: 0.05,
            sprint_bob_speed: 14.0,
            sprint_bob_amount: 0.1,
        }
    }
}

impl PlayerConfig {
    /// Gravity after the global multiplier (negative = down).
    pub fn effective_gravity(&self) -> f32 {
        self.base_gravity * self.gravity_multiplier
    }

    /// Y coordinate of the capsule bottom relative to the body origin.
    /// Fixed regardless of crouch state so the feet never move.
    pub fn capsule_bottom(&self) -> f32 {
        -self.stand_height / 2.0
    }

    /// Build the collision capsule for a given total height, feet
    /// anchored at the standing capsule bottom.
    pub fn capsule_endpoints(&self, height: f32) -> (Vec3, Vec3) {
        let bottom = self.capsule_bottom();
        let a = Vec3::new(0.0, bottom + self.capsule_radius, 0.0);
        let b = Vec3::new(0.0, bottom + height - self.capsule_radius, 0.0);
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlayerConfig {
        PlayerConfig::default()
    }

    #[test]
    fn pitch_clamps_for_extreme_deltas() {
        let config = config();
        let mut state = LocomotionState::default();
        state.apply_look(Vec2::new(0.0, -100_000.0), &config, 0.016);
        assert_eq!(state.pitch, 90.0);
        state.apply_look(Vec2::new(0.0, 100_000.0), &config, 0.016);
        assert_eq!(state.pitch, -90.0);

        // Stays in range across a noisy sequence
        for i in 0..200 {
            let delta = if i % 2 == 0 { 5_000.0 } else { -7_000.0 };
            state.apply_look(Vec2::new(0.0, delta), &config, 0.016);
            assert!((-90.0..=90.0).contains(&state.pitch));
        }
    }

    #[test]
    fn landing_clamps_to_stick_velocity() {
        let config = config();
        let mut state = LocomotionState {
            velocity: Vec3::new(0.0, -12.0, 0.0),
            is_grounded: false,
            midair_crouch_boosted: true,
            ..default()
        };
        state.apply_grounding(true, &config);
        assert_eq!(state.velocity.y, -2.0);
        assert!(!state.midair_crouch_boosted);
    }

    #[test]
    fn grounding_preserves_upward_velocity() {
        // Probe can report contact on the tick a jump starts; the
        // impulse must survive
        let config = config();
        let mut state = LocomotionState::default();
        state.try_jump(&config);
        let jump_velocity = state.velocity.y;
        state.apply_grounding(true, &config);
        assert_eq!(state.velocity.y, jump_velocity);
    }

    #[test]
    fn jump_velocity_matches_closed_form() {
        let config = config();
        let mut state = LocomotionState::default();
        assert!(state.try_jump(&config));
        let expected = (config.jump_height * 2.0 * config.effective_gravity().abs()).sqrt();
        assert!((state.velocity.y - expected).abs() < 1e-6);
    }

    #[test]
    fn no_jump_while_airborne() {
        let config = config();
        let mut state = LocomotionState {
            is_grounded: false,
            velocity: Vec3::new(0.0, -3.0, 0.0),
            ..default()
        };
        assert!(!state.try_jump(&config));
        assert_eq!(state.velocity.y, -3.0);
    }

    #[test]
    fn falling_uses_heavier_gravity() {
        let config = config();
        let dt = 0.1;

        let mut rising = LocomotionState {
            velocity: Vec3::new(0.0, 5.0, 0.0),
            is_grounded: false,
            ..default()
        };
        rising.integrate_gravity(&config, dt);
        let rise_drop = 5.0 - rising.velocity.y;

        let mut falling = LocomotionState {
            velocity: Vec3::new(0.0, -5.0, 0.0),
            is_grounded: false,
            ..default()
        };
        falling.integrate_gravity(&config, dt);
        let fall_drop = -5.0 - falling.velocity.y;

        assert!((fall_drop / rise_drop - config.fall_multiplier).abs() < 1e-4);
    }

    #[test]
    fn crouch_outranks_sprint() {
        let state = LocomotionState::default();
        assert_eq!(state.resolve_mode(true, true), SpeedMode::Crouch);
        assert_eq!(state.resolve_mode(false, true), SpeedMode::Sprint);
        assert_eq!(state.resolve_mode(false, false), SpeedMode::Walk);
    }

    #[test]
    fn no_sprint_while_stuck_crouched() {
        // Key released under an overhang: still crouched, sprint denied
        let state = LocomotionState {
            crouching: true,
            ..default()
        };
        assert_eq!(state.resolve_mode(false, true), SpeedMode::Walk);
    }

    #[test]
    fn stand_retries_until_clearance_is_clear() {
        let mut state = LocomotionState::default();
        assert_eq!(
            state.resolve_crouch(true, true),
            Some(CrouchTransition::Entered)
        );
        assert!(state.crouching);

        // Key released under an obstruction: stays crouched tick after
        // tick, for as long as the probe reports blocked
        for _ in 0..50 {
            assert_eq!(state.resolve_crouch(false, false), None);
            assert!(state.crouching);
        }

        // The first clear probe completes the transition
        assert_eq!(
            state.resolve_crouch(false, true),
            Some(CrouchTransition::Stood)
        );
        assert!(!state.crouching);

        // Already standing: further clear ticks are no-ops
        assert_eq!(state.resolve_crouch(false, true), None);
    }

    #[test]
    fn held_key_keeps_crouch_without_retransition() {
        let mut state = LocomotionState::default();
        assert_eq!(
            state.resolve_crouch(true, true),
            Some(CrouchTransition::Entered)
        );
        // Holding the key re-enters nothing, clearance is irrelevant
        assert_eq!(state.resolve_crouch(true, true), None);
        assert_eq!(state.resolve_crouch(true, false), None);
        assert!(state.crouching);
    }

    #[test]
    fn midair_crouch_arms_boost_flag() {
        let mut state = LocomotionState {
            is_grounded: false,
            ..default()
        };
        state.resolve_crouch(true, true);
        assert!(state.midair_crouch_boosted);

        // Cleared again on the next landing
        state.velocity.y = -1.0;
        state.apply_grounding(true, &config());
        assert!(!state.midair_crouch_boosted);
    }

    #[test]
    fn capsule_feet_stay_anchored() {
        let config = config();
        let (stand_a, _) = config.capsule_endpoints(config.stand_height);
        let (crouch_a, crouch_b) = config.capsule_endpoints(config.crouch_height);
        assert_eq!(stand_a.y, crouch_a.y);
        let crouch_top = crouch_b.y + config.capsule_radius;
        let expected_top = config.capsule_bottom() + config.crouch_height;
        assert!((crouch_top - expected_top).abs() < 1e-6);
    }
}
