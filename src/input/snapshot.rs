//! Per-tick abstracted input state.
//!
//! Raw device state (keyboard, mouse motion, wheel) is collapsed into an
//! InputSnapshot resource once per tick, before any gameplay system runs.
//! Downstream systems only ever read the snapshot, which keeps the
//! locomotion and inventory logic independent of device APIs.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Key bindings for all player actions.
///
/// Defaults follow common first-person conventions: Shift to sprint,
/// Ctrl to crouch, Space to jump, V to zoom, E to interact, Q to drop,
/// number keys for direct slot selection.
#[derive(Resource)]
pub struct KeyBindings {
    pub sprint: KeyCode,
    pub crouch: KeyCode,
    pub jump: KeyCode,
    pub zoom: KeyCode,
    pub interact: KeyCode,
    pub drop: KeyCode,
    /// One key per inventory slot, in slot order.
    pub slots: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            sprint: KeyCode::ShiftLeft,
            crouch: KeyCode::ControlLeft,
            jump: KeyCode::Space,
            zoom: KeyCode::KeyV,
            interact: KeyCode::KeyE,
            drop: KeyCode::KeyQ,
            slots: vec![KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3],
        }
    }
}

/// Abstracted input state for one simulation tick.
///
/// Held flags are level-triggered; `*_pressed` flags are edge-triggered
/// (true only on the tick the key went down).
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Movement axes in [-1, 1]: x is right, y is forward.
    pub move_axes: Vec2,
    /// Accumulated mouse motion this tick, in device units.
    pub look_delta: Vec2,
    /// Accumulated wheel delta this tick (positive = forward).
    pub scroll: f32,
    pub sprint_held: bool,
    pub crouch_held: bool,
    pub jump_pressed: bool,
    pub zoom_pressed: bool,
    pub interact_pressed: bool,
    pub drop_pressed: bool,
    /// Direct slot selection edge, if a slot key went down this tick.
    pub select_slot: Option<usize>,
}

impl InputSnapshot {
    /// Collapse the wheel delta into a single selection step.
    ///
    /// Multiple detents within one tick still count as one step; the
    /// selection cursor moves at most one slot per tick.
    pub fn scroll_step(&self) -> i32 {
        if self.scroll > 0.0 {
            1
        } else if self.scroll < 0.0 {
            -1
        } else {
            0
        }
    }
}

/// Rebuild the input snapshot from raw device state.
///
/// Runs in PreUpdate so every gameplay system sees the same snapshot
/// for the whole tick.
pub fn gather_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let mut axes = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        axes.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axes.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axes.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        axes.x -= 1.0;
    }

    let mut look = Vec2::ZERO;
    for event in mouse_motion.read() {
        look += event.delta;
    }

    let mut scroll = 0.0;
    for event in mouse_wheel.read() {
        scroll += match event.unit {
            MouseScrollUnit::Line => event.y,
            // Trackpads report pixels; scale down so a small swipe is one step
            MouseScrollUnit::Pixel => event.y / 20.0,
        };
    }

    let select_slot = bindings
        .slots
        .iter()
        .position(|key| keyboard.just_pressed(*key));

    *snapshot = InputSnapshot {
        move_axes: axes,
        look_delta: look,
        scroll,
        sprint_held: keyboard.pressed(bindings.sprint),
        crouch_held: keyboard.pressed(bindings.crouch),
        jump_pressed: keyboard.just_pressed(bindings.jump),
        zoom_pressed: keyboard.just_pressed(bindings.zoom),
        interact_pressed: keyboard.just_pressed(bindings.interact),
        drop_pressed: keyboard.just_pressed(bindings.drop),
        select_slot,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_collapses_to_single_step() {
        let snapshot = InputSnapshot {
            scroll: 3.5,
            ..default()
        };
        assert_eq!(snapshot.scroll_step(), 1);

        let snapshot = InputSnapshot {
            scroll: -0.2,
            ..default()
        };
        assert_eq!(snapshot.scroll_step(), -1);

        assert_eq!(InputSnapshot::default().scroll_step(), 0);
    }
}
