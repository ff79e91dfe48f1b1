//! Per-frame input intent resource.
//!
//! The crate does not own any input device; the embedding driver writes
//! this resource once per frame from whatever backend it uses. Axes hold
//! the latest stick/key-derived values in `[-1, 1]`; buttons expose both
//! level (`active`) and edge (`just_pressed`/`just_released`) state. Edges
//! are cleared at the end of every tick by
//! [`end_frame_input`](crate::systems::input::end_frame_input).

use bevy_ecs::prelude::*;

/// Boolean button state with press/release edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Held down this frame.
    pub active: bool,
    /// Went down this frame.
    pub just_pressed: bool,
    /// Went up this frame.
    pub just_released: bool,
}

impl ButtonState {
    /// Record a press. Sets the edge only on the transition.
    pub fn press(&mut self) {
        self.just_pressed = !self.active;
        self.active = true;
    }

    /// Record a release. Sets the edge only on the transition.
    pub fn release(&mut self) {
        self.just_released = self.active;
        self.active = false;
    }

    /// Drop the one-frame edges, keeping the held level.
    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame input intents relevant to the core.
///
/// Fields are grouped by purpose: locomotion axes, look axes, and the
/// discrete action buttons.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Forward/back intent in `[-1, 1]`.
    pub move_axis: f32,
    /// Left/right strafe intent in `[-1, 1]`.
    pub strafe_axis: f32,
    /// Look pitch rate in `[-1, 1]`, positive up.
    pub look_up: f32,
    /// Look yaw rate in `[-1, 1]`, positive right. While locked on, its
    /// sign selects the preferred camera side instead.
    pub look_right: f32,

    pub lock_on: ButtonState,
    pub cycle_left: ButtonState,
    pub cycle_right: ButtonState,
    pub roll: ButtonState,
    pub sprint: ButtonState,
}

impl InputState {
    /// Clamp the analog axes into their contract range.
    pub fn set_axes(&mut self, move_axis: f32, strafe_axis: f32) {
        self.move_axis = move_axis.clamp(-1.0, 1.0);
        self.strafe_axis = strafe_axis.clamp(-1.0, 1.0);
    }

    pub fn set_look(&mut self, look_up: f32, look_right: f32) {
        self.look_up = look_up.clamp(-1.0, 1.0);
        self.look_right = look_right.clamp(-1.0, 1.0);
    }

    /// Clear all one-frame edges. Called at the end of every tick.
    pub fn clear_edges(&mut self) {
        self.lock_on.clear_edges();
        self.cycle_left.clear_edges();
        self.cycle_right.clear_edges();
        self.roll.clear_edges();
        self.sprint.clear_edges();
    }
}
