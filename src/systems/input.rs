//! End-of-frame input maintenance.
//!
//! The embedding driver writes [`InputState`] before the schedule runs;
//! this system drops the one-frame press/release edges afterwards so a
//! held button does not re-fire edge-triggered actions next tick.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Clear press/release edges. Runs last in the schedule.
pub fn end_frame_input(mut input: ResMut<InputState>) {
    input.clear_edges();
}
