//! Free-look camera control.
//!
//! While not locked on, the look axes turn the control rotation directly.
//! Pitch is clamped; yaw wraps. The lock-on system takes over the control
//! rotation entirely while a target is tracked.
use bevy_ecs::prelude::*;

use crate::components::camerarig::CameraRig;
use crate::components::character::CharacterState;
use crate::components::facing::wrap_angle;
use crate::resources::config::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Apply the look axes to the control rotation when in free mode.
pub fn free_look(
    mut query: Query<(&mut CameraRig, &CharacterState)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let dt = time.delta;
    for (mut rig, state) in query.iter_mut() {
        if state.locked_on {
            continue;
        }
        rig.control_yaw = wrap_angle(rig.control_yaw + input.look_right * config.look_rate * dt);
        rig.control_pitch = (rig.control_pitch + input.look_up * config.look_rate * dt)
            .clamp(-config.pitch_limit, config.pitch_limit);
    }
}
