//! Movement controller.
//!
//! Turns the per-frame move/strafe intents into a world-space velocity
//! using the camera-yaw basis, then integrates positions. The combined
//! intent vector is normalized when non-zero so diagonal movement is never
//! faster than axis-aligned movement, then scaled by the run/walk factor.
//!
//! Systems, in schedule order:
//! - [`collect_intents`] – copy the input axes into the character state
//! - [`apply_movement`] – intents + camera basis -> horizontal velocity
//! - [`integrate`] – gravity, position update, grounded refresh
//! - [`clear_frame_intents`] – reset the axis accumulators (end of tick)

use bevy_ecs::prelude::*;

use crate::components::body::KinematicBody;
use crate::components::camerarig::CameraRig;
use crate::components::character::{CharacterState, MovementMode};
use crate::components::position::Position;
use crate::resources::config::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Copy the frame's input axes into each character's intent accumulators.
/// Suppressed entirely while climbing a ladder.
pub fn collect_intents(mut query: Query<&mut CharacterState>, input: Res<InputState>) {
    for mut state in query.iter_mut() {
        if state.mode() != MovementMode::Default {
            continue;
        }
        state.move_axis = input.move_axis.clamp(-1.0, 1.0);
        state.strafe_axis = input.strafe_axis.clamp(-1.0, 1.0);
    }
}

/// Apply the accumulated intents as this frame's horizontal velocity.
///
/// Skipped while rolling: the roll launch owns the velocity until the
/// invincibility window ends. The sprint hold only takes effect while the
/// character is actually moving; a stationary sprint press silently does
/// nothing.
pub fn apply_movement(
    mut query: Query<(&mut KinematicBody, &mut CharacterState, &CameraRig)>,
    input: Res<InputState>,
    config: Res<GameConfig>,
) {
    for (mut body, mut state, rig) in query.iter_mut() {
        if state.mode() != MovementMode::Default || state.rolling {
            continue;
        }

        let wish = rig.forward_flat() * state.move_axis + rig.right_flat() * state.strafe_axis;
        let moving = wish.length_squared() > 0.0;

        state.running = input.sprint.active && moving;

        if moving {
            let scale = if state.running {
                1.0
            } else {
                config.walk_factor
            };
            let dir = wish.normalize();
            let speed = config.run_speed * scale;
            body.velocity.x = dir.x * speed;
            body.velocity.z = dir.z * speed;
        } else {
            body.velocity.x = 0.0;
            body.velocity.z = 0.0;
        }
    }
}

/// Integrate velocity into position and refresh the grounded flag.
///
/// Vertical motion is plain gravity against the known ground height,
/// clamped to the terminal fall speed. Runs after [`apply_movement`] so
/// facing decisions later in the tick see this tick's fresh velocity.
pub fn integrate(
    mut query: Query<(&mut Position, &mut KinematicBody)>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let dt = time.delta;
    for (mut position, mut body) in query.iter_mut() {
        if body.gravity && !body.grounded {
            body.velocity.y = (body.velocity.y - config.gravity * dt).max(-config.max_fall_speed);
        }

        let delta = body.velocity * dt;
        position.pos += delta;

        if body.gravity {
            if position.pos.y <= body.ground_y {
                position.pos.y = body.ground_y;
                body.velocity.y = 0.0;
                body.grounded = true;
            } else {
                body.grounded = false;
            }
        }
    }
}

/// Reset the per-frame axis accumulators. The controller is edge-triggered
/// per frame, never latched.
pub fn clear_frame_intents(mut query: Query<&mut CharacterState>) {
    for mut state in query.iter_mut() {
        state.clear_intents();
    }
}
