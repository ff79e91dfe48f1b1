//! Orientation blender.
//!
//! Rotates the character body toward its velocity heading or toward the
//! lock-on focus, depending on mode:
//!
//! - Free mode: when grounded and moving, the body yaw eases toward the
//!   velocity heading at the body turn rate.
//! - Locked on and not running: the yaw snap-tracks the camera control yaw
//!   every frame, keeping the body squared to the target.
//! - Locked on and running: velocity facing wins, so the sprint animation
//!   reads correctly.
//!
//! Only yaw is ever written; pitch and roll stay zero.
use bevy_ecs::prelude::*;

use crate::components::body::KinematicBody;
use crate::components::camerarig::CameraRig;
use crate::components::character::CharacterState;
use crate::components::facing::{Facing, blend_angle};
use crate::resources::config::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Blend each character's body yaw for this tick. Runs after movement so
/// the heading reflects freshly-applied velocity.
pub fn blend_orientation(
    mut query: Query<(&mut Facing, &KinematicBody, &CharacterState, &CameraRig)>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let dt = time.delta;
    for (mut facing, body, state, rig) in query.iter_mut() {
        if state.locked_on && !state.running {
            facing.yaw = rig.control_yaw;
            continue;
        }
        if body.grounded && body.horizontal_speed_sq() > 0.0 {
            let heading = body.velocity.x.atan2(body.velocity.z);
            facing.yaw = blend_angle(facing.yaw, heading, config.body_turn_rate, dt);
        }
    }
}
