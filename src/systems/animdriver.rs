//! Animation signal publication.
//!
//! The animation graph is an external consumer; the only contract is a
//! handful of scalar outputs published into the character's
//! [`Signals`](crate::components::signals::Signals) each tick:
//!
//! - `speed` – horizontal speed in world units per second
//! - `direction` – signed degrees between the velocity heading and the
//!   body yaw (lateral-direction sign for strafe blending)
//! - `locked_on`, `rolling` – mode flags
use bevy_ecs::prelude::*;

use crate::components::body::KinematicBody;
use crate::components::character::CharacterState;
use crate::components::facing::{Facing, wrap_angle};
use crate::components::signals::Signals;

/// Publish the animation-facing accessors for every character.
pub fn publish_animation_signals(
    mut query: Query<(&mut Signals, &KinematicBody, &CharacterState, &Facing)>,
) {
    for (mut signals, body, state, facing) in query.iter_mut() {
        let horizontal = body.horizontal();
        let speed = horizontal.length();
        signals.set_scalar("speed", speed);

        let direction = if speed > 0.0 {
            let heading = horizontal.x.atan2(horizontal.z);
            wrap_angle(heading - facing.yaw).to_degrees()
        } else {
            0.0
        };
        signals.set_scalar("direction", direction);

        if state.locked_on {
            signals.set_flag("locked_on");
        } else {
            signals.clear_flag("locked_on");
        }
        if state.rolling {
            signals.set_flag("rolling");
        } else {
            signals.clear_flag("rolling");
        }
    }
}
