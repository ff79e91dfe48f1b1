//! Dodge-roll state machine.
//!
//! Idle -> Rolling -> Cooldown -> Idle, gated by two one-shot timers:
//!
//! - Idle -> Rolling: roll edge while not rolling, roll permitted, and
//!   grounded. Stationary starts are a backstep (flattened camera forward,
//!   negative impulse); moving starts are a directional roll (flattened
//!   velocity, forward impulse). The impulse is an instantaneous launch.
//! - Rolling -> Cooldown: the invincibility timer fires; `rolling` clears
//!   and the cooldown timer starts.
//! - Cooldown -> Idle: the cooldown timer fires; `can_roll` reopens.
//!
//! A roll attempt while airborne, already rolling, or on cooldown is a
//! silent no-op.
use bevy_ecs::prelude::*;

use crate::components::body::KinematicBody;
use crate::components::camerarig::CameraRig;
use crate::components::character::{CharacterState, MovementMode};
use crate::components::roll::DodgeRoll;
use crate::events::roll::{RollEnded, RollStarted};
use crate::resources::config::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Advance roll timers and handle roll starts for every character.
pub fn dodge_roll(
    mut commands: Commands,
    time: Res<WorldTime>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut query: Query<(
        Entity,
        &mut CharacterState,
        &mut DodgeRoll,
        &mut KinematicBody,
        &CameraRig,
    )>,
) {
    let dt = time.delta;
    for (entity, mut state, mut roll, mut body, rig) in query.iter_mut() {
        // Timer-driven transitions first, so a roll can start on the same
        // tick the cooldown ends.
        if roll.invincibility.tick(dt) {
            state.rolling = false;
            roll.cooldown.start();
            commands.trigger(RollEnded { character: entity });
        }
        if roll.cooldown.tick(dt) {
            state.can_roll = true;
        }

        if !input.roll.just_pressed {
            continue;
        }
        if state.rolling
            || !state.can_roll
            || !body.grounded
            || state.mode() != MovementMode::Default
        {
            // Silent no-op by contract.
            continue;
        }

        let backstep = body.horizontal_speed_sq() == 0.0;
        let launch = if backstep {
            // Backward dodge along the flattened camera forward.
            rig.forward_flat() * config.backstep_impulse
        } else {
            body.horizontal().normalize() * config.roll_impulse
        };
        body.launch(launch);

        state.rolling = true;
        state.can_roll = false;
        roll.invincibility.start();
        commands.trigger(RollStarted {
            character: entity,
            backstep,
        });
    }
}
