//! Ladder traversal.
//!
//! The ladder watches for a character whose movement mode was switched to
//! `Ladder` by outside gameplay code. On entry overlap it zeroes the
//! character's velocity, snaps them onto the rail facing it, and disables
//! gravity. While attached, the move axis climbs the rail. Reaching either
//! end volume releases the character: normal ground movement is restored,
//! they are teleported to the landing point, and the roll gate re-opens.
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::body::KinematicBody;
use crate::components::character::{CharacterState, MovementMode};
use crate::components::facing::Facing;
use crate::components::ladder::Ladder;
use crate::components::position::Position;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

type ClimberQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Position,
        &'static mut KinematicBody,
        &'static mut CharacterState,
        &'static mut Facing,
    ),
    Without<Ladder>,
>;

/// Tick every ladder: acquire a climbing character, drive the climb, and
/// release at either end.
pub fn ladder_traversal(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut ladders: Query<(&mut Ladder, &Position), Without<CharacterState>>,
    mut climbers: ClimberQuery,
) {
    let dt = time.delta;
    for (mut ladder, ladder_position) in ladders.iter_mut() {
        let base = ladder_position.pos;
        let rail_center = base + Vec3::new(0.0, ladder.height * 0.5, 0.0);

        if let Some(rider) = ladder.rider {
            let Ok((_, mut position, mut body, mut state, _)) = climbers.get_mut(rider) else {
                // Rider despawned out from under us.
                ladder.rider = None;
                continue;
            };
            if state.mode() != MovementMode::Ladder {
                ladder.rider = None;
                continue;
            }

            // Climb along the rail.
            position.pos.y += input.move_axis * ladder.climb_speed * dt;

            let at = position.pos;
            if ladder.end_bottom.contains(base, at) {
                release(&mut position, &mut body, &mut state, base);
                body.grounded = true;
                ladder.rider = None;
            } else if ladder.end_top.contains(base, at) {
                let landing = base + Vec3::new(0.0, ladder.height, 0.0);
                release(&mut position, &mut body, &mut state, landing);
                body.ground_y = landing.y;
                body.grounded = true;
                ladder.rider = None;
            }
            continue;
        }

        // No rider yet: look for a character in Ladder mode inside either
        // entry volume.
        for (entity, mut position, mut body, state, mut facing) in climbers.iter_mut() {
            if state.mode() != MovementMode::Ladder {
                continue;
            }
            let at = position.pos;
            let snap = if ladder.entry_bottom.contains(base, at) {
                base + Vec3::new(0.0, ladder.attach_offset, 0.0)
            } else if ladder.entry_top.contains(base, at) {
                base + Vec3::new(0.0, ladder.height - ladder.attach_offset, 0.0)
            } else {
                continue;
            };

            body.velocity = Vec3::ZERO;
            body.gravity = false;
            position.pos = snap;
            // Face the rail; only yaw is kept.
            let to_rail = rail_center - position.pos;
            facing.yaw = to_rail.x.atan2(to_rail.z);
            ladder.rider = Some(entity);
            break;
        }
    }
}

fn release(
    position: &mut Position,
    body: &mut KinematicBody,
    state: &mut CharacterState,
    landing: Vec3,
) {
    state.set_mode(MovementMode::Default);
    state.set_can_roll(true);
    body.velocity = Vec3::ZERO;
    body.gravity = true;
    position.pos = landing;
}
