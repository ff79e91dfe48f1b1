//! Lock-on camera rig.
//!
//! Two states, `Free` and `Locked`, expressed through the character's
//! `locked_on` flag plus the candidate list:
//!
//! - Free -> Locked: on the toggle edge, a targeting sweep rebuilds the
//!   candidate list; with at least one candidate the first is selected and
//!   the boom snaps to the engaged side preset.
//! - Locked -> Free: explicit toggle-off, target beyond range, a wall as
//!   the nearest traced actor, or a destroyed target. All four clear the
//!   candidate list and reset the boom to the neutral anchor.
//!
//! While locked, the control rotation interpolates toward the target focus
//! direction at the camera rotation rate (slower than the body turn rate,
//! which is what produces the camera-lag feel), and the boom offset eases
//! toward the preferred side preset. The side preference follows the sign
//! of the side-look axis and persists across lock-on sessions.
//!
//! The costly candidate rebuild runs only on the toggle edge; the per-tick
//! work while locked is the cheap nearest-hit probe plus interpolation.

use bevy_ecs::prelude::*;

use crate::components::camerarig::CameraRig;
use crate::components::category::Category;
use crate::components::character::CharacterState;
use crate::components::collider::SphereBody;
use crate::components::facing::{blend_angle, blend_factor};
use crate::components::lockon::LockOn;
use crate::components::position::Position;
use crate::events::lockon::{LockBreakReason, LockOnBroken, LockOnEngaged};
use crate::resources::config::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::scanner::{nearest_is_wall, scan_candidates, sweep};

fn break_lock(rig: &mut CameraRig, state: &mut CharacterState, lock: &mut LockOn, config: &GameConfig) {
    state.locked_on = false;
    lock.clear();
    rig.boom_offset = config.boom_neutral_vec();
}

fn side_preset(rig: &CameraRig, config: &GameConfig) -> glam::Vec3 {
    if rig.prefer_right {
        config.boom_right_vec()
    } else {
        config.boom_left_vec()
    }
}

/// Drive lock-on transitions, target cycling, and the locked-mode camera
/// interpolation for every character.
pub fn lockon_camera(
    mut commands: Commands,
    time: Res<WorldTime>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut players: Query<(
        Entity,
        &Position,
        &mut CameraRig,
        &mut CharacterState,
        &mut LockOn,
    )>,
    bodies: Query<(Entity, &Position, &Category, &SphereBody)>,
) {
    let dt = time.delta;
    for (entity, position, mut rig, mut state, mut lock) in players.iter_mut() {
        // Side preference follows the side-look axis sign while locked and
        // survives lock breaks.
        if state.locked_on && input.look_right != 0.0 {
            rig.prefer_right = input.look_right > 0.0;
        }

        if input.lock_on.just_pressed {
            if state.locked_on {
                break_lock(&mut rig, &mut state, &mut lock, &config);
                commands.trigger(LockOnBroken {
                    character: entity,
                    reason: LockBreakReason::Toggled,
                });
            } else {
                let hits = sweep(
                    position.pos,
                    rig.aim_dir(),
                    config.lock_on_range,
                    config.sweep_radius,
                    bodies
                        .iter()
                        .map(|(e, p, category, body)| (e, p.pos, *category, body.radius)),
                );
                let candidates = scan_candidates(&hits);
                if let Some(first) = candidates.first().copied() {
                    lock.engage(candidates);
                    state.locked_on = true;
                    rig.boom_offset = side_preset(&rig, &config);
                    commands.trigger(LockOnEngaged {
                        character: entity,
                        target: first,
                    });
                }
            }
        }

        if !state.locked_on {
            continue;
        }

        if input.cycle_right.just_pressed {
            lock.cycle_right();
        }
        if input.cycle_left.just_pressed {
            lock.cycle_left();
        }

        // Candidate handles are weak: the referenced actor may have been
        // destroyed since the scan. A stale selection breaks the lock.
        let target_pos = lock
            .selected_target()
            .and_then(|target| bodies.get(target).ok().map(|(_, p, _, _)| p.pos));
        let Some(target_pos) = target_pos else {
            break_lock(&mut rig, &mut state, &mut lock, &config);
            commands.trigger(LockOnBroken {
                character: entity,
                reason: LockBreakReason::TargetLost,
            });
            continue;
        };

        let to_target = target_pos - position.pos;
        if to_target.length() > config.lock_on_range {
            break_lock(&mut rig, &mut state, &mut lock, &config);
            commands.trigger(LockOnBroken {
                character: entity,
                reason: LockBreakReason::OutOfRange,
            });
            continue;
        }

        let probe = sweep(
            position.pos,
            rig.aim_dir(),
            config.lock_on_range,
            config.sweep_radius,
            bodies
                .iter()
                .map(|(e, p, category, body)| (e, p.pos, *category, body.radius)),
        );
        if nearest_is_wall(&probe) {
            break_lock(&mut rig, &mut state, &mut lock, &config);
            commands.trigger(LockOnBroken {
                character: entity,
                reason: LockBreakReason::Obstructed,
            });
            continue;
        }

        // Track the focus point: control rotation lags toward it, boom
        // eases toward the preferred side.
        let target_yaw = to_target.x.atan2(to_target.z);
        let horizontal = (to_target.x * to_target.x + to_target.z * to_target.z).sqrt();
        let target_pitch = to_target.y.atan2(horizontal);

        rig.control_yaw = blend_angle(rig.control_yaw, target_yaw, config.camera_rotation_rate, dt);
        rig.control_pitch +=
            (target_pitch - rig.control_pitch) * blend_factor(config.camera_rotation_rate, dt);

        let preset = side_preset(&rig, &config);
        let factor = blend_factor(config.boom_rate, dt);
        rig.boom_offset = rig.boom_offset.lerp(preset, factor);
    }
}
