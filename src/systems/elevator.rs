//! Elevator platform state machine.
//!
//! Resting states wait for a player inside the presence trigger; detection
//! starts the move timer and enters the corresponding moving state. While
//! moving, the platform position is the linear interpolation between the
//! anchors parameterized by elapsed-over-duration. When the timer fires the
//! platform settles into the opposite resting state.
//!
//! The previous-state guard is what stops a player who keeps standing on
//! the platform from bouncing it: after settling, `previous_state` holds
//! the just-finished move, and the resting state refuses to re-trigger
//! until one tick has seen the trigger empty.
use bevy_ecs::prelude::*;

use crate::components::category::Category;
use crate::components::collider::TriggerVolume;
use crate::components::elevator::{Elevator, ElevatorState};
use crate::components::position::Position;
use crate::resources::worldtime::WorldTime;

fn rider_inside(
    trigger: &TriggerVolume,
    platform_pos: glam::Vec3,
    riders: &Query<(&Position, &Category), Without<Elevator>>,
) -> bool {
    riders
        .iter()
        .any(|(p, category)| *category == Category::Player && trigger.contains(platform_pos, p.pos))
}

/// Advance every elevator platform one tick.
pub fn elevator_platform(
    time: Res<WorldTime>,
    mut platforms: Query<(&mut Elevator, &mut Position, &TriggerVolume)>,
    riders: Query<(&Position, &Category), Without<Elevator>>,
) {
    let dt = time.delta;
    for (mut elevator, mut position, trigger) in platforms.iter_mut() {
        match elevator.state {
            ElevatorState::Down => {
                if rider_inside(trigger, position.pos, &riders) {
                    // A player still aboard from the ride down must step
                    // off before the platform will move again.
                    if elevator.previous_state == ElevatorState::MovingDown {
                        continue;
                    }
                    elevator.move_timer.start();
                    elevator.state = ElevatorState::MovingUp;
                    elevator.previous_state = ElevatorState::Down;
                } else {
                    elevator.previous_state = ElevatorState::Down;
                }
            }
            ElevatorState::Up => {
                if rider_inside(trigger, position.pos, &riders) {
                    if elevator.previous_state == ElevatorState::MovingUp {
                        continue;
                    }
                    elevator.move_timer.start();
                    elevator.state = ElevatorState::MovingDown;
                    elevator.previous_state = ElevatorState::Up;
                } else {
                    elevator.previous_state = ElevatorState::Up;
                }
            }
            ElevatorState::MovingUp => {
                let fired = elevator.move_timer.tick(dt);
                if fired {
                    position.pos = elevator.end;
                    elevator.state = ElevatorState::Up;
                    elevator.previous_state = ElevatorState::MovingUp;
                } else {
                    let alpha = elevator.move_timer.elapsed() / elevator.duration;
                    position.pos = elevator.start.lerp(elevator.end, alpha);
                }
            }
            ElevatorState::MovingDown => {
                let fired = elevator.move_timer.tick(dt);
                if fired {
                    position.pos = elevator.start;
                    elevator.state = ElevatorState::Down;
                    elevator.previous_state = ElevatorState::MovingDown;
                } else {
                    let alpha = elevator.move_timer.elapsed() / elevator.duration;
                    position.pos = elevator.end.lerp(elevator.start, alpha);
                }
            }
        }
    }
}
