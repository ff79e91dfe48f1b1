//! Elevator platform component.
//!
//! Four-state machine driven by a presence trigger and a one-shot move
//! timer. The previous-state field is what prevents a continuously-standing
//! player from re-triggering the same move: after settling, the machine
//! refuses to start again until a tick has seen the trigger empty (the
//! previous state stops being the just-finished move).

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::timer::OneShotTimer;

/// Where the platform is, or which way it is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorState {
    Down,
    Up,
    MovingUp,
    MovingDown,
}

/// A platform that rides between two anchor points when a player steps on.
#[derive(Component, Debug, Clone, Copy)]
pub struct Elevator {
    pub state: ElevatorState,
    pub previous_state: ElevatorState,
    /// Lower anchor.
    pub start: Vec3,
    /// Upper anchor.
    pub end: Vec3,
    /// Seconds for a full ride between anchors.
    pub duration: f32,
    pub move_timer: OneShotTimer,
}

impl Elevator {
    /// Anchors are derived from the spawn position: the platform starts at
    /// whichever anchor `starts_up` selects, with the other one `distance`
    /// straight above or below.
    pub fn new(spawn_pos: Vec3, distance: f32, duration: f32, starts_up: bool) -> Self {
        let (start, end, state) = if starts_up {
            (
                spawn_pos - Vec3::new(0.0, distance, 0.0),
                spawn_pos,
                ElevatorState::Up,
            )
        } else {
            (
                spawn_pos,
                spawn_pos + Vec3::new(0.0, distance, 0.0),
                ElevatorState::Down,
            )
        };
        Self {
            state,
            previous_state: state,
            start,
            end,
            duration,
            move_timer: OneShotTimer::new(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_start_position_flag() {
        let down = Elevator::new(Vec3::ZERO, 1000.0, 5.0, false);
        assert_eq!(down.state, ElevatorState::Down);
        assert_eq!(down.end.y, 1000.0);

        let up = Elevator::new(Vec3::new(0.0, 1000.0, 0.0), 1000.0, 5.0, true);
        assert_eq!(up.state, ElevatorState::Up);
        assert_eq!(up.start.y, 0.0);
        assert_eq!(up.end.y, 1000.0);
    }
}
