//! Kinematic body component.
//!
//! Stores velocity and the grounded state for an actor. Updated by the
//! movement systems and consumed by orientation blending, the dodge-roll
//! state machine, and the animation driver. There is no physics solver;
//! vertical motion is simple gravity against a known ground height.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Velocity and ground contact for a moving actor.
#[derive(Component, Debug, Clone, Copy)]
pub struct KinematicBody {
    /// Current velocity in world units per second.
    pub velocity: Vec3,
    /// Whether the body is in contact with the ground this tick.
    pub grounded: bool,
    /// Height of the ground under the body. Refreshed externally when the
    /// actor moves between floors (e.g. riding the elevator).
    pub ground_y: f32,
    /// When false, the integrator skips gravity. Cleared while the actor
    /// hangs on a ladder.
    pub gravity: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new()
    }
}

impl KinematicBody {
    pub fn new() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: true,
            ground_y: 0.0,
            gravity: true,
        }
    }

    /// Velocity projected onto the ground plane.
    pub fn horizontal(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Squared horizontal speed. Cheap stationary check.
    pub fn horizontal_speed_sq(&self) -> f32 {
        self.horizontal().length_squared()
    }

    /// Instantaneous launch: replaces the current velocity outright.
    pub fn launch(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}
