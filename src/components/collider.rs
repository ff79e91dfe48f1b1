//! Collision proxies: swept-sphere bodies and axis-aligned trigger volumes.
//!
//! There is no physics solver. The targeting sweep tests a moving sphere
//! against [`SphereBody`] proxies, and collaborator actors (elevator,
//! ladder, damage trigger) detect presence with [`TriggerVolume`] boxes.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Bounding sphere used as the hit proxy for the targeting sweep.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SphereBody {
    pub radius: f32,
}

impl SphereBody {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Axis-aligned box volume attached to an actor, offset from its position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TriggerVolume {
    pub half_extents: Vec3,
    pub offset: Vec3,
}

impl TriggerVolume {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents,
            offset: Vec3::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// World-space center for an owner at `owner_pos`.
    pub fn center(&self, owner_pos: Vec3) -> Vec3 {
        owner_pos + self.offset
    }

    /// Point containment in world space.
    pub fn contains(&self, owner_pos: Vec3, point: Vec3) -> bool {
        let d = (point - self.center(owner_pos)).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}
