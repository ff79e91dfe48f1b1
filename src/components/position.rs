// World-space position (pivot) for an actor.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World position of an entity. Y is up.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }
}
