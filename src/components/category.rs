// World-object classification consumed by the targeting sweep and triggers.

use bevy_ecs::prelude::Component;

/// Capability category of a world actor. Replaces string tags: the sweep and
/// the presence triggers only ever care about these three kinds.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The player character. Presence triggers react to this.
    Player,
    /// Lock-on eligible actor.
    Enemy,
    /// Obstruction. A wall hit terminates the targeting sweep.
    Wall,
}
