//! Ladder traversal gate.
//!
//! The ladder never drives climbing by itself; it watches for a character
//! whose movement mode was set to `Ladder` by outside gameplay code, snaps
//! them onto the rail, and releases them back to normal ground movement
//! when they reach either end, re-opening the roll gate.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

use crate::components::collider::TriggerVolume;

/// Ladder actor with entry volumes at both ends and smaller end volumes
/// that detect arrival. All volumes are offsets from the ladder position,
/// which sits at the bottom of the rail.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ladder {
    /// Character currently attached, if any.
    pub rider: Option<Entity>,
    /// Rail height from bottom to top.
    pub height: f32,
    /// Entry volume at the base.
    pub entry_bottom: TriggerVolume,
    /// Entry volume at the top landing.
    pub entry_top: TriggerVolume,
    /// Arrival volume just past the base.
    pub end_bottom: TriggerVolume,
    /// Arrival volume just past the top.
    pub end_top: TriggerVolume,
    /// Vertical snap applied when attaching, so the character hangs on the
    /// rail rather than standing inside it.
    pub attach_offset: f32,
    /// Units per second while climbing.
    pub climb_speed: f32,
}

impl Ladder {
    pub fn new(height: f32) -> Self {
        let entry = TriggerVolume::new(Vec3::new(120.0, 120.0, 120.0));
        let end = TriggerVolume::new(Vec3::new(80.0, 60.0, 80.0));
        Self {
            rider: None,
            height,
            entry_bottom: entry,
            entry_top: entry.with_offset(Vec3::new(0.0, height, 0.0)),
            end_bottom: end.with_offset(Vec3::new(0.0, -40.0, 0.0)),
            end_top: end.with_offset(Vec3::new(0.0, height + 40.0, 0.0)),
            attach_offset: 130.0,
            climb_speed: 150.0,
        }
    }
}
