// Damage trigger: hurts the overlapping player, at most once per window.

use bevy_ecs::prelude::Component;

use crate::components::timer::OneShotTimer;

/// Hazard volume that invokes the character's damage-receipt entry point.
/// The window timer gates repeat hits while the player stands inside.
#[derive(Component, Debug, Clone, Copy)]
pub struct DamageVolume {
    pub amount: f32,
    pub window: OneShotTimer,
}

impl DamageVolume {
    pub fn new(amount: f32, window_seconds: f32) -> Self {
        Self {
            amount,
            window: OneShotTimer::new(window_seconds),
        }
    }
}
