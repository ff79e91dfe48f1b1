// Dodge-roll timers. The state flags themselves live on CharacterState.

use bevy_ecs::prelude::Component;

use crate::components::timer::OneShotTimer;

/// Timer pair driving the roll state machine:
/// Idle -> Rolling (invincibility) -> Cooldown -> Idle.
///
/// The two windows never overlap: the invincibility timer firing is what
/// starts the cooldown timer.
#[derive(Component, Debug, Clone, Copy)]
pub struct DodgeRoll {
    pub invincibility: OneShotTimer,
    pub cooldown: OneShotTimer,
}

impl DodgeRoll {
    pub fn new(invincibility_time: f32, cooldown_time: f32) -> Self {
        Self {
            invincibility: OneShotTimer::new(invincibility_time),
            cooldown: OneShotTimer::new(cooldown_time),
        }
    }
}
