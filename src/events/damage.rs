//! Damage-receipt entry point.
//!
//! Collaborator actors never touch [`Health`] directly: they trigger a
//! [`DamageEvent`] and the observer applies it. The observer honors the
//! roll invincibility window — damage received while `rolling` is dropped.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::character::CharacterState;
use crate::components::health::Health;

/// Request to damage `target` by `amount`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Applies triggered damage to the target's health. Silently drops the
/// event if the target has no health, is already despawned, or is inside
/// its roll invincibility window.
pub fn damage_observer(
    trigger: On<DamageEvent>,
    mut targets: Query<(&mut Health, Option<&CharacterState>)>,
) {
    let event = trigger.event();
    let Ok((mut health, character)) = targets.get_mut(event.target) else {
        return;
    };
    if character.is_some_and(|c| c.rolling) {
        debug!("damage ignored during invincibility: {:?}", event.target);
        return;
    }
    health.apply_damage(event.amount);
    debug!(
        "damage applied: {:?} -{} -> {}/{}",
        event.target, event.amount, health.current, health.max
    );
}
