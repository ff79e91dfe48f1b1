//! Hazard damage volumes.
//!
//! A volume overlapping the player invokes the damage-receipt entry point
//! (a [`DamageEvent`](crate::events::damage::DamageEvent) picked up by the
//! applying observer) at most once per configured window, driven by a
//! one-shot timer per volume.
use bevy_ecs::prelude::*;

use crate::components::category::Category;
use crate::components::collider::TriggerVolume;
use crate::components::damagevolume::DamageVolume;
use crate::components::position::Position;
use crate::events::damage::DamageEvent;
use crate::resources::worldtime::WorldTime;

/// Tick hazard windows and fire damage at overlapping players.
pub fn damage_volumes(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut volumes: Query<(&mut DamageVolume, &Position, &TriggerVolume)>,
    players: Query<(Entity, &Position, &Category), Without<DamageVolume>>,
) {
    let dt = time.delta;
    for (mut hazard, hazard_pos, trigger) in volumes.iter_mut() {
        hazard.window.tick(dt);
        if hazard.window.is_active() {
            continue;
        }
        let hit = players.iter().find(|(_, p, category)| {
            **category == Category::Player && trigger.contains(hazard_pos.pos, p.pos)
        });
        if let Some((entity, _, _)) = hit {
            commands.trigger(DamageEvent {
                target: entity,
                amount: hazard.amount,
            });
            hazard.window.start();
        }
    }
}
