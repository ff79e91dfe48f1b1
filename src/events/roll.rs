// Dodge-roll lifecycle events.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// A roll started this tick. `backstep` distinguishes the stationary
/// backward dodge from a directional roll.
#[derive(Event, Debug, Clone, Copy)]
pub struct RollStarted {
    pub character: Entity,
    pub backstep: bool,
}

/// The invincibility window elapsed and the cooldown began.
#[derive(Event, Debug, Clone, Copy)]
pub struct RollEnded {
    pub character: Entity,
}

pub fn observe_roll_started(trigger: On<RollStarted>) {
    let event = trigger.event();
    debug!(
        "roll started: character {:?} backstep={}",
        event.character, event.backstep
    );
}

pub fn observe_roll_ended(trigger: On<RollEnded>) {
    debug!("roll ended: character {:?}", trigger.event().character);
}
