//! Lock-on transition events.
//!
//! The lock-on system triggers [`LockOnEngaged`] when a scan acquires a
//! target and [`LockOnBroken`] whenever the lock drops, carrying the reason.
//! Observers can react in a decoupled manner (UI reticle, audio cue); the
//! core itself only logs them.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Why a lock was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockBreakReason {
    /// Explicit toggle-off input.
    Toggled,
    /// Target drifted beyond the lock-on range.
    OutOfRange,
    /// A wall became the nearest hit along the aim direction.
    Obstructed,
    /// The target actor was destroyed.
    TargetLost,
}

/// A scan succeeded and the camera is now tracking `target`.
#[derive(Event, Debug, Clone, Copy)]
pub struct LockOnEngaged {
    pub character: Entity,
    pub target: Entity,
}

/// The lock dropped; the candidate list was cleared and the boom reset.
#[derive(Event, Debug, Clone, Copy)]
pub struct LockOnBroken {
    pub character: Entity,
    pub reason: LockBreakReason,
}

/// Log observer for lock acquisition.
pub fn observe_lockon_engaged(trigger: On<LockOnEngaged>) {
    let event = trigger.event();
    debug!(
        "lock-on engaged: character {:?} -> target {:?}",
        event.character, event.target
    );
}

/// Log observer for lock breaks.
pub fn observe_lockon_broken(trigger: On<LockOnBroken>) {
    let event = trigger.event();
    debug!(
        "lock-on broken: character {:?} ({:?})",
        event.character, event.reason
    );
}
