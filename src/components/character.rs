//! Player character state component.
//!
//! Holds the per-frame input intents and the gameplay flags that the
//! character's own systems mutate in fixed per-tick order. Collaborator
//! actors (ladder, damage triggers) only touch this through the public
//! accessors.

use bevy_ecs::prelude::Component;

/// Movement mode gate used by the ladder collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    /// Normal ground locomotion.
    #[default]
    Default,
    /// Climbing a ladder; ground movement and rolling are suppressed.
    Ladder,
}

/// Central character flags and per-frame intents.
///
/// `move_axis` and `strafe_axis` are edge-triggered per frame: they are
/// written from the input surface at the top of the tick and cleared at the
/// end of it, never latched across frames.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterState {
    /// Forward/back intent in `[-1, 1]` for this frame.
    pub move_axis: f32,
    /// Left/right intent in `[-1, 1]` for this frame.
    pub strafe_axis: f32,
    /// Sprint speed scaling is in effect.
    pub running: bool,
    /// Camera is tracking a lock-on target.
    pub locked_on: bool,
    /// A dodge roll is in progress (invincibility window).
    pub rolling: bool,
    /// The roll gate is open (not on cooldown, not revoked by a ladder).
    pub can_roll: bool,
    mode: MovementMode,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterState {
    pub fn new() -> Self {
        Self {
            move_axis: 0.0,
            strafe_axis: 0.0,
            running: false,
            locked_on: false,
            rolling: false,
            can_roll: true,
            mode: MovementMode::Default,
        }
    }

    /// Current movement mode. Queried by the ladder collaborator.
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    /// Switch movement mode. Set by outside gameplay code when the player
    /// grabs a ladder; reset by the ladder itself at either end.
    pub fn set_mode(&mut self, mode: MovementMode) {
        self.mode = mode;
    }

    /// Re-open (or revoke) the roll gate. Used by the ladder collaborator
    /// after climbing.
    pub fn set_can_roll(&mut self, can_roll: bool) {
        self.can_roll = can_roll;
    }

    pub fn is_locked_on(&self) -> bool {
        self.locked_on
    }

    /// Clear the per-frame axis accumulators. Runs at the end of every tick.
    pub fn clear_intents(&mut self) {
        self.move_axis = 0.0;
        self.strafe_axis = 0.0;
    }
}
