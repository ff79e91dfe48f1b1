// Signals for communication with consumers outside the core (animation).

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-entity scalar and flag outputs. The animation driver publishes
/// `speed`, `direction`, `locked_on`, and `rolling` here each tick; the
/// animation graph reads them and nothing else.
#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    scalars: FxHashMap<String, f32>,
    flags: FxHashSet<String>,
}

impl Signals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    pub fn get_scalar(&self, key: impl Into<String>) -> Option<f32> {
        self.scalars.get(&key.into()).copied()
    }

    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn clear_flag(&mut self, key: impl Into<String>) {
        self.flags.remove(&key.into());
    }

    pub fn has_flag(&self, key: impl Into<String>) -> bool {
        self.flags.contains(&key.into())
    }
}
