//! Lock-on candidate list and selection cursor.
//!
//! Candidates are non-owning [`Entity`] handles produced by the targeting
//! sweep. Referenced actors may be despawned at any time, so every consumer
//! revalidates a handle through the ECS before dereferencing it. The list is
//! rebuilt wholesale on each lock-on trigger and cleared on lock break.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Deduplicated, trace-ordered lock-on candidates with a selected cursor.
///
/// Invariant: `selected` is in `[0, len)` whenever the list is non-empty;
/// its value is meaningless (and never read) when the list is empty.
#[derive(Component, Debug, Clone, Default)]
pub struct LockOn {
    candidates: SmallVec<[Entity; 8]>,
    selected: usize,
}

impl LockOn {
    /// Replace the candidate list and select the first entry.
    pub fn engage(&mut self, candidates: SmallVec<[Entity; 8]>) {
        self.candidates = candidates;
        self.selected = 0;
    }

    /// Drop all candidates. Called on every lock break.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.selected = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Currently selected target, if any candidate exists.
    pub fn selected_target(&self) -> Option<Entity> {
        self.candidates.get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Advance the cursor, wrapping past the end. No-op on an empty list.
    pub fn cycle_right(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.candidates.len();
    }

    /// Step the cursor backward, wrapping below zero. No-op on an empty list.
    pub fn cycle_left(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let len = self.candidates.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Remove a candidate that turned out to be stale. Keeps the cursor in
    /// range; returns whether any candidates remain.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.candidates.retain(|e| *e != entity);
        if self.candidates.is_empty() {
            self.selected = 0;
            return false;
        }
        if self.selected >= self.candidates.len() {
            self.selected = 0;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn three() -> LockOn {
        let mut world = World::new();
        let mut lock = LockOn::default();
        let entities: Vec<Entity> = (0..3).map(|_| world.spawn_empty().id()).collect();
        lock.engage(SmallVec::from_vec(entities));
        lock
    }

    #[test]
    fn four_cycles_over_three_land_on_one() {
        let mut lock = three();
        for _ in 0..4 {
            lock.cycle_right();
        }
        assert_eq!(lock.selected_index(), 1);
    }

    #[test]
    fn cycle_left_wraps_below_zero() {
        let mut lock = three();
        lock.cycle_left();
        assert_eq!(lock.selected_index(), 2);
    }

    #[test]
    fn cycle_on_empty_is_noop() {
        let mut lock = LockOn::default();
        lock.cycle_right();
        lock.cycle_left();
        assert!(lock.selected_target().is_none());
    }

    #[test]
    fn remove_keeps_cursor_in_range() {
        let mut lock = three();
        lock.cycle_right();
        lock.cycle_right(); // cursor on last entry
        let last = lock.selected_target().unwrap();
        assert!(lock.remove(last));
        assert!(lock.selected_index() < lock.len());
    }

    #[test]
    fn removing_last_candidate_empties_list() {
        let mut world = World::new();
        let only = world.spawn_empty().id();
        let mut lock = LockOn::default();
        lock.engage(SmallVec::from_vec(vec![only]));
        assert!(!lock.remove(only));
        assert!(lock.is_empty());
    }
}
