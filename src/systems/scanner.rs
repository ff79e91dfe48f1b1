//! Targeting sweep.
//!
//! A sphere is swept from the character's position forward along the
//! camera's aim vector out to the lock-on range. Hits are walked in trace
//! order; the first wall hit terminates the walk — a nearer obstruction is
//! never bypassed for a farther enemy. Enemy hits are collected with
//! de-duplication.
//!
//! The sweep is pure math over `(entity, position, category, radius)`
//! tuples so it can be exercised without a world. The lock-on system feeds
//! it from a query and runs it only on the lock-on toggle edge; the cheap
//! nearest-hit probe reuses the same walk every tick while locked.

use bevy_ecs::prelude::Entity;
use glam::Vec3;
use smallvec::SmallVec;

use crate::components::category::Category;

/// One actor intersected by the sweep sphere, at parameter `t` along the
/// aim direction (world units from the origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub entity: Entity,
    pub category: Category,
    pub t: f32,
}

/// Sweep a sphere of `sweep_radius` from `origin` along `dir` (unit length)
/// out to `range`. Returns all intersected bodies sorted by distance along
/// the trace. Player-category bodies are skipped so the character never
/// traces itself.
pub fn sweep<I>(origin: Vec3, dir: Vec3, range: f32, sweep_radius: f32, bodies: I) -> Vec<SweepHit>
where
    I: IntoIterator<Item = (Entity, Vec3, Category, f32)>,
{
    let mut hits = Vec::new();
    for (entity, center, category, body_radius) in bodies {
        if category == Category::Player {
            continue;
        }
        let to_center = center - origin;
        let t = to_center.dot(dir).clamp(0.0, range);
        let closest = origin + dir * t;
        let reach = sweep_radius + body_radius;
        if (center - closest).length_squared() <= reach * reach {
            hits.push(SweepHit {
                entity,
                category,
                t,
            });
        }
    }
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}

/// Walk sweep hits in trace order and build the lock-on candidate list:
/// the first wall aborts the walk, enemies are added insertion-unique.
pub fn scan_candidates(hits: &[SweepHit]) -> SmallVec<[Entity; 8]> {
    let mut candidates: SmallVec<[Entity; 8]> = SmallVec::new();
    for hit in hits {
        match hit.category {
            Category::Wall => break,
            Category::Enemy => {
                if !candidates.contains(&hit.entity) {
                    candidates.push(hit.entity);
                }
            }
            Category::Player => {}
        }
    }
    candidates
}

/// Whether the nearest traced actor along the aim is an obstruction.
pub fn nearest_is_wall(hits: &[SweepHit]) -> bool {
    hits.first().is_some_and(|h| h.category == Category::Wall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn spawn_ids(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn hits_come_back_in_trace_order() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 2);
        let bodies = vec![
            (ids[0], Vec3::new(0.0, 0.0, 800.0), Category::Enemy, 50.0),
            (ids[1], Vec3::new(0.0, 0.0, 200.0), Category::Enemy, 50.0),
        ];
        let hits = sweep(Vec3::ZERO, Vec3::Z, 1000.0, 300.0, bodies);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entity, ids[1]);
        assert!(hits[0].t < hits[1].t);
    }

    #[test]
    fn out_of_range_and_off_axis_bodies_miss() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 2);
        let bodies = vec![
            (ids[0], Vec3::new(0.0, 0.0, 2000.0), Category::Enemy, 50.0),
            (ids[1], Vec3::new(900.0, 0.0, 100.0), Category::Enemy, 50.0),
        ];
        let hits = sweep(Vec3::ZERO, Vec3::Z, 1000.0, 300.0, bodies);
        assert!(hits.is_empty());
    }

    #[test]
    fn first_wall_aborts_the_walk() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 3);
        let bodies = vec![
            (ids[0], Vec3::new(0.0, 0.0, 200.0), Category::Enemy, 50.0),
            (ids[1], Vec3::new(0.0, 0.0, 500.0), Category::Wall, 50.0),
            (ids[2], Vec3::new(0.0, 0.0, 800.0), Category::Enemy, 50.0),
        ];
        let hits = sweep(Vec3::ZERO, Vec3::Z, 1000.0, 300.0, bodies);
        let candidates = scan_candidates(&hits);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], ids[0]);
    }

    #[test]
    fn duplicate_hits_are_collapsed() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 1);
        let hits = vec![
            SweepHit {
                entity: ids[0],
                category: Category::Enemy,
                t: 100.0,
            },
            SweepHit {
                entity: ids[0],
                category: Category::Enemy,
                t: 100.0,
            },
        ];
        assert_eq!(scan_candidates(&hits).len(), 1);
    }

    #[test]
    fn nearest_wall_flags_obstruction() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 2);
        let bodies = vec![
            (ids[0], Vec3::new(0.0, 0.0, 300.0), Category::Wall, 50.0),
            (ids[1], Vec3::new(0.0, 0.0, 600.0), Category::Enemy, 50.0),
        ];
        let hits = sweep(Vec3::ZERO, Vec3::Z, 1000.0, 300.0, bodies);
        assert!(nearest_is_wall(&hits));
    }

    #[test]
    fn player_bodies_are_never_traced() {
        let mut world = World::new();
        let ids = spawn_ids(&mut world, 1);
        let bodies = vec![(ids[0], Vec3::new(0.0, 0.0, 10.0), Category::Player, 50.0)];
        assert!(sweep(Vec3::ZERO, Vec3::Z, 1000.0, 300.0, bodies).is_empty());
    }
}
