//! Scene setup.
//!
//! Spawns the world actors the simulation runs against: the player
//! character with its full component bundle, enemies, walls, and the
//! platform collaborators. A scene can come from a JSON file or from the
//! built-in demo arena.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::body::KinematicBody;
use crate::components::camerarig::CameraRig;
use crate::components::category::Category;
use crate::components::character::CharacterState;
use crate::components::collider::{SphereBody, TriggerVolume};
use crate::components::damagevolume::DamageVolume;
use crate::components::elevator::Elevator;
use crate::components::facing::Facing;
use crate::components::health::Health;
use crate::components::ladder::Ladder;
use crate::components::lockon::LockOn;
use crate::components::position::Position;
use crate::components::roll::DodgeRoll;
use crate::components::signals::Signals;
use crate::resources::config::GameConfig;

const PLAYER_BODY_RADIUS: f32 = 50.0;
const ENEMY_BODY_RADIUS: f32 = 60.0;
const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Declarative scene loaded from JSON (or built in code for the demo).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SceneDef {
    pub player: [f32; 3],
    #[serde(default)]
    pub enemies: Vec<[f32; 3]>,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    #[serde(default)]
    pub elevators: Vec<[f32; 3]>,
    #[serde(default)]
    pub ladders: Vec<LadderDef>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WallDef {
    pub pos: [f32; 3],
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LadderDef {
    pub pos: [f32; 3],
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HazardDef {
    pub pos: [f32; 3],
    pub half_extents: [f32; 3],
}

/// Load a scene definition from a JSON file.
pub fn load_scene(path: &std::path::Path) -> Result<SceneDef, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}

/// Built-in demo arena: a ring of enemies, a wall, one of each
/// collaborator. Enemy placement is jittered for variety.
pub fn demo_scene() -> SceneDef {
    let mut enemies = Vec::new();
    for i in 0..4 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2 + 0.3;
        let distance = 500.0 + fastrand::f32() * 300.0;
        enemies.push([angle.sin() * distance, 0.0, angle.cos() * distance]);
    }
    SceneDef {
        player: [0.0, 0.0, 0.0],
        enemies,
        walls: vec![WallDef {
            pos: [0.0, 0.0, -700.0],
            radius: 150.0,
        }],
        elevators: vec![[1500.0, 0.0, 0.0]],
        ladders: vec![LadderDef {
            pos: [-1500.0, 0.0, 0.0],
            height: 500.0,
        }],
        hazards: vec![HazardDef {
            pos: [0.0, 0.0, 1200.0],
            half_extents: [200.0, 200.0, 200.0],
        }],
    }
}

/// Spawn the player character with its full component bundle.
pub fn spawn_player(world: &mut World, config: &GameConfig, pos: Vec3) -> Entity {
    world
        .spawn((
            Position::from_vec(pos),
            KinematicBody::new(),
            CharacterState::new(),
            Facing::default(),
            CameraRig::default(),
            LockOn::default(),
            DodgeRoll::new(config.invincibility_time, config.roll_cooldown),
            Health::new(PLAYER_MAX_HEALTH),
            Signals::default(),
            Category::Player,
            SphereBody::new(PLAYER_BODY_RADIUS),
        ))
        .id()
}

/// Spawn a lock-on eligible enemy.
pub fn spawn_enemy(world: &mut World, pos: Vec3) -> Entity {
    world
        .spawn((
            Position::from_vec(pos),
            Category::Enemy,
            SphereBody::new(ENEMY_BODY_RADIUS),
        ))
        .id()
}

/// Spawn a wall obstruction.
pub fn spawn_wall(world: &mut World, pos: Vec3, radius: f32) -> Entity {
    world
        .spawn((Position::from_vec(pos), Category::Wall, SphereBody::new(radius)))
        .id()
}

/// Spawn an elevator platform with its presence trigger.
pub fn spawn_elevator(world: &mut World, config: &GameConfig, pos: Vec3) -> Entity {
    world
        .spawn((
            Position::from_vec(pos),
            Elevator::new(
                pos,
                config.elevator_move_distance,
                config.elevator_move_duration,
                config.elevator_starts_up,
            ),
            TriggerVolume::new(Vec3::new(200.0, 150.0, 200.0)).with_offset(Vec3::new(0.0, 100.0, 0.0)),
        ))
        .id()
}

/// Spawn a ladder actor.
pub fn spawn_ladder(world: &mut World, pos: Vec3, height: f32) -> Entity {
    world.spawn((Position::from_vec(pos), Ladder::new(height))).id()
}

/// Spawn a hazard volume.
pub fn spawn_hazard(world: &mut World, config: &GameConfig, pos: Vec3, half_extents: Vec3) -> Entity {
    world
        .spawn((
            Position::from_vec(pos),
            DamageVolume::new(config.damage_amount, config.damage_window),
            TriggerVolume::new(half_extents),
        ))
        .id()
}

/// Instantiate every actor a scene definition describes. Returns the
/// player entity.
pub fn spawn_scene(world: &mut World, config: &GameConfig, scene: &SceneDef) -> Entity {
    let player = spawn_player(world, config, Vec3::from_array(scene.player));
    for pos in &scene.enemies {
        spawn_enemy(world, Vec3::from_array(*pos));
    }
    for wall in &scene.walls {
        spawn_wall(world, Vec3::from_array(wall.pos), wall.radius);
    }
    for pos in &scene.elevators {
        spawn_elevator(world, config, Vec3::from_array(*pos));
    }
    for ladder in &scene.ladders {
        spawn_ladder(world, Vec3::from_array(ladder.pos), ladder.height);
    }
    for hazard in &scene.hazards {
        spawn_hazard(
            world,
            config,
            Vec3::from_array(hazard.pos),
            Vec3::from_array(hazard.half_extents),
        );
    }
    info!(
        "scene spawned: {} enemies, {} walls, {} elevators, {} ladders, {} hazards",
        scene.enemies.len(),
        scene.walls.len(),
        scene.elevators.len(),
        scene.ladders.len(),
        scene.hazards.len()
    );
    player
}

/// Load the scene file if given, falling back to the demo arena on any
/// problem.
pub fn scene_or_demo(path: Option<&std::path::Path>) -> SceneDef {
    match path {
        Some(p) => match load_scene(p) {
            Ok(scene) => scene,
            Err(e) => {
                warn!("{e}; using demo scene");
                demo_scene()
            }
        },
        None => demo_scene(),
    }
}
