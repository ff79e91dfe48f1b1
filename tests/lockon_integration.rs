//! Lock-on integration tests: acquisition, cycling, camera tracking, and
//! every break path.

use bevy_ecs::prelude::*;
use glam::Vec3;

use emberfall::components::camerarig::CameraRig;
use emberfall::components::character::CharacterState;
use emberfall::components::lockon::LockOn;
use emberfall::components::position::Position;
use emberfall::game;
use emberfall::resources::config::GameConfig;
use emberfall::resources::input::InputState;
use emberfall::resources::worldtime::WorldTime;
use emberfall::systems::lockon::lockon_camera;

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(GameConfig::new());
    world.insert_resource(InputState::default());
    world
}

fn spawn_character(world: &mut World) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    game::spawn_player(world, &config, Vec3::ZERO)
}

fn tick_lockon(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(lockon_camera);
    schedule.run(world);
}

fn press_lock_on(world: &mut World) {
    world.resource_mut::<InputState>().lock_on.press();
    tick_lockon(world);
    let mut input = world.resource_mut::<InputState>();
    input.lock_on.release();
    input.clear_edges();
}

#[test]
fn toggle_engages_nearest_enemy() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    let near = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 400.0));
    let _far = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 700.0));

    press_lock_on(&mut world);

    let state = world.get::<CharacterState>(player).unwrap();
    let lock = world.get::<LockOn>(player).unwrap();
    let rig = world.get::<CameraRig>(player).unwrap();
    assert!(state.is_locked_on());
    assert_eq!(lock.len(), 2);
    assert_eq!(lock.selected_target(), Some(near));
    // Engaging snaps the boom to the preferred (right) side.
    assert_eq!(rig.boom_offset, Vec3::new(100.0, 0.0, 0.0));
}

#[test]
fn toggle_without_candidates_stays_free() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    // Only enemy is behind the camera.
    game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, -500.0));

    press_lock_on(&mut world);

    assert!(!world.get::<CharacterState>(player).unwrap().is_locked_on());
    assert!(world.get::<LockOn>(player).unwrap().is_empty());
}

#[test]
fn wall_in_front_aborts_acquisition() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    game::spawn_wall(&mut world, Vec3::new(0.0, 0.0, 300.0), 150.0);
    game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 600.0));

    press_lock_on(&mut world);

    assert!(!world.get::<CharacterState>(player).unwrap().is_locked_on());
}

#[test]
fn wall_behind_enemy_does_not_block() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    let enemy = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 300.0));
    game::spawn_wall(&mut world, Vec3::new(0.0, 0.0, 600.0), 150.0);

    press_lock_on(&mut world);

    let lock = world.get::<LockOn>(player).unwrap();
    assert_eq!(lock.selected_target(), Some(enemy));
    assert!(world.get::<CharacterState>(player).unwrap().is_locked_on());
}

#[test]
fn second_toggle_releases_and_resets_boom() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 400.0));

    press_lock_on(&mut world);
    assert!(world.get::<CharacterState>(player).unwrap().is_locked_on());

    press_lock_on(&mut world);

    let state = world.get::<CharacterState>(player).unwrap();
    let rig = world.get::<CameraRig>(player).unwrap();
    assert!(!state.is_locked_on());
    assert_eq!(rig.boom_offset, Vec3::ZERO);
}

#[test]
fn cycle_edges_advance_and_wrap() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    for z in [300.0, 500.0, 700.0] {
        game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, z));
    }

    press_lock_on(&mut world);
    assert_eq!(world.get::<LockOn>(player).unwrap().len(), 3);

    // Four steps over three candidates wrap to index 1.
    for _ in 0..4 {
        world.resource_mut::<InputState>().cycle_right.press();
        tick_lockon(&mut world);
        let mut input = world.resource_mut::<InputState>();
        input.cycle_right.release();
        input.clear_edges();
    }
    assert_eq!(world.get::<LockOn>(player).unwrap().selected_index(), 1);

    world.resource_mut::<InputState>().cycle_left.press();
    tick_lockon(&mut world);
    assert_eq!(world.get::<LockOn>(player).unwrap().selected_index(), 0);
}

#[test]
fn target_beyond_range_breaks_lock() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    let enemy = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 500.0));

    press_lock_on(&mut world);
    world.get_mut::<Position>(enemy).unwrap().pos = Vec3::new(0.0, 0.0, 1600.0);
    tick_lockon(&mut world);

    let state = world.get::<CharacterState>(player).unwrap();
    let lock = world.get::<LockOn>(player).unwrap();
    let rig = world.get::<CameraRig>(player).unwrap();
    assert!(!state.is_locked_on());
    assert!(lock.is_empty());
    assert_eq!(rig.boom_offset, Vec3::ZERO);
}

#[test]
fn despawned_target_breaks_lock_cleanly() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    let enemy = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 500.0));

    press_lock_on(&mut world);
    world.despawn(enemy);
    tick_lockon(&mut world);

    assert!(!world.get::<CharacterState>(player).unwrap().is_locked_on());
    assert!(world.get::<LockOn>(player).unwrap().is_empty());
}

#[test]
fn wall_moving_in_breaks_lock() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 600.0));

    press_lock_on(&mut world);
    assert!(world.get::<CharacterState>(player).unwrap().is_locked_on());

    game::spawn_wall(&mut world, Vec3::new(0.0, 0.0, 200.0), 150.0);
    tick_lockon(&mut world);

    assert!(!world.get::<CharacterState>(player).unwrap().is_locked_on());
}

#[test]
fn camera_lags_toward_moving_target() {
    let mut world = make_world(0.016);
    let player = spawn_character(&mut world);
    let enemy = game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 500.0));

    press_lock_on(&mut world);
    world.get_mut::<Position>(enemy).unwrap().pos = Vec3::new(300.0, 0.0, 400.0);
    let target_yaw = 300.0_f32.atan2(400.0);

    tick_lockon(&mut world);
    let after_one = world.get::<CameraRig>(player).unwrap().control_yaw;
    assert!(after_one > 0.0 && after_one < target_yaw, "one tick lags behind");

    for _ in 0..200 {
        tick_lockon(&mut world);
    }
    let settled = world.get::<CameraRig>(player).unwrap().control_yaw;
    assert!((settled - target_yaw).abs() < 1e-3);
}

#[test]
fn side_preference_follows_look_axis() {
    let mut world = make_world(0.5);
    let player = spawn_character(&mut world);
    game::spawn_enemy(&mut world, Vec3::new(0.0, 0.0, 500.0));

    press_lock_on(&mut world);
    assert!(world.get::<CameraRig>(player).unwrap().prefer_right);

    world.resource_mut::<InputState>().set_look(0.0, -1.0);
    tick_lockon(&mut world);

    let rig = world.get::<CameraRig>(player).unwrap();
    assert!(!rig.prefer_right);
    // Boom is easing away from the right preset toward the left one.
    assert!(rig.boom_offset.x < 0.0);
}
