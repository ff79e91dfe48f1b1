//! Emberfall main entry point.
//!
//! A third-person character locomotion and camera lock-on simulation using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for world-space vector math
//!
//! This executable runs the simulation headless at a fixed timestep with a
//! scripted input track, logging character state as it goes. It exists to
//! exercise the full tick pipeline end to end; the library crate is the
//! real product.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (character state, bodies, timers, rigs)
//! - [`events`] – Event types (lock-on transitions, rolls, damage)
//! - [`game`] – Scene definitions and actor spawning
//! - [`resources`] – ECS resources (config, input, world time)
//! - [`systems`] – ECS systems (movement, camera, lock-on, collaborators)
//!
//! # Main Loop
//!
//! 1. Load config and scene, build the ECS world and resources
//! 2. Register observers for lock-on, roll, and damage events
//! 3. Build the per-tick schedule in pipeline order
//! 4. Advance world time and run the schedule once per tick

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::body::KinematicBody;
use crate::components::character::CharacterState;
use crate::components::facing::Facing;
use crate::components::position::Position;
use crate::events::damage::damage_observer;
use crate::events::lockon::{observe_lockon_broken, observe_lockon_engaged};
use crate::events::roll::{observe_roll_ended, observe_roll_started};
use crate::resources::config::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::animdriver::publish_animation_signals;
use crate::systems::camera::free_look;
use crate::systems::damage::damage_volumes;
use crate::systems::elevator::elevator_platform;
use crate::systems::input::end_frame_input;
use crate::systems::ladder::ladder_traversal;
use crate::systems::lockon::lockon_camera;
use crate::systems::movement::{apply_movement, clear_frame_intents, collect_intents, integrate};
use crate::systems::orientation::blend_orientation;
use crate::systems::roll::dodge_roll;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Emberfall locomotion sandbox
#[derive(Parser)]
#[command(version, about = "Headless third-person locomotion and lock-on simulation")]
struct Cli {
    /// Path to the INI config file (default: config.ini next to the binary).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a JSON scene file. Falls back to the built-in demo arena.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Number of fixed-timestep ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Simulation rate in ticks per second.
    #[arg(long, default_value_t = 60.0)]
    rate: f32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
    }
    config.load_from_file().ok(); // ignore errors, use defaults

    let scene = game::scene_or_demo(cli.scene.as_deref());

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());

    let player = game::spawn_scene(&mut world, &config, &scene);
    world.insert_resource(config);

    world.spawn(Observer::new(observe_lockon_engaged));
    world.spawn(Observer::new(observe_lockon_broken));
    world.spawn(Observer::new(observe_roll_started));
    world.spawn(Observer::new(observe_roll_ended));
    world.spawn(Observer::new(damage_observer));
    // Ensure observers are registered before any system can trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(collect_intents);
    update.add_systems(apply_movement.after(collect_intents));
    update.add_systems(integrate.after(apply_movement));
    update.add_systems(free_look.after(integrate));
    update.add_systems(lockon_camera.after(free_look));
    update.add_systems(blend_orientation.after(lockon_camera));
    update.add_systems(dodge_roll.after(blend_orientation));
    update.add_systems(elevator_platform.after(dodge_roll));
    update.add_systems(ladder_traversal.after(elevator_platform));
    update.add_systems(damage_volumes.after(ladder_traversal));
    update.add_systems(publish_animation_signals.after(damage_volumes));
    update.add_systems(clear_frame_intents.after(publish_animation_signals));
    update.add_systems(end_frame_input.after(clear_frame_intents));

    // --------------- Main loop ---------------
    let dt = 1.0 / cli.rate.max(1.0);
    log::info!("simulating {} ticks at {:.0} Hz", cli.ticks, 1.0 / dt);
    for tick in 0..cli.ticks {
        script_input(&mut world, tick);
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();

        if tick % 60 == 0 {
            log_player(&world, player, tick);
        }
    }
    log_player(&world, player, cli.ticks);
}

/// Scripted demo input: run forward, sprint, lock on, cycle, roll, release.
fn script_input(world: &mut World, tick: u32) {
    let mut input = world.resource_mut::<InputState>();
    match tick {
        0..=119 => input.set_axes(1.0, 0.0),
        120..=179 => {
            input.set_axes(1.0, 0.0);
            input.sprint.press();
        }
        180 => {
            input.sprint.release();
            input.lock_on.press();
        }
        181..=299 => {
            input.lock_on.release();
            input.set_axes(0.0, 1.0);
            if tick == 240 {
                input.cycle_right.press();
            } else {
                input.cycle_right.release();
            }
        }
        300 => input.roll.press(),
        301..=419 => input.roll.release(),
        420 => input.lock_on.press(),
        _ => {
            input.lock_on.release();
            input.set_axes(0.0, 0.0);
        }
    }
}

fn log_player(world: &World, player: Entity, tick: u32) {
    let Some(position) = world.get::<Position>(player) else {
        return;
    };
    let (Some(body), Some(state), Some(facing)) = (
        world.get::<KinematicBody>(player),
        world.get::<CharacterState>(player),
        world.get::<Facing>(player),
    ) else {
        return;
    };
    log::info!(
        "tick {tick}: pos ({:.0}, {:.0}, {:.0}) speed {:.0} yaw {:.2} locked_on={} rolling={}",
        position.pos.x,
        position.pos.y,
        position.pos.z,
        body.horizontal().length(),
        facing.yaw,
        state.is_locked_on(),
        state.rolling,
    );
}
