//! Gameplay configuration resource.
//!
//! All tuning constants of the core live here: locomotion speeds, lock-on
//! ranges, interpolation rates, roll impulses and windows, and the
//! collaborator defaults. Values are constants at runtime — systems only
//! ever read them. An INI file can override the defaults at startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [character]
//! run_speed = 700
//! walk_factor = 0.7
//! roll_impulse = 1500
//! backstep_impulse = -1500
//! invincibility_time = 0.2
//! roll_cooldown = 0.2
//!
//! [lockon]
//! range = 1000
//! sweep_radius = 300
//!
//! [camera]
//! rotation_rate = 10
//! boom_rate = 5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Gameplay constants, INI-overridable, serializable for tooling.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    // Character locomotion.
    /// Ground speed while running, world units per second.
    pub run_speed: f32,
    /// Speed factor applied when not running.
    pub walk_factor: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Terminal falling speed clamp.
    pub max_fall_speed: f32,

    // Dodge roll.
    /// Launch speed of a directional roll.
    pub roll_impulse: f32,
    /// Launch speed of a stationary backstep; negative means backward along
    /// the camera forward.
    pub backstep_impulse: f32,
    /// Invincibility window in seconds.
    pub invincibility_time: f32,
    /// Cooldown after the invincibility window, in seconds.
    pub roll_cooldown: f32,

    // Lock-on scan.
    /// Maximum distance to acquire and hold a target.
    pub lock_on_range: f32,
    /// Radius of the sweep sphere.
    pub sweep_radius: f32,

    // Camera.
    /// Control-rotation interpolation rate while locked on. Lower than the
    /// body turn rate on purpose: the camera lags the body.
    pub camera_rotation_rate: f32,
    /// Boom-offset interpolation rate while locked on.
    pub boom_rate: f32,
    /// Body yaw interpolation rate in free mode.
    pub body_turn_rate: f32,
    /// Free-look yaw/pitch speed, radians per second at full axis deflection.
    pub look_rate: f32,
    /// Pitch clamp in radians, symmetric around level.
    pub pitch_limit: f32,
    /// Boom local offset when not locked on.
    pub boom_neutral: [f32; 3],
    /// Boom local offset preset for the left side.
    pub boom_left: [f32; 3],
    /// Boom local offset preset for the right side.
    pub boom_right: [f32; 3],

    // Collaborators.
    /// Elevator travel distance between anchors.
    pub elevator_move_distance: f32,
    /// Elevator ride duration in seconds.
    pub elevator_move_duration: f32,
    /// Whether the elevator spawns at the upper anchor.
    pub elevator_starts_up: bool,
    /// Damage dealt by a hazard volume per hit.
    pub damage_amount: f32,
    /// Minimum seconds between hazard hits.
    pub damage_window: f32,

    /// Path to the configuration file.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a configuration with the stock tuning values.
    pub fn new() -> Self {
        Self {
            run_speed: 700.0,
            walk_factor: 0.7,
            gravity: 980.0,
            max_fall_speed: 1500.0,
            roll_impulse: 1500.0,
            backstep_impulse: -1500.0,
            invincibility_time: 0.2,
            roll_cooldown: 0.2,
            lock_on_range: 1000.0,
            sweep_radius: 300.0,
            camera_rotation_rate: 10.0,
            boom_rate: 5.0,
            body_turn_rate: 20.0,
            look_rate: 2.5,
            pitch_limit: 1.2,
            boom_neutral: [0.0, 0.0, 0.0],
            boom_left: [-100.0, 0.0, 0.0],
            boom_right: [100.0, 0.0, 0.0],
            elevator_move_distance: 1000.0,
            elevator_move_duration: 5.0,
            elevator_starts_up: false,
            damage_amount: 10.0,
            damage_window: 2.0,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn boom_neutral_vec(&self) -> Vec3 {
        Vec3::from_array(self.boom_neutral)
    }

    pub fn boom_left_vec(&self) -> Vec3 {
        Vec3::from_array(self.boom_left)
    }

    pub fn boom_right_vec(&self) -> Vec3 {
        Vec3::from_array(self.boom_right)
    }

    /// Load overrides from the INI file. Missing keys retain their current
    /// values; a missing file is an error the caller may ignore.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("failed to load {}: {e}", self.config_path.display()))?;

        let mut float = |section: &str, key: &str, slot: &mut f32| {
            if let Ok(Some(v)) = ini.getfloat(section, key) {
                *slot = v as f32;
            }
        };

        float("character", "run_speed", &mut self.run_speed);
        float("character", "walk_factor", &mut self.walk_factor);
        float("character", "gravity", &mut self.gravity);
        float("character", "max_fall_speed", &mut self.max_fall_speed);
        float("character", "roll_impulse", &mut self.roll_impulse);
        float("character", "backstep_impulse", &mut self.backstep_impulse);
        float("character", "invincibility_time", &mut self.invincibility_time);
        float("character", "roll_cooldown", &mut self.roll_cooldown);

        float("lockon", "range", &mut self.lock_on_range);
        float("lockon", "sweep_radius", &mut self.sweep_radius);

        float("camera", "rotation_rate", &mut self.camera_rotation_rate);
        float("camera", "boom_rate", &mut self.boom_rate);
        float("camera", "body_turn_rate", &mut self.body_turn_rate);
        float("camera", "look_rate", &mut self.look_rate);
        float("camera", "pitch_limit", &mut self.pitch_limit);

        float("elevator", "move_distance", &mut self.elevator_move_distance);
        float("elevator", "move_duration", &mut self.elevator_move_duration);
        if let Ok(Some(v)) = ini.getbool("elevator", "starts_up") {
            self.elevator_starts_up = v;
        }

        float("damage", "amount", &mut self.damage_amount);
        float("damage", "window", &mut self.damage_window);

        info!("Config loaded from {}", self.config_path.display());
        Ok(())
    }
}
