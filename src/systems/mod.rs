//! Simulation systems.
//!
//! All systems run inside one single-threaded schedule per tick, in the
//! fixed order wired up by the driver: intents, movement, camera, body
//! orientation, roll, collaborators, animation signals, end-of-frame
//! clears. Movement always precedes orientation and camera updates so
//! facing decisions use this tick's freshly-applied velocity.
//!
//! Submodules overview
//! - [`animdriver`] – publish speed/direction/flags for the animation graph
//! - [`camera`] – free-look control rotation when not locked on
//! - [`damage`] – hazard volumes firing the damage-receipt entry point
//! - [`elevator`] – platform state machine riding between two anchors
//! - [`input`] – end-of-frame input edge maintenance
//! - [`ladder`] – attach, climb, and release along ladder rails
//! - [`lockon`] – lock-on transitions, cycling, and camera interpolation
//! - [`movement`] – intents to velocity, integration, grounded refresh
//! - [`orientation`] – blend body yaw toward velocity or the lock focus
//! - [`roll`] – timer-gated dodge/backstep state machine
//! - [`scanner`] – pure sweep math behind the lock-on scan
//! - [`time`] – advance the simulation clock once per frame

pub mod animdriver;
pub mod camera;
pub mod damage;
pub mod elevator;
pub mod input;
pub mod ladder;
pub mod lockon;
pub mod movement;
pub mod orientation;
pub mod roll;
pub mod scanner;
pub mod time;
