//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read by systems during
//! execution.
//!
//! Overview
//! - `config` – gameplay tuning constants, INI-overridable at startup
//! - `input` – per-frame input intents written by the embedding driver
//! - `worldtime` – simulation clock: elapsed, delta, time scale
pub mod config;
pub mod input;
pub mod worldtime;
