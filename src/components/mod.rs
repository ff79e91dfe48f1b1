//! ECS components for world actors.
//!
//! This module groups the component types attached to entities in the
//! simulation: the player character's state and camera rig, collision
//! proxies, and the collaborator actors (elevator, ladder, damage volume).
//!
//! Submodules overview:
//! - [`body`] – kinematic body storing velocity and ground contact
//! - [`camerarig`] – control rotation and boom offset of the follow camera
//! - [`category`] – typed actor classification (player/enemy/wall)
//! - [`character`] – per-frame intents and gameplay flags of the character
//! - [`collider`] – sphere hit proxies and box trigger volumes
//! - [`damagevolume`] – hazard that damages the player once per window
//! - [`elevator`] – platform state machine riding between two anchors
//! - [`facing`] – body yaw plus the angle-blend helpers
//! - [`health`] – hit points reduced via the damage-receipt entry point
//! - [`ladder`] – traversal gate that snaps and releases climbing characters
//! - [`lockon`] – candidate list and selection cursor for the lock-on camera
//! - [`position`] – world-space position
//! - [`roll`] – invincibility/cooldown timer pair for the dodge roll
//! - [`signals`] – scalar/flag outputs consumed by the animation driver
//! - [`timer`] – one-shot countdown shared by the timed behaviors

pub mod body;
pub mod camerarig;
pub mod category;
pub mod character;
pub mod collider;
pub mod damagevolume;
pub mod elevator;
pub mod facing;
pub mod health;
pub mod ladder;
pub mod lockon;
pub mod position;
pub mod roll;
pub mod signals;
pub mod timer;
