//! Event types and observers used by the core.
//!
//! Events provide a decoupled way for systems and collaborator actors to
//! communicate without direct dependencies.
//!
//! Submodules:
//! - [`damage`] – the damage-receipt entry point and its applying observer
//! - [`lockon`] – lock acquisition and lock-break notifications
//! - [`roll`] – dodge-roll lifecycle notifications
pub mod damage;
pub mod lockon;
pub mod roll;
