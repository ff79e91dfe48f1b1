//! Camera rig state for the third-person boom camera.
//!
//! The rig owns the control rotation (the direction the camera aims, which
//! also supplies the movement basis) and the local boom offset that biases
//! the view to one side while locked on. Interpolation rates and the offset
//! presets live in [`GameConfig`](crate::resources::config::GameConfig);
//! this component is pure runtime state.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Control rotation and boom state of the character's camera.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraRig {
    /// Aim yaw in radians.
    pub control_yaw: f32,
    /// Aim pitch in radians, positive looking up.
    pub control_pitch: f32,
    /// Local positional offset of the camera boom.
    pub boom_offset: Vec3,
    /// Which side the boom leans toward while locked on. Captured from the
    /// sign of the side-look axis and persists across lock-on sessions.
    pub prefer_right: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            control_yaw: 0.0,
            control_pitch: 0.0,
            boom_offset: Vec3::ZERO,
            prefer_right: true,
        }
    }
}

impl CameraRig {
    /// Full 3D aim direction derived from the control rotation.
    pub fn aim_dir(&self) -> Vec3 {
        let (sy, cy) = self.control_yaw.sin_cos();
        let (sp, cp) = self.control_pitch.sin_cos();
        Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Forward basis vector projected onto the yaw plane. Pitch and roll are
    /// ignored so looking down never shrinks ground movement.
    pub fn forward_flat(&self) -> Vec3 {
        let (s, c) = self.control_yaw.sin_cos();
        Vec3::new(s, 0.0, c)
    }

    /// Right basis vector on the yaw plane.
    pub fn right_flat(&self) -> Vec3 {
        let (s, c) = self.control_yaw.sin_cos();
        Vec3::new(c, 0.0, -s)
    }
}
