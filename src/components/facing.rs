// Body yaw of an actor. Pitch and roll are always zero when applied.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Body orientation around the vertical axis, in radians.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Facing {
    pub yaw: f32,
}

impl Facing {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    /// Unit forward vector on the ground plane.
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(s, 0.0, c)
    }
}

/// Wrap an angle to `(-PI, PI]`.
pub fn wrap_angle(a: f32) -> f32 {
    let mut x = a;
    while x > std::f32::consts::PI {
        x -= std::f32::consts::TAU;
    }
    while x < -std::f32::consts::PI {
        x += std::f32::consts::TAU;
    }
    x
}

/// Exponential approach factor for frame-rate independent interpolation.
/// Higher rate means a snappier approach to the target.
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Step `current` toward `target` along the shortest arc.
pub fn blend_angle(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let diff = wrap_angle(target - current);
    wrap_angle(current + diff * blend_factor(rate, dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn wrap_angle_keeps_range() {
        assert!((wrap_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI).abs() - PI).abs() < 1e-5);
        assert_eq!(wrap_angle(0.5), 0.5);
    }

    #[test]
    fn blend_angle_takes_shortest_arc() {
        // From just below +PI toward just above -PI the short way crosses PI.
        let stepped = blend_angle(PI - 0.1, -PI + 0.1, 20.0, 1.0);
        assert!(stepped.abs() > FRAC_PI_2, "went the long way: {stepped}");
    }

    #[test]
    fn higher_rate_is_snappier() {
        let slow = blend_angle(0.0, 1.0, 5.0, 0.016);
        let fast = blend_angle(0.0, 1.0, 20.0, 0.016);
        assert!(fast > slow);
        assert!(fast < 1.0);
    }

    #[test]
    fn forward_matches_yaw() {
        let f = Facing::new(0.0).forward();
        assert!((f - Vec3::Z).length() < 1e-6);
        let f = Facing::new(FRAC_PI_2).forward();
        assert!((f - Vec3::X).length() < 1e-5);
    }
}
