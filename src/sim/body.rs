//! Axis-aligned rigid bodies
//!
//! A body stores only its center, velocity and size. Bounds are always derived
//! (`pos ± size/2`) so collision and rendering can never drift apart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Strict overlap on both axes (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// A rectangular rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full width and height
    pub size: Vec2,
    pub is_static: bool,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, size: Vec2, is_static: bool) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            is_static,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        let half = self.size / 2.0;
        Aabb {
            min: self.pos - half,
            max: self.pos + half,
        }
    }

    /// Upper-left corner, the offset a sprite renderer draws at
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.size / 2.0
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Add an instantaneous velocity change. Static bodies refuse impulses.
    pub fn apply_impulse(&mut self, impulse: Vec2) -> Result<(), SimError> {
        if self.is_static {
            return Err(SimError::ImpulseOnStatic { body_id: self.id });
        }
        self.vel += impulse;
        Ok(())
    }
}

/// Cosmetic animation frame of the player, never read by game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Pose {
    Rising,
    #[default]
    Gliding,
    Falling,
}

impl Pose {
    /// Vertical speed below which the player counts as gliding
    const GLIDE_BAND: f32 = 1.0;

    pub fn from_velocity(vel_y: f32) -> Self {
        if vel_y < -Self::GLIDE_BAND {
            Pose::Rising
        } else if vel_y > Self::GLIDE_BAND {
            Pose::Falling
        } else {
            Pose::Gliding
        }
    }
}

/// The controllable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub pose: Pose,
}

/// Velocity → tilt keyframes (degrees), clamped outside the range
const TILT_KEYS: [(f32, f32); 4] = [(-10.0, -20.0), (0.0, 0.0), (10.0, 20.0), (20.0, 45.0)];

impl Player {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            pose: Pose::default(),
        }
    }

    /// Visual rotation derived from vertical velocity (rendering only)
    pub fn tilt_degrees(&self) -> f32 {
        let v = self.body.vel.y;
        let (first, last) = (TILT_KEYS[0], TILT_KEYS[TILT_KEYS.len() - 1]);
        if v <= first.0 {
            return first.1;
        }
        if v >= last.0 {
            return last.1;
        }
        for pair in TILT_KEYS.windows(2) {
            let ((v0, a0), (v1, a1)) = (pair[0], pair[1]);
            if v <= v1 {
                let t = (v - v0) / (v1 - v0);
                return a0 + (a1 - a0) * t;
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: u32, x: f32, y: f32, is_static: bool) -> Body {
        Body::new(id, Vec2::new(x, y), Vec2::new(10.0, 10.0), is_static)
    }

    #[test]
    fn test_bounds_derived_from_center() {
        let body = Body::new(1, Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0), true);
        let bounds = body.bounds();
        assert_eq!(bounds.min, Vec2::new(80.0, 40.0));
        assert_eq!(bounds.max, Vec2::new(120.0, 60.0));
        assert_eq!(body.top_left(), bounds.min);
    }

    #[test]
    fn test_translate_and_set_position() {
        let mut body = square(1, 0.0, 0.0, true);
        body.translate(Vec2::new(-3.0, 2.0));
        assert_eq!(body.pos, Vec2::new(-3.0, 2.0));
        body.set_position(Vec2::new(7.0, 7.0));
        assert_eq!(body.pos, Vec2::new(7.0, 7.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_impulse_on_dynamic_body() {
        let mut body = square(1, 0.0, 0.0, false);
        body.apply_impulse(Vec2::new(0.0, -8.0)).unwrap();
        body.apply_impulse(Vec2::new(0.0, 3.0)).unwrap();
        assert_eq!(body.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_impulse_on_static_body_is_misuse() {
        let mut body = square(9, 0.0, 0.0, true);
        let result = body.apply_impulse(Vec2::new(0.0, -8.0));
        assert_eq!(result, Err(SimError::ImpulseOnStatic { body_id: 9 }));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = square(1, 0.0, 0.0, false).bounds();
        let touching = square(2, 10.0, 0.0, true).bounds();
        let overlapping = square(3, 9.0, 9.0, true).bounds();
        let apart_on_y = square(4, 5.0, 20.0, true).bounds();
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
        assert!(!a.overlaps(&apart_on_y));
    }

    #[test]
    fn test_tilt_interpolates_and_clamps() {
        let mut player = Player::new(square(1, 0.0, 0.0, false));
        let cases = [
            (-30.0, -20.0),
            (-5.0, -10.0),
            (0.0, 0.0),
            (5.0, 10.0),
            (15.0, 32.5),
            (50.0, 45.0),
        ];
        for (vel, expected) in cases {
            player.body.vel.y = vel;
            assert!(
                (player.tilt_degrees() - expected).abs() < 1e-4,
                "vel {vel} -> {}",
                player.tilt_degrees()
            );
        }
    }

    #[test]
    fn test_pose_from_velocity() {
        assert_eq!(Pose::from_velocity(-5.0), Pose::Rising);
        assert_eq!(Pose::from_velocity(0.5), Pose::Gliding);
        assert_eq!(Pose::from_velocity(3.0), Pose::Falling);
    }
}
