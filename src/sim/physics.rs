//! Simulation step: semi-implicit Euler integration for dynamic bodies

use glam::Vec2;

use super::body::Body;

/// Integrate one body over `dt`. Static bodies are left untouched.
///
/// `vel.y += gravity * dt`, then `pos += vel * dt`.
#[inline]
pub fn integrate(body: &mut Body, gravity: f32, dt: f32) {
    if body.is_static {
        return;
    }
    body.vel.y += gravity * dt;
    body.pos += body.vel * dt;
}

/// Integrate every dynamic body in iteration order
pub fn step<'a>(bodies: impl IntoIterator<Item = &'a mut Body>, gravity: f32, dt: f32) {
    for body in bodies {
        integrate(body, gravity, dt);
    }
}

/// Upward impulse for one activation (y grows downward)
#[inline]
pub fn flap_impulse(magnitude: f32) -> Vec2 {
    Vec2::new(0.0, -magnitude)
}
