//! Hit testing and screen wrap-around

use glam::Vec2;

/// True when `point` lies strictly inside the squared hit range around `center`
#[inline]
pub fn within_range(center: Vec2, point: Vec2, hit_range_sq: f32) -> bool {
    center.distance_squared(point) < hit_range_sq
}

/// Wrap a single coordinate into `[lo, hi]` by jumping to the opposite edge
#[inline]
fn wrap_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if v > hi {
        lo
    } else if v < lo {
        hi
    } else {
        v
    }
}

/// Wrap a position into `[-margin, size.x + margin] × [-margin, size.y + margin]`
pub fn wrap(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, -margin, size.x + margin),
        wrap_axis(pos.y, -margin, size.y + margin),
    )
}

/// Fragment velocity: the parent's velocity turned by the small-angle
/// approximation of a rotation by `dir` (first-order, not normalized).
#[inline]
pub fn split_velocity(vel: Vec2, dir: f32) -> Vec2 {
    Vec2::new(vel.x + vel.y * dir, vel.y - vel.x * dir)
}
