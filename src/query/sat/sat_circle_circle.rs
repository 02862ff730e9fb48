use crate::math::Vector;
use crate::query::Collision;
use crate::shape::Circle;

/// Computes the collision between two circles.
///
/// The normal points from the center of `c2` toward the center of `c1`. If both
/// centers coincide, it defaults to `(1, 0)`.
#[inline]
pub fn intersects_circle_circle(c1: &Circle, c2: &Circle) -> Option<Collision> {
    let r1 = c1.radius();
    let r2 = c2.radius();
    let delta = c1.pos - c2.pos;
    let distance_squared = delta.mag_squared();
    let sum_radius = r1 + r2;

    if distance_squared > sum_radius * sum_radius {
        return None;
    }

    let dist = distance_squared.sqrt();
    let normal = if dist != 0.0 {
        delta / dist
    } else {
        Vector::new(1.0, 0.0)
    };

    Some(Collision::new(
        normal,
        sum_radius - dist,
        r1 <= r2 && dist <= r2 - r1,
        r2 <= r1 && dist <= r1 - r2,
    ))
}
