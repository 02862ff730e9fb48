//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto
//! which their projections do not overlap. For polygons, the only axes worth
//! testing are the edge normals of both shapes. A circle has no edges, so the axis
//! going through its center and the closest polygon vertex is tested in addition.
//!
//! Every tested axis on which the projections overlap yields a candidate penetration
//! depth; the axis with the smallest one gives the minimum translation returned in
//! the [`Collision`](crate::query::Collision).
//!
//! Functions have the form `[operation]_[shape1]_[shape2]()`:
//!
//! - `intersects_*` computes the full [`Collision`](crate::query::Collision).
//! - `find_separating_axis_*` stops at the first separating axis and returns it.

pub use self::sat_circle_circle::*;
pub use self::sat_polygon_circle::*;
pub use self::sat_polygon_polygon::*;

mod sat_circle_circle;
mod sat_polygon_circle;
mod sat_polygon_polygon;

use crate::math::{Projection, Real, Vector};
use num::Zero;

/// Running minimum of the overlap depths over the axes tested so far.
///
/// Axes tying for the minimum are ranked by how well they align with `dir`, the
/// vector between the two shape centers, and then by their sign-independent
/// direction. Both criteria are unchanged when the shapes are swapped, which keeps
/// the normals of `a` vs. `b` and `b` vs. `a` opposite.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MinOverlapAxis {
    pub normal: Vector,
    pub overlap: Real,
    dir: Vector,
}

impl MinOverlapAxis {
    #[inline]
    pub fn new(dir: Vector) -> Self {
        MinOverlapAxis {
            normal: Vector::zero(),
            overlap: Real::MAX,
            dir,
        }
    }

    /// Folds `axis` into the running minimum.
    ///
    /// Returns `false` if `axis` separates the two projections.
    #[inline]
    pub fn test(&mut self, axis: Vector, proj1: &Projection, proj2: &Projection) -> bool {
        if !proj1.overlaps(proj2) {
            return false;
        }

        let depth = proj1.overlap_depth(proj2);

        if depth < self.overlap || (depth == self.overlap && self.prefers(axis)) {
            self.overlap = depth;
            self.normal = axis;
        }

        true
    }

    fn prefers(&self, axis: Vector) -> bool {
        let new_align = axis.dot(self.dir).abs();
        let old_align = self.normal.dot(self.dir).abs();

        if new_align != old_align {
            return new_align > old_align;
        }

        let new_key = unsigned_direction(axis);
        let old_key = unsigned_direction(self.normal);
        (new_key.x, new_key.y) < (old_key.x, old_key.y)
    }
}

/// The representative of `±axis` with a positive `x`, or a positive `y` if `x` is zero.
#[inline]
fn unsigned_direction(axis: Vector) -> Vector {
    if axis.x < 0.0 || (axis.x == 0.0 && axis.y < 0.0) {
        -axis
    } else {
        axis
    }
}

/// Tracks whether one projection strictly enclosed the other on every axis tested so far.
///
/// Flush bounds don't count: identical shapes don't contain each other.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Containment {
    pub a_in_b: bool,
    pub b_in_a: bool,
}

impl Containment {
    #[inline]
    pub fn new() -> Self {
        Containment {
            a_in_b: true,
            b_in_a: true,
        }
    }

    #[inline]
    pub fn update(&mut self, proj_a: &Projection, proj_b: &Projection) {
        // Once disproved on one axis, containment can't come back.
        if self.a_in_b || self.b_in_a {
            self.a_in_b = self.a_in_b && proj_b.strictly_contains(proj_a);
            self.b_in_a = self.b_in_a && proj_a.strictly_contains(proj_b);
        }
    }
}

/// Flips `normal` if needed so it points from `center_b` toward `center_a`.
#[inline]
pub(crate) fn orient_from_b_to_a(normal: Vector, center_a: Vector, center_b: Vector) -> Vector {
    if (center_a - center_b).dot(normal) < 0.0 {
        -normal
    } else {
        normal
    }
}
