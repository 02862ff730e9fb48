use crate::query::sat::{
    find_separating_axis_polygon_circle, find_separating_axis_polygon_polygon,
    intersects_circle_circle, intersects_circle_polygon, intersects_polygon_circle,
    intersects_polygon_polygon,
};
use crate::query::{Collision, Unsupported};
use crate::shape::{Shape, TypedShape};

/// Dispatches collision queries to the separating axis routine matching the types
/// of both shapes.
///
/// `Sat` holds no state: each query allocates nothing and returns a fresh
/// [`Collision`] value, so a single instance (or several) can be shared freely,
/// including across threads.
///
/// Supported pairs are polygon-polygon, circle-circle, polygon-circle and
/// circle-polygon. Any pair involving a [`TypedShape::Custom`] shape is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sat;

impl Sat {
    /// Computes the collision between `a` and `b`.
    ///
    /// Returns `Ok(None)` if the shapes don't overlap, and `Err(Unsupported)` if no
    /// routine exists for this pair of shapes.
    pub fn try_intersects(
        &self,
        a: &dyn Shape,
        b: &dyn Shape,
    ) -> Result<Option<Collision>, Unsupported> {
        match (a.as_typed_shape(), b.as_typed_shape()) {
            (TypedShape::Polygon(a), TypedShape::Polygon(b)) => {
                Ok(intersects_polygon_polygon(a, b))
            }
            (TypedShape::Circle(a), TypedShape::Circle(b)) => Ok(intersects_circle_circle(a, b)),
            (TypedShape::Polygon(a), TypedShape::Circle(b)) => {
                Ok(intersects_polygon_circle(a, b))
            }
            (TypedShape::Circle(a), TypedShape::Polygon(b)) => {
                Ok(intersects_circle_polygon(a, b))
            }
            _ => Err(Unsupported),
        }
    }

    /// Computes the collision between `a` and `b`.
    ///
    /// Returns `None` if the shapes don't overlap. Unsupported pairs are logged as a
    /// warning and reported as not colliding.
    pub fn intersects(&self, a: &dyn Shape, b: &dyn Shape) -> Option<Collision> {
        match self.try_intersects(a, b) {
            Ok(collision) => collision,
            Err(err) => {
                log::warn!("{}: {:?} vs. {:?}", err, a.shape_type(), b.shape_type());
                None
            }
        }
    }

    /// Tests whether `a` and `b` overlap, without computing the collision details.
    ///
    /// Returns `Err(Unsupported)` if no routine exists for this pair of shapes.
    pub fn try_collides(&self, a: &dyn Shape, b: &dyn Shape) -> Result<bool, Unsupported> {
        match (a.as_typed_shape(), b.as_typed_shape()) {
            (TypedShape::Polygon(a), TypedShape::Polygon(b)) => {
                Ok(find_separating_axis_polygon_polygon(a, b).is_none())
            }
            (TypedShape::Circle(a), TypedShape::Circle(b)) => {
                Ok(intersects_circle_circle(a, b).is_some())
            }
            (TypedShape::Polygon(p), TypedShape::Circle(c))
            | (TypedShape::Circle(c), TypedShape::Polygon(p)) => {
                Ok(find_separating_axis_polygon_circle(p, c).is_none())
            }
            _ => Err(Unsupported),
        }
    }

    /// Tests whether `a` and `b` overlap, without computing the collision details.
    ///
    /// Unsupported pairs are logged as a warning and reported as not colliding.
    pub fn collides(&self, a: &dyn Shape, b: &dyn Shape) -> bool {
        match self.try_collides(a, b) {
            Ok(collides) => collides,
            Err(err) => {
                log::warn!("{}: {:?} vs. {:?}", err, a.shape_type(), b.shape_type());
                false
            }
        }
    }
}

/// Computes the collision between `a` and `b` using [`Sat::intersects`].
#[inline]
pub fn intersects(a: &dyn Shape, b: &dyn Shape) -> Option<Collision> {
    Sat.intersects(a, b)
}

/// Tests whether `a` and `b` overlap using [`Sat::collides`].
#[inline]
pub fn collides(a: &dyn Shape, b: &dyn Shape) -> bool {
    Sat.collides(a, b)
}
