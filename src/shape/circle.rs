use crate::math::{Projection, Real, Vector};
use crate::shape::{Polygon, ShapeError};

/// A circle shape, described by its center and its radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "CircleDesc"))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The center of the circle.
    pub(crate) pos: Vector,
    radius: Real,
}

/// The serialized form of a [`Circle`], validated on deserialization.
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
pub struct CircleDesc {
    pos: Vector,
    radius: Real,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<CircleDesc> for Circle {
    type Error = ShapeError;

    fn try_from(desc: CircleDesc) -> Result<Self, ShapeError> {
        Circle::new(desc.radius, desc.pos)
    }
}

#[inline]
fn check_radius(radius: Real) -> Result<Real, ShapeError> {
    // Written so that NaN is rejected too.
    if radius >= 0.0 {
        Ok(radius)
    } else {
        Err(ShapeError::NegativeRadius(radius))
    }
}

impl Circle {
    /// Creates a new circle with the given radius, centered at `pos`.
    ///
    /// Fails if `radius` is negative or NaN.
    #[inline]
    pub fn new(radius: Real, pos: Vector) -> Result<Circle, ShapeError> {
        Ok(Circle {
            pos,
            radius: check_radius(radius)?,
        })
    }

    /// The radius of this circle.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Changes the radius of this circle.
    ///
    /// Fails, leaving the circle untouched, if `radius` is negative or NaN.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ShapeError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// Projects this circle onto the unit vector `axis`.
    #[inline]
    pub fn project(&self, axis: Vector) -> Projection {
        let offset = axis * self.radius;
        let p1 = (self.pos + offset).dot(axis);
        let p2 = (self.pos - offset).dot(axis);
        Projection::new(p1, p2)
    }

    /// Whether `point` lies inside this circle, boundary included.
    #[inline]
    pub fn contains_point(&self, point: Vector) -> bool {
        (point - self.pos).mag_squared() <= self.radius * self.radius
    }

    /// Whether `other` lies entirely inside this circle.
    pub fn contains_circle(&self, other: &Circle) -> bool {
        let dist = self.pos.dist(other.pos);
        self.radius >= other.radius && dist <= self.radius - other.radius
    }

    /// Whether this circle lies entirely inside `other`.
    #[inline]
    pub fn is_contained_in_circle(&self, other: &Circle) -> bool {
        other.contains_circle(self)
    }

    /// Finds the world-space vertex of `polygon` closest to the center of this circle.
    ///
    /// Returns the index of that vertex and its distance to the center. Ties are
    /// resolved in favor of the lowest index.
    pub fn closest_polygon_vertex(&self, polygon: &Polygon) -> (usize, Real) {
        let mut best_id = 0;
        let mut best_dist2 = Real::MAX;

        for (i, vertex) in polygon.world_vertices().iter().enumerate() {
            let dist2 = (*vertex - self.pos).mag_squared();

            if dist2 < best_dist2 {
                best_dist2 = dist2;
                best_id = i;
            }
        }

        (best_id, best_dist2.sqrt())
    }
}
