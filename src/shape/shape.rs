use crate::math::{Projection, Vector};
use crate::shape::{Circle, Polygon};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle shape.
    Circle,
    /// A convex polygon shape.
    Polygon,
    /// A custom user-defined shape.
    Custom,
}

/// Enum representing the shape with its actual type.
#[derive(Copy, Clone)]
pub enum TypedShape<'a> {
    /// A circle shape.
    Circle(&'a Circle),
    /// A convex polygon shape.
    Polygon(&'a Polygon),
    /// A custom user-defined shape.
    Custom(&'a dyn Shape),
}

/// Trait implemented by shapes usable by the separating axis test.
///
/// The set of shapes the collision algorithms know about is closed: a custom
/// implementor has to report itself as [`TypedShape::Custom`], and queries
/// involving it are reported as unsupported.
pub trait Shape {
    /// The world-space reference point of this shape.
    fn pos(&self) -> Vector;

    /// Moves this shape so its reference point lies at `pos`.
    fn set_pos(&mut self, pos: Vector);

    /// Moves this shape by `delta`.
    fn translate(&mut self, delta: Vector) {
        let pos = self.pos() + delta;
        self.set_pos(pos);
    }

    /// The interval covered by this shape along the unit vector `axis`.
    fn project(&self, axis: Vector) -> Projection;

    /// The type of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;
}

impl dyn Shape + '_ {
    /// Converts this abstract shape to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self.as_typed_shape() {
            TypedShape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this abstract shape to a polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self.as_typed_shape() {
            TypedShape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl Shape for Circle {
    #[inline]
    fn pos(&self) -> Vector {
        self.pos
    }

    #[inline]
    fn set_pos(&mut self, pos: Vector) {
        self.pos = pos;
    }

    #[inline]
    fn project(&self, axis: Vector) -> Projection {
        Circle::project(self, axis)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Circle(self)
    }
}

impl Shape for Polygon {
    #[inline]
    fn pos(&self) -> Vector {
        self.pos
    }

    #[inline]
    fn set_pos(&mut self, pos: Vector) {
        // Exact comparison: any detectable move refreshes the world-space cache.
        if pos != self.pos {
            self.pos = pos;
            self.update_world_geometry();
        }
    }

    #[inline]
    fn project(&self, axis: Vector) -> Projection {
        Polygon::project(self, axis)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Polygon(self)
    }
}
