use core::fmt;

/// Error indicating that a collision query is not supported between certain shapes.
///
/// The separating axis routines are only defined for circles and polygons. Shapes
/// reporting themselves as [`TypedShape::Custom`](crate::shape::TypedShape::Custom)
/// cannot take part in a query, and [`Sat::try_intersects`](crate::query::Sat::try_intersects)
/// returns this error for them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl core::error::Error for Unsupported {}
