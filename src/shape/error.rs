use crate::math::Real;

/// Indicates that a shape cannot be built from the given parameters.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, {count} were given.")]
    NotEnoughVertices {
        /// The number of vertices that was given.
        count: usize,
    },
    /// A circle radius must be non-negative (and not NaN).
    #[error("the circle radius {0} is not a non-negative number.")]
    NegativeRadius(Real),
}
