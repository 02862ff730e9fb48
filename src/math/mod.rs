//! Scalar, vector and interval types used throughout this crate.

pub use self::projection::Projection;
pub use self::vector::{vector, Vector};

mod projection;
mod vector;

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The default tolerance of approximate equality between vectors and projections.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The nalgebra point type `Vector` converts to and from.
pub type Point2 = na::Point2<Real>;

/// The nalgebra vector type `Vector` converts to and from.
pub type Vector2 = na::Vector2<Real>;
