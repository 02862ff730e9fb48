//! Shapes supported by sat2d.

pub use self::circle::Circle;
pub use self::error::ShapeError;
pub use self::polygon::Polygon;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};

mod circle;
mod error;
mod polygon;
mod shape;
