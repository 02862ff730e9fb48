//! Non-persistent collision queries.
//!
//! # General case
//! The most general entry points are:
//!
//! * [`Sat::intersects`] (or the free function [`query::intersects()`](intersects)) to compute
//!   the minimum translation separating two overlapping shapes, as a [`Collision`].
//! * [`Sat::collides`] to only determine whether two shapes overlap.
//!
//! # Specific cases
//! The functions exported by the [`sat`] submodule are versions of the above for shapes
//! known at compile-time, e.g. [`sat::intersects_circle_circle`]. They have the form
//! `[operation]_[shape1]_[shape2]()`.

pub use self::collision::Collision;
pub use self::error::Unsupported;
pub use self::sat_dispatcher::{collides, intersects, Sat};

mod collision;
mod error;
pub mod sat;
mod sat_dispatcher;
