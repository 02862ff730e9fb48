use crate::math::{Real, Vector};
use crate::shape::Shape;
use core::mem;

/// Geometric description of the overlap between two shapes `a` and `b`.
///
/// A `Collision` is a plain value computed fresh by each query: it stays valid
/// for as long as the caller keeps it, but describes the shapes as they were
/// when it was computed.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Collision {
    /// Unit vector pointing from `b` toward the exterior of `a`.
    ///
    /// Translating `a` by `normal * overlap` separates the two shapes.
    pub normal: Vector,

    /// Penetration depth along `normal`. Always non-negative; zero for touching shapes.
    pub overlap: Real,

    /// Whether `a` is entirely contained inside `b`.
    pub a_in_b: bool,

    /// Whether `b` is entirely contained inside `a`.
    pub b_in_a: bool,
}

impl Collision {
    /// Creates a new collision.
    #[inline]
    pub fn new(normal: Vector, overlap: Real, a_in_b: bool, b_in_a: bool) -> Self {
        Collision {
            normal,
            overlap,
            a_in_b,
            b_in_a,
        }
    }

    /// The minimum translation vector: `normal * overlap`.
    #[inline]
    pub fn translation(&self) -> Vector {
        self.normal * self.overlap
    }

    /// The translation to apply to `a` to push it `margin` past the contact.
    #[inline]
    pub fn resolution(&self, margin: Real) -> Vector {
        self.normal * (self.overlap + margin)
    }

    /// Moves `a` out of `b` by [`Collision::resolution`].
    ///
    /// `a` must be the first shape of the query that produced this collision.
    #[inline]
    pub fn resolve<S: Shape + ?Sized>(&self, a: &mut S, margin: Real) {
        a.translate(self.resolution(margin));
    }

    /// Swaps the roles of `a` and `b` in this collision.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        mem::swap(&mut self.a_in_b, &mut self.b_in_a);
    }

    /// Returns a new collision with the roles of `a` and `b` swapped.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
