use crate::math::{Real, DEFAULT_EPSILON};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// The 1D extent of a shape along an axis.
///
/// Always satisfies `min <= max`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck-serialize",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Projection {
    /// The lower bound of the interval.
    pub min: Real,
    /// The upper bound of the interval.
    pub max: Real,
}

impl Projection {
    /// Creates the interval spanned by `a` and `b`, in any order.
    #[inline]
    pub fn new(a: Real, b: Real) -> Self {
        if a <= b {
            Projection { min: a, max: b }
        } else {
            Projection { min: b, max: a }
        }
    }

    /// Replaces the bounds of this interval by the ones spanned by `a` and `b`.
    #[inline]
    pub fn set(&mut self, a: Real, b: Real) -> &mut Self {
        *self = Projection::new(a, b);
        self
    }

    /// The width of this interval.
    #[inline]
    pub fn length(&self) -> Real {
        self.max - self.min
    }

    /// Whether `self` and `other` share at least one point.
    ///
    /// Intervals that only touch at a bound are considered overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.min > other.max || self.max < other.min)
    }

    /// Whether `other` lies entirely inside `self`, bounds included.
    #[inline]
    pub fn contains(&self, other: &Projection) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Whether `other` lies strictly inside `self`, touching neither bound.
    #[inline]
    pub fn strictly_contains(&self, other: &Projection) -> bool {
        self.min < other.min && self.max > other.max
    }

    /// The smallest distance one interval must be pushed by to stop overlapping the other.
    ///
    /// Returns `0.0` for disjoint intervals. When one interval encloses the other the
    /// shortest way out through either bound is returned, which is always non-negative.
    #[inline]
    pub fn overlap_depth(&self, other: &Projection) -> Real {
        if !self.overlaps(other) {
            return 0.0;
        }

        (other.max - self.min).min(self.max - other.min).max(0.0)
    }
}

impl AbsDiffEq for Projection {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        DEFAULT_EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl RelativeEq for Projection {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}

impl UlpsEq for Projection {
    #[inline]
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.min.ulps_eq(&other.min, epsilon, max_ulps)
            && self.max.ulps_eq(&other.max, epsilon, max_ulps)
    }
}
