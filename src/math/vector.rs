use crate::math::{Point2, Real, Vector2, DEFAULT_EPSILON};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num::Zero;

/// A 2D point or displacement.
///
/// `Vector` is a plain value type: every named operation returns a new vector.
/// The `*_mut` variants perform the same operation in place and return `&mut Self`
/// for chaining; they are meant for hot loops that want to avoid temporaries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck-serialize",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Vector {
    /// The horizontal coordinate.
    pub x: Real,
    /// The vertical coordinate.
    pub y: Real,
}

/// Shortcut for [`Vector::new`].
#[inline]
pub fn vector(x: Real, y: Real) -> Vector {
    Vector::new(x, y)
}

impl Vector {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Vector { x, y }
    }

    /// The origin of the coordinate system.
    ///
    /// Same value as [`Vector::zero`], but reads better when used as a position.
    #[inline]
    pub const fn origin() -> Self {
        Vector::new(0.0, 0.0)
    }

    /// Sets both coordinates of this vector.
    #[inline]
    pub fn set(&mut self, x: Real, y: Real) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// The dot product of `self` and `other`.
    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y
    }

    /// Multiplies both coordinates by `factor`.
    #[inline]
    pub fn scale(self, factor: Real) -> Self {
        Vector::new(self.x * factor, self.y * factor)
    }

    /// In-place version of [`Vector::scale`].
    #[inline]
    pub fn scale_mut(&mut self, factor: Real) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// The opposite of this vector.
    #[inline]
    pub fn negate(self) -> Self {
        Vector::new(-self.x, -self.y)
    }

    /// In-place version of [`Vector::negate`].
    #[inline]
    pub fn negate_mut(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Component-wise product of `self` and `other`.
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Vector::new(self.x * other.x, self.y * other.y)
    }

    /// In-place version of [`Vector::component_mul`].
    #[inline]
    pub fn component_mul_mut(&mut self, other: Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    /// Component-wise division of `self` by `other`.
    ///
    /// No guard is applied: a zero component in `other` yields an infinite or NaN component.
    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Vector::new(self.x / other.x, self.y / other.y)
    }

    /// In-place version of [`Vector::component_div`].
    #[inline]
    pub fn component_div_mut(&mut self, other: Self) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    /// The squared length of this vector.
    #[inline]
    pub fn mag_squared(self) -> Real {
        self.dot(self)
    }

    /// The length of this vector.
    #[inline]
    pub fn mag(self) -> Real {
        self.mag_squared().sqrt()
    }

    /// The distance between the points `self` and `other`.
    #[inline]
    pub fn dist(self, other: Self) -> Real {
        (other - self).mag()
    }

    /// The unit vector pointing in the same direction as `self`.
    ///
    /// The zero vector has no direction; by convention it normalizes to `(0, 1)`.
    #[inline]
    pub fn norm(self) -> Self {
        let mag = self.mag();

        if mag > 0.0 {
            Vector::new(self.x / mag, self.y / mag)
        } else {
            Vector::new(0.0, 1.0)
        }
    }

    /// In-place version of [`Vector::norm`].
    #[inline]
    pub fn norm_mut(&mut self) -> &mut Self {
        *self = self.norm();
        self
    }

    /// This vector rotated by a quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Vector::new(-self.y, self.x)
    }

    /// In-place version of [`Vector::perp`].
    #[inline]
    pub fn perp_mut(&mut self) -> &mut Self {
        *self = self.perp();
        self
    }
}

impl Zero for Vector {
    #[inline]
    fn zero() -> Self {
        Vector::origin()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<Real> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Real) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for Real {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl MulAssign<Real> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        let _ = self.scale_mut(rhs);
    }
}

impl Div<Real> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: Real) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<Real> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        self.negate()
    }
}

impl From<Vector2> for Vector {
    #[inline]
    fn from(v: Vector2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2 {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Point2> for Vector {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<Vector> for Point2 {
    #[inline]
    fn from(v: Vector) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<[Real; 2]> for Vector {
    #[inline]
    fn from(v: [Real; 2]) -> Self {
        Vector::new(v[0], v[1])
    }
}

impl From<(Real, Real)> for Vector {
    #[inline]
    fn from((x, y): (Real, Real)) -> Self {
        Vector::new(x, y)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        DEFAULT_EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    #[inline]
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
