//! 3D vector.
//!
//! [`Vector3`] is the workhorse for positions, directions and scales. The
//! coordinate system is right-handed: `X.cross(Y) == Z`.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(-2.0, 0.5, 4.0);
//! assert_eq!(a.dot(b), b.dot(a));
//! assert_eq!(a.cross(b), -b.cross(a));
//! assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use lumen_core::{
    AlmostEq, DEFAULT_TOLERANCE, Error, PiecewiseCompare, Real, Result, almost_equal,
    almost_equal_with, clamp,
};

use crate::angle::{Radian, arccos};
use crate::macros::impl_vector;
use crate::vec2::Vector2;
use crate::vec4::Vector4;

/// A 3D vector with `x`, `y` and `z` components.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vector3;
///
/// let v = Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v[2], 4.0);
/// assert!(v.normalized().is_normalized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component
    pub x: Real,
    /// Y component
    pub y: Real,
    /// Z component
    pub z: Real,
}

impl Vector3 {
    /// Unit X (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// A unit vector orthogonal to `self`.
    ///
    /// Crosses with +X, falling back to +Y when `self` is parallel to X.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn perpendicular(self) -> Self {
        let perp = self.cross(Self::X);
        if almost_equal(perp.square_magnitude(), 0.0) {
            self.cross(Self::Y).normalized()
        } else {
            perp.normalized()
        }
    }

    /// Angle to `other`; in 3D this equals [`Vector3::angle_between`].
    #[inline]
    pub fn angle_to(self, other: Self) -> Radian {
        self.angle_between(other)
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: Real) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops the `z` component.
    #[inline]
    pub const fn truncate(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl_vector!(Vector3, 3, glam::Vec3, x => 0, y => 1, z => 2);

impl From<Vector4> for Vector3 {
    /// Drops `w`.
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector2> for Vector3 {
    /// Sets `z` to zero.
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}
