//! 2D vector.
//!
//! ```rust
//! use lumen_math::{deg, Vector2};
//!
//! let v = Vector2::from_magnitude_direction(2.0, deg(90.0).to_radian());
//! assert!((v.magnitude() - 2.0).abs() < 1e-6);
//! assert_eq!(Vector2::X.perpendicular(), Vector2::Y);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use lumen_core::{
    AlmostEq, DEFAULT_TOLERANCE, Error, PiecewiseCompare, Real, Result, almost_equal,
    almost_equal_with, clamp,
};

use crate::angle::{Angle, AngleUnit, Radian, Radians, arccos};
use crate::macros::impl_vector;

/// A 2D vector with `x` and `y` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// X component
    pub x: Real,
    /// Y component
    pub y: Real,
}

impl Vector2 {
    /// Unit X (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit Y (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Vector of length `magnitude` pointing `direction` counter-clockwise
    /// from +X.
    #[inline]
    pub fn from_magnitude_direction<U: AngleUnit>(magnitude: Real, direction: Angle<U>) -> Self {
        let (sin, cos) = direction.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    /// Z component of the 3D cross product of `(x, y, 0)` and `(o.x, o.y, 0)`.
    #[inline]
    pub fn cross(self, other: Self) -> Real {
        self.x * other.y - self.y * other.x
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub const fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Counter-clockwise angle from `self` to `other`, in `[0, 2π)`.
    pub fn angle_to(self, other: Self) -> Radian {
        let angle = self.angle_between(other);
        if self.cross(other) < 0.0 {
            Angle::<Radians>::REVOLUTION - angle
        } else {
            angle
        }
    }

    /// Whether `self` and `other` span the plane.
    #[inline]
    pub fn is_linearly_independent(self, other: Self) -> bool {
        !almost_equal(self.cross(other), 0.0)
    }
}

impl_vector!(Vector2, 2, glam::Vec2, x => 0, y => 1);
