//! 4D vector, used for homogeneous coordinates.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use lumen_core::{
    AlmostEq, DEFAULT_TOLERANCE, Error, PiecewiseCompare, Real, Result, almost_equal,
    almost_equal_with, clamp,
};

use crate::angle::{Radian, arccos};
use crate::macros::impl_vector;
use crate::vec3::Vector3;

/// A 4D vector with `x`, `y`, `z` and `w` components.
///
/// Points are `w = 1`, directions `w = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
    /// X component
    pub x: Real,
    /// Y component
    pub y: Real,
    /// Z component
    pub z: Real,
    /// W component
    pub w: Real,
}

impl Vector4 {
    /// Unit X (1, 0, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit Y (0, 1, 0, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit Z (0, 0, 1, 0).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit W (0, 0, 0, 1).
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point `(p, 1)`.
    #[inline]
    pub const fn point(p: Vector3) -> Self {
        p.extend(1.0)
    }

    /// Homogeneous direction `(d, 0)`.
    #[inline]
    pub const fn direction(d: Vector3) -> Self {
        d.extend(0.0)
    }

    /// Cross product of the `xyz` parts; `w` is zero.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        self.xyz().cross(other.xyz()).extend(0.0)
    }

    /// Angle to `other`; equals [`Vector4::angle_between`].
    #[inline]
    pub fn angle_to(self, other: Self) -> Radian {
        self.angle_between(other)
    }

    /// The `xyz` part.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl_vector!(Vector4, 4, glam::Vec4, x => 0, y => 1, z => 2, w => 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_zeroes_w() {
        let a = Vector4::new(1.0, 0.0, 0.0, 5.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 7.0);
        assert_eq!(a.cross(b), Vector4::Z);
    }

    #[test]
    fn test_dot_and_magnitude() {
        let v = Vector4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.size(), 4);
    }

    #[test]
    fn test_point_direction() {
        let p = Vector4::point(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector4::direction(Vector3::X), Vector4::X);
        assert_eq!(p.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_operators() {
        let a = Vector4::splat(2.0);
        let b = Vector4::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(a * b, Vector4::new(2.0, 4.0, 8.0, 16.0));
        assert_eq!(b / a, Vector4::new(0.5, 1.0, 2.0, 4.0));
        assert_eq!(b - b, Vector4::ZERO);
        let mut c = b;
        c *= 2.0;
        c -= b;
        assert_eq!(c, b);
    }

    #[test]
    fn test_almost_eq() {
        let a = Vector4::new(1.0, 1.0, 1.0, 1.0);
        let b = a + Vector4::splat(1e-7);
        assert_ne!(a, b);
        assert!(a.almost_eq(&b));
        assert!(!a.almost_eq_with(&(a + Vector4::W * 0.1), 0.01));
    }
}
