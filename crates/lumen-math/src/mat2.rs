//! 2×2 matrix.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use lumen_core::{AlmostEq, Error, PiecewiseCompare, Real, Result, almost_equal, almost_equal_with};

use crate::macros::impl_matrix;
use crate::vec2::Vector2;

/// A 2×2 matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2 {
    /// Rows of the matrix.
    pub m: [[Real; 2]; 2],
}

impl Matrix2 {
    /// Creates from individual elements, row by row.
    #[inline]
    pub const fn new(m00: Real, m01: Real, m10: Real, m11: Real) -> Self {
        Self { m: [[m00, m01], [m10, m11]] }
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> Real {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Inverse, or `None` if the determinant is zero within tolerance.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if almost_equal(det, 0.0) {
            return None;
        }
        let inv_det = 1.0 / det;
        let m = &self.m;
        Some(Self::new(
            m[1][1] * inv_det,
            -m[0][1] * inv_det,
            -m[1][0] * inv_det,
            m[0][0] * inv_det,
        ))
    }
}

impl_matrix!(Matrix2, 2, Vector2, glam::Mat2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_default() {
        assert_eq!(Matrix2::default(), Matrix2::IDENTITY);
        assert_eq!(Matrix2::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix2::IDENTITY.trace(), 2.0);
    }

    #[test]
    fn test_inverse() {
        let m = Matrix2::new(4.0, 7.0, 2.0, 6.0);
        assert_eq!(m.determinant(), 10.0);
        let inv = m.inverse();
        assert!((m * inv).almost_eq(&Matrix2::IDENTITY));
        assert!((inv * m).almost_eq(&Matrix2::IDENTITY));
    }

    #[test]
    fn test_singular() {
        let m = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), Matrix2::IDENTITY);
        let mut n = m;
        assert!(!n.invert());
        assert_eq!(n, m);
    }

    #[test]
    fn test_combine_and_row_vector_spelling() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(m.combine(v), Vector2::new(3.0, 7.0));
        assert_eq!(m * v, v * m);
    }

    #[test]
    fn test_transpose() {
        let mut m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        m.transpose();
        assert_eq!(m, Matrix2::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn test_glam_agrees() {
        let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2::new(0.5, -1.0, 2.0, 0.0);
        let v = Vector2::new(3.0, -2.0);
        assert!(Matrix2::from(a.to_glam() * b.to_glam()).almost_eq(&(a * b)));
        assert_eq!(Vector2::from(a.to_glam() * v.to_glam()), a * v);
    }
}
