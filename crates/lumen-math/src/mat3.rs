//! 3×3 matrix.
//!
//! Storage is row-major (`m[row][col]`) and vectors are treated as columns:
//! `m * v` computes `M·v`. `v * m` is accepted as a synonym for the same
//! product.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [1.0, 0.0, 1.0],
//! ]);
//! let inv = m.inverse();
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! assert_eq!(inv * (m * v), v);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use lumen_core::{AlmostEq, Error, PiecewiseCompare, Real, Result, almost_equal, almost_equal_with};

use crate::macros::impl_matrix;
use crate::vec3::Vector3;

/// A 3×3 matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3 {
    /// Rows of the matrix.
    pub m: [[Real; 3]; 3],
}

impl Matrix3 {
    /// Creates from three row vectors.
    #[inline]
    pub const fn from_row_vectors(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self { m: [r0.to_array(), r1.to_array(), r2.to_array()] }
    }

    /// Uniform scale matrix.
    #[inline]
    pub fn scale(s: Real) -> Self {
        Self::diagonal(Vector3::splat(s))
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> Real {
        let m = &self.m;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][0] * m[1][2] * m[2][1]
    }

    /// Inverse, or `None` if the determinant is zero within tolerance.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if almost_equal(det, 0.0) {
            return None;
        }
        let m = &self.m;
        let inv_det = 1.0 / det;

        // Adjugate (transposed cofactors) over det
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }
}

impl_matrix!(Matrix3, 3, Vector3, glam::Mat3);

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Matrix3> {
        (0..40)
            .map(|i| {
                let f = i as Real;
                Matrix3::from_rows([
                    [1.0 + f * 0.1, (f * 0.7).sin(), 0.3],
                    [(f * 1.3).cos(), 2.0, -0.5 + f * 0.05],
                    [0.25, (f * 0.2).sin() * 2.0, 1.5],
                ])
            })
            .collect()
    }

    #[test]
    fn test_determinant_known() {
        let m = Matrix3::from_rows([[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]);
        assert_eq!(m.determinant(), 49.0);
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_property() {
        for m in samples() {
            if let Some(inv) = m.try_inverse() {
                assert!((m * inv).almost_eq_with(&Matrix3::IDENTITY, 1e-4), "{m:?}");
                assert!((inv * m).almost_eq_with(&Matrix3::IDENTITY, 1e-4), "{m:?}");
            }
        }
    }

    #[test]
    fn test_non_symmetric_inverse() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let expected = Matrix3::from_rows([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]);
        assert!(m.inverse().almost_eq_with(&expected, 1e-4));
    }

    #[test]
    fn test_singular_gives_identity() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), Matrix3::IDENTITY);
        let mut n = m;
        assert!(!n.invert());
        assert_eq!(n, m);
    }

    #[test]
    fn test_transpose_and_trace() {
        for (a, b) in samples().iter().zip(samples().iter().rev()) {
            assert_eq!(a.transposed().transposed(), *a);
            assert!(almost_equal_with((*a + *b).trace(), a.trace() + b.trace(), 1e-5));
            assert_eq!(a.transposed().trace(), a.trace());
        }
    }

    #[test]
    fn test_rows_and_columns() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.column(1), Vector3::new(2.0, 5.0, 8.0));
        assert_eq!(m[(2, 0)], 7.0);
        assert_eq!(m[2], [7.0, 8.0, 9.0]);
        assert_eq!(m.at(1, 2), Ok(6.0));
        assert!(m.at(3, 0).unwrap_err().is_range_error());
        assert_eq!(Matrix3::from_cols(m.m), m.transposed());
        assert_eq!(m.data().len(), 9);
    }

    #[test]
    fn test_combine() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.combine(Vector3::X), m.column(0));
        assert_eq!(Vector3::Y * m, m.column(1));
    }

    #[test]
    fn test_scalar_ops() {
        let m = Matrix3::scale(2.0);
        assert_eq!(m * 0.5, Matrix3::IDENTITY);
        assert_eq!(m / 2.0, Matrix3::IDENTITY);
        assert_eq!(-m + m, Matrix3::ZERO);
        let mut n = m;
        n -= Matrix3::IDENTITY;
        assert_eq!(n, Matrix3::IDENTITY);
    }

    #[test]
    fn test_glam_agrees() {
        let s = samples();
        for w in s.windows(2) {
            let prod = Matrix3::from(w[0].to_glam() * w[1].to_glam());
            assert!(prod.almost_eq_with(&(w[0] * w[1]), 1e-4));
            assert!(almost_equal_with(w[0].determinant(), w[0].to_glam().determinant(), 1e-4));
        }
    }
}
