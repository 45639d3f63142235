//! 4×4 matrix for affine and projective transforms.
//!
//! Same conventions as [`Matrix3`]: row-major storage, column vectors.
//! A translation lives in the last column and `m * Vector4::point(p)`
//! applies it.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4, Vector3};
//!
//! let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
//! let s = Matrix4::scale(Vector3::splat(2.0));
//! let p = (t * s).transform_point(Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(p, Vector3::new(3.0, 2.0, 3.0));
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use lumen_core::{AlmostEq, Error, PiecewiseCompare, Real, Result, almost_equal, almost_equal_with};

use crate::macros::impl_matrix;
use crate::mat3::Matrix3;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// A 4×4 matrix stored row-major, 16-byte aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Matrix4 {
    /// Rows of the matrix.
    pub m: [[Real; 4]; 4],
}

// SAFETY: 64 bytes of f32 with 16-byte alignment leaves no padding, and
// every bit pattern is a valid f32.
unsafe impl bytemuck::Zeroable for Matrix4 {}
// SAFETY: see above.
unsafe impl bytemuck::Pod for Matrix4 {}

impl Matrix4 {
    /// Creates from four row vectors.
    #[inline]
    pub const fn from_row_vectors(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self { m: [r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()] }
    }

    /// Translation by `t`.
    #[inline]
    pub fn translation(t: Vector3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    /// Non-uniform scale by `s`.
    #[inline]
    pub fn scale(s: Vector3) -> Self {
        Self::diagonal(s.extend(1.0))
    }

    /// The 3×3 matrix left after removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3 {
        let mut out = Matrix3::ZERO;
        for (r, src) in (0..4).filter(|&r| r != row).enumerate() {
            for (c, s) in (0..4).filter(|&c| c != col).enumerate() {
                out.m[r][c] = self.m[src][s];
            }
        }
        out
    }

    /// Determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        (0..4)
            .map(|c| {
                let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
                sign * self.m[0][c] * self.minor(0, c).determinant()
            })
            .sum()
    }

    /// Inverse, or `None` if the determinant is zero within tolerance.
    pub fn try_inverse(&self) -> Option<Self> {
        let a = &self.m;

        // 2×2 sub-determinants of the top and bottom row pairs
        let s0 = a[0][0] * a[1][1] - a[1][0] * a[0][1];
        let s1 = a[0][0] * a[1][2] - a[1][0] * a[0][2];
        let s2 = a[0][0] * a[1][3] - a[1][0] * a[0][3];
        let s3 = a[0][1] * a[1][2] - a[1][1] * a[0][2];
        let s4 = a[0][1] * a[1][3] - a[1][1] * a[0][3];
        let s5 = a[0][2] * a[1][3] - a[1][2] * a[0][3];

        let c5 = a[2][2] * a[3][3] - a[3][2] * a[2][3];
        let c4 = a[2][1] * a[3][3] - a[3][1] * a[2][3];
        let c3 = a[2][1] * a[3][2] - a[3][1] * a[2][2];
        let c2 = a[2][0] * a[3][3] - a[3][0] * a[2][3];
        let c1 = a[2][0] * a[3][2] - a[3][0] * a[2][2];
        let c0 = a[2][0] * a[3][1] - a[3][0] * a[2][1];

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if almost_equal(det, 0.0) {
            return None;
        }
        let inv_det = 1.0 / det;

        let out = Self::from_rows([
            [
                a[1][1] * c5 - a[1][2] * c4 + a[1][3] * c3,
                -a[0][1] * c5 + a[0][2] * c4 - a[0][3] * c3,
                a[3][1] * s5 - a[3][2] * s4 + a[3][3] * s3,
                -a[2][1] * s5 + a[2][2] * s4 - a[2][3] * s3,
            ],
            [
                -a[1][0] * c5 + a[1][2] * c2 - a[1][3] * c1,
                a[0][0] * c5 - a[0][2] * c2 + a[0][3] * c1,
                -a[3][0] * s5 + a[3][2] * s2 - a[3][3] * s1,
                a[2][0] * s5 - a[2][2] * s2 + a[2][3] * s1,
            ],
            [
                a[1][0] * c4 - a[1][1] * c2 + a[1][3] * c0,
                -a[0][0] * c4 + a[0][1] * c2 - a[0][3] * c0,
                a[3][0] * s4 - a[3][1] * s2 + a[3][3] * s0,
                -a[2][0] * s4 + a[2][1] * s2 - a[2][3] * s0,
            ],
            [
                -a[1][0] * c3 + a[1][1] * c1 - a[1][2] * c0,
                a[0][0] * c3 - a[0][1] * c1 + a[0][2] * c0,
                -a[3][0] * s3 + a[3][1] * s1 - a[3][2] * s0,
                a[2][0] * s3 - a[2][1] * s1 + a[2][2] * s0,
            ],
        ]);
        Some(out * inv_det)
    }

    /// Applies the full transform to the point `(p, 1)` and drops `w`.
    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        self.combine(Vector4::point(p)).xyz()
    }

    /// Applies the linear part to the direction `(d, 0)`.
    #[inline]
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        self.combine(Vector4::direction(d)).xyz()
    }

    /// Applies the transform to `(p, 1)` and divides by the resulting `w`.
    ///
    /// Returns the undivided `xyz` when `w` is zero.
    pub fn project_point(&self, p: Vector3) -> Vector3 {
        let h = self.combine(Vector4::point(p));
        if h.w == 0.0 { h.xyz() } else { h.xyz() / h.w }
    }
}

impl_matrix!(Matrix4, 4, Vector4, glam::Mat4);

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Matrix4> {
        (0..30)
            .map(|i| {
                let f = i as Real;
                Matrix4::from_rows([
                    [2.0, (f * 0.3).sin(), 0.1 * f, 1.0],
                    [0.5, 1.0 + (f * 0.9).cos(), -0.25, 2.0],
                    [(f * 0.4).sin(), 0.0, 3.0, -1.0],
                    [0.0, 0.2, (f * 0.1).cos(), 1.0],
                ])
            })
            .collect()
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Matrix4>(), 16);
        assert_eq!(std::mem::size_of::<Matrix4>(), 64);
        let bytes: &[u8] = bytemuck::bytes_of(&Matrix4::IDENTITY);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_inverse_property() {
        let mut checked = 0;
        for m in samples() {
            if let Some(inv) = m.try_inverse() {
                assert!((m * inv).almost_eq_with(&Matrix4::IDENTITY, 1e-4), "{m:?}");
                assert!((inv * m).almost_eq_with(&Matrix4::IDENTITY, 1e-4), "{m:?}");
                checked += 1;
            }
        }
        assert!(checked > 20);
    }

    #[test]
    fn test_determinant_matches_glam() {
        for m in samples() {
            let expected = m.to_glam().determinant();
            assert!(almost_equal_with(m.determinant(), expected, 1e-3), "{m:?}");
            if expected.abs() > 0.1 {
                let inv = Matrix4::from(m.to_glam().inverse());
                assert!(m.inverse().almost_eq_with(&inv, 1e-3));
            }
        }
    }

    #[test]
    fn test_singular() {
        let mut m = Matrix4::IDENTITY;
        m.m[3] = m.m[2];
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix4::IDENTITY);
        let before = m;
        assert!(!m.invert());
        assert_eq!(m, before);
    }

    #[test]
    fn test_translation_scale() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point(Vector3::ZERO), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_direction(Vector3::X), Vector3::X);
        assert_eq!(t.inverse(), Matrix4::translation(Vector3::new(-1.0, -2.0, -3.0)));
        let s = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(s.determinant(), 24.0);
        assert_eq!(s.trace(), 10.0);
    }

    #[test]
    fn test_minor() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(
            m.minor(1, 2),
            Matrix3::from_rows([[1.0, 2.0, 4.0], [9.0, 10.0, 12.0], [13.0, 14.0, 16.0]])
        );
    }

    #[test]
    fn test_project_point() {
        let mut m = Matrix4::IDENTITY;
        m.m[3] = [0.0, 0.0, 1.0, 0.0];
        assert_eq!(m.project_point(Vector3::new(2.0, 4.0, 2.0)), Vector3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_row_vector_spelling() {
        let m = samples()[3];
        let v = Vector4::new(1.0, -2.0, 0.5, 1.0);
        assert_eq!(v * m, m * v);
        assert_eq!(m.row(0), Vector4::from_array(m.m[0]));
    }
}
