//! SIMD batch transforms.
//!
//! Uses the `wide` crate for portable 4-wide SIMD on stable Rust. Each
//! vector is processed as one `f32x4` lane group: the result is the sum of
//! the matrix columns weighted by the vector's components.
//!
//! # Example
//!
//! ```rust
//! use lumen_math::simd::batch_transform_points;
//! use lumen_math::{Matrix4, Vector3};
//!
//! let m = Matrix4::translation(Vector3::new(1.0, 0.0, 0.0));
//! let out = batch_transform_points(&m, &[Vector3::ZERO, Vector3::Y]);
//! assert_eq!(out, vec![Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)]);
//! ```

use wide::f32x4;

use lumen_core::Real;

use crate::mat4::Matrix4;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// Matrix columns loaded into SIMD registers.
#[derive(Debug, Clone, Copy)]
pub struct Columns4([f32x4; 4]);

impl Columns4 {
    /// Loads the columns of `m`.
    #[inline]
    pub fn new(m: &Matrix4) -> Self {
        Self(std::array::from_fn(|c| f32x4::from(m.column(c).to_array())))
    }

    /// `M·v` for one vector.
    #[inline]
    pub fn transform(&self, v: Vector4) -> Vector4 {
        let [c0, c1, c2, c3] = self.0;
        let r = c0 * f32x4::splat(v.x)
            + c1 * f32x4::splat(v.y)
            + c2 * f32x4::splat(v.z)
            + c3 * f32x4::splat(v.w);
        Vector4::from_array(r.to_array())
    }
}

/// `M·v` using SIMD.
#[inline]
pub fn transform_x4(m: &Matrix4, v: Vector4) -> Vector4 {
    Columns4::new(m).transform(v)
}

/// Transforms every vector in `values`.
pub fn batch_transform(m: &Matrix4, values: &[Vector4]) -> Vec<Vector4> {
    let cols = Columns4::new(m);
    values.iter().map(|v| cols.transform(*v)).collect()
}

/// Transforms every vector in place.
pub fn batch_transform_inplace(m: &Matrix4, values: &mut [Vector4]) {
    let cols = Columns4::new(m);
    for v in values {
        *v = cols.transform(*v);
    }
}

/// Transforms points `(p, 1)` and drops `w`.
pub fn batch_transform_points(m: &Matrix4, points: &[Vector3]) -> Vec<Vector3> {
    let cols = Columns4::new(m);
    points
        .iter()
        .map(|p| cols.transform(Vector4::point(*p)).xyz())
        .collect()
}

/// Component-wise `a + (b - a) * t` on four lanes.
#[inline]
pub fn lerp_x4(a: &[Real; 4], b: &[Real; 4], t: Real) -> [Real; 4] {
    let a = f32x4::from(*a);
    let b = f32x4::from(*b);
    (a + (b - a) * f32x4::splat(t)).to_array()
}
