//! Matrix extraction shared by every transform.

use lumen_math::Matrix4;

/// A value that can produce a 4×4 matrix.
///
/// Implemented by [`Transform`](crate::Transform), [`Camera`](crate::Camera)
/// and [`Projection`](crate::Projection); the lazy and interpolated wrappers
/// are generic over it.
pub trait ExtractMatrix {
    /// Writes the matrix into `out`.
    fn extract_matrix(&self, out: &mut Matrix4);

    /// Returns the matrix by value.
    #[inline]
    fn to_matrix4(&self) -> Matrix4 {
        let mut out = Matrix4::IDENTITY;
        self.extract_matrix(&mut out);
        out
    }
}
