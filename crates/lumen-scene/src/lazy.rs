//! Recompute a matrix only after the transform changed.

use std::ops::{Deref, DerefMut};

use lumen_math::Matrix4;

use crate::camera::Camera;
use crate::extract::ExtractMatrix;
use crate::projection::Projection;
use crate::transform::Transform;

/// Wraps a transform with a dirty flag.
///
/// Any mutable access marks the wrapper dirty; [`LazyTransform::update_matrix`]
/// writes the matrix only when dirty. A new wrapper starts dirty so the first
/// update always writes.
///
/// ```rust
/// use lumen_math::Matrix4;
/// use lumen_scene::{LazyTransform, Transform};
///
/// let mut lazy = LazyTransform::new(Transform::new());
/// let mut m = Matrix4::ZERO;
/// assert!(lazy.update_matrix(&mut m));
/// assert!(!lazy.update_matrix(&mut m));
///
/// lazy.translate_x(1.0);
/// assert!(lazy.update_matrix(&mut m));
/// assert_eq!(m.m[0][3], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LazyTransform<T> {
    transform: T,
    dirty: bool,
}

/// Lazily updated model matrix.
pub type LazyModelTransform = LazyTransform<Transform>;
/// Lazily updated view matrix.
pub type LazyCamera = LazyTransform<Camera>;
/// Lazily updated projection matrix.
pub type LazyProjection = LazyTransform<Projection>;

impl<T: Default> Default for LazyTransform<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> LazyTransform<T> {
    /// Wraps `transform`, initially dirty.
    #[inline]
    pub const fn new(transform: T) -> Self {
        Self { transform, dirty: true }
    }

    /// Shared access; does not mark dirty.
    #[inline]
    pub fn get(&self) -> &T {
        &self.transform
    }

    /// Mutable access; marks dirty.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.transform
    }

    /// Whether the next update will write.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next update to write.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Unwraps the transform.
    #[inline]
    pub fn into_inner(self) -> T {
        self.transform
    }
}

impl<T: ExtractMatrix> LazyTransform<T> {
    /// Writes the matrix into `out` if dirty, then clears the flag.
    ///
    /// Returns whether `out` was written.
    pub fn update_matrix(&mut self, out: &mut Matrix4) -> bool {
        if !self.dirty {
            return false;
        }
        self.transform.extract_matrix(out);
        self.dirty = false;
        true
    }
}

impl<T> Deref for LazyTransform<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.transform
    }
}

impl<T> DerefMut for LazyTransform<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T> From<T> for LazyTransform<T> {
    #[inline]
    fn from(transform: T) -> Self {
        Self::new(transform)
    }
}
