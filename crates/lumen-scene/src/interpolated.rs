//! Blend between the state before and after the latest edit.
//!
//! Renderers that draw faster than the simulation ticks keep the previous
//! and current state of each transform and blend between them by the
//! fraction of the tick that has elapsed.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4, Vector3};
//! use lumen_scene::{InterpolatedTransform, Transform};
//!
//! let mut t = InterpolatedTransform::new(Transform::new());
//! t.edit().set_origin(Vector3::new(4.0, 0.0, 0.0));
//!
//! let mut m = Matrix4::IDENTITY;
//! assert!(t.update_interpolated_matrix(&mut m, 0.25));
//! assert_eq!(m.m[0][3], 1.0);
//! ```

use std::ops::{Deref, DerefMut};

use lumen_core::Real;
use lumen_math::{Interpolate, Matrix4};

use crate::camera::Camera;
use crate::extract::ExtractMatrix;
use crate::transform::Transform;

/// Two snapshots of a transform plus a dirty flag.
///
/// Mutation goes through [`InterpolatedTransform::edit`]. Opening an edit
/// copies the current state into the previous slot; closing it marks the
/// wrapper dirty. Updates write only when dirty.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedTransform<T> {
    previous: T,
    current: T,
    dirty: bool,
}

/// Interpolated model transform.
pub type InterpolatedModelTransform = InterpolatedTransform<Transform>;
/// Interpolated camera.
pub type InterpolatedCamera = InterpolatedTransform<Camera>;

/// Scoped mutable access to the current state of an
/// [`InterpolatedTransform`].
///
/// The previous snapshot is taken when the guard is created, not when it
/// is dropped: after the edit, `previous` holds the state from before it
/// and `current` the edited state, so blending between them at any
/// `alpha` in `(0, 1)` gives an intermediate pose. Releasing the guard
/// only marks the owner dirty.
pub struct TransformEdit<'a, T> {
    owner: &'a mut InterpolatedTransform<T>,
}

impl<T: Clone + Default> Default for InterpolatedTransform<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> InterpolatedTransform<T> {
    /// Both snapshots start as `transform`; not dirty.
    pub fn new(transform: T) -> Self {
        Self {
            previous: transform.clone(),
            current: transform,
            dirty: false,
        }
    }

    /// Opens an edit of the current state.
    ///
    /// The current state is first copied to the previous slot, so a later
    /// interpolation runs from the pre-edit state to the post-edit state.
    pub fn edit(&mut self) -> TransformEdit<'_, T> {
        self.previous.clone_from(&self.current);
        TransformEdit { owner: self }
    }
}

impl<T> InterpolatedTransform<T> {
    /// The state after the latest edit.
    #[inline]
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The state before the latest edit.
    #[inline]
    pub fn previous(&self) -> &T {
        &self.previous
    }

    /// Whether the next update will write.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl<T: ExtractMatrix> InterpolatedTransform<T> {
    /// Writes the current state's matrix if dirty, then clears the flag.
    ///
    /// Returns whether `out` was written.
    pub fn update_matrix(&mut self, out: &mut Matrix4) -> bool {
        if !self.dirty {
            return false;
        }
        self.current.extract_matrix(out);
        self.dirty = false;
        true
    }
}

impl<T: ExtractMatrix + Interpolate> InterpolatedTransform<T> {
    /// Writes the matrix of the state `alpha` of the way from previous to
    /// current, if dirty, then clears the flag.
    ///
    /// Returns whether `out` was written.
    pub fn update_interpolated_matrix(&mut self, out: &mut Matrix4, alpha: Real) -> bool {
        if !self.dirty {
            return false;
        }
        self.previous.interpolate(&self.current, alpha).extract_matrix(out);
        self.dirty = false;
        true
    }
}

impl<T> Deref for InterpolatedTransform<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.current
    }
}

impl<T> Deref for TransformEdit<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.owner.current
    }
}

impl<T> DerefMut for TransformEdit<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.owner.current
    }
}

impl<T> Drop for TransformEdit<'_, T> {
    fn drop(&mut self) {
        self.owner.dirty = true;
    }
}
