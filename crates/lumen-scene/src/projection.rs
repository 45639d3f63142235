//! Projection transforms.
//!
//! Matrices map view space into OpenGL-style clip space, with depth in
//! `[-1, 1]`. Pair with [`Matrix4::project_point`] to get normalized device
//! coordinates.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Vector3, deg};
//! use lumen_scene::{Depth, ExtractMatrix, Projection};
//!
//! let p = Projection::perspective(deg(90.0), 1.0, Depth::new(1.0, 100.0));
//! let ndc = p.to_matrix4().project_point(Vector3::new(0.0, 0.0, -1.0));
//! assert!((ndc.z + 1.0).abs() < 1e-5);
//! ```

use lumen_core::Real;
use lumen_math::{Angle, AngleUnit, Matrix4, Radian};

use crate::extract::ExtractMatrix;

/// Left and right planes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizontal {
    /// Left plane
    pub left: Real,
    /// Right plane
    pub right: Real,
}

/// Bottom and top planes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertical {
    /// Bottom plane
    pub bottom: Real,
    /// Top plane
    pub top: Real,
}

/// Near and far planes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depth {
    /// Near plane
    pub near: Real,
    /// Far plane
    pub far: Real,
}

impl Horizontal {
    /// Creates the pair.
    #[inline]
    pub const fn new(left: Real, right: Real) -> Self {
        Self { left, right }
    }
}

impl Vertical {
    /// Creates the pair.
    #[inline]
    pub const fn new(bottom: Real, top: Real) -> Self {
        Self { bottom, top }
    }
}

impl Depth {
    /// Creates the pair.
    #[inline]
    pub const fn new(near: Real, far: Real) -> Self {
        Self { near, far }
    }
}

/// An axis-aligned viewing box with strictly ordered planes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipSpace {
    horizontal: Horizontal,
    vertical: Vertical,
    depth: Depth,
}

impl ClipSpace {
    /// Creates from the three plane pairs.
    ///
    /// # Panics
    ///
    /// Panics unless `left < right`, `bottom < top` and `near < far`.
    pub fn new(horizontal: Horizontal, vertical: Vertical, depth: Depth) -> Self {
        assert!(horizontal.left < horizontal.right, "clip space requires left < right");
        assert!(vertical.bottom < vertical.top, "clip space requires bottom < top");
        assert!(depth.near < depth.far, "clip space requires near < far");
        Self::new_unchecked(horizontal, vertical, depth)
    }

    /// Creates from the six planes.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ClipSpace::new`].
    #[inline]
    pub fn make(left: Real, right: Real, bottom: Real, top: Real, near: Real, far: Real) -> Self {
        Self::new(Horizontal::new(left, right), Vertical::new(bottom, top), Depth::new(near, far))
    }

    /// A box centred on the origin: `[-h, h] × [-v, v] × [-d, d]`.
    ///
    /// # Panics
    ///
    /// Panics unless all three extents are positive.
    pub fn make_symmetric(horizontal: Real, vertical: Real, distance: Real) -> Self {
        assert!(horizontal > 0.0, "horizontal extent must be positive");
        assert!(vertical > 0.0, "vertical extent must be positive");
        assert!(distance > 0.0, "depth extent must be positive");
        Self::make_unchecked(-horizontal, horizontal, -vertical, vertical, -distance, distance)
    }

    /// Creates without checking plane order.
    #[inline]
    pub const fn new_unchecked(horizontal: Horizontal, vertical: Vertical, depth: Depth) -> Self {
        Self { horizontal, vertical, depth }
    }

    /// Creates from six planes without checking their order.
    #[inline]
    pub const fn make_unchecked(
        left: Real,
        right: Real,
        bottom: Real,
        top: Real,
        near: Real,
        far: Real,
    ) -> Self {
        Self::new_unchecked(Horizontal::new(left, right), Vertical::new(bottom, top), Depth::new(near, far))
    }

    /// Left and right planes.
    #[inline]
    pub fn horizontal(&self) -> Horizontal {
        self.horizontal
    }

    /// Bottom and top planes.
    #[inline]
    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    /// Near and far planes.
    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }
}

/// A projection: none, perspective or orthographic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    /// Identity matrix.
    #[default]
    Identity,
    /// Symmetric perspective frustum.
    Perspective {
        /// Vertical field of view
        fov: Radian,
        /// Width over height
        aspect_ratio: Real,
        /// Near and far planes
        depth: Depth,
    },
    /// Parallel projection of a clip-space box.
    Orthographic(ClipSpace),
}

impl Projection {
    /// The identity projection.
    #[inline]
    pub const fn identity() -> Self {
        Self::Identity
    }

    /// Perspective projection.
    ///
    /// # Panics
    ///
    /// Panics unless `fov > 0`, `aspect_ratio > 0` and `depth.near < depth.far`.
    pub fn perspective<U: AngleUnit>(fov: Angle<U>, aspect_ratio: Real, depth: Depth) -> Self {
        let fov = fov.to_radian();
        assert!(fov.value() > 0.0, "field of view must be positive");
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        assert!(depth.near < depth.far, "perspective requires near < far");
        Self::Perspective { fov, aspect_ratio, depth }
    }

    /// Perspective projection without argument checks.
    #[inline]
    pub fn perspective_unchecked<U: AngleUnit>(fov: Angle<U>, aspect_ratio: Real, depth: Depth) -> Self {
        Self::Perspective { fov: fov.to_radian(), aspect_ratio, depth }
    }

    /// Orthographic projection of the box given by six planes.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ClipSpace::make`].
    #[inline]
    pub fn orthographic(left: Real, right: Real, bottom: Real, top: Real, near: Real, far: Real) -> Self {
        Self::Orthographic(ClipSpace::make(left, right, bottom, top, near, far))
    }

    /// Orthographic projection of `space`.
    #[inline]
    pub const fn orthographic_space(space: ClipSpace) -> Self {
        Self::Orthographic(space)
    }

    /// Whether this is [`Projection::Identity`].
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Whether this is a perspective projection.
    #[inline]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective { .. })
    }

    /// Whether this is an orthographic projection.
    #[inline]
    pub fn is_orthographic(&self) -> bool {
        matches!(self, Self::Orthographic(_))
    }
}

fn perspective_matrix(fov: Radian, aspect_ratio: Real, depth: Depth) -> Matrix4 {
    let ry = 1.0 / (fov * 0.5).tan();
    let rx = ry / aspect_ratio;
    let dz = depth.far - depth.near;
    let rz = -(depth.far + depth.near) / dz;
    let tz = -(2.0 * depth.far * depth.near) / dz;
    Matrix4::from_rows([
        [rx, 0.0, 0.0, 0.0],
        [0.0, ry, 0.0, 0.0],
        [0.0, 0.0, rz, tz],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

fn orthographic_matrix(space: &ClipSpace) -> Matrix4 {
    let Horizontal { left, right } = space.horizontal;
    let Vertical { bottom, top } = space.vertical;
    let Depth { near, far } = space.depth;
    let (dx, dy, dz) = (right - left, top - bottom, far - near);
    Matrix4::from_rows([
        [2.0 / dx, 0.0, 0.0, -(right + left) / dx],
        [0.0, 2.0 / dy, 0.0, -(top + bottom) / dy],
        [0.0, 0.0, -2.0 / dz, -(far + near) / dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

impl ExtractMatrix for Projection {
    fn extract_matrix(&self, out: &mut Matrix4) {
        *out = match self {
            Self::Identity => Matrix4::IDENTITY,
            Self::Perspective { fov, aspect_ratio, depth } => perspective_matrix(*fov, *aspect_ratio, *depth),
            Self::Orthographic(space) => orthographic_matrix(space),
        };
    }
}
