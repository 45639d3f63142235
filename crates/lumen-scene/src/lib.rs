//! # lumen-scene
//!
//! Model, view and projection transforms.
//!
//! - [`Transform`] - rotation, translation and scale of a model
//! - [`Camera`] - position and orientation of the viewer
//! - [`Projection`] - identity, perspective or orthographic
//! - [`LazyTransform`] - recomputes its matrix only after a change
//! - [`InterpolatedTransform`] - blends the state before and after an edit
//!
//! Everything that yields a matrix implements [`ExtractMatrix`].
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4, Vector3, deg};
//! use lumen_scene::{Camera, Depth, ExtractMatrix, LazyProjection, Projection, Transform};
//!
//! let mut model = Transform::new();
//! model.translate(Vector3::new(0.0, 0.0, -5.0));
//!
//! let camera = Camera::new();
//! let mut projection = LazyProjection::new(Projection::perspective(
//!     deg(60.0),
//!     16.0 / 9.0,
//!     Depth::new(0.1, 100.0),
//! ));
//!
//! let mut proj = Matrix4::IDENTITY;
//! projection.update_matrix(&mut proj);
//! let clip = proj * camera.to_matrix4() * model.to_matrix4();
//! let ndc = clip.project_point(Vector3::ZERO);
//! assert!(ndc.z > -1.0 && ndc.z < 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`lumen-math`](lumen_math) - vectors, matrices, quaternions
//! - [`lumen-core`](lumen_core) - `Real`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod extract;
pub mod interpolated;
pub mod lazy;
pub mod projection;
pub mod transform;

pub use camera::*;
pub use extract::*;
pub use interpolated::*;
pub use lazy::*;
pub use projection::*;
pub use transform::*;
