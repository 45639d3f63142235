//! # lumen-math
//!
//! Linear algebra for real-time graphics.
//!
//! - [`Angle`] - unit-tagged angles ([`Radian`], [`Degree`], [`Gradian`])
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size vectors
//! - [`Matrix2`], [`Matrix3`], [`Matrix4`] - square matrices, [`matrix_cast`]
//! - [`Quaternion`], [`EulerAngles`] - rotations
//! - [`Interpolate`] - blending between snapshots
//! - [`simd`] - batch transforms
//!
//! # Design
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! `vector * matrix` is accepted and means the same product. The coordinate
//! system is right-handed; Euler angles apply yaw (Y), pitch (X), then roll
//! (Z).
//!
//! Every type converts to and from its [`glam`] counterpart with
//! `to_glam`/`from_glam` (or `From`), so glam can be used where its wider
//! API is needed.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{AngleLiteral, Matrix4, Quaternion, Vector3};
//!
//! let q = Quaternion::from_angle_axis(90.0_f32.deg(), Vector3::Z);
//! let mut m = Matrix4::IDENTITY;
//! q.extract_rotation_matrix4(&mut m);
//! let p = m.transform_point(Vector3::X);
//! assert!((p - Vector3::Y).magnitude() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`lumen-core`](lumen_core) - `Real`, tolerances, errors
//! - [`glam`] - interop and cross-checking
//! - [`wide`] - portable SIMD
//! - [`bytemuck`] - plain-data casts of vector and matrix storage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod macros;

pub mod angle;
pub mod cast;
pub mod euler;
pub mod interp;
pub mod mat2;
pub mod mat3;
pub mod mat4;
pub mod quat;
pub mod simd;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use angle::*;
pub use cast::*;
pub use euler::*;
pub use interp::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub use lumen_core::Real;

/// Re-export of the glam types these convert to.
pub mod glam {
    pub use ::glam::{Mat2, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
}
