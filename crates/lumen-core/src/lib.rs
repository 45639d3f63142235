//! # lumen-core
//!
//! Foundation types for the lumen engine.
//!
//! - [`Real`], [`DEFAULT_TOLERANCE`], [`almost_equal`] - scalar precision
//! - [`Error`], [`Result`] - recoverable error handling
//! - [`Color`], [`Image`], [`PixelFormat`] - pixel data
//! - [`min`], [`max`], [`CompareReducer`] - argument reducers over
//!   [`CommonReference`]
//! - [`int_utilities`] - integer composition and sign-safe comparison
//! - [`SequenceDetector`] - streaming sequence matching
//! - [`Piecewise`] - total ordering for math types
//!
//! ## Crate Structure
//!
//! ```text
//! lumen-core (this crate)
//!    ^
//!    +-- lumen-math  (angles, vectors, matrices, quaternions)
//!    |      ^
//!    |      +-- lumen-scene (transform, camera, projection)
//!    +-- lumen-io    (image loaders)
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - parallel fill of blank images (enabled by default)
//! - `serde` - serialization for value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod common_reference;
pub mod compare;
pub mod error;
pub mod image;
pub mod int_utilities;
pub mod piecewise;
pub mod real;
pub mod sequence;

pub use color::*;
pub use common_reference::*;
pub use compare::*;
pub use error::*;
pub use image::*;
pub use piecewise::*;
pub use real::*;
pub use sequence::*;
