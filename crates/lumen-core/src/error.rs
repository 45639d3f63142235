//! Error types for lumen-core operations.
//!
//! Two families of recoverable failure live here:
//!
//! - **Range errors**: checked element access (`at`) on vectors, matrices and
//!   quaternions with an index past the end.
//! - **Image errors**: invalid construction parameters for [`crate::Image`].
//!
//! Every variant maps to a category name and a stable integer code so callers
//! can forward errors across boundaries that only understand numbers.
//!
//! ```rust
//! use lumen_core::{Error, Result};
//!
//! fn component(values: &[f32], index: usize) -> Result<f32> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or(Error::out_of_range("slice", index, values.len()))
//! }
//!
//! let err = component(&[1.0, 2.0], 5).unwrap_err();
//! assert!(err.is_range_error());
//! assert_eq!(err.category(), "range");
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for [`std::error::Error`] and [`std::fmt::Display`]

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by lumen-core and the math crates built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Checked element access with an index past the end of a container.
    #[error("index {index} out of range for {container} of size {len}")]
    OutOfRange {
        /// Name of the accessed container type
        container: &'static str,
        /// Requested index
        index: usize,
        /// Number of elements in the container
        len: usize,
    },

    /// A byte value that does not name a [`crate::PixelFormat`].
    #[error("Invalid pixel format value specified ({0})")]
    InvalidPixelFormat(u8),

    /// Image width was zero.
    #[error("Invalid width specified. Width must be > 0")]
    BadWidth,

    /// Image height was zero.
    #[error("Invalid height specified. Height must be > 0")]
    BadHeight,

    /// Byte buffer length does not equal `width * height * bytes_per_pixel`.
    #[error("Dimensions don't match the supplied byte buffer (expected {expected} bytes, got {actual})")]
    IncorrectDimensions {
        /// Byte count implied by the dimensions and format
        expected: usize,
        /// Byte count of the supplied buffer
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfRange`].
    #[inline]
    pub fn out_of_range(container: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange {
            container,
            index,
            len,
        }
    }

    /// Creates an [`Error::IncorrectDimensions`].
    #[inline]
    pub fn incorrect_dimensions(expected: usize, actual: usize) -> Self {
        Self::IncorrectDimensions { expected, actual }
    }

    /// Category name shared by related variants.
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "range",
            Self::InvalidPixelFormat(_)
            | Self::BadWidth
            | Self::BadHeight
            | Self::IncorrectDimensions { .. } => "image",
        }
    }

    /// Stable numeric code, unique within [`Error::category`].
    pub fn code(&self) -> i32 {
        match self {
            Self::OutOfRange { .. } => 1,
            Self::InvalidPixelFormat(_) => 1,
            Self::BadWidth => 2,
            Self::BadHeight => 3,
            Self::IncorrectDimensions { .. } => 4,
        }
    }

    /// Returns true for checked-access failures.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns true for image construction failures.
    pub fn is_image_error(&self) -> bool {
        self.category() == "image"
    }
}
