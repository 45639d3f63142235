//! Error types for image loading.

use std::io;
use thiserror::Error;

/// Image loading error.
#[derive(Debug, Error)]
pub enum IoError {
    /// No loader is registered under the requested tag.
    #[error("no image loader has been associated to the requested type: {0}")]
    FileTypeNotSupported(String),

    /// A loader is already registered under this tag.
    #[error("only one loader per file type is allowed: {0}")]
    DuplicateLoader(String),

    /// The TGA header could not be read or is malformed.
    #[error("unable to parse TGA header; TGA header is invalid")]
    InvalidTgaHeader,

    /// The pixel data could not be decoded.
    #[error(
        "unable to parse image data; either invalid format, or too little data was available"
    )]
    BadImageData,

    /// Image construction failed.
    #[error(transparent)]
    Image(#[from] lumen_core::Error),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for image loading.
pub type IoResult<T> = Result<T, IoError>;

impl IoError {
    /// Category name shared by related variants.
    pub fn category(&self) -> &'static str {
        match self {
            Self::FileTypeNotSupported(_) | Self::DuplicateLoader(_) => "image manager",
            Self::InvalidTgaHeader | Self::BadImageData => "tga",
            Self::Image(e) => e.category(),
            Self::Io(_) => "io",
        }
    }

    /// Stable numeric code, unique within [`IoError::category`].
    pub fn code(&self) -> i32 {
        match self {
            Self::FileTypeNotSupported(_) => 1,
            Self::DuplicateLoader(_) => 2,
            Self::InvalidTgaHeader => 1,
            Self::BadImageData => 2,
            Self::Image(e) => e.code(),
            Self::Io(e) => e.raw_os_error().unwrap_or(0),
        }
    }

    /// True when the input ended before the decoder was done.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
