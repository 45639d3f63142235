//! Image loader interface.

use lumen_core::Image;

use crate::error::IoResult;
use crate::file::File;

/// Decodes an [`Image`] from a [`File`].
///
/// Implementations are registered with an
/// [`ImageManager`](crate::ImageManager) under a file-type tag.
///
/// ```rust
/// use lumen_core::{Color, Dimensions, Image, PixelFormat};
/// use lumen_io::{File, ImageLoader, IoResult};
///
/// /// Loads a 1x1 image whose single byte is the gray level.
/// struct Gray;
///
/// impl ImageLoader for Gray {
///     fn load(&self, file: &mut dyn File) -> IoResult<Image> {
///         let v = file.read8()?;
///         Ok(Image::make_image_from_buffer(vec![v, v, v], Dimensions::new(1, 1), PixelFormat::Rgb)?)
///     }
/// }
/// ```
pub trait ImageLoader {
    /// Reads an image from `file`.
    ///
    /// # Errors
    ///
    /// Loader-specific decoding errors, or [`IoError::Image`](crate::IoError::Image)
    /// when the decoded data cannot form an image.
    fn load(&self, file: &mut dyn File) -> IoResult<Image>;
}
