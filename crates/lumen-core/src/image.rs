//! Byte-backed image container.
//!
//! An [`Image`] owns a tightly packed byte buffer of
//! `width * height * bytes_per_pixel` bytes laid out row-major, top-to-bottom.
//! The shape is fixed at construction; pixels are read and written as
//! [`Color`] values and mapped to the storage [`PixelFormat`].
//!
//! ```text
//! Rgba: [R G B A R G B A ...]  <- row 0
//! Bgr:  [B G R B G R ...]      <- row 0
//! ```
//!
//! Images are move-only. Use [`Image::copy`] for an explicit deep copy.
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::{Color, Dimensions, Image, PixelFormat};
//!
//! let mut img = Image::make_blank_image(
//!     Dimensions::new(4, 2),
//!     PixelFormat::Rgba,
//!     Color::RED,
//! ).unwrap();
//!
//! img.set_pixel(1, 1, Color::BLUE);
//! assert_eq!(img.get_pixel(0, 0), Color::RED);
//! assert_eq!(img.get_pixel(1, 1), Color::BLUE);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - construction errors
//! - [`rayon`] - parallel fill of blank images (optional)

use std::convert::Infallible;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::real::Real;

/// Channel layout of the bytes stored in an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PixelFormat {
    /// 3 bytes per pixel: red, green, blue
    Rgb = 0,
    /// 4 bytes per pixel: red, green, blue, alpha
    Rgba = 1,
    /// 3 bytes per pixel: blue, green, red
    Bgr = 2,
    /// 4 bytes per pixel: blue, green, red, alpha
    Bgra = 3,
}

impl PixelFormat {
    /// Number of bytes a single pixel occupies.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }

    /// Whether the format stores an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Bgra)
    }

    fn channel(self, index: usize) -> Channel {
        match (self, index) {
            (Self::Rgb | Self::Rgba, 0) | (Self::Bgr | Self::Bgra, 2) => Channel::R,
            (_, 1) => Channel::G,
            (Self::Rgb | Self::Rgba, 2) | (Self::Bgr | Self::Bgra, 0) => Channel::B,
            _ => Channel::A,
        }
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Rgba),
            2 => Ok(Self::Bgr),
            3 => Ok(Self::Bgra),
            other => Err(Error::InvalidPixelFormat(other)),
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    #[inline]
    fn read(self, c: &Color) -> Real {
        match self {
            Self::R => c.r,
            Self::G => c.g,
            Self::B => c.b,
            Self::A => c.a,
        }
    }

    #[inline]
    fn write(self, c: &mut Color, value: Real) {
        match self {
            Self::R => c.r = value,
            Self::G => c.g = value,
            Self::B => c.b = value,
            Self::A => c.a = value,
        }
    }
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Dimensions {
    /// Creates dimensions.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::BadWidth);
        }
        if self.height == 0 {
            return Err(Error::BadHeight);
        }
        Ok(())
    }
}

/// Owned image: a byte buffer with width, height and pixel format.
#[derive(Debug, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
    dimensions: Dimensions,
    format: PixelFormat,
}

impl Image {
    /// Wraps an existing byte buffer.
    ///
    /// `format` accepts a [`PixelFormat`] or a raw `u8` tag. Checks run in
    /// order: pixel format, width, height, buffer length.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPixelFormat`] if a raw tag names no format
    /// - [`Error::BadWidth`] / [`Error::BadHeight`] for zero dimensions
    /// - [`Error::IncorrectDimensions`] if the buffer length is wrong
    ///
    /// ```rust
    /// use lumen_core::{Dimensions, Error, Image, PixelFormat};
    ///
    /// let err = Image::make_image_from_buffer(vec![0; 4], Dimensions::new(0, 1), PixelFormat::Rgba);
    /// assert_eq!(err.unwrap_err(), Error::BadWidth);
    /// ```
    pub fn make_image_from_buffer<F>(
        bytes: Vec<u8>,
        dimensions: Dimensions,
        format: F,
    ) -> Result<Self>
    where
        F: TryInto<PixelFormat>,
        Error: From<F::Error>,
    {
        let format = format.try_into()?;
        dimensions.validate()?;

        let expected = dimensions.area() * format.bytes_per_pixel();
        if bytes.len() != expected {
            return Err(Error::incorrect_dimensions(expected, bytes.len()));
        }

        Ok(Self {
            bytes,
            dimensions,
            format,
        })
    }

    /// Creates an image with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// [`Error::BadWidth`] / [`Error::BadHeight`] for zero dimensions.
    pub fn make_blank_image(
        dimensions: Dimensions,
        format: PixelFormat,
        color: Color,
    ) -> Result<Self> {
        Self::make_blank_image_in(Vec::new(), dimensions, format, color)
    }

    /// Like [`Image::make_blank_image`], reusing `storage` as the backing
    /// buffer. Existing contents are discarded; capacity is kept.
    pub fn make_blank_image_in(
        mut storage: Vec<u8>,
        dimensions: Dimensions,
        format: PixelFormat,
        color: Color,
    ) -> Result<Self> {
        dimensions.validate()?;

        let bpp = format.bytes_per_pixel();
        let mut pixel = [0u8; 4];
        for (i, byte) in pixel.iter_mut().take(bpp).enumerate() {
            *byte = to_byte(format.channel(i).read(&color));
        }
        let pixel = &pixel[..bpp];

        storage.clear();
        storage.resize(dimensions.area() * bpp, 0);

        #[cfg(feature = "rayon")]
        storage
            .par_chunks_exact_mut(bpp)
            .for_each(|chunk| chunk.copy_from_slice(pixel));

        #[cfg(not(feature = "rayon"))]
        for chunk in storage.chunks_exact_mut(bpp) {
            chunk.copy_from_slice(pixel);
        }

        Ok(Self {
            bytes: storage,
            dimensions,
            format,
        })
    }

    /// Deep copy of this image.
    pub fn copy(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            dimensions: self.dimensions,
            format: self.format,
        }
    }

    /// Deep copy into caller-provided storage.
    pub fn copy_in(&self, mut storage: Vec<u8>) -> Self {
        storage.clear();
        storage.extend_from_slice(&self.bytes);
        Self {
            bytes: storage,
            dimensions: self.dimensions,
            format: self.format,
        }
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// Formats without alpha report an opaque color.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        let offset = self.pixel_offset(x, y);
        let bpp = self.format.bytes_per_pixel();

        let mut color = Color::new(0.0, 0.0, 0.0, 1.0);
        for (i, &byte) in self.bytes[offset..offset + bpp].iter().enumerate() {
            self.format
                .channel(i)
                .write(&mut color, byte as Real / 255.0);
        }
        color
    }

    /// Writes `color` at `(x, y)`, truncating each channel to a byte.
    ///
    /// Formats without alpha drop the alpha channel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let offset = self.pixel_offset(x, y);
        let bpp = self.format.bytes_per_pixel();

        for (i, byte) in self.bytes[offset..offset + bpp].iter_mut().enumerate() {
            *byte = to_byte(self.format.channel(i).read(&color));
        }
    }

    #[inline]
    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.dimensions.width && y < self.dimensions.height,
            "pixel ({x}, {y}) out of bounds for image {}x{}",
            self.dimensions.width,
            self.dimensions.height
        );
        (y * self.dimensions.width + x) * self.format.bytes_per_pixel()
    }

    /// Raw pixel bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the image and returns its byte buffer.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Width and height.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Storage pixel format.
    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per pixel of the storage format.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }
}

#[inline]
fn to_byte(channel: Real) -> u8 {
    (255.0 * channel) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_image_reads_back() {
        let img =
            Image::make_blank_image(Dimensions::new(4, 2), PixelFormat::Rgba, Color::RED).unwrap();
        assert_eq!(img.bytes().len(), 4 * 2 * 4);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(img.get_pixel(x, y), Color::RED);
            }
        }
    }

    #[test]
    fn test_bgr_layout() {
        let img =
            Image::make_blank_image(Dimensions::new(1, 1), PixelFormat::Bgr, Color::RED).unwrap();
        assert_eq!(img.bytes(), &[0, 0, 255]);

        let img =
            Image::make_blank_image(Dimensions::new(1, 1), PixelFormat::Bgra, Color::BLUE).unwrap();
        assert_eq!(img.bytes(), &[255, 0, 0, 255]);
    }

    #[test]
    fn test_no_alpha_drops_alpha() {
        let mut img =
            Image::make_blank_image(Dimensions::new(2, 2), PixelFormat::Rgb, Color::BLACK).unwrap();
        img.set_pixel(1, 0, Color::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(img.get_pixel(1, 0), Color::WHITE);
    }

    #[test]
    fn test_from_buffer_validation_order() {
        assert_eq!(
            Image::make_image_from_buffer(vec![], Dimensions::new(0, 0), 7u8).unwrap_err(),
            Error::InvalidPixelFormat(7)
        );
        assert_eq!(
            Image::make_image_from_buffer(vec![], Dimensions::new(0, 0), PixelFormat::Rgb)
                .unwrap_err(),
            Error::BadWidth
        );
        assert_eq!(
            Image::make_image_from_buffer(vec![], Dimensions::new(1, 0), PixelFormat::Rgb)
                .unwrap_err(),
            Error::BadHeight
        );
        assert_eq!(
            Image::make_image_from_buffer(vec![0; 5], Dimensions::new(1, 2), PixelFormat::Rgb)
                .unwrap_err(),
            Error::incorrect_dimensions(6, 5)
        );
    }

    #[test]
    fn test_from_buffer_raw_format() {
        let img = Image::make_image_from_buffer(vec![1, 2, 3, 4], Dimensions::new(1, 1), 3u8)
            .unwrap();
        assert_eq!(img.pixel_format(), PixelFormat::Bgra);
        let c = img.get_pixel(0, 0);
        assert_eq!(c.b, 1.0 / 255.0);
        assert_eq!(c.r, 3.0 / 255.0);
    }

    #[test]
    fn test_copy_is_deep() {
        let a = Image::make_blank_image(Dimensions::new(2, 1), PixelFormat::Rgb, Color::WHITE)
            .unwrap();
        let mut b = a.copy();
        b.set_pixel(0, 0, Color::BLACK);
        assert_eq!(a.get_pixel(0, 0), Color::WHITE);
        assert_eq!(b.get_pixel(0, 0), Color::BLACK);

        let c = a.copy_in(Vec::with_capacity(64));
        assert_eq!(c, a);
    }

    #[test]
    fn test_blank_in_reuses_storage() {
        let storage = vec![9u8; 100];
        let img = Image::make_blank_image_in(
            storage,
            Dimensions::new(3, 3),
            PixelFormat::Rgb,
            Color::BLACK,
        )
        .unwrap();
        assert_eq!(img.bytes(), &[0u8; 27][..]);
        assert!(img.into_bytes().capacity() >= 100);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_pixel_out_of_bounds() {
        let img =
            Image::make_blank_image(Dimensions::new(2, 2), PixelFormat::Rgb, Color::BLACK).unwrap();
        img.get_pixel(2, 0);
    }

    #[test]
    fn test_pixel_format_try_from() {
        assert_eq!(PixelFormat::try_from(1u8), Ok(PixelFormat::Rgba));
        assert!(PixelFormat::try_from(4u8).is_err());
        assert!(PixelFormat::Bgra.has_alpha());
        assert!(!PixelFormat::Bgr.has_alpha());
    }
}
