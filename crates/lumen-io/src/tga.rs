//! Truevision TGA decoder.
//!
//! Supports every common Targa variant:
//!
//! | Type | Meaning                 | Depths           |
//! |------|-------------------------|------------------|
//! | 1/9  | color-mapped (raw/RLE)  | 8-bit index      |
//! | 2/10 | true-color (raw/RLE)    | 15, 16, 24, 32   |
//! | 3/11 | grayscale (raw/RLE)     | 8                |
//!
//! Output is always [`PixelFormat::Rgba`], top-left origin. Images stored
//! bottom-up or right-to-left are flipped after decoding, and a 32-bit image
//! whose alpha channel is entirely zero is made opaque.
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::Color;
//! use lumen_io::{ImageLoader, MemoryFile, TgaImageLoader};
//!
//! // 1x1 uncompressed 24-bit, one blue-green-red pixel
//! let mut bytes = vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 24, 0];
//! bytes.extend_from_slice(&[0, 0, 255]);
//!
//! let image = TgaImageLoader::new().load(&mut MemoryFile::new(bytes)).unwrap();
//! assert_eq!(image.get_pixel(0, 0), Color::RED);
//! ```
//!
//! # Dependencies
//!
//! - `byteorder` - little-endian header and 16-bit pixel fields

use byteorder::{LittleEndian, ReadBytesExt};
use lumen_core::{Dimensions, Image, PixelFormat};
use tracing::{trace, warn};

use crate::error::{IoError, IoResult};
use crate::file::{File, FileReader};
use crate::loader::ImageLoader;

/// Size of the fixed TGA header in bytes.
pub const HEADER_SIZE: usize = 18;

const RGBA: usize = 4;

/// Descriptor bit set when pixels run right-to-left.
const RIGHT_TO_LEFT: u8 = 0x10;
/// Descriptor bit set when rows run top-to-bottom.
const TOP_TO_BOTTOM: u8 = 0x20;

/// Color layout of the stored pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TgaKind {
    /// Indices into a color map.
    ColorMapped,
    /// Direct BGR(A) pixels.
    TrueColor,
    /// Single luminance channel.
    Grayscale,
}

/// Parsed TGA header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    /// Length of the image ID field that follows the header.
    pub id_length: u8,
    /// 1 when a color map is present.
    pub colormap_type: u8,
    /// Raw image type (1, 2, 3, 9, 10 or 11).
    pub image_type: u8,
    /// Index of the first color map entry.
    pub colormap_origin: u16,
    /// Number of color map entries.
    pub colormap_length: u16,
    /// Bits per color map entry.
    pub colormap_depth: u8,
    /// Horizontal screen origin.
    pub x_origin: u16,
    /// Vertical screen origin.
    pub y_origin: u16,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Bits per stored pixel.
    pub bits_per_pixel: u8,
    /// Alpha depth and origin bits.
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Reads the fixed 18-byte header.
    pub fn read(file: &mut dyn File) -> IoResult<Self> {
        let mut r = FileReader::new(file);
        Ok(Self {
            id_length: r.read_u8()?,
            colormap_type: r.read_u8()?,
            image_type: r.read_u8()?,
            colormap_origin: r.read_u16::<LittleEndian>()?,
            colormap_length: r.read_u16::<LittleEndian>()?,
            colormap_depth: r.read_u8()?,
            x_origin: r.read_u16::<LittleEndian>()?,
            y_origin: r.read_u16::<LittleEndian>()?,
            width: r.read_u16::<LittleEndian>()?,
            height: r.read_u16::<LittleEndian>()?,
            bits_per_pixel: r.read_u8()?,
            image_descriptor: r.read_u8()?,
        })
    }

    /// Color layout, or `None` for an unknown image type.
    pub fn kind(&self) -> Option<TgaKind> {
        match self.image_type & !0x08 {
            1 => Some(TgaKind::ColorMapped),
            2 => Some(TgaKind::TrueColor),
            3 => Some(TgaKind::Grayscale),
            _ => None,
        }
    }

    /// Whether pixel data is run-length encoded.
    #[inline]
    pub fn is_rle(&self) -> bool {
        self.image_type & 0x08 != 0
    }

    /// Bytes per stored pixel.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel as usize).div_ceil(8)
    }

    /// Number of alpha bits per pixel.
    #[inline]
    pub fn alpha_bits(&self) -> u8 {
        self.image_descriptor & 0x0f
    }

    /// Whether rows are stored bottom row first.
    #[inline]
    pub fn is_bottom_up(&self) -> bool {
        self.image_descriptor & TOP_TO_BOTTOM == 0
    }

    /// Whether each row is stored right to left.
    #[inline]
    pub fn is_right_to_left(&self) -> bool {
        self.image_descriptor & RIGHT_TO_LEFT != 0
    }

    fn validate(&self) -> Result<TgaKind, &'static str> {
        let kind = self.kind().ok_or("unsupported image type")?;
        if self.width == 0 || self.height == 0 {
            return Err("zero-sized image");
        }
        match kind {
            TgaKind::ColorMapped => {
                if self.colormap_type != 1 || self.colormap_length == 0 {
                    return Err("color-mapped image without a color map");
                }
                if self.bits_per_pixel != 8 {
                    return Err("unsupported color map index depth");
                }
                if !matches!(self.colormap_depth, 15 | 16 | 24 | 32) {
                    return Err("unsupported color map entry depth");
                }
            }
            TgaKind::TrueColor => {
                if !matches!(self.bits_per_pixel, 15 | 16 | 24 | 32) {
                    return Err("unsupported true-color depth");
                }
            }
            TgaKind::Grayscale => {
                if self.bits_per_pixel != 8 {
                    return Err("unsupported grayscale depth");
                }
            }
        }
        if self.colormap_type > 1 {
            return Err("unknown color map type");
        }
        Ok(kind)
    }
}

/// Loads TGA files as RGBA images.
#[derive(Debug, Clone, Copy, Default)]
pub struct TgaImageLoader;

impl TgaImageLoader {
    /// Creates a loader.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageLoader for TgaImageLoader {
    fn load(&self, file: &mut dyn File) -> IoResult<Image> {
        let (header, kind, palette) = read_preamble(file).inspect_err(|e| {
            warn!(error = %e, "rejected TGA file");
        })?;

        let width = header.width as usize;
        let height = header.height as usize;
        let mut pixels = vec![0u8; width * height * RGBA];

        let decoder = PixelDecoder {
            header: &header,
            kind,
            palette: &palette,
        };
        decoder.decode(file, &mut pixels).inspect_err(|e| {
            warn!(error = %e, "rejected TGA pixel data");
        })?;

        post_process(&header, &mut pixels, width, height);

        // a failed close does not invalidate the decoded pixels
        let _ = file.close();

        Ok(Image::make_image_from_buffer(
            pixels,
            Dimensions::new(width, height),
            PixelFormat::Rgba,
        )?)
    }
}

/// Header, validated kind, and expanded RGBA palette.
fn read_preamble(file: &mut dyn File) -> IoResult<(TgaHeader, TgaKind, Vec<[u8; RGBA]>)> {
    let header = TgaHeader::read(file).map_err(|_| IoError::InvalidTgaHeader)?;
    trace!(
        image_type = header.image_type,
        width = header.width,
        height = header.height,
        bits_per_pixel = header.bits_per_pixel,
        descriptor = header.image_descriptor,
        colormap_length = header.colormap_length,
        "read TGA header"
    );

    let kind = header.validate().map_err(|reason| {
        warn!(reason, "invalid TGA header");
        IoError::InvalidTgaHeader
    })?;

    for _ in 0..header.id_length {
        file.read8().map_err(|_| IoError::InvalidTgaHeader)?;
    }

    let mut palette = Vec::new();
    if header.colormap_type == 1 {
        let depth = header.colormap_depth;
        palette.reserve(header.colormap_length as usize);
        for _ in 0..header.colormap_length {
            let entry = read_color(file, depth, alpha_in_16bit(depth, &header))
                .map_err(|_| IoError::InvalidTgaHeader)?;
            palette.push(entry);
        }
    }

    Ok((header, kind, palette))
}

#[inline]
fn alpha_in_16bit(depth: u8, header: &TgaHeader) -> bool {
    depth == 16 && header.alpha_bits() > 0
}

#[inline]
fn expand5(c: u16) -> u8 {
    let c = (c & 0x1f) as u8;
    (c << 3) | (c >> 2)
}

/// Reads one BGR(A) color of `depth` bits as RGBA.
fn read_color(file: &mut dyn File, depth: u8, alpha16: bool) -> IoResult<[u8; RGBA]> {
    match depth {
        15 | 16 => {
            let v = FileReader::new(file).read_u16::<LittleEndian>()?;
            let a = if alpha16 && v & 0x8000 == 0 { 0 } else { 255 };
            Ok([expand5(v >> 10), expand5(v >> 5), expand5(v), a])
        }
        24 => {
            let b = file.read8()?;
            let g = file.read8()?;
            let r = file.read8()?;
            Ok([r, g, b, 255])
        }
        32 => {
            let b = file.read8()?;
            let g = file.read8()?;
            let r = file.read8()?;
            let a = file.read8()?;
            Ok([r, g, b, a])
        }
        _ => Err(IoError::BadImageData),
    }
}

struct PixelDecoder<'a> {
    header: &'a TgaHeader,
    kind: TgaKind,
    palette: &'a [[u8; RGBA]],
}

impl PixelDecoder<'_> {
    fn decode(&self, file: &mut dyn File, out: &mut [u8]) -> IoResult<()> {
        let result = if self.header.is_rle() {
            self.decode_rle(file, out)
        } else {
            self.decode_raw(file, out)
        };
        result.map_err(|e| match e {
            IoError::Io(_) => IoError::BadImageData,
            other => other,
        })
    }

    fn pixel(&self, file: &mut dyn File) -> IoResult<[u8; RGBA]> {
        match self.kind {
            TgaKind::ColorMapped => {
                let index = file.read8()? as usize;
                index
                    .checked_sub(self.header.colormap_origin as usize)
                    .and_then(|i| self.palette.get(i))
                    .copied()
                    .ok_or(IoError::BadImageData)
            }
            TgaKind::TrueColor => {
                let depth = self.header.bits_per_pixel;
                read_color(file, depth, alpha_in_16bit(depth, self.header))
            }
            TgaKind::Grayscale => {
                let v = file.read8()?;
                Ok([v, v, v, 255])
            }
        }
    }

    fn decode_raw(&self, file: &mut dyn File, out: &mut [u8]) -> IoResult<()> {
        for px in out.chunks_exact_mut(RGBA) {
            px.copy_from_slice(&self.pixel(file)?);
        }
        Ok(())
    }

    fn decode_rle(&self, file: &mut dyn File, out: &mut [u8]) -> IoResult<()> {
        let mut pixels = out.chunks_exact_mut(RGBA);
        let mut remaining = pixels.len();
        while remaining > 0 {
            let packet = file.read8()?;
            let count = ((packet & 0x7f) as usize + 1).min(remaining);
            if packet & 0x80 != 0 {
                let value = self.pixel(file)?;
                for px in pixels.by_ref().take(count) {
                    px.copy_from_slice(&value);
                }
            } else {
                for px in pixels.by_ref().take(count) {
                    px.copy_from_slice(&self.pixel(file)?);
                }
            }
            remaining -= count;
        }
        Ok(())
    }
}

/// Flips to a top-left origin and fixes an all-transparent 32-bit image.
fn post_process(header: &TgaHeader, pixels: &mut [u8], width: usize, height: usize) {
    let row = width * RGBA;

    if header.is_bottom_up() {
        for y in 0..height / 2 {
            let (top, bottom) = pixels.split_at_mut((height - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }

    if header.is_right_to_left() {
        for line in pixels.chunks_exact_mut(row) {
            for x in 0..width / 2 {
                let (left, right) = line.split_at_mut((width - 1 - x) * RGBA);
                left[x * RGBA..(x + 1) * RGBA].swap_with_slice(&mut right[..RGBA]);
            }
        }
    }

    let has_alpha_channel = match header.kind() {
        Some(TgaKind::TrueColor) => header.bits_per_pixel == 32,
        Some(TgaKind::ColorMapped) => header.colormap_depth == 32,
        _ => false,
    };
    if has_alpha_channel && pixels.chunks_exact(RGBA).all(|px| px[3] == 0) {
        trace!("TGA alpha channel is empty, making image opaque");
        for px in pixels.chunks_exact_mut(RGBA) {
            px[3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;
    use lumen_core::Color;

    fn header(image_type: u8, width: u16, height: u16, bpp: u8, descriptor: u8) -> Vec<u8> {
        let mut h = vec![0u8; HEADER_SIZE];
        h[2] = image_type;
        h[12..14].copy_from_slice(&width.to_le_bytes());
        h[14..16].copy_from_slice(&height.to_le_bytes());
        h[16] = bpp;
        h[17] = descriptor;
        h
    }

    fn load(bytes: Vec<u8>) -> IoResult<Image> {
        TgaImageLoader::new().load(&mut MemoryFile::new(bytes))
    }

    #[test]
    fn test_uncompressed_24bit_top_down() {
        let mut bytes = header(2, 2, 1, 24, TOP_TO_BOTTOM);
        bytes.extend_from_slice(&[255, 0, 0, 0, 255, 0]);
        let image = load(bytes).unwrap();
        assert_eq!(image.pixel_format(), PixelFormat::Rgba);
        assert_eq!(image.get_pixel(0, 0), Color::BLUE);
        assert_eq!(image.get_pixel(1, 0), Color::LIME);
    }

    #[test]
    fn test_bottom_up_is_flipped() {
        let mut bytes = header(3, 1, 3, 8, 0);
        bytes.extend_from_slice(&[10, 20, 30]);
        let image = load(bytes).unwrap();
        assert_eq!(image.bytes()[0], 30);
        assert_eq!(image.bytes()[4], 20);
        assert_eq!(image.bytes()[8], 10);
    }

    #[test]
    fn test_right_to_left_is_flipped() {
        let mut bytes = header(3, 3, 1, 8, TOP_TO_BOTTOM | RIGHT_TO_LEFT);
        bytes.extend_from_slice(&[1, 2, 3]);
        let image = load(bytes).unwrap();
        let reds: Vec<u8> = image.bytes().chunks(4).map(|p| p[0]).collect();
        assert_eq!(reds, vec![3, 2, 1]);
    }

    #[test]
    fn test_32bit_alpha() {
        let mut bytes = header(2, 2, 1, 32, TOP_TO_BOTTOM | 8);
        bytes.extend_from_slice(&[0, 0, 255, 128, 0, 0, 255, 0]);
        let image = load(bytes).unwrap();
        assert_eq!(&image.bytes()[..8], &[255, 0, 0, 128, 255, 0, 0, 0]);
    }

    #[test]
    fn test_32bit_zero_alpha_becomes_opaque() {
        let mut bytes = header(2, 2, 1, 32, TOP_TO_BOTTOM);
        bytes.extend_from_slice(&[1, 2, 3, 0, 4, 5, 6, 0]);
        let image = load(bytes).unwrap();
        assert_eq!(image.bytes(), &[3, 2, 1, 255, 6, 5, 4, 255]);
    }

    #[test]
    fn test_16bit() {
        let mut bytes = header(2, 2, 1, 16, TOP_TO_BOTTOM | 1);
        // pure red with alpha bit set, pure blue without
        bytes.extend_from_slice(&0xfc00u16.to_le_bytes());
        bytes.extend_from_slice(&0x001fu16.to_le_bytes());
        let image = load(bytes).unwrap();
        assert_eq!(&image.bytes()[..8], &[255, 0, 0, 255, 0, 0, 255, 0]);
    }

    #[test]
    fn test_rle_true_color() {
        let mut bytes = header(10, 4, 1, 24, TOP_TO_BOTTOM);
        // run of 3 green, then one raw white
        bytes.extend_from_slice(&[0x82, 0, 255, 0, 0x00, 255, 255, 255]);
        let image = load(bytes).unwrap();
        for x in 0..3 {
            assert_eq!(image.get_pixel(x, 0), Color::LIME);
        }
        assert_eq!(image.get_pixel(3, 0), Color::WHITE);
    }

    #[test]
    fn test_rle_packet_spans_rows() {
        let mut bytes = header(11, 2, 2, 8, TOP_TO_BOTTOM);
        bytes.extend_from_slice(&[0x83, 77]);
        let image = load(bytes).unwrap();
        assert!(image.bytes().chunks(4).all(|p| p == [77, 77, 77, 255]));
    }

    #[test]
    fn test_color_mapped_with_id() {
        let mut bytes = header(1, 2, 1, 8, TOP_TO_BOTTOM);
        bytes[0] = 3; // id length
        bytes[1] = 1; // color map present
        bytes[5..7].copy_from_slice(&2u16.to_le_bytes());
        bytes[7] = 24;
        bytes.extend_from_slice(b"abc");
        bytes.extend_from_slice(&[0, 0, 255, 255, 0, 0]);
        bytes.extend_from_slice(&[1, 0]);
        let image = load(bytes).unwrap();
        assert_eq!(image.get_pixel(0, 0), Color::BLUE);
        assert_eq!(image.get_pixel(1, 0), Color::RED);
    }

    #[test]
    fn test_palette_index_out_of_range() {
        let mut bytes = header(1, 1, 1, 8, TOP_TO_BOTTOM);
        bytes[1] = 1;
        bytes[5..7].copy_from_slice(&1u16.to_le_bytes());
        bytes[7] = 24;
        bytes.extend_from_slice(&[0, 0, 0]);
        bytes.push(5);
        assert!(matches!(load(bytes), Err(IoError::BadImageData)));
    }

    #[test]
    fn test_truncated_header() {
        let err = load(vec![0, 0, 2, 0]).unwrap_err();
        assert!(matches!(err, IoError::InvalidTgaHeader));
        assert_eq!(err.category(), "tga");
    }

    #[test]
    fn test_invalid_header_fields() {
        assert!(matches!(load(header(4, 1, 1, 24, 0)), Err(IoError::InvalidTgaHeader)));
        assert!(matches!(load(header(2, 0, 1, 24, 0)), Err(IoError::InvalidTgaHeader)));
        assert!(matches!(load(header(2, 1, 1, 12, 0)), Err(IoError::InvalidTgaHeader)));
        assert!(matches!(load(header(1, 1, 1, 8, 0)), Err(IoError::InvalidTgaHeader)));
    }

    #[test]
    fn test_truncated_pixels() {
        let mut bytes = header(2, 2, 2, 24, 0);
        bytes.extend_from_slice(&[1, 2, 3, 4, 5]);
        assert!(matches!(load(bytes), Err(IoError::BadImageData)));
    }

    #[test]
    fn test_file_closed_after_success() {
        let mut bytes = header(3, 1, 1, 8, 0);
        bytes.push(9);
        let mut file = MemoryFile::new(bytes);
        TgaImageLoader::new().load(&mut file).unwrap();
        assert!(file.is_closed());

        let mut file = MemoryFile::new(header(3, 1, 1, 8, 0));
        assert!(TgaImageLoader::new().load(&mut file).is_err());
        assert!(!file.is_closed());
    }

    #[test]
    fn test_header_accessors() {
        let bytes = header(10, 640, 480, 32, TOP_TO_BOTTOM | 8);
        let h = TgaHeader::read(&mut MemoryFile::new(bytes)).unwrap();
        assert_eq!(h.kind(), Some(TgaKind::TrueColor));
        assert!(h.is_rle());
        assert_eq!(h.bytes_per_pixel(), 4);
        assert_eq!(h.alpha_bits(), 8);
        assert!(!h.is_bottom_up());
        assert!(!h.is_right_to_left());
        assert_eq!((h.width, h.height), (640, 480));
    }
}
