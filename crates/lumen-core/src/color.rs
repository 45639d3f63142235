//! Normalized RGBA color.
//!
//! [`Color`] stores four [`Real`] channels in `[0, 1]`. Arithmetic saturates
//! back into that range. Conversion to packed 8-bit forms truncates, so
//! `0.5` becomes `127`, not `128`.
//!
//! ```rust
//! use lumen_core::Color;
//!
//! let c = Color::from_rgba32(0xFF8000FF);
//! assert_eq!(c.to_rgba32(), 0xFF8000FF);
//! assert_eq!(Color::RED.inverted(), Color::AQUA);
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::real::{AlmostEq, Real, almost_equal, almost_equal_with, clamp};

/// Hue, saturation and brightness, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// Hue as a fraction of a full turn
    pub hue: Real,
    /// Saturation
    pub saturation: Real,
    /// Brightness
    pub brightness: Real,
}

/// RGBA color with normalized channels.
///
/// The default color is fully transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    pub r: Real,
    /// Green channel
    pub g: Real,
    /// Blue channel
    pub b: Real,
    /// Alpha channel
    pub a: Real,
}

#[inline]
fn saturate(x: Real) -> Real {
    clamp(x, 0.0, 1.0)
}

#[inline]
fn to_byte(channel: Real) -> u32 {
    (channel * 255.0) as u8 as u32
}

#[inline]
fn to_word(channel: Real) -> u64 {
    (channel * 65535.0) as u16 as u64
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Opaque silver.
    pub const SILVER: Self = Self::from_rgb8(192, 192, 192);
    /// Opaque gray.
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    /// Opaque maroon.
    pub const MAROON: Self = Self::from_rgb8(128, 0, 0);
    /// Opaque lime (pure green).
    pub const LIME: Self = Self::from_rgb8(0, 255, 0);
    /// Opaque green (half intensity, as in HTML).
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    /// Opaque navy.
    pub const NAVY: Self = Self::from_rgb8(0, 0, 128);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::from_rgb8(255, 255, 0);
    /// Opaque orange.
    pub const ORANGE: Self = Self::from_rgb8(255, 165, 0);
    /// Opaque olive.
    pub const OLIVE: Self = Self::from_rgb8(128, 128, 0);
    /// Opaque purple.
    pub const PURPLE: Self = Self::from_rgb8(128, 0, 128);
    /// Opaque fuchsia.
    pub const FUCHSIA: Self = Self::from_rgb8(255, 0, 255);
    /// Opaque teal.
    pub const TEAL: Self = Self::from_rgb8(0, 128, 128);
    /// Opaque aqua.
    pub const AQUA: Self = Self::from_rgb8(0, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from four channels.
    #[inline]
    pub const fn new(r: Real, g: Real, b: Real, a: Real) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: Real, g: Real, b: Real) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as Real / 255.0, g as Real / 255.0, b as Real / 255.0)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as Real / 255.0,
            g as Real / 255.0,
            b as Real / 255.0,
            a as Real / 255.0,
        )
    }

    /// Unpacks `0xRRGGBBAA`.
    pub fn from_rgba32(c: u32) -> Self {
        let [r, g, b, a] = c.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Unpacks `0xAARRGGBB`.
    pub fn from_argb32(c: u32) -> Self {
        let [a, r, g, b] = c.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Unpacks `0xAABBGGRR`.
    pub fn from_abgr32(c: u32) -> Self {
        let [a, b, g, r] = c.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Unpacks `0xRRRRGGGGBBBBAAAA`.
    pub fn from_rgba64(c: u64) -> Self {
        let w = |shift: u32| ((c >> shift) & 0xFFFF) as Real / 65535.0;
        Self::new(w(48), w(32), w(16), w(0))
    }

    /// Converts from hue/saturation/brightness.
    ///
    /// Hue wraps into `[0, 1)`; saturation and brightness are clamped.
    pub fn from_hsb(c: Hsb) -> Self {
        let hue = c.hue.rem_euclid(1.0);
        let saturation = saturate(c.saturation);
        let brightness = saturate(c.brightness);

        if almost_equal(brightness, 0.0) {
            return Self::BLACK;
        }
        if almost_equal(saturation, 0.0) {
            return Self::rgb(brightness, brightness, brightness);
        }

        let mut sector = hue * 6.0;
        if sector >= 6.0 {
            sector = 0.0;
        }
        let domain = sector as u8;
        let fraction = sector - domain as Real;

        let f1 = brightness * (1.0 - saturation);
        let f2 = brightness * (1.0 - saturation * fraction);
        let f3 = brightness * (1.0 - saturation * (1.0 - fraction));

        match domain {
            0 => Self::rgb(brightness, f3, f1),
            1 => Self::rgb(f2, brightness, f1),
            2 => Self::rgb(f1, brightness, f3),
            3 => Self::rgb(f1, f2, brightness),
            4 => Self::rgb(f3, f1, brightness),
            _ => Self::rgb(brightness, f1, f2),
        }
    }

    /// Packs into `0xRRGGBBAA`, truncating each channel.
    pub fn to_rgba32(&self) -> u32 {
        (to_byte(self.r) << 24) | (to_byte(self.g) << 16) | (to_byte(self.b) << 8) | to_byte(self.a)
    }

    /// Packs into `0xAARRGGBB`, truncating each channel.
    pub fn to_argb32(&self) -> u32 {
        (to_byte(self.a) << 24) | (to_byte(self.r) << 16) | (to_byte(self.g) << 8) | to_byte(self.b)
    }

    /// Packs into `0xAABBGGRR`, truncating each channel.
    pub fn to_abgr32(&self) -> u32 {
        (to_byte(self.a) << 24) | (to_byte(self.b) << 16) | (to_byte(self.g) << 8) | to_byte(self.r)
    }

    /// Packs into `0xRRRRGGGGBBBBAAAA`, truncating each channel.
    pub fn to_rgba64(&self) -> u64 {
        (to_word(self.r) << 48) | (to_word(self.g) << 32) | (to_word(self.b) << 16) | to_word(self.a)
    }

    /// Converts to hue/saturation/brightness. Alpha is dropped.
    pub fn to_hsb(&self) -> Hsb {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let brightness = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        if almost_equal(delta, 0.0) {
            return Hsb {
                hue: 0.0,
                saturation,
                brightness,
            };
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        Hsb {
            hue: sector / 6.0,
            saturation,
            brightness,
        }
    }

    /// Channels as an array `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [Real; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverts the color channels in place. Alpha is kept.
    pub fn invert(&mut self) {
        self.r = 1.0 - self.r;
        self.g = 1.0 - self.g;
        self.b = 1.0 - self.b;
    }

    /// Shifts every color channel by half a unit, wrapping.
    pub fn contrast(&mut self) {
        self.r = (self.r + 0.5).rem_euclid(1.0);
        self.g = (self.g + 0.5).rem_euclid(1.0);
        self.b = (self.b + 0.5).rem_euclid(1.0);
    }

    /// Scales color channels towards black by `percent`.
    pub fn darken(&mut self, percent: Real) {
        self.r *= 1.0 - percent;
        self.g *= 1.0 - percent;
        self.b *= 1.0 - percent;
    }

    /// Moves color channels towards white by `percent`.
    pub fn brighten(&mut self, percent: Real) {
        self.r += (1.0 - self.r) * percent;
        self.g += (1.0 - self.g) * percent;
        self.b += (1.0 - self.b) * percent;
    }

    /// Returns an inverted copy.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let mut c = *self;
        c.invert();
        c
    }

    /// Returns a contrasted copy.
    #[must_use]
    pub fn contrasted(&self) -> Self {
        let mut c = *self;
        c.contrast();
        c
    }

    /// Returns a darkened copy.
    #[must_use]
    pub fn darkened(&self, percent: Real) -> Self {
        let mut c = *self;
        c.darken(percent);
        c
    }

    /// Returns a brightened copy.
    #[must_use]
    pub fn brightened(&self, percent: Real) -> Self {
        let mut c = *self;
        c.brighten(percent);
        c
    }

    /// Composites `over` on top of `self` (Porter-Duff "over").
    ///
    /// A fully transparent result is returned as [`Color::TRANSPARENT`].
    pub fn blend(&self, over: &Color) -> Color {
        let diff = 1.0 - over.a;
        let a = self.a * diff + over.a;
        if almost_equal(a, 0.0) {
            return Self::TRANSPARENT;
        }
        let mix = |under: Real, top: Real| (under * self.a * diff + top * over.a) / a;
        Color::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b), a)
    }

    /// Blends a sequence of layers from bottom to top.
    ///
    /// Returns `None` for an empty sequence.
    pub fn blend_all<'a, I>(layers: I) -> Option<Color>
    where
        I: IntoIterator<Item = &'a Color>,
    {
        let mut iter = layers.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, c| acc.blend(c)))
    }

    fn map2(self, other: Self, f: impl Fn(Real, Real) -> Real) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            f(self.a, other.a),
        )
    }
}

impl AlmostEq for Color {
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        almost_equal_with(self.r, other.r, tolerance)
            && almost_equal_with(self.g, other.g, tolerance)
            && almost_equal_with(self.b, other.b, tolerance)
            && almost_equal_with(self.a, other.a, tolerance)
    }
}

impl Index<usize> for Color {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color channel index {index} out of range"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color channel index {index} out of range"),
        }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| saturate(a + b))
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| saturate(a - b))
    }
}

impl Mul<Real> for Color {
    type Output = Color;

    fn mul(self, scalar: Real) -> Color {
        self.map2(self, |a, _| saturate(a * scalar))
    }
}

impl Mul<Color> for Real {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl Div<Real> for Color {
    type Output = Color;

    fn div(self, scalar: Real) -> Color {
        self * (1.0 / scalar)
    }
}
