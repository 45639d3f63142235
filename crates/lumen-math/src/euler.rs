//! Yaw, pitch and roll.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use lumen_core::{AlmostEq, Real, almost_equal_with};

use crate::angle::Radian;

/// Three rotations applied yaw (around Y), then pitch (around X), then roll
/// (around Z).
///
/// Equality is exact on the radian values; use [`AlmostEq`] for tolerance.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Rotation around Y
    pub yaw: Radian,
    /// Rotation around X
    pub pitch: Radian,
    /// Rotation around Z
    pub roll: Radian,
}

impl EulerAngles {
    /// All angles zero.
    pub const ZERO: Self = Self::new(Radian::ZERO, Radian::ZERO, Radian::ZERO);

    /// Creates from the three angles.
    #[inline]
    pub const fn new(yaw: Radian, pitch: Radian, roll: Radian) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Number of angles.
    #[inline]
    pub const fn size(&self) -> usize {
        3
    }

    /// Sum of the component-wise products of the radian values.
    #[inline]
    pub fn dot(&self, other: &Self) -> Real {
        self.yaw.value() * other.yaw.value()
            + self.pitch.value() * other.pitch.value()
            + self.roll.value() * other.roll.value()
    }

    #[inline]
    fn map(self, f: impl Fn(Radian) -> Radian) -> Self {
        Self::new(f(self.yaw), f(self.pitch), f(self.roll))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(Radian, Radian) -> Radian) -> Self {
        Self::new(f(self.yaw, other.yaw), f(self.pitch, other.pitch), f(self.roll, other.roll))
    }
}

impl PartialEq for EulerAngles {
    fn eq(&self, other: &Self) -> bool {
        self.yaw.value() == other.yaw.value()
            && self.pitch.value() == other.pitch.value()
            && self.roll.value() == other.roll.value()
    }
}

impl AlmostEq for EulerAngles {
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        almost_equal_with(self.yaw.value(), other.yaw.value(), tolerance)
            && almost_equal_with(self.pitch.value(), other.pitch.value(), tolerance)
            && almost_equal_with(self.roll.value(), other.roll.value(), tolerance)
    }
}

impl Index<usize> for EulerAngles {
    type Output = Radian;

    fn index(&self, index: usize) -> &Radian {
        match index {
            0 => &self.yaw,
            1 => &self.pitch,
            2 => &self.roll,
            _ => panic!("EulerAngles index out of bounds: {index}"),
        }
    }
}

impl IndexMut<usize> for EulerAngles {
    fn index_mut(&mut self, index: usize) -> &mut Radian {
        match index {
            0 => &mut self.yaw,
            1 => &mut self.pitch,
            2 => &mut self.roll,
            _ => panic!("EulerAngles index out of bounds: {index}"),
        }
    }
}

impl Neg for EulerAngles {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl Add for EulerAngles {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for EulerAngles {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<Real> for EulerAngles {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Real) -> Self {
        self.map(|a| a * rhs)
    }
}

impl Mul<EulerAngles> for Real {
    type Output = EulerAngles;

    #[inline]
    fn mul(self, rhs: EulerAngles) -> EulerAngles {
        rhs * self
    }
}

impl Div<Real> for EulerAngles {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Real) -> Self {
        let inv = 1.0 / rhs;
        self.map(|a| a * inv)
    }
}

impl AddAssign for EulerAngles {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for EulerAngles {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Real> for EulerAngles {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign<Real> for EulerAngles {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}
