//! Unit-tagged angles.
//!
//! [`Angle<U>`] carries a single [`Real`] tagged with its unit. Each unit
//! defines how many of itself make a full revolution; conversion between
//! units multiplies by the ratio of revolutions.
//!
//! | Unit | Alias | Revolution |
//! |------|-------|------------|
//! | [`Radians`] | [`Radian`] | 2π |
//! | [`Degrees`] | [`Degree`] | 360 |
//! | [`Gradians`] | [`Gradian`] | 400 |
//!
//! Arithmetic mixing units converts the right operand into the unit of the
//! left one. Equality is approximate: two angles are equal when they differ
//! by at most `DEFAULT_TOLERANCE` of a revolution.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{deg, rad, AngleLiteral, Radian};
//! use std::f32::consts::PI;
//!
//! let right = deg(90.0);
//! assert_eq!(right.to_radian(), rad(PI / 2.0));
//! assert_eq!(right + rad(PI / 2.0), 180.0_f32.deg());
//!
//! let wrapped = deg(-90.0).constrained();
//! assert_eq!(wrapped, deg(270.0));
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use lumen_core::{
    AlmostEq, CommonReference, DEFAULT_TOLERANCE, PiecewiseCompare, Real, almost_equal_with,
};

/// A unit of angular measure.
pub trait AngleUnit: Copy + Default + fmt::Debug + PartialEq + Eq + Hash + 'static {
    /// Number of units in one full turn.
    const REVOLUTION: Real;
    /// Suffix used when displaying an angle.
    const SUFFIX: &'static str;
}

/// Radian unit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Radians;

/// Degree unit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Degrees;

/// Gradian unit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gradians;

impl AngleUnit for Radians {
    const REVOLUTION: Real = std::f32::consts::TAU;
    const SUFFIX: &'static str = "rad";
}

impl AngleUnit for Degrees {
    const REVOLUTION: Real = 360.0;
    const SUFFIX: &'static str = "deg";
}

impl AngleUnit for Gradians {
    const REVOLUTION: Real = 400.0;
    const SUFFIX: &'static str = "grad";
}

/// An angle measured in unit `U`.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
#[repr(transparent)]
pub struct Angle<U: AngleUnit> {
    value: Real,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

/// Angle in radians.
pub type Radian = Angle<Radians>;
/// Angle in degrees.
pub type Degree = Angle<Degrees>;
/// Angle in gradians.
pub type Gradian = Angle<Gradians>;

impl<U: AngleUnit> Angle<U> {
    /// Zero angle.
    pub const ZERO: Self = Self::new(0.0);
    /// One full turn.
    pub const REVOLUTION: Self = Self::new(U::REVOLUTION);
    /// Half a turn.
    pub const HALF_REVOLUTION: Self = Self::new(U::REVOLUTION * 0.5);

    /// Creates an angle from a raw value in unit `U`.
    #[inline]
    pub const fn new(value: Real) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// The raw value in unit `U`.
    #[inline]
    pub const fn value(self) -> Real {
        self.value
    }

    /// Number of `U` in a full turn.
    #[inline]
    pub const fn revolution() -> Real {
        U::REVOLUTION
    }

    /// Converts to another unit.
    #[inline]
    pub fn to<V: AngleUnit>(self) -> Angle<V> {
        Angle::new(self.value * (V::REVOLUTION / U::REVOLUTION))
    }

    /// Converts to radians.
    #[inline]
    pub fn to_radian(self) -> Radian {
        self.to()
    }

    /// Converts to degrees.
    #[inline]
    pub fn to_degree(self) -> Degree {
        self.to()
    }

    /// Converts to gradians.
    #[inline]
    pub fn to_gradian(self) -> Gradian {
        self.to()
    }

    /// Wraps into `[0, revolution)`.
    #[inline]
    pub fn constrained(self) -> Self {
        Self::new(self.value.rem_euclid(U::REVOLUTION))
    }

    /// Sine.
    #[inline]
    pub fn sin(self) -> Real {
        self.to_radian().value.sin()
    }

    /// Cosine.
    #[inline]
    pub fn cos(self) -> Real {
        self.to_radian().value.cos()
    }

    /// Tangent.
    #[inline]
    pub fn tan(self) -> Real {
        self.to_radian().value.tan()
    }

    /// Sine and cosine together.
    #[inline]
    pub fn sin_cos(self) -> (Real, Real) {
        self.to_radian().value.sin_cos()
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

/// Arc sine, in radians.
#[inline]
pub fn arcsin(x: Real) -> Radian {
    Radian::new(x.asin())
}

/// Arc cosine, in radians.
#[inline]
pub fn arccos(x: Real) -> Radian {
    Radian::new(x.acos())
}

/// Arc tangent, in radians.
#[inline]
pub fn arctan(x: Real) -> Radian {
    Radian::new(x.atan())
}

/// Four-quadrant arc tangent of `y / x`, in radians.
#[inline]
pub fn arctan2(y: Real, x: Real) -> Radian {
    Radian::new(y.atan2(x))
}

/// Creates a [`Radian`].
#[inline]
pub const fn rad(value: Real) -> Radian {
    Radian::new(value)
}

/// Creates a [`Degree`].
#[inline]
pub const fn deg(value: Real) -> Degree {
    Degree::new(value)
}

/// Creates a [`Gradian`].
#[inline]
pub const fn grad(value: Real) -> Gradian {
    Gradian::new(value)
}

/// Suffix-style constructors: `90.0_f32.deg()`.
pub trait AngleLiteral {
    /// Interprets `self` as radians.
    fn rad(self) -> Radian;
    /// Interprets `self` as degrees.
    fn deg(self) -> Degree;
    /// Interprets `self` as gradians.
    fn grad(self) -> Gradian;
}

impl AngleLiteral for Real {
    #[inline]
    fn rad(self) -> Radian {
        rad(self)
    }

    #[inline]
    fn deg(self) -> Degree {
        deg(self)
    }

    #[inline]
    fn grad(self) -> Gradian {
        grad(self)
    }
}

impl<U: AngleUnit> fmt::Debug for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}{})", self.value, U::SUFFIX)
    }
}

impl<U: AngleUnit> fmt::Display for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SUFFIX)
    }
}

impl<U: AngleUnit, V: AngleUnit> PartialEq<Angle<V>> for Angle<U> {
    #[inline]
    fn eq(&self, other: &Angle<V>) -> bool {
        almost_equal_with(
            self.value,
            other.to::<U>().value,
            DEFAULT_TOLERANCE * U::REVOLUTION,
        )
    }
}

impl<U: AngleUnit, V: AngleUnit> PartialOrd<Angle<V>> for Angle<U> {
    fn partial_cmp(&self, other: &Angle<V>) -> Option<std::cmp::Ordering> {
        if self == other {
            return Some(std::cmp::Ordering::Equal);
        }
        self.value.partial_cmp(&other.to::<U>().value)
    }
}

impl<U: AngleUnit> AlmostEq for Angle<U> {
    #[inline]
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        almost_equal_with(self.value, other.value, tolerance)
    }
}

impl<U: AngleUnit> PiecewiseCompare for Angle<U> {
    #[inline]
    fn piecewise_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl<U: AngleUnit, V: AngleUnit> CommonReference<Angle<V>> for Angle<U> {
    type Output = Angle<U>;

    #[inline]
    fn lhs_into(self) -> Angle<U> {
        self
    }

    #[inline]
    fn rhs_into(rhs: Angle<V>) -> Angle<U> {
        rhs.to()
    }
}

impl<'a, U: AngleUnit, V: AngleUnit> CommonReference<&'a Angle<V>> for Angle<U> {
    type Output = Angle<U>;

    #[inline]
    fn lhs_into(self) -> Angle<U> {
        self
    }

    #[inline]
    fn rhs_into(rhs: &'a Angle<V>) -> Angle<U> {
        rhs.to()
    }
}

impl<'a, U: AngleUnit, V: AngleUnit> CommonReference<Angle<V>> for &'a Angle<U> {
    type Output = Angle<U>;

    #[inline]
    fn lhs_into(self) -> Angle<U> {
        *self
    }

    #[inline]
    fn rhs_into(rhs: Angle<V>) -> Angle<U> {
        rhs.to()
    }
}

impl<U: AngleUnit> Neg for Angle<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: AngleUnit, V: AngleUnit> Add<Angle<V>> for Angle<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Angle<V>) -> Self {
        Self::new(self.value + rhs.to::<U>().value)
    }
}

impl<U: AngleUnit, V: AngleUnit> Sub<Angle<V>> for Angle<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Angle<V>) -> Self {
        Self::new(self.value - rhs.to::<U>().value)
    }
}

impl<U: AngleUnit, V: AngleUnit> AddAssign<Angle<V>> for Angle<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Angle<V>) {
        *self = *self + rhs;
    }
}

impl<U: AngleUnit, V: AngleUnit> SubAssign<Angle<V>> for Angle<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle<V>) {
        *self = *self - rhs;
    }
}

impl<U: AngleUnit> Mul<Real> for Angle<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Real) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: AngleUnit> Mul<Angle<U>> for Real {
    type Output = Angle<U>;

    #[inline]
    fn mul(self, rhs: Angle<U>) -> Angle<U> {
        rhs * self
    }
}

impl<U: AngleUnit> MulAssign<Real> for Angle<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        self.value *= rhs;
    }
}

impl<U: AngleUnit> Div<Real> for Angle<U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Real) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<U: AngleUnit> DivAssign<Real> for Angle<U> {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        self.value /= rhs;
    }
}

/// Ratio of two angles.
impl<U: AngleUnit, V: AngleUnit> Div<Angle<V>> for Angle<U> {
    type Output = Real;

    #[inline]
    fn div(self, rhs: Angle<V>) -> Real {
        self.value / rhs.to::<U>().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_conversions() {
        assert_abs_diff_eq!(deg(180.0).to_radian().value(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(rad(PI).to_degree().value(), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(deg(90.0).to_gradian().value(), 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(grad(200.0).to_degree().value(), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_round_trip_preserves_value() {
        for i in -8..=8 {
            let d = deg(i as Real * 45.0);
            assert_eq!(d.to_radian().to_degree(), d);
            assert_eq!(d.to_gradian().to_degree(), d);
        }
    }

    #[test]
    fn test_cross_unit_equality_and_ordering() {
        assert_eq!(deg(90.0), rad(PI / 2.0));
        assert_ne!(deg(90.0), rad(PI));
        assert!(deg(10.0) < rad(1.0));
        assert!(grad(300.0) > deg(180.0));
        assert!(deg(90.0) <= rad(PI / 2.0));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(deg(30.0) + deg(60.0), deg(90.0));
        assert_eq!(deg(180.0) - rad(PI / 2.0), deg(90.0));
        assert_eq!(-deg(45.0), deg(-45.0));
        assert_eq!(deg(45.0) * 2.0, deg(90.0));
        assert_eq!(2.0 * deg(45.0), deg(90.0));
        assert_eq!(deg(90.0) / 2.0, deg(45.0));
        assert_abs_diff_eq!(deg(90.0) / rad(PI), 0.5, epsilon = 1e-6);

        let mut a = deg(10.0);
        a += deg(20.0);
        a -= deg(5.0);
        a *= 2.0;
        a /= 5.0;
        assert_eq!(a, deg(10.0));
    }

    #[test]
    fn test_constrained() {
        assert_eq!(deg(370.0).constrained(), deg(10.0));
        assert_eq!(deg(-10.0).constrained(), deg(350.0));
        assert_eq!(rad(-PI / 2.0).constrained(), rad(3.0 * PI / 2.0));
        assert_eq!(deg(360.0).constrained().value(), 0.0);
    }

    #[test]
    fn test_trigonometry() {
        assert_abs_diff_eq!(deg(30.0).sin(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(deg(60.0).cos(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(grad(50.0).tan(), 1.0, epsilon = 1e-6);
        assert_eq!(arcsin(1.0), deg(90.0));
        assert_eq!(arccos(-1.0), deg(180.0));
        assert_eq!(arctan(1.0), deg(45.0));
        assert_eq!(arctan2(-1.0, 0.0), deg(-90.0));
    }

    #[test]
    fn test_literals() {
        assert_eq!(90.0_f32.deg(), deg(90.0));
        assert_eq!(PI.rad(), 100.0_f32.grad() * 2.0);
    }

    #[test]
    fn test_common_reference_min_max() {
        let m = lumen_core::min(deg(90.0), rad(1.0));
        assert_abs_diff_eq!(m.value(), 1.0_f32.to_degrees(), epsilon = 1e-4);
        let m = lumen_core::max(rad(0.5), &deg(90.0));
        assert_eq!(m, rad(PI / 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(deg(90.0).to_string(), "90deg");
        assert_eq!(format!("{:?}", rad(1.5)), "Angle(1.5rad)");
    }
}
