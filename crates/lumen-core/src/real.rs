//! Scalar precision and tolerance-based comparison.
//!
//! Every numeric quantity in lumen is a [`Real`]. Comparisons between reals
//! go through [`almost_equal`], which treats two values as equal when their
//! absolute difference does not exceed a tolerance.
//!
//! ```rust
//! use lumen_core::{almost_equal, almost_equal_with, Real};
//!
//! let a: Real = 0.1 + 0.2;
//! assert!(almost_equal(a, 0.3));
//! assert!(!almost_equal_with(1.0, 1.5, 0.25));
//! ```

/// Floating-point type used for all scalar math.
pub type Real = f32;

/// Tolerance used by [`almost_equal`] and [`AlmostEq::almost_eq`].
pub const DEFAULT_TOLERANCE: Real = 1e-6;

/// Returns `true` when `|a - b| <= DEFAULT_TOLERANCE`.
#[inline]
pub fn almost_equal(a: Real, b: Real) -> bool {
    almost_equal_with(a, b, DEFAULT_TOLERANCE)
}

/// Returns `true` when `|a - b| <= tolerance`.
#[inline]
pub fn almost_equal_with(a: Real, b: Real, tolerance: Real) -> bool {
    (a - b).abs() <= tolerance
}

/// Approximate equality for compound math types.
///
/// Implementors compare component-wise with [`almost_equal_with`].
pub trait AlmostEq {
    /// Compares with an explicit tolerance.
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool;

    /// Compares with [`DEFAULT_TOLERANCE`].
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        self.almost_eq_with(other, DEFAULT_TOLERANCE)
    }
}

impl AlmostEq for Real {
    #[inline]
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        almost_equal_with(*self, *other, tolerance)
    }
}

impl<T: AlmostEq, const N: usize> AlmostEq for [T; N] {
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.almost_eq_with(b, tolerance))
    }
}

/// Square root.
#[inline]
pub fn sqrt(x: Real) -> Real {
    x.sqrt()
}

/// Absolute value.
#[inline]
pub fn abs(x: Real) -> Real {
    x.abs()
}

/// Clamps `x` to `[lo, hi]`.
#[inline]
pub fn clamp(x: Real, lo: Real, hi: Real) -> Real {
    x.max(lo).min(hi)
}
