//! Field-by-field total ordering for sorting math types.
//!
//! Vectors, matrices and quaternions have no meaningful "less than", yet
//! they still need a deterministic order to live in a `BTreeMap` or to be
//! sorted and deduplicated. [`PiecewiseCompare`] compares fields in a fixed
//! order, lexicographically. Floats use [`f32::total_cmp`] so NaNs sort
//! consistently.
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use lumen_core::Piecewise;
//!
//! let mut set = BTreeSet::new();
//! set.insert(Piecewise([1.0f32, 2.0]));
//! set.insert(Piecewise([1.0f32, -2.0]));
//! set.insert(Piecewise([1.0f32, 2.0]));
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.first().unwrap().0, [1.0, -2.0]);
//! ```

use std::cmp::Ordering;

/// Lexicographic ordering over a type's fields.
pub trait PiecewiseCompare {
    /// Compares field by field in declaration order.
    fn piecewise_cmp(&self, other: &Self) -> Ordering;

    /// `self` sorts strictly before `other`.
    #[inline]
    fn piecewise_less(&self, other: &Self) -> bool {
        self.piecewise_cmp(other) == Ordering::Less
    }
}

impl PiecewiseCompare for f32 {
    #[inline]
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl PiecewiseCompare for f64 {
    #[inline]
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! impl_piecewise_ord {
    ($($t:ty),*) => {$(
        impl PiecewiseCompare for $t {
            #[inline]
            fn piecewise_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_piecewise_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);

impl<T: PiecewiseCompare> PiecewiseCompare for [T] {
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.piecewise_cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T: PiecewiseCompare, const N: usize> PiecewiseCompare for [T; N] {
    #[inline]
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().piecewise_cmp(other.as_slice())
    }
}

impl<A: PiecewiseCompare, B: PiecewiseCompare> PiecewiseCompare for (A, B) {
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        self.0
            .piecewise_cmp(&other.0)
            .then_with(|| self.1.piecewise_cmp(&other.1))
    }
}

impl<A, B, C> PiecewiseCompare for (A, B, C)
where
    A: PiecewiseCompare,
    B: PiecewiseCompare,
    C: PiecewiseCompare,
{
    fn piecewise_cmp(&self, other: &Self) -> Ordering {
        self.0
            .piecewise_cmp(&other.0)
            .then_with(|| self.1.piecewise_cmp(&other.1))
            .then_with(|| self.2.piecewise_cmp(&other.2))
    }
}

/// Comparator form of [`PiecewiseCompare::piecewise_less`].
#[inline]
pub fn piecewise_less<T: PiecewiseCompare + ?Sized>(lhs: &T, rhs: &T) -> bool {
    lhs.piecewise_less(rhs)
}

/// Wrapper giving any [`PiecewiseCompare`] type `Eq` and `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Piecewise<T>(pub T);

impl<T: PiecewiseCompare> PartialEq for Piecewise<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.piecewise_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: PiecewiseCompare> Eq for Piecewise<T> {}

impl<T: PiecewiseCompare> PartialOrd for Piecewise<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PiecewiseCompare> Ord for Piecewise<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.piecewise_cmp(&other.0)
    }
}
