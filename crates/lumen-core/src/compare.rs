//! Transparent comparators and the comparison reducer behind `min`/`max`.
//!
//! A [`CompareReducer`] folds its arguments left with
//! `if compare(a, b) { a } else { b }`. Its result type is the
//! [`CommonReference`] of the arguments: reducing two references returns a
//! reference into one of them, while any value argument makes the result a
//! value.
//!
//! ```rust
//! use lumen_core::{max, min};
//!
//! let a = String::from("apple");
//! let b = String::from("pear");
//! let first: &String = min(&a, &b);
//! assert!(std::ptr::eq(first, &a));
//!
//! assert_eq!(lumen_core::max!(3i32, 9, 4, 1), 9);
//! assert_eq!(max(2.0f32, &1.0f32), 2.0);
//! ```

use crate::common_reference::CommonReference;
use crate::int_utilities::{self, Integral};

/// A binary predicate usable by [`CompareReducer`].
pub trait Comparator: Copy + Default {
    /// Evaluates the predicate on two possibly different types.
    fn compare<L, R>(&self, lhs: &L, rhs: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized;

    /// Evaluates the predicate on integers of any signedness.
    fn compare_integers<L: Integral, R: Integral>(&self, lhs: L, rhs: R) -> bool;
}

macro_rules! comparator {
    ($(#[$meta:meta])* $name:ident, $op:tt, $sign_safe:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Comparator for $name {
            #[inline]
            fn compare<L, R>(&self, lhs: &L, rhs: &R) -> bool
            where
                L: PartialOrd<R> + ?Sized,
                R: ?Sized,
            {
                lhs $op rhs
            }

            #[inline]
            fn compare_integers<L: Integral, R: Integral>(&self, lhs: L, rhs: R) -> bool {
                $sign_safe(lhs, rhs)
            }
        }
    };
}

comparator!(
    /// `lhs == rhs`
    CompareEqual, ==, int_utilities::cmp_equal
);
comparator!(
    /// `lhs != rhs`
    CompareNotEqual, !=, int_utilities::cmp_not_equal
);
comparator!(
    /// `lhs < rhs`
    CompareLess, <, int_utilities::cmp_less
);
comparator!(
    /// `lhs <= rhs`
    CompareLessEqual, <=, int_utilities::cmp_less_equal
);
comparator!(
    /// `lhs > rhs`
    CompareGreater, >, int_utilities::cmp_greater
);
comparator!(
    /// `lhs >= rhs`
    CompareGreaterEqual, >=, int_utilities::cmp_greater_equal
);

/// Reduces arguments by keeping the left one whenever the comparator holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareReducer<C> {
    compare: C,
}

impl<C: Comparator> CompareReducer<C> {
    /// Wraps a comparator.
    #[inline]
    pub const fn new(compare: C) -> Self {
        Self { compare }
    }

    /// Returns `a` if `compare(a, b)` holds, otherwise `b`.
    #[inline]
    pub fn reduce<A, B>(&self, a: A, b: B) -> A::Output
    where
        A: CommonReference<B>,
        A::Output: PartialOrd,
    {
        let a = a.lhs_into();
        let b = A::rhs_into(b);
        if self.compare.compare(&a, &b) { a } else { b }
    }

    /// Left-folds an iterator of a single type.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn reduce_all<T, I>(&self, values: I) -> Option<T>
    where
        T: PartialOrd,
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .reduce(|a, b| if self.compare.compare(&a, &b) { a } else { b })
    }

    /// Sign-safe reduction of two integers, widened to `i128`-or-`u128`.
    ///
    /// Returns whether the left operand was kept.
    #[inline]
    pub fn keeps_left<L: Integral, R: Integral>(&self, a: L, b: R) -> bool {
        self.compare.compare_integers(a, b)
    }
}

/// Reducer returning the smallest argument.
pub const MIN: CompareReducer<CompareLess> = CompareReducer::new(CompareLess);

/// Reducer returning the largest argument.
pub const MAX: CompareReducer<CompareGreater> = CompareReducer::new(CompareGreater);

/// Smaller of two values; on ties the second is returned.
#[inline]
pub fn min<A, B>(a: A, b: B) -> A::Output
where
    A: CommonReference<B>,
    A::Output: PartialOrd,
{
    MIN.reduce(a, b)
}

/// Larger of two values; on ties the second is returned.
#[inline]
pub fn max<A, B>(a: A, b: B) -> A::Output
where
    A: CommonReference<B>,
    A::Output: PartialOrd,
{
    MAX.reduce(a, b)
}

/// Variadic [`min`](crate::compare::min), folded left.
#[macro_export]
macro_rules! min {
    ($a:expr $(,)?) => { $a };
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!($crate::compare::min($a, $b) $(, $rest)*)
    };
}

/// Variadic [`max`](crate::compare::max), folded left.
#[macro_export]
macro_rules! max {
    ($a:expr $(,)?) => { $a };
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!($crate::compare::max($a, $b) $(, $rest)*)
    };
}
