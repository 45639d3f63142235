//! The type two values can both be viewed as.
//!
//! [`CommonReference`] names the result type of an operation that returns
//! "one of its two arguments", such as [`crate::min`]. The rules:
//!
//! - two shared references to `T` yield `&T`
//! - two mutable references to `T` yield `&mut T`
//! - a shared and a mutable reference yield `&T`
//! - any mix involving a value yields a value, so nothing can dangle
//!
//! Types outside this crate opt in by implementing the trait; the
//! [`impl_common_reference!`](crate::impl_common_reference) macro covers
//! `Copy` value types.
//!
//! ```rust
//! use lumen_core::CommonReferenceOf;
//!
//! fn assert_type<T>(_: T) {}
//!
//! let a: CommonReferenceOf<&i32, &i32> = &1;
//! let b: CommonReferenceOf<i32, &i32> = 1;
//! assert_type::<&i32>(a);
//! assert_type::<i32>(b);
//! ```

/// Conversion of a `(Self, Rhs)` pair into a single common type.
pub trait CommonReference<Rhs = Self>: Sized {
    /// The common type.
    type Output;

    /// Converts the left operand.
    fn lhs_into(self) -> Self::Output;

    /// Converts the right operand.
    fn rhs_into(rhs: Rhs) -> Self::Output;
}

/// Shorthand for `<A as CommonReference<B>>::Output`.
pub type CommonReferenceOf<A, B> = <A as CommonReference<B>>::Output;

impl<'a, T: ?Sized> CommonReference<&'a T> for &'a T {
    type Output = &'a T;

    #[inline]
    fn lhs_into(self) -> &'a T {
        self
    }

    #[inline]
    fn rhs_into(rhs: &'a T) -> &'a T {
        rhs
    }
}

impl<'a, T: ?Sized> CommonReference<&'a mut T> for &'a mut T {
    type Output = &'a mut T;

    #[inline]
    fn lhs_into(self) -> &'a mut T {
        self
    }

    #[inline]
    fn rhs_into(rhs: &'a mut T) -> &'a mut T {
        rhs
    }
}

impl<'a, T: ?Sized> CommonReference<&'a mut T> for &'a T {
    type Output = &'a T;

    #[inline]
    fn lhs_into(self) -> &'a T {
        self
    }

    #[inline]
    fn rhs_into(rhs: &'a mut T) -> &'a T {
        rhs
    }
}

impl<'a, T: ?Sized> CommonReference<&'a T> for &'a mut T {
    type Output = &'a T;

    #[inline]
    fn lhs_into(self) -> &'a T {
        self
    }

    #[inline]
    fn rhs_into(rhs: &'a T) -> &'a T {
        rhs
    }
}

/// Implements [`CommonReference`] for `Copy` value types.
///
/// For each type `T` this covers `T`/`T`, and every mix of `T` with `&T`
/// or `&mut T`, all producing `T`.
#[macro_export]
macro_rules! impl_common_reference {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::CommonReference<$t> for $t {
            type Output = $t;
            #[inline]
            fn lhs_into(self) -> $t { self }
            #[inline]
            fn rhs_into(rhs: $t) -> $t { rhs }
        }

        impl<'a> $crate::CommonReference<&'a $t> for $t {
            type Output = $t;
            #[inline]
            fn lhs_into(self) -> $t { self }
            #[inline]
            fn rhs_into(rhs: &'a $t) -> $t { *rhs }
        }

        impl<'a> $crate::CommonReference<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn lhs_into(self) -> $t { *self }
            #[inline]
            fn rhs_into(rhs: $t) -> $t { rhs }
        }

        impl<'a> $crate::CommonReference<&'a mut $t> for $t {
            type Output = $t;
            #[inline]
            fn lhs_into(self) -> $t { self }
            #[inline]
            fn rhs_into(rhs: &'a mut $t) -> $t { *rhs }
        }

        impl<'a> $crate::CommonReference<$t> for &'a mut $t {
            type Output = $t;
            #[inline]
            fn lhs_into(self) -> $t { *self }
            #[inline]
            fn rhs_into(rhs: $t) -> $t { rhs }
        }
    )*};
}

impl_common_reference!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);
