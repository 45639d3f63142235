//! Byte-aligned composition and decomposition of integers.
//!
//! Integers are assembled and split most-significant part first, so the
//! first part of a [`make`] call lands in the high bytes of the result and
//! the first element of a [`split`] holds the high bytes of the source.
//!
//! ```rust
//! use lumen_core::int_utilities::{extract, make, split};
//!
//! let x: u32 = make((0x12u8, 0x3456u16, 0x78u8));
//! assert_eq!(x, 0x12345678);
//!
//! let bytes: [u8; 4] = split(x);
//! assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
//!
//! assert_eq!(extract::<1, u16, u32>(x), 0x5678);
//! ```
//!
//! Size mismatches are rejected at compile time.
//!
//! The module also provides sign-safe comparisons between integers of
//! differing signedness ([`cmp_less`] and friends): `-1i32` is less than
//! `0u32` here, unlike a raw `as` cast.

use std::cmp::Ordering;

/// Widened value of any [`Integral`] used for sign-safe ordering.
///
/// Negative values order before all non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Widened {
    /// A value below zero
    Negative(i128),
    /// A value at or above zero
    NonNegative(u128),
}

/// Primitive integer types that can be composed, split and compared.
pub trait Integral: Copy + Sized {
    /// Size of the type in bytes.
    const BYTES: usize;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Raw two's complement bits, zero-extended to 128 bits.
    fn to_bits(self) -> u128;

    /// Builds a value from the low [`Integral::BYTES`] bytes of `bits`.
    fn from_bits(bits: u128) -> Self;

    /// Widens to a sign-aware representation.
    fn widen(self) -> Widened;
}

macro_rules! impl_integral {
    (unsigned: $($t:ty),*) => {$(
        impl Integral for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = false;

            #[inline]
            fn to_bits(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_bits(bits: u128) -> Self {
                bits as $t
            }

            #[inline]
            fn widen(self) -> Widened {
                Widened::NonNegative(self as u128)
            }
        }
    )*};
    (signed: $($t:ty => $u:ty),*) => {$(
        impl Integral for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = true;

            #[inline]
            fn to_bits(self) -> u128 {
                self as $u as u128
            }

            #[inline]
            fn from_bits(bits: u128) -> Self {
                bits as $t
            }

            #[inline]
            fn widen(self) -> Widened {
                if self < 0 {
                    Widened::Negative(self as i128)
                } else {
                    Widened::NonNegative(self as u128)
                }
            }
        }
    )*};
}

impl_integral!(unsigned: u8, u16, u32, u64, u128, usize);
impl_integral!(signed: i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

#[inline]
fn push_bits(acc: u128, bytes: usize, bits: u128) -> u128 {
    acc.checked_shl((bytes * 8) as u32).unwrap_or(0) | bits
}

/// An ordered group of integers that [`make`] can concatenate.
///
/// Implemented for tuples of up to eight [`Integral`]s and for arrays.
pub trait IntParts {
    /// Combined size of all parts in bytes.
    const BYTES: usize;

    /// Shifts `acc` left past each part in turn and ORs the part in.
    fn fold_bits(self, acc: u128) -> u128;
}

impl<T: Integral, const N: usize> IntParts for [T; N] {
    const BYTES: usize = T::BYTES * N;

    fn fold_bits(self, acc: u128) -> u128 {
        self.into_iter()
            .fold(acc, |acc, part| push_bits(acc, T::BYTES, part.to_bits()))
    }
}

macro_rules! impl_int_parts_tuple {
    ($($name:ident),+) => {
        impl<$($name: Integral),+> IntParts for ($($name,)+) {
            const BYTES: usize = 0 $(+ $name::BYTES)+;

            #[allow(non_snake_case)]
            fn fold_bits(self, acc: u128) -> u128 {
                let ($($name,)+) = self;
                $(let acc = push_bits(acc, $name::BYTES, $name.to_bits());)+
                acc
            }
        }
    };
}

impl_int_parts_tuple!(A);
impl_int_parts_tuple!(A, B);
impl_int_parts_tuple!(A, B, C);
impl_int_parts_tuple!(A, B, C, D);
impl_int_parts_tuple!(A, B, C, D, E);
impl_int_parts_tuple!(A, B, C, D, E, F);
impl_int_parts_tuple!(A, B, C, D, E, F, G);
impl_int_parts_tuple!(A, B, C, D, E, F, G, H);

/// Concatenates `parts`, most significant first, into an `Int`.
///
/// The parts must add up to exactly the size of `Int`.
#[inline]
pub fn make<Int: Integral, P: IntParts>(parts: P) -> Int {
    const {
        assert!(
            Int::BYTES == P::BYTES,
            "size of parts must equal size of the result"
        )
    };
    Int::from_bits(parts.fold_bits(0))
}

#[inline]
fn chunk<To: Integral, From: Integral>(bits: u128, index: usize) -> To {
    let count = From::BYTES / To::BYTES;
    let shift = (count - 1 - index) * To::BYTES * 8;
    To::from_bits(bits.checked_shr(shift as u32).unwrap_or(0))
}

/// Splits `from` into `N` chunks of `To`, most significant first.
///
/// `N * size_of::<To>()` must equal `size_of::<From>()`.
#[inline]
pub fn split<To: Integral, From: Integral, const N: usize>(from: From) -> [To; N] {
    const {
        assert!(
            N * To::BYTES == From::BYTES,
            "chunks must exactly cover the source integer"
        )
    };
    let bits = from.to_bits();
    std::array::from_fn(|i| chunk::<To, From>(bits, i))
}

/// Appends the chunks of `from` to `out`, most significant first.
///
/// Returns the number of chunks written.
pub fn split_into<To, From, E>(out: &mut E, from: From) -> usize
where
    To: Integral,
    From: Integral,
    E: Extend<To>,
{
    const {
        assert!(
            From::BYTES % To::BYTES == 0,
            "chunk size must divide the source size"
        )
    };
    let bits = from.to_bits();
    let count = From::BYTES / To::BYTES;
    out.extend((0..count).map(|i| chunk::<To, From>(bits, i)));
    count
}

/// Returns the `N`-th chunk of `from`, counting from the most significant.
#[inline]
pub fn extract<const N: usize, To: Integral, From: Integral>(from: From) -> To {
    const {
        assert!(
            From::BYTES % To::BYTES == 0 && N < From::BYTES / To::BYTES,
            "chunk index out of range"
        )
    };
    chunk::<To, From>(from.to_bits(), N)
}

/// Orders two integers of possibly different signedness.
#[inline]
pub fn cmp_integers<L: Integral, R: Integral>(lhs: L, rhs: R) -> Ordering {
    lhs.widen().cmp(&rhs.widen())
}

/// Sign-safe `lhs == rhs`.
#[inline]
pub fn cmp_equal<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    lhs.widen() == rhs.widen()
}

/// Sign-safe `lhs != rhs`.
#[inline]
pub fn cmp_not_equal<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    !cmp_equal(lhs, rhs)
}

/// Sign-safe `lhs < rhs`.
#[inline]
pub fn cmp_less<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    cmp_integers(lhs, rhs) == Ordering::Less
}

/// Sign-safe `lhs > rhs`.
#[inline]
pub fn cmp_greater<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    cmp_integers(lhs, rhs) == Ordering::Greater
}

/// Sign-safe `lhs <= rhs`.
#[inline]
pub fn cmp_less_equal<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    !cmp_greater(lhs, rhs)
}

/// Sign-safe `lhs >= rhs`.
#[inline]
pub fn cmp_greater_equal<L: Integral, R: Integral>(lhs: L, rhs: R) -> bool {
    !cmp_less(lhs, rhs)
}
