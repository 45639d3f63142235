//! Conversions between matrix sizes.
//!
//! Growing a matrix embeds it in the top-left block of an identity; shrinking
//! keeps the top-left block.
//!
//! ```rust
//! use lumen_math::{Matrix2, Matrix4, matrix_cast};
//!
//! let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
//! let big: Matrix4 = matrix_cast(m);
//! assert_eq!(big.m[0], [1.0, 2.0, 0.0, 0.0]);
//! assert_eq!(big.m[3], [0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(matrix_cast::<Matrix2, _>(big), m);
//! ```

use lumen_core::Real;

use crate::mat2::Matrix2;
use crate::mat3::Matrix3;
use crate::mat4::Matrix4;

/// Size conversion into the matrix type `To`.
pub trait MatrixCast<To> {
    /// Performs the conversion.
    fn cast(self) -> To;
}

/// Converts `from` into a matrix of another size.
#[inline]
pub fn matrix_cast<To, From: MatrixCast<To>>(from: From) -> To {
    from.cast()
}

fn resize<const F: usize, const T: usize>(from: &[[Real; F]; F]) -> [[Real; T]; T] {
    std::array::from_fn(|r| {
        std::array::from_fn(|c| match (from.get(r), r == c) {
            (Some(row), _) if c < F => row[c],
            (_, true) => 1.0,
            _ => 0.0,
        })
    })
}

macro_rules! matrix_cast_impl {
    ($from:ident => $($to:ident),+) => {
        $(
            impl MatrixCast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    $to::from_rows(resize(&self.m))
                }
            }
        )+
    };
}

matrix_cast_impl!(Matrix2 => Matrix2, Matrix3, Matrix4);
matrix_cast_impl!(Matrix3 => Matrix2, Matrix3, Matrix4);
matrix_cast_impl!(Matrix4 => Matrix2, Matrix3, Matrix4);
