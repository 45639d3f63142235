//! Implementation macros shared by the fixed-size vector and matrix types.

/// Component-wise API and operators common to `Vector2/3/4`.
macro_rules! impl_vector {
    ($name:ident, $n:literal, $glam:ty, $($field:ident => $idx:literal),+) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0.0),+ };
            /// All components one.
            pub const ONE: Self = Self { $($field: 1.0),+ };

            /// Creates a vector with all components set to `v`.
            #[inline]
            pub const fn splat(v: Real) -> Self {
                Self { $($field: v),+ }
            }

            /// Creates from an array.
            #[inline]
            pub const fn from_array(a: [Real; $n]) -> Self {
                Self { $($field: a[$idx]),+ }
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [Real; $n] {
                [$(self.$field),+]
            }

            /// Views the components as an array.
            #[inline]
            pub fn as_array(&self) -> &[Real; $n] {
                bytemuck::cast_ref(self)
            }

            /// Views the components as a mutable array.
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [Real; $n] {
                bytemuck::cast_mut(self)
            }

            /// Number of components.
            #[inline]
            pub const fn size(&self) -> usize {
                $n
            }

            /// Checked component access.
            ///
            /// # Errors
            ///
            /// [`Error::OutOfRange`] if `index >= size()`.
            #[inline]
            pub fn at(&self, index: usize) -> Result<Real> {
                self.as_array()
                    .get(index)
                    .copied()
                    .ok_or(Error::out_of_range(stringify!($name), index, $n))
            }

            /// Checked mutable component access.
            ///
            /// # Errors
            ///
            /// [`Error::OutOfRange`] if `index >= size()`.
            #[inline]
            pub fn at_mut(&mut self, index: usize) -> Result<&mut Real> {
                self.as_mut_array()
                    .get_mut(index)
                    .ok_or(Error::out_of_range(stringify!($name), index, $n))
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> Real {
                let mut sum = 0.0;
                $(sum += self.$field * other.$field;)+
                sum
            }

            /// Squared length.
            #[inline]
            pub fn square_magnitude(self) -> Real {
                self.dot(self)
            }

            /// Length.
            #[inline]
            pub fn magnitude(self) -> Real {
                self.square_magnitude().sqrt()
            }

            /// Distance to `other`.
            #[inline]
            pub fn distance(self, other: Self) -> Real {
                (other - self).magnitude()
            }

            /// Unit-length copy.
            ///
            /// # Panics
            ///
            /// Panics if the vector has zero length.
            #[inline]
            pub fn normalized(self) -> Self {
                let mag = self.magnitude();
                assert!(
                    mag > 0.0,
                    concat!("cannot normalize a zero-length ", stringify!($name))
                );
                self / mag
            }

            /// Normalizes in place.
            ///
            /// # Panics
            ///
            /// Panics if the vector has zero length.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                *self = self.normalized();
                self
            }

            /// Whether the squared length is one within tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                almost_equal(self.square_magnitude(), 1.0)
            }

            /// Point halfway between `self` and `other`.
            #[inline]
            pub fn midpoint(self, other: Self) -> Self {
                (self + other) * 0.5
            }

            /// Reflection off a surface with unit `normal`.
            #[inline]
            pub fn reflection(self, normal: Self) -> Self {
                self - normal * (2.0 * self.dot(normal))
            }

            /// Component of `self` along `onto`.
            ///
            /// `onto` must be non-zero.
            #[inline]
            pub fn projection(self, onto: Self) -> Self {
                onto * (self.dot(onto) / onto.dot(onto))
            }

            /// Component of `self` orthogonal to `onto`.
            #[inline]
            pub fn rejection(self, onto: Self) -> Self {
                self - self.projection(onto)
            }

            /// Component-wise reciprocal.
            #[inline]
            pub fn inverse(self) -> Self {
                Self { $($field: 1.0 / self.$field),+ }
            }

            /// Unsigned angle to `other`, in `[0, π]`.
            ///
            /// A zero-length operand is treated as having a tiny length
            /// rather than dividing by zero.
            pub fn angle_between(self, other: Self) -> Radian {
                let mut mag_product = self.magnitude() * other.magnitude();
                if almost_equal(mag_product, 0.0) {
                    mag_product = DEFAULT_TOLERANCE;
                }
                arccos(clamp(self.dot(other) / mag_product, -1.0, 1.0))
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
            #[inline]
            pub fn lerp(self, other: Self, t: Real) -> Self {
                self + (other - self) * t
            }

            /// True if every component is finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }

            /// Converts to the glam equivalent.
            #[inline]
            pub fn to_glam(self) -> $glam {
                <$glam>::from_array(self.to_array())
            }

            /// Creates from the glam equivalent.
            #[inline]
            pub fn from_glam(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<[Real; $n]> for $name {
            #[inline]
            fn from(a: [Real; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [Real; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_glam()
            }
        }

        impl AlmostEq for $name {
            #[inline]
            fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
                true $(&& almost_equal_with(self.$field, other.$field, tolerance))+
            }
        }

        impl PiecewiseCompare for $name {
            #[inline]
            fn piecewise_cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.as_array().piecewise_cmp(other.as_array())
            }
        }

        impl Index<usize> for $name {
            type Output = Real;

            #[inline]
            fn index(&self, i: usize) -> &Real {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of bounds: {}"), i),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut Real {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of bounds: {}"), i),
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        // Component-wise
        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl Mul<Real> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Real) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$name> for Real {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<Real> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Real) -> Self {
                let inv = 1.0 / rhs;
                Self { $($field: self.$field * inv),+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl MulAssign<Real> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Real) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<Real> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Real) {
                *self = *self / rhs;
            }
        }
    };
}

/// Storage, access and operators common to `Matrix2/3/4`.
///
/// The type must provide `determinant()` and `try_inverse()`.
macro_rules! impl_matrix {
    ($name:ident, $n:literal, $vector:ident, $glam:ty) => {
        impl $name {
            /// Identity matrix.
            pub const IDENTITY: Self = Self::diagonal_splat(1.0);
            /// All elements zero.
            pub const ZERO: Self = Self { m: [[0.0; $n]; $n] };

            /// Number of rows.
            pub const ROWS: usize = $n;
            /// Number of columns.
            pub const COLUMNS: usize = $n;

            const fn diagonal_splat(v: Real) -> Self {
                let mut m = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    m[i][i] = v;
                    i += 1;
                }
                Self { m }
            }

            /// Creates from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[Real; $n]; $n]) -> Self {
                Self { m: rows }
            }

            /// Creates from column arrays.
            #[inline]
            pub fn from_cols(cols: [[Real; $n]; $n]) -> Self {
                Self::from_rows(cols).transposed()
            }

            /// Diagonal matrix with `d` on the diagonal.
            #[inline]
            pub fn diagonal(d: $vector) -> Self {
                let mut out = Self::ZERO;
                for i in 0..$n {
                    out.m[i][i] = d[i];
                }
                out
            }

            /// Element at `(row, col)`.
            ///
            /// # Panics
            ///
            /// Panics if either index is out of range.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> Real {
                self.m[row][col]
            }

            /// Mutable element at `(row, col)`.
            #[inline]
            pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Real {
                &mut self.m[row][col]
            }

            /// Checked element access.
            ///
            /// # Errors
            ///
            /// [`Error::OutOfRange`] if `row` or `col` is out of range; the
            /// reported index is the flattened row-major index.
            pub fn at(&self, row: usize, col: usize) -> Result<Real> {
                if row >= $n || col >= $n {
                    return Err(Error::out_of_range(stringify!($name), row * $n + col, $n * $n));
                }
                Ok(self.m[row][col])
            }

            /// Checked mutable element access.
            ///
            /// # Errors
            ///
            /// [`Error::OutOfRange`] if `row` or `col` is out of range.
            pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Real> {
                if row >= $n || col >= $n {
                    return Err(Error::out_of_range(stringify!($name), row * $n + col, $n * $n));
                }
                Ok(&mut self.m[row][col])
            }

            /// Elements in row-major order.
            #[inline]
            pub fn data(&self) -> &[Real] {
                self.m.as_flattened()
            }

            /// Row `i` as a vector.
            #[inline]
            pub fn row(&self, i: usize) -> $vector {
                $vector::from_array(self.m[i])
            }

            /// Column `j` as a vector.
            #[inline]
            pub fn column(&self, j: usize) -> $vector {
                $vector::from_array(std::array::from_fn(|r| self.m[r][j]))
            }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> Real {
                (0..$n).map(|i| self.m[i][i]).sum()
            }

            /// Transposes in place.
            pub fn transpose(&mut self) -> &mut Self {
                for r in 0..$n {
                    for c in 0..r {
                        let upper = self.m[c][r];
                        self.m[c][r] = self.m[r][c];
                        self.m[r][c] = upper;
                    }
                }
                self
            }

            /// Transposed copy.
            #[inline]
            pub fn transposed(&self) -> Self {
                let mut out = *self;
                out.transpose();
                out
            }

            /// Inverse, or identity when the matrix is singular.
            ///
            /// Use [`Self::try_inverse`] to detect singularity.
            #[inline]
            pub fn inverse(&self) -> Self {
                self.try_inverse().unwrap_or(Self::IDENTITY)
            }

            /// Inverts in place.
            ///
            /// Returns `false` and leaves `self` unchanged if singular.
            pub fn invert(&mut self) -> bool {
                match self.try_inverse() {
                    Some(inv) => {
                        *self = inv;
                        true
                    }
                    None => false,
                }
            }

            /// Multiplies by a column vector: `result[r] = Σ v[c] * m[r][c]`.
            #[inline]
            pub fn combine(&self, v: $vector) -> $vector {
                $vector::from_array(std::array::from_fn(|r| {
                    let mut sum = 0.0;
                    for c in 0..$n {
                        sum += v[c] * self.m[r][c];
                    }
                    sum
                }))
            }

            /// True if every element is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.data().iter().all(|v| v.is_finite())
            }

            /// Converts to the (column-major) glam equivalent.
            #[inline]
            pub fn to_glam(&self) -> $glam {
                <$glam>::from_cols_array_2d(&self.transposed().m)
            }

            /// Creates from the glam equivalent.
            #[inline]
            pub fn from_glam(m: $glam) -> Self {
                Self::from_cols(m.to_cols_array_2d())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(m: $glam) -> Self {
                Self::from_glam(m)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(m: $name) -> Self {
                m.to_glam()
            }
        }

        impl AlmostEq for $name {
            fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
                self.data()
                    .iter()
                    .zip(other.data())
                    .all(|(a, b)| almost_equal_with(*a, *b, tolerance))
            }
        }

        impl PiecewiseCompare for $name {
            #[inline]
            fn piecewise_cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.data().piecewise_cmp(other.data())
            }
        }

        impl Index<(usize, usize)> for $name {
            type Output = Real;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Real {
                &self.m[row][col]
            }
        }

        impl IndexMut<(usize, usize)> for $name {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Real {
                &mut self.m[row][col]
            }
        }

        // Row access
        impl Index<usize> for $name {
            type Output = [Real; $n];

            #[inline]
            fn index(&self, row: usize) -> &[Real; $n] {
                &self.m[row]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, row: usize) -> &mut [Real; $n] {
                &mut self.m[row]
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self * -1.0
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { m: std::array::from_fn(|r| std::array::from_fn(|c| self.m[r][c] + rhs.m[r][c])) }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { m: std::array::from_fn(|r| std::array::from_fn(|c| self.m[r][c] - rhs.m[r][c])) }
            }
        }

        impl Mul<Real> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Real) -> Self {
                Self { m: self.m.map(|row| row.map(|v| v * rhs)) }
            }
        }

        impl Mul<$name> for Real {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<Real> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Real) -> Self {
                self * (1.0 / rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self {
                    m: std::array::from_fn(|r| {
                        std::array::from_fn(|c| {
                            let mut sum = 0.0;
                            for k in 0..$n {
                                sum += self.m[r][k] * rhs.m[k][c];
                            }
                            sum
                        })
                    }),
                }
            }
        }

        impl Mul<$vector> for $name {
            type Output = $vector;

            #[inline]
            fn mul(self, rhs: $vector) -> $vector {
                self.combine(rhs)
            }
        }

        // Row-vector spelling of `combine`.
        impl Mul<$name> for $vector {
            type Output = $vector;

            #[inline]
            fn mul(self, rhs: $name) -> $vector {
                rhs.combine(self)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl MulAssign<Real> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Real) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<Real> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Real) {
                *self = *self / rhs;
            }
        }
    };
}

pub(crate) use impl_matrix;
pub(crate) use impl_vector;
