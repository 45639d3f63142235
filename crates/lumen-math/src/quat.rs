//! Rotation quaternion.
//!
//! Components are stored `(w, x, y, z)` and read as `w + xi + yj + zk`.
//! Rotations compose right to left like matrices: `(a * b) * v` rotates
//! `v` by `b` first.
//!
//! Euler angles follow the yaw (Y) → pitch (X) → roll (Z) convention used
//! throughout the crate, i.e. `R = Ry · Rx · Rz`.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{AngleLiteral, Quaternion, Vector3};
//!
//! let q = Quaternion::from_angle_axis(90.0_f32.deg(), Vector3::Y);
//! let v = q * Vector3::Z;
//! assert!((v - Vector3::X).magnitude() < 1e-6);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use lumen_core::{AlmostEq, Error, PiecewiseCompare, Real, Result, almost_equal, almost_equal_with, clamp};

use crate::angle::{Angle, AngleUnit, Radian, arccos, arcsin, arctan2};
use crate::euler::EulerAngles;
use crate::mat3::Matrix3;
use crate::mat4::Matrix4;
use crate::vec3::Vector3;

/// A quaternion, 16-byte aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Quaternion {
    /// Real part
    pub w: Real,
    /// i component
    pub x: Real,
    /// j component
    pub y: Real,
    /// k component
    pub z: Real,
}

// SAFETY: four f32 fill the 16-byte alignment exactly; no padding.
unsafe impl bytemuck::Zeroable for Quaternion {}
// SAFETY: see above.
unsafe impl bytemuck::Pod for Quaternion {}

/// Subtracts a half revolution from angles at or past `+π`.
#[inline]
fn wrap_half_open(angle: Radian) -> Radian {
    if angle.value() >= Radian::HALF_REVOLUTION.value() {
        angle - Radian::HALF_REVOLUTION
    } else {
        angle
    }
}

impl Quaternion {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// All components zero; what [`Quaternion::inverse`] returns for a
    /// zero quaternion.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates from components.
    #[inline]
    pub const fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` around `axis`. The axis is normalized first.
    ///
    /// # Panics
    ///
    /// Panics if `axis` has zero length.
    pub fn from_angle_axis<U: AngleUnit>(angle: Angle<U>, axis: Vector3) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (angle.to_radian() * 0.5).sin_cos();
        Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Rotation by `yaw` around Y, then `pitch` around X, then `roll`
    /// around Z, composed as `Qy * Qx * Qz`.
    pub fn from_angles(yaw: Radian, pitch: Radian, roll: Radian) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        Self::new(cy, 0.0, sy, 0.0) * Self::new(cp, sp, 0.0, 0.0) * Self::new(cr, 0.0, 0.0, sr)
    }

    /// Rotation equivalent to the orthonormal matrix `rot`.
    ///
    /// Shoemake's method: the trace branch when the trace is positive,
    /// otherwise the branch for the largest diagonal element.
    pub fn from_rotation_matrix(rot: &Matrix3) -> Self {
        let m = &rot.m;
        let trace = rot.trace();
        if trace > 0.0 {
            let root = (trace + 1.0).sqrt();
            let w = 0.5 * root;
            let s = 0.5 / root;
            return Self::new(
                w,
                (m[2][1] - m[1][2]) * s,
                (m[0][2] - m[2][0]) * s,
                (m[1][0] - m[0][1]) * s,
            );
        }

        const NEXT: [usize; 3] = [1, 2, 0];
        let mut i = 0;
        if m[1][1] > m[0][0] {
            i = 1;
        }
        if m[2][2] > m[i][i] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];

        let root = (m[i][i] - m[j][j] - m[k][k] + 1.0).sqrt();
        let s = 0.5 / root;
        let mut v = [0.0; 3];
        v[i] = 0.5 * root;
        v[j] = (m[j][i] + m[i][j]) * s;
        v[k] = (m[k][i] + m[i][k]) * s;
        let w = (m[k][j] - m[j][k]) * s;
        Self::new(w, v[0], v[1], v[2])
    }

    /// Same as [`Quaternion::from_rotation_matrix`] on the upper-left 3×3
    /// block of `rot`.
    #[inline]
    pub fn from_rotation_matrix4(rot: &Matrix4) -> Self {
        Self::from_rotation_matrix(&crate::matrix_cast(*rot))
    }

    /// Rotation whose rotation matrix has the given axes as rows.
    #[inline]
    pub fn from_rotation_axes(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3) -> Self {
        Self::from_rotation_matrix(&Matrix3::from_row_vectors(x_axis, y_axis, z_axis))
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn data(&self) -> &[Real; 4] {
        bytemuck::cast_ref(self)
    }

    /// Mutable components as `[w, x, y, z]`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Real; 4] {
        bytemuck::cast_mut(self)
    }

    /// Always 4.
    #[inline]
    pub const fn size(&self) -> usize {
        4
    }

    /// Checked component access in `(w, x, y, z)` order.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= 4`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<Real> {
        self.data()
            .get(index)
            .copied()
            .ok_or(Error::out_of_range("Quaternion", index, 4))
    }

    /// Checked mutable component access.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= 4`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Real> {
        self.data_mut()
            .get_mut(index)
            .ok_or(Error::out_of_range("Quaternion", index, 4))
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The image of +X under this rotation.
    pub fn x_axis(&self) -> Vector3 {
        let ty = 2.0 * self.y;
        let tz = 2.0 * self.z;
        Vector3::new(
            1.0 - (ty * self.y + tz * self.z),
            ty * self.x + tz * self.w,
            tz * self.x - ty * self.w,
        )
    }

    /// The image of +Y under this rotation.
    pub fn y_axis(&self) -> Vector3 {
        let tx = 2.0 * self.x;
        let tz = 2.0 * self.z;
        Vector3::new(
            tx * self.y - tz * self.w,
            1.0 - (tx * self.x + tz * self.z),
            tz * self.y + tx * self.w,
        )
    }

    /// The image of +Z under this rotation.
    pub fn z_axis(&self) -> Vector3 {
        let tx = 2.0 * self.x;
        let ty = 2.0 * self.y;
        Vector3::new(
            tx * self.z + ty * self.w,
            ty * self.z - tx * self.w,
            1.0 - (tx * self.x + ty * self.y),
        )
    }

    /// `(x_axis, y_axis, z_axis)`.
    #[inline]
    pub fn axes(&self) -> (Vector3, Vector3, Vector3) {
        (self.x_axis(), self.y_axis(), self.z_axis())
    }

    /// Writes the rotation matrix into `out`.
    pub fn extract_rotation_matrix(&self, out: &mut Matrix3) {
        let (tx, ty, tz) = (2.0 * self.x, 2.0 * self.y, 2.0 * self.z);
        let (twx, twy, twz) = (tx * self.w, ty * self.w, tz * self.w);
        let (txx, txy, txz) = (tx * self.x, ty * self.x, tz * self.x);
        let (tyy, tyz, tzz) = (ty * self.y, tz * self.y, tz * self.z);

        out.m = [
            [1.0 - (tyy + tzz), txy - twz, txz + twy],
            [txy + twz, 1.0 - (txx + tzz), tyz - twx],
            [txz - twy, tyz + twx, 1.0 - (txx + tyy)],
        ];
    }

    /// Writes the rotation into the upper-left block of `out` and resets
    /// the rest to identity.
    pub fn extract_rotation_matrix4(&self, out: &mut Matrix4) {
        let mut rot = Matrix3::ZERO;
        self.extract_rotation_matrix(&mut rot);
        *out = crate::matrix_cast(rot);
    }

    /// The 3×3 rotation matrix.
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix3 {
        let mut out = Matrix3::ZERO;
        self.extract_rotation_matrix(&mut out);
        out
    }

    /// Rotation angle and unit axis.
    ///
    /// A quaternion with no vector part gives angle zero around +X.
    pub fn angle_axis(&self) -> (Radian, Vector3) {
        let sq_len = self.vector().square_magnitude();
        if sq_len > 0.0 {
            let angle = arccos(clamp(self.w, -1.0, 1.0)) * 2.0;
            (angle, self.vector() / sq_len.sqrt())
        } else {
            (Radian::ZERO, Vector3::X)
        }
    }

    /// Writes [`Quaternion::angle_axis`] into `angle` and `axis`.
    #[inline]
    pub fn extract_angle_axis(&self, angle: &mut Radian, axis: &mut Vector3) {
        (*angle, *axis) = self.angle_axis();
    }

    /// Yaw, pitch and roll that rebuild this rotation via
    /// [`Quaternion::from_angles`].
    #[inline]
    pub fn euler_angles(&self) -> EulerAngles {
        EulerAngles::new(self.yaw(), self.pitch(), self.roll())
    }

    /// Rotation around Z, in `[-π, π)`.
    pub fn roll(&self) -> Radian {
        let q = self.normalized();
        wrap_half_open(arctan2(
            2.0 * (q.x * q.y + q.w * q.z),
            1.0 - 2.0 * (q.x * q.x + q.z * q.z),
        ))
    }

    /// Rotation around X, in `[-π/2, π/2]`.
    pub fn pitch(&self) -> Radian {
        let q = self.normalized();
        arcsin(clamp(2.0 * (q.w * q.x - q.y * q.z), -1.0, 1.0))
    }

    /// Rotation around Y, in `[-π, π)`.
    pub fn yaw(&self) -> Radian {
        let q = self.normalized();
        wrap_half_open(arctan2(
            2.0 * (q.x * q.z + q.w * q.y),
            1.0 - 2.0 * (q.x * q.x + q.y * q.y),
        ))
    }

    /// Angle of the rotated +X axis around Z, measured in the XY plane.
    pub fn roll_reprojected(&self) -> Radian {
        let ty = 2.0 * self.y;
        let tz = 2.0 * self.z;
        wrap_half_open(arctan2(
            ty * self.x + tz * self.w,
            1.0 - (ty * self.y + tz * self.z),
        ))
    }

    /// Angle of the rotated +Y axis around X, measured in the YZ plane.
    pub fn pitch_reprojected(&self) -> Radian {
        let tx = 2.0 * self.x;
        let tz = 2.0 * self.z;
        wrap_half_open(arctan2(
            tz * self.y + tx * self.w,
            1.0 - (tx * self.x + tz * self.z),
        ))
    }

    /// Angle of the rotated +Z axis around Y, measured in the ZX plane.
    pub fn yaw_reprojected(&self) -> Radian {
        let tx = 2.0 * self.x;
        let ty = 2.0 * self.y;
        wrap_half_open(arctan2(
            tx * self.z + ty * self.w,
            1.0 - (tx * self.x + ty * self.y),
        ))
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> Real {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared magnitude.
    #[inline]
    pub fn square_magnitude(&self) -> Real {
        self.dot(self)
    }

    /// Magnitude.
    #[inline]
    pub fn magnitude(&self) -> Real {
        self.square_magnitude().sqrt()
    }

    /// Whether the magnitude is one within tolerance.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        almost_equal(self.square_magnitude(), 1.0)
    }

    /// Unit-magnitude copy.
    ///
    /// A zero quaternion yields non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// Normalizes in place.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// `(w, -x, -y, -z)`.
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse: the conjugate over the squared magnitude.
    ///
    /// A zero quaternion has no inverse and yields [`Quaternion::ZERO`].
    pub fn inverse(&self) -> Self {
        let sq = self.square_magnitude();
        if sq > 0.0 {
            self.conjugate() / sq
        } else {
            Self::ZERO
        }
    }

    /// Inverts in place; see [`Quaternion::inverse`].
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Rotates `v`.
    #[inline]
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let qv = self.vector();
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Falls back to a normalized linear blend when the inputs are nearly
    /// parallel.
    pub fn slerp(&self, other: &Self, t: Real) -> Self {
        let mut end = *other;
        let mut cos = self.dot(other);
        if cos < 0.0 {
            end = -end;
            cos = -cos;
        }
        if cos > 0.9995 {
            return (*self + (end - *self) * t).normalized();
        }
        let theta = cos.acos();
        let sin = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin;
        let b = (t * theta).sin() / sin;
        *self * a + end * b
    }

    /// Converts to `glam::Quat`.
    #[inline]
    pub fn to_glam(&self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from `glam::Quat`.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<EulerAngles> for Quaternion {
    #[inline]
    fn from(e: EulerAngles) -> Self {
        Self::from_angles(e.yaw, e.pitch, e.roll)
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_glam()
    }
}

impl AlmostEq for Quaternion {
    fn almost_eq_with(&self, other: &Self, tolerance: Real) -> bool {
        self.data()
            .iter()
            .zip(other.data())
            .all(|(a, b)| almost_equal_with(*a, *b, tolerance))
    }
}

impl PiecewiseCompare for Quaternion {
    #[inline]
    fn piecewise_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.data().piecewise_cmp(other.data())
    }
}

impl Index<usize> for Quaternion {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Real {
        &self.data()[index]
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Real {
        &mut self.data_mut()[index]
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Real> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Real) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Quaternion> for Real {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl Div<Real> for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Real) -> Self {
        self * (1.0 / rhs)
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Div for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate(rhs)
    }
}

impl AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<Real> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign for Quaternion {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<Real> for Quaternion {
    #[inline]
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{AngleLiteral, deg, rad};
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample_angles() -> Vec<(Radian, Radian, Radian)> {
        let mut out = Vec::new();
        for i in -3..=3 {
            for j in -2..=2 {
                for k in -3..=3 {
                    out.push((
                        rad(i as Real * 0.9),
                        rad(j as Real * 0.6),
                        rad(k as Real * 0.8),
                    ));
                }
            }
        }
        out
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Quaternion>(), 16);
        assert_eq!(std::mem::size_of::<Quaternion>(), 16);
        assert_eq!(Quaternion::IDENTITY.data(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_angle_axis_round_trip() {
        let q = Quaternion::from_angle_axis(deg(90.0), Vector3::new(0.0, 3.0, 0.0));
        assert!(q.is_normalized());
        let (angle, axis) = q.angle_axis();
        assert_abs_diff_eq!(angle.value(), FRAC_PI_2, epsilon = 1e-5);
        assert!(axis.almost_eq(&Vector3::Y));
    }

    #[test]
    fn test_zero_rotation_angle_axis() {
        let mut angle = rad(1.0);
        let mut axis = Vector3::ZERO;
        Quaternion::IDENTITY.extract_angle_axis(&mut angle, &mut axis);
        assert_eq!(angle.value(), 0.0);
        assert_eq!(axis, Vector3::X);
    }

    #[test]
    fn test_rotate_matches_matrix() {
        for (y, p, r) in sample_angles() {
            let q = Quaternion::from_angles(y, p, r);
            let m = q.rotation_matrix();
            let v = Vector3::new(0.3, -1.2, 2.0);
            assert!((q * v).almost_eq_with(&(m * v), 1e-5));
            let (x_axis, y_axis, z_axis) = q.axes();
            assert!(x_axis.almost_eq_with(&m.column(0), 1e-6));
            assert!(y_axis.almost_eq_with(&m.column(1), 1e-6));
            assert!(z_axis.almost_eq_with(&m.column(2), 1e-6));
        }
    }

    #[test]
    fn test_from_angles_order() {
        let yaw = 30.0_f32.deg().to_radian();
        let pitch = 20.0_f32.deg().to_radian();
        let roll = 10.0_f32.deg().to_radian();
        let q = Quaternion::from_angles(yaw, pitch, roll);
        let expected = Quaternion::from_angle_axis(yaw, Vector3::Y)
            * Quaternion::from_angle_axis(pitch, Vector3::X)
            * Quaternion::from_angle_axis(roll, Vector3::Z);
        assert!(q.almost_eq(&expected));

        let g = glam::Quat::from_euler(glam::EulerRot::YXZ, yaw.value(), pitch.value(), roll.value());
        assert!(q.almost_eq(&Quaternion::from(g)));
    }

    #[test]
    fn test_euler_round_trip() {
        for (y, p, r) in sample_angles() {
            if p.value().abs() >= 1.5 {
                continue;
            }
            let q = Quaternion::from_angles(y, p, r);
            let back = Quaternion::from(q.euler_angles());
            // q and -q are the same rotation
            assert!(back.almost_eq_with(&q, 1e-4) || back.almost_eq_with(&-q, 1e-4), "{q:?}");
        }
    }

    #[test]
    fn test_single_axis_angles() {
        let q = Quaternion::from_angle_axis(rad(0.5), Vector3::Z);
        assert_abs_diff_eq!(q.roll().value(), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(q.roll_reprojected().value(), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(q.pitch().value(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(q.yaw().value(), 0.0, epsilon = 1e-5);

        let q = Quaternion::from_angle_axis(rad(-0.7), Vector3::X);
        assert_abs_diff_eq!(q.pitch().value(), -0.7, epsilon = 1e-5);
        assert_abs_diff_eq!(q.pitch_reprojected().value(), -0.7, epsilon = 1e-5);

        let q = Quaternion::from_angle_axis(rad(2.0), Vector3::Y);
        assert_abs_diff_eq!(q.yaw().value(), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(q.yaw_reprojected().value(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_half_revolution_wraps() {
        // exact half turn around Z: atan2 lands on +π
        let q = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(q.roll().value(), 0.0);
        assert_eq!(q.roll_reprojected().value(), 0.0);

        let q = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(q.yaw().value(), 0.0);
        assert_eq!(q.yaw_reprojected().value(), 0.0);

        let q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(q.pitch_reprojected().value(), 0.0);

        // just short of a half turn is left alone
        let q = Quaternion::from_angle_axis(rad(3.0), Vector3::Z);
        assert_abs_diff_eq!(q.roll().value(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix_round_trip() {
        for (y, p, r) in sample_angles() {
            let q = Quaternion::from_angles(y, p, r);
            let back = Quaternion::from_rotation_matrix(&q.rotation_matrix());
            assert!(back.almost_eq_with(&q, 1e-4) || back.almost_eq_with(&-q, 1e-4), "{q:?}");

            let mut m4 = Matrix4::ZERO;
            q.extract_rotation_matrix4(&mut m4);
            assert_eq!(m4.m[3], [0.0, 0.0, 0.0, 1.0]);
            let back = Quaternion::from_rotation_matrix4(&m4);
            assert!(back.almost_eq_with(&q, 1e-4) || back.almost_eq_with(&-q, 1e-4));
        }
    }

    #[test]
    fn test_from_rotation_axes() {
        // Rows of a 90 degree rotation around Z
        let q = Quaternion::from_rotation_axes(
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::Z,
        );
        let expected = Quaternion::from_angle_axis(deg(90.0), Vector3::Z);
        assert!(q.almost_eq_with(&expected, 1e-6));
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert!((q * q.inverse()).almost_eq(&Quaternion::IDENTITY));
        assert!((q / q).almost_eq(&Quaternion::IDENTITY));
        assert_eq!(Quaternion::ZERO.inverse(), Quaternion::ZERO);
        let mut u = Quaternion::from_angle_axis(rad(1.0), Vector3::X);
        let conj = u.conjugate();
        u.invert();
        assert!(u.almost_eq(&conj));
    }

    #[test]
    fn test_component_ops() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Quaternion::ZERO);
        assert_eq!(-a, a * -1.0);
        assert_eq!(a / 2.0, 0.5 * a);
        assert_eq!(a.dot(&a), 30.0);
        assert_eq!(a[3], 4.0);
        assert!(a.at(4).is_err());
        assert!(a.normalized().is_normalized());
    }

    #[test]
    fn test_slerp() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_angle_axis(deg(90.0), Vector3::Z);
        let mid = a.slerp(&b, 0.5);
        assert!(mid.is_normalized());
        assert!(mid.almost_eq_with(&Quaternion::from_angle_axis(deg(45.0), Vector3::Z), 1e-5));
        assert!(a.slerp(&b, 1.0).almost_eq_with(&b, 1e-5));
        // picks the short way round for the antipodal end
        assert!(a.slerp(&-b, 0.5).almost_eq_with(&mid, 1e-5));
        let g = Quaternion::from(a.to_glam().slerp(b.to_glam(), 0.25));
        assert!(a.slerp(&b, 0.25).almost_eq_with(&g, 1e-5));
    }

    #[test]
    fn test_hamilton_matches_glam() {
        let a = Quaternion::from_angles(rad(0.3), rad(-0.2), rad(1.1));
        let b = Quaternion::from_angles(rad(-1.0), rad(0.4), rad(0.1));
        let g = Quaternion::from(a.to_glam() * b.to_glam());
        assert!((a * b).almost_eq(&g));
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!((a * v).almost_eq_with(&Vector3::from(a.to_glam() * v.to_glam()), 1e-5));
    }
}
