//! View transform.
//!
//! A [`Camera`] keeps a position and an orientation, plus the right, up and
//! forward axes derived from that orientation. The axes are the rows of the
//! orientation's rotation matrix and are refreshed after every call that
//! changes the orientation.
//!
//! The extracted view matrix is `[R | -R·T]`: the rows of `R` are the camera
//! axes and the last column holds `-dot(axis, T)`.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vector3;
//! use lumen_scene::{Camera, ExtractMatrix};
//!
//! let mut camera = Camera::new();
//! camera.set_origin(Vector3::new(0.0, 0.0, 5.0));
//! camera.look_at(Vector3::ZERO, Vector3::Y);
//!
//! // The subject ends up straight ahead, down view-space -Z.
//! let p = camera.to_matrix4().transform_point(Vector3::ZERO);
//! assert!((p - Vector3::new(0.0, 0.0, -5.0)).magnitude() < 1e-5);
//! ```

use lumen_core::Real;
use lumen_math::{Angle, AngleUnit, EulerAngles, Interpolate, Matrix4, Quaternion, Radian, Vector3};

use crate::extract::ExtractMatrix;

/// Position and orientation of a viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    translation: Vector3,
    orientation: Quaternion,
    right: Vector3,
    up: Vector3,
    forward: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin with no rotation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            translation: Vector3::ZERO,
            orientation: Quaternion::IDENTITY,
            right: Vector3::X,
            up: Vector3::Y,
            forward: Vector3::Z,
        }
    }

    /// Camera at `translation` with `orientation`.
    pub fn from_parts(translation: Vector3, orientation: Quaternion) -> Self {
        let mut camera = Self { translation, orientation, ..Self::new() };
        camera.refresh_axes();
        camera
    }

    fn refresh_axes(&mut self) {
        let rot = self.orientation.rotation_matrix();
        self.right = rot.row(0);
        self.up = rot.row(1);
        self.forward = rot.row(2);
    }

    // World translation

    /// Moves by `delta` in world space.
    #[inline]
    pub fn translate(&mut self, delta: Vector3) {
        self.translation += delta;
    }

    /// Moves along world X.
    #[inline]
    pub fn translate_x(&mut self, delta: Real) {
        self.translation.x += delta;
    }

    /// Moves along world Y.
    #[inline]
    pub fn translate_y(&mut self, delta: Real) {
        self.translation.y += delta;
    }

    /// Moves along world Z.
    #[inline]
    pub fn translate_z(&mut self, delta: Real) {
        self.translation.z += delta;
    }

    // Local translation

    /// Moves along the camera's right axis.
    #[inline]
    pub fn translate_local_x(&mut self, delta: Real) {
        self.translation += self.right * delta;
    }

    /// Moves along the camera's up axis.
    #[inline]
    pub fn translate_local_y(&mut self, delta: Real) {
        self.translation += self.up * delta;
    }

    /// Moves along the camera's forward axis (view-space +Z).
    #[inline]
    pub fn translate_local_z(&mut self, delta: Real) {
        self.translation += self.forward * delta;
    }

    // Rotation

    /// Composes `q` onto the orientation (`orientation *= q`).
    pub fn rotate(&mut self, q: Quaternion) {
        self.orientation *= q;
        self.refresh_axes();
    }

    /// Composes the rotation described by `angles`.
    #[inline]
    pub fn rotate_angles(&mut self, angles: EulerAngles) {
        self.rotate(Quaternion::from(angles));
    }

    /// Composes a rotation of `angle` around `axis`.
    #[inline]
    pub fn rotate_around_axis<U: AngleUnit>(&mut self, angle: Angle<U>, axis: Vector3) {
        self.rotate(Quaternion::from_angle_axis(angle, axis));
    }

    /// Composes a rotation around Z.
    #[inline]
    pub fn rotate_roll(&mut self, angle: Radian) {
        self.rotate(Quaternion::from_angles(Radian::ZERO, Radian::ZERO, angle));
    }

    /// Composes a rotation around X.
    #[inline]
    pub fn rotate_pitch(&mut self, angle: Radian) {
        self.rotate(Quaternion::from_angles(Radian::ZERO, angle, Radian::ZERO));
    }

    /// Composes a rotation around Y.
    #[inline]
    pub fn rotate_yaw(&mut self, angle: Radian) {
        self.rotate(Quaternion::from_angles(angle, Radian::ZERO, Radian::ZERO));
    }

    // Absolute

    /// Sets the position.
    #[inline]
    pub fn set_origin(&mut self, origin: Vector3) {
        self.translation = origin;
    }

    /// Sets the X position.
    #[inline]
    pub fn set_x_translation(&mut self, x: Real) {
        self.translation.x = x;
    }

    /// Sets the Y position.
    #[inline]
    pub fn set_y_translation(&mut self, y: Real) {
        self.translation.y = y;
    }

    /// Sets the Z position.
    #[inline]
    pub fn set_z_translation(&mut self, z: Real) {
        self.translation.z = z;
    }

    /// Replaces the roll, keeping yaw and pitch.
    pub fn set_roll(&mut self, angle: Radian) {
        let a = self.angles();
        self.set_orientation(Quaternion::from_angles(a.yaw, a.pitch, angle));
    }

    /// Replaces the pitch, keeping yaw and roll.
    pub fn set_pitch(&mut self, angle: Radian) {
        let a = self.angles();
        self.set_orientation(Quaternion::from_angles(a.yaw, angle, a.roll));
    }

    /// Replaces the yaw, keeping pitch and roll.
    pub fn set_yaw(&mut self, angle: Radian) {
        let a = self.angles();
        self.set_orientation(Quaternion::from_angles(angle, a.pitch, a.roll));
    }

    /// Sets the orientation.
    pub fn set_orientation(&mut self, q: Quaternion) {
        self.orientation = q;
        self.refresh_axes();
    }

    /// Sets the orientation from Euler angles.
    #[inline]
    pub fn set_angles(&mut self, angles: EulerAngles) {
        self.set_orientation(Quaternion::from(angles));
    }

    /// Orients the camera so that `subject` lies along its view direction.
    ///
    /// The stored forward axis is `normalize(position - subject)`, pointing
    /// from the subject back at the camera.
    ///
    /// # Panics
    ///
    /// Panics if `subject` equals the position or `up` is parallel to the
    /// view direction.
    pub fn look_at(&mut self, subject: Vector3, up: Vector3) {
        let z_axis = (self.translation - subject).normalized();
        let x_axis = up.cross(z_axis).normalized();
        let y_axis = z_axis.cross(x_axis);
        self.set_orientation(Quaternion::from_rotation_axes(x_axis, y_axis, z_axis));
    }

    // Observers

    /// Current position.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        self.translation
    }

    /// Current orientation.
    #[inline]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Current orientation as yaw, pitch and roll.
    #[inline]
    pub fn angles(&self) -> EulerAngles {
        self.orientation.euler_angles()
    }

    /// Right axis in world space.
    #[inline]
    pub fn right(&self) -> Vector3 {
        self.right
    }

    /// Up axis in world space.
    #[inline]
    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Forward axis in world space (view-space +Z).
    #[inline]
    pub fn forward(&self) -> Vector3 {
        self.forward
    }
}

impl ExtractMatrix for Camera {
    fn extract_matrix(&self, out: &mut Matrix4) {
        self.orientation.extract_rotation_matrix4(out);
        for i in 0..3 {
            let axis = Vector3::from_array([out.m[i][0], out.m[i][1], out.m[i][2]]);
            out.m[i][3] = -axis.dot(self.translation);
        }
    }
}

/// Linear in every field, including the cached axes.
///
/// The blended axes are not re-normalized; the next orientation change
/// recomputes them.
impl Interpolate for Camera {
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        Self {
            translation: self.translation.interpolate(&other.translation, alpha),
            orientation: self.orientation.interpolate(&other.orientation, alpha),
            right: self.right.interpolate(&other.right, alpha),
            up: self.up.interpolate(&other.up, alpha),
            forward: self.forward.interpolate(&other.forward, alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::AlmostEq;
    use lumen_math::{Matrix3, deg, rad};

    #[test]
    fn test_default_view_is_identity() {
        let camera = Camera::default();
        assert_eq!(camera.to_matrix4(), Matrix4::IDENTITY);
        assert_eq!(camera.right(), Vector3::X);
        assert_eq!(camera.up(), Vector3::Y);
        assert_eq!(camera.forward(), Vector3::Z);
    }

    #[test]
    fn test_translation_column() {
        let mut camera = Camera::new();
        camera.set_origin(Vector3::new(1.0, 2.0, 3.0));
        let m = camera.to_matrix4();
        assert_eq!(m.column(3).to_array(), [-1.0, -2.0, -3.0, 1.0]);
        assert_eq!(m.transform_point(Vector3::new(1.0, 2.0, 3.0)), Vector3::ZERO);
    }

    #[test]
    fn test_axes_follow_orientation() {
        let mut camera = Camera::new();
        camera.rotate_yaw(rad(0.3));
        camera.rotate_pitch(rad(-0.2));
        camera.rotate_around_axis(deg(15.0), Vector3::new(1.0, 1.0, 0.0));
        let rot: Matrix3 = camera.orientation().rotation_matrix();
        assert!(camera.right().almost_eq(&rot.row(0)));
        assert!(camera.up().almost_eq(&rot.row(1)));
        assert!(camera.forward().almost_eq(&rot.row(2)));
        assert!(camera.right().is_normalized());
    }

    #[test]
    fn test_local_translation_uses_axes() {
        let mut camera = Camera::new();
        camera.set_orientation(Quaternion::from_angle_axis(deg(90.0), Vector3::Y));
        let right = camera.right();
        camera.translate_local_x(2.0);
        assert!(camera.translation().almost_eq(&(right * 2.0)));
        camera.translate_x(1.0);
        assert!(camera.translation().almost_eq(&(right * 2.0 + Vector3::X)));
    }

    #[test]
    fn test_look_at_matches_glam() {
        let eye = Vector3::new(3.0, 2.0, 5.0);
        let target = Vector3::new(-1.0, 0.5, 0.0);
        let mut camera = Camera::new();
        camera.set_origin(eye);
        camera.look_at(target, Vector3::Y);

        let g = glam::Mat4::look_at_rh(eye.to_glam(), target.to_glam(), glam::Vec3::Y);
        assert!(camera.to_matrix4().almost_eq_with(&Matrix4::from(g), 1e-4));

        let p = camera.to_matrix4().transform_point(target);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5 && p.z < 0.0);
        assert!(camera.forward().almost_eq_with(&(eye - target).normalized(), 1e-5));
    }

    #[test]
    fn test_set_yaw_keeps_other_angles() {
        let mut camera = Camera::new();
        camera.set_angles(EulerAngles::new(rad(0.2), rad(0.3), rad(0.4)));
        camera.set_yaw(rad(-0.5));
        let a = camera.angles();
        assert!(a.almost_eq_with(&EulerAngles::new(rad(-0.5), rad(0.3), rad(0.4)), 1e-5));
    }

    #[test]
    fn test_interpolate_is_linear() {
        let a = Camera::new();
        let b = Camera::from_parts(Vector3::new(4.0, 0.0, 0.0), Quaternion::IDENTITY);
        let mid = a.interpolate(&b, 0.25);
        assert_eq!(mid.translation(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(mid.forward(), Vector3::Z);
    }
}
