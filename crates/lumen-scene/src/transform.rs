//! Model transform: rotation, translation and scale.
//!
//! The extracted matrix is `R · T · S`. Applied to a point it scales first,
//! then translates, then rotates.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vector3;
//! use lumen_scene::{ExtractMatrix, Transform};
//!
//! let mut t = Transform::new();
//! t.set_scale(Vector3::new(2.0, 3.0, 4.0));
//! t.translate(Vector3::new(1.0, 2.0, 3.0));
//! let p = t.to_matrix4().transform_point(Vector3::X);
//! assert_eq!(p, Vector3::new(3.0, 2.0, 3.0));
//! ```

use lumen_core::Real;
use lumen_math::{Angle, AngleUnit, EulerAngles, Interpolate, Matrix4, Quaternion, Radian, Vector3};

use crate::extract::ExtractMatrix;

/// Rotation, translation and scale of a model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    rotation: Quaternion,
    translation: Vector3,
    scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// No rotation, zero translation, unit scale.
    #[inline]
    pub const fn new() -> Self {
        Self {
            rotation: Quaternion::IDENTITY,
            translation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }

    /// Creates from all three components.
    #[inline]
    pub const fn from_parts(rotation: Quaternion, translation: Vector3, scale: Vector3) -> Self {
        Self { rotation, translation, scale }
    }

    // Relative

    /// Moves by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vector3) {
        self.translation += delta;
    }

    /// Moves along X.
    #[inline]
    pub fn translate_x(&mut self, delta: Real) {
        self.translation.x += delta;
    }

    /// Moves along Y.
    #[inline]
    pub fn translate_y(&mut self, delta: Real) {
        self.translation.y += delta;
    }

    /// Moves along Z.
    #[inline]
    pub fn translate_z(&mut self, delta: Real) {
        self.translation.z += delta;
    }

    /// Composes `q` onto the current rotation (`rotation *= q`).
    #[inline]
    pub fn rotate(&mut self, q: Quaternion) {
        self.rotation *= q;
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
        self.rotate_angles(EulerAngles::new(Radian::ZERO, Radian::ZERO, angle));
    }

    /// Composes a rotation around X.
    #[inline]
    pub fn rotate_pitch(&mut self, angle: Radian) {
        self.rotate_angles(EulerAngles::new(Radian::ZERO, angle, Radian::ZERO));
    }

    /// Composes a rotation around Y.
    #[inline]
    pub fn rotate_yaw(&mut self, angle: Radian) {
        self.rotate_angles(EulerAngles::new(angle, Radian::ZERO, Radian::ZERO));
    }

    /// Multiplies every scale component by `factor`.
    #[inline]
    pub fn scale_uniform(&mut self, factor: Real) {
        self.scale *= factor;
    }

    /// Multiplies the scale component-wise by `factors`.
    #[inline]
    pub fn scale_by(&mut self, factors: Vector3) {
        self.scale *= factors;
    }

    /// Multiplies the X scale.
    #[inline]
    pub fn scale_x(&mut self, factor: Real) {
        self.scale.x *= factor;
    }

    /// Multiplies the Y scale.
    #[inline]
    pub fn scale_y(&mut self, factor: Real) {
        self.scale.y *= factor;
    }

    /// Multiplies the Z scale.
    #[inline]
    pub fn scale_z(&mut self, factor: Real) {
        self.scale.z *= factor;
    }

    // Absolute

    /// Sets the translation.
    #[inline]
    pub fn set_origin(&mut self, origin: Vector3) {
        self.translation = origin;
    }

    /// Sets the X translation.
    #[inline]
    pub fn set_x_translation(&mut self, x: Real) {
        self.translation.x = x;
    }

    /// Sets the Y translation.
    #[inline]
    pub fn set_y_translation(&mut self, y: Real) {
        self.translation.y = y;
    }

    /// Sets the Z translation.
    #[inline]
    pub fn set_z_translation(&mut self, z: Real) {
        self.translation.z = z;
    }

    /// Replaces the roll, keeping yaw and pitch.
    pub fn set_roll(&mut self, angle: Radian) {
        let current = self.rotation.euler_angles();
        self.rotation = Quaternion::from_angles(current.yaw, current.pitch, angle);
    }

    /// Replaces the pitch, keeping yaw and roll.
    pub fn set_pitch(&mut self, angle: Radian) {
        let current = self.rotation.euler_angles();
        self.rotation = Quaternion::from_angles(current.yaw, angle, current.roll);
    }

    /// Replaces the yaw, keeping pitch and roll.
    pub fn set_yaw(&mut self, angle: Radian) {
        let current = self.rotation.euler_angles();
        self.rotation = Quaternion::from_angles(angle, current.pitch, current.roll);
    }

    /// Sets the rotation.
    #[inline]
    pub fn set_orientation(&mut self, q: Quaternion) {
        self.rotation = q;
    }

    /// Sets the rotation from Euler angles.
    #[inline]
    pub fn set_angles(&mut self, angles: EulerAngles) {
        self.rotation = Quaternion::from(angles);
    }

    /// Sets the rotation to `angle` around `axis`.
    #[inline]
    pub fn set_angle_axis<U: AngleUnit>(&mut self, angle: Angle<U>, axis: Vector3) {
        self.rotation = Quaternion::from_angle_axis(angle, axis);
    }

    /// Sets the scale.
    #[inline]
    pub fn set_scale(&mut self, scale: Vector3) {
        self.scale = scale;
    }

    /// Sets all three scale components to `scale`.
    #[inline]
    pub fn set_uniform_scale(&mut self, scale: Real) {
        self.scale = Vector3::splat(scale);
    }

    /// Sets the X scale.
    #[inline]
    pub fn set_x_scale(&mut self, scale: Real) {
        self.scale.x = scale;
    }

    /// Sets the Y scale.
    #[inline]
    pub fn set_y_scale(&mut self, scale: Real) {
        self.scale.y = scale;
    }

    /// Sets the Z scale.
    #[inline]
    pub fn set_z_scale(&mut self, scale: Real) {
        self.scale.z = scale;
    }

    // Observers

    /// Current translation.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        self.translation
    }

    /// Current rotation.
    #[inline]
    pub fn orientation(&self) -> Quaternion {
        self.rotation
    }

    /// Current rotation as yaw, pitch and roll.
    #[inline]
    pub fn angles(&self) -> EulerAngles {
        self.rotation.euler_angles()
    }

    /// Current scale.
    #[inline]
    pub fn scale(&self) -> Vector3 {
        self.scale
    }
}

impl ExtractMatrix for Transform {
    fn extract_matrix(&self, out: &mut Matrix4) {
        self.rotation.extract_rotation_matrix4(out);
        *out = *out * Matrix4::translation(self.translation) * Matrix4::scale(self.scale);
    }
}

/// Linear in every field; the rotation is blended component-wise.
impl Interpolate for Transform {
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        Self {
            rotation: self.rotation.interpolate(&other.rotation, alpha),
            translation: self.translation.interpolate(&other.translation, alpha),
            scale: self.scale.interpolate(&other.scale, alpha),
        }
    }
}
