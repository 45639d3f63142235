//! Interpolation.
//!
//! [`Interpolate`] is the blend used between two snapshots of a value, as
//! the interpolated transform wrapper in `lumen-scene` does between
//! simulation steps. Everything here is linear; quaternions are blended
//! component-wise without renormalization.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Interpolate, Vector3, lerp, smoothstep};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
//!
//! let a = Vector3::ZERO;
//! let b = Vector3::new(2.0, 4.0, 6.0);
//! assert_eq!(a.interpolate(&b, 0.5), Vector3::new(1.0, 2.0, 3.0));
//! ```

use lumen_core::{Real, clamp};

use crate::angle::{Angle, AngleUnit};
use crate::euler::EulerAngles;
use crate::quat::Quaternion;
use crate::vec2::Vector2;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// Blends two values of the same type.
///
/// `alpha = 0` must give `self` and `alpha = 1` must give `other`.
pub trait Interpolate {
    /// Value at `alpha` between `self` and `other`.
    fn interpolate(&self, other: &Self, alpha: Real) -> Self;
}

/// Linear interpolation: `a + (b - a) * t`.
///
/// ```rust
/// use lumen_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

/// Inverse of [`lerp`]; zero for a degenerate range.
#[inline]
pub fn inverse_lerp(a: Real, b: Real, value: Real) -> Real {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps to `[0, 1]`.
#[inline]
pub fn saturate(value: Real) -> Real {
    clamp(value, 0.0, 1.0)
}

/// Hermite step between `edge0` and `edge1`.
#[inline]
pub fn smoothstep(edge0: Real, edge1: Real, x: Real) -> Real {
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * (3.0 - 2.0 * t)
}

impl Interpolate for Real {
    #[inline]
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        lerp(*self, *other, alpha)
    }
}

macro_rules! interpolate_by_lerp {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline]
                fn interpolate(&self, other: &Self, alpha: Real) -> Self {
                    self.lerp(*other, alpha)
                }
            }
        )+
    };
}

interpolate_by_lerp!(Vector2, Vector3, Vector4);

impl<U: AngleUnit> Interpolate for Angle<U> {
    #[inline]
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        Self::new(lerp(self.value(), other.value(), alpha))
    }
}

impl Interpolate for Quaternion {
    #[inline]
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        *self + (*other - *self) * alpha
    }
}

impl Interpolate for EulerAngles {
    fn interpolate(&self, other: &Self, alpha: Real) -> Self {
        Self::new(
            self.yaw.interpolate(&other.yaw, alpha),
            self.pitch.interpolate(&other.pitch, alpha),
            self.roll.interpolate(&other.roll, alpha),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{deg, rad};
    use lumen_core::AlmostEq;

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
        assert_eq!(saturate(1.5), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_endpoints() {
        let a = Quaternion::from_angle_axis(rad(0.3), Vector3::X);
        let b = Quaternion::from_angle_axis(rad(1.3), Vector3::Y);
        assert_eq!(a.interpolate(&b, 0.0), a);
        assert!(a.interpolate(&b, 1.0).almost_eq(&b));

        let e0 = EulerAngles::new(rad(0.0), rad(1.0), rad(2.0));
        let e1 = EulerAngles::new(rad(1.0), rad(1.0), rad(0.0));
        assert_eq!(e0.interpolate(&e1, 0.5), EulerAngles::new(rad(0.5), rad(1.0), rad(1.0)));
    }

    #[test]
    fn test_quaternion_blend_is_not_renormalized() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_angle_axis(deg(180.0), Vector3::Z);
        let mid = a.interpolate(&b, 0.5);
        assert!(mid.magnitude() < 0.99);
    }

    #[test]
    fn test_angle_blend() {
        assert_eq!(deg(10.0).interpolate(&deg(30.0), 0.25).value(), 15.0);
    }
}
