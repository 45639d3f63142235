//! Sampled sweeps over the documented invariants.

use approx::assert_abs_diff_eq;
use lumen_core::int_utilities::{make, split};
use lumen_core::{AlmostEq, SequenceDetector, max, min};
use lumen_math::{Matrix4, Quaternion, Radian, Vector3, rad};
use lumen_scene::{
    ExtractMatrix, InterpolatedModelTransform, LazyModelTransform, Transform,
};

use crate::{sample_angles, sample_axes, sample_matrices, sample_vectors};

#[test]
fn normalized_vectors_have_unit_length() {
    for v in sample_vectors() {
        if v.square_magnitude() > 0.0 {
            assert_abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn dot_commutes_and_cross_anticommutes() {
    let vs = sample_vectors();
    for a in &vs {
        for b in &vs {
            assert_eq!(a.dot(*b), b.dot(*a));
            assert_eq!(a.cross(*b), -b.cross(*a));
        }
    }
}

#[test]
fn inverse_undoes_matrix() {
    let mut checked = 0;
    for m in sample_matrices() {
        if m.determinant().abs() > 5.0 {
            let product = m * m.inverse();
            assert!(product.almost_eq_with(&Matrix4::IDENTITY, 1e-3), "{m:?}");
            checked += 1;
        }
    }
    assert!(checked > 20);
}

#[test]
fn transpose_and_trace() {
    let ms = sample_matrices();
    for (m, n) in ms.iter().zip(ms.iter().rev()) {
        assert_eq!(m.transposed().transposed(), *m);
        assert_abs_diff_eq!((*m + *n).trace(), m.trace() + n.trace(), epsilon = 1e-5);
    }
}

#[test]
fn angle_axis_round_trip() {
    for angle in sample_angles() {
        for axis in sample_axes() {
            let q = Quaternion::from_angle_axis(angle, axis);
            let mut out_angle = Radian::ZERO;
            let mut out_axis = Vector3::ZERO;
            q.extract_angle_axis(&mut out_angle, &mut out_axis);

            assert_abs_diff_eq!(out_angle.value(), angle.value(), epsilon = 1e-4);
            let same = out_axis.almost_eq_with(&axis, 1e-4);
            let flipped = out_axis.almost_eq_with(&-axis, 1e-4);
            assert!(same || flipped, "{axis:?} -> {out_axis:?}");
        }
    }
}

#[test]
fn rotation_matrix_round_trip() {
    for angle in sample_angles() {
        for axis in sample_axes() {
            let q = Quaternion::from_angle_axis(angle, axis);
            let back = Quaternion::from_rotation_matrix(&q.rotation_matrix());
            assert!(
                back.almost_eq_with(&q, 1e-4) || back.almost_eq_with(&-q, 1e-4),
                "{q:?} -> {back:?}"
            );
        }
    }
}

#[test]
fn unit_rotation_preserves_length() {
    for angle in sample_angles().into_iter().step_by(3) {
        for axis in sample_axes() {
            let q = Quaternion::from_angle_axis(angle, axis);
            for v in sample_vectors() {
                assert_abs_diff_eq!((q * v).magnitude(), v.magnitude(), epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn rotation_agrees_with_glam() {
    for angle in sample_angles() {
        for axis in sample_axes() {
            let q = Quaternion::from_angle_axis(angle, axis);
            let reference = glam::Quat::from_axis_angle(axis.to_glam(), angle.value());
            assert!(
                Quaternion::from_glam(reference).almost_eq_with(&q, 1e-5),
                "{q:?} vs {reference:?}"
            );
            for v in sample_vectors().into_iter().step_by(7) {
                let expected = Vector3::from(reference * v.to_glam());
                assert!((q * v).almost_eq_with(&expected, 1e-4), "{v:?}");
            }
        }
    }
}

#[test]
fn matrix_products_agree_with_glam() {
    let ms = sample_matrices();
    for (a, b) in ms.iter().zip(ms.iter().skip(1)) {
        let expected = Matrix4::from(a.to_glam() * b.to_glam());
        assert!((*a * *b).almost_eq_with(&expected, 1e-3), "{a:?} * {b:?}");

        let det = a.determinant();
        assert_abs_diff_eq!(det, a.to_glam().determinant(), epsilon = 1e-2 * det.abs().max(1.0));
    }
}

#[test]
fn lazy_transform_writes_once_per_change() {
    let mut lazy = LazyModelTransform::default();
    let sentinel = Matrix4::from_rows([[9.0; 4]; 4]);

    for (i, axis) in sample_axes().into_iter().enumerate() {
        lazy.translate(axis);
        lazy.rotate_around_axis(rad(0.3), axis);
        if i % 2 == 0 {
            lazy.scale_uniform(1.5);
        }

        let mut out = sentinel;
        assert!(lazy.update_matrix(&mut out));
        assert_eq!(out, lazy.get().to_matrix4());

        let mut untouched = sentinel;
        assert!(!lazy.update_matrix(&mut untouched));
        assert_eq!(untouched, sentinel);
    }
}

#[test]
fn interpolated_transform_endpoints() {
    for axis in sample_axes() {
        let mut start = Transform::new();
        start.set_origin(axis);
        let mut t = InterpolatedModelTransform::new(start);
        {
            let mut edit = t.edit();
            edit.translate(axis * 3.0);
            edit.set_angle_axis(rad(1.0), axis);
        }
        let (previous, current) = (t.previous().to_matrix4(), t.current().to_matrix4());

        let mut out = Matrix4::ZERO;
        let mut t0 = t.clone();
        assert!(t0.update_interpolated_matrix(&mut out, 0.0));
        assert!(out.almost_eq(&previous));

        assert!(t.update_interpolated_matrix(&mut out, 1.0));
        assert!(out.almost_eq(&current));
    }
}

#[test]
fn sequence_detector_matches_in_order() {
    let mut d = SequenceDetector::new(vec!['a', 'b', 'c']);
    for c in ['a', 'b', 'c'] {
        assert!(d.test(&c));
    }
    assert!(d.completed());

    d.reset();
    assert!(!d.started());
    for c in ['a', 'b', 'x'] {
        d.test(&c);
    }
    assert!(!d.completed());
    assert!(!d.started());

    d.reset();
    assert!(!d.started());
    assert!(!d.completed());
}

#[test]
fn split_and_make_are_inverse() {
    for x in [0u32, 1, 0x12345678, 0xdeadbeef, u32::MAX] {
        let bytes: [u8; 4] = split(x);
        assert_eq!(make::<u32, _>(bytes), x);
        let halves: [u16; 2] = split(x);
        assert_eq!(make::<u32, _>(halves), x);
    }
    for x in [0i64, -1, i64::MIN, 0x0102030405060708] {
        let words: [u16; 4] = split(x);
        assert_eq!(make::<i64, _>(words), x);
        let bytes: [u8; 8] = split(x);
        assert_eq!(make::<i64, _>(bytes), x);
    }
}

#[test]
fn variadic_min_max_fold() {
    let values = [3, -7, 12, 0, 12, -7, 5];
    for w in values.windows(4) {
        let (a, b, c, d) = (w[0], w[1], w[2], w[3]);
        assert_eq!(max!(a, b, c, d), lumen_core::max(a, lumen_core::max(b, lumen_core::max(c, d))));
        assert_eq!(min!(a, b, c, d), lumen_core::min(a, lumen_core::min(b, lumen_core::min(c, d))));
    }
    assert_eq!(max!(1.5f32, -2.0f32, 9.25f32), 9.25);
    assert_eq!(min!(1.5f32, -2.0f32, 9.25f32), -2.0);
}
