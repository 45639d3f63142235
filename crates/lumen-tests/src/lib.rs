//! Integration tests for lumen crates.
//!
//! End-to-end scenarios that cross crate boundaries live in `scenarios`,
//! sampled invariant sweeps in `properties`. The generators below produce
//! the deterministic sample grids both use.

use lumen_core::Real;
use lumen_math::{Matrix4, Radian, Vector3, rad};

/// Angles from just above zero to just below a full turn.
pub fn sample_angles() -> Vec<Radian> {
    (1..24).map(|i| rad(i as Real * 0.26)).collect()
}

/// Unit axes: the cardinal directions plus a spread of diagonals.
pub fn sample_axes() -> Vec<Vector3> {
    let mut axes = vec![Vector3::X, Vector3::Y, Vector3::Z, -Vector3::X];
    for i in -1..=1 {
        for j in -1..=1 {
            let v = Vector3::new(i as Real + 0.5, j as Real * 0.75, 1.0);
            axes.push(v.normalized());
        }
    }
    axes
}

/// Vectors on a small grid, zero included.
pub fn sample_vectors() -> Vec<Vector3> {
    let mut out = Vec::new();
    for i in -2..=2 {
        for j in -1..=1 {
            for k in -2..=2 {
                out.push(Vector3::new(i as Real * 1.5, j as Real * 0.5, k as Real - 0.3));
            }
        }
    }
    out
}

/// Deterministic pseudo-random 4×4 matrices with entries in `[-5, 5]`.
pub fn sample_matrices() -> Vec<Matrix4> {
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((state >> 8) % 41) as Real * 0.25 - 5.0
    };
    (0..40)
        .map(|_| {
            let mut rows = [[0.0; 4]; 4];
            for v in rows.iter_mut().flatten() {
                *v = next();
            }
            Matrix4::from_rows(rows)
        })
        .collect()
}

#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;
