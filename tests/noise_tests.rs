// Host-side tests for the pure noise functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod noise {
        include!("../src/core/noise.rs");
    }
}

use crate::core::noise::*;
use glam::Vec3;

const EPS: f32 = 2e-4;
const CONTINUITY_TOL: f32 = 0.02;

#[test]
fn gradient_noise_is_deterministic() {
    let p = Vec3::new(1.3, -2.7, 0.4);
    assert_eq!(gradient_noise3(p), gradient_noise3(p));
}

#[test]
fn gradient_noise_stays_in_expected_range() {
    for ix in -4..4 {
        for iy in -4..4 {
            for iz in -4..4 {
                let p = Vec3::new(ix as f32 * 0.73, iy as f32 * 1.19, iz as f32 * 0.41);
                let n = gradient_noise3(p);
                assert!(n.abs() <= 2.0, "out of range at {:?}: {}", p, n);
            }
        }
    }
}

#[test]
fn gradient_noise_is_continuous_inside_cells() {
    let samples = [
        Vec3::new(0.3, 0.7, 0.2),
        Vec3::new(-1.4, 2.2, 5.8),
        Vec3::new(10.1, -3.3, 0.6),
    ];
    for p in samples {
        let base = gradient_noise3(p);
        for delta in [Vec3::X * EPS, Vec3::Y * EPS, Vec3::Z * EPS] {
            let diff = (gradient_noise3(p + delta) - base).abs();
            assert!(diff < CONTINUITY_TOL, "jump at {:?}: {}", p, diff);
        }
    }
}

#[test]
fn gradient_noise_is_continuous_across_lattice_boundaries() {
    // Straddle integer boundaries on each axis; the value must not jump.
    for k in -3..4 {
        let b = k as f32;
        let left = gradient_noise3(Vec3::new(b - EPS, 0.37, -1.21));
        let right = gradient_noise3(Vec3::new(b + EPS, 0.37, -1.21));
        assert!(
            (left - right).abs() < CONTINUITY_TOL,
            "x-boundary jump at {}: {} vs {}",
            b,
            left,
            right
        );

        let below = gradient_noise3(Vec3::new(0.58, b - EPS, 2.93));
        let above = gradient_noise3(Vec3::new(0.58, b + EPS, 2.93));
        assert!((below - above).abs() < CONTINUITY_TOL);
    }
}

#[test]
fn fractal_noise_is_deterministic_and_bounded() {
    let p = Vec3::new(0.9, 4.2, -1.1);
    assert_eq!(fractal_noise3(p, 4), fractal_noise3(p, 4));
    // Four octaves at halving amplitude sum to less than 0.5 + 0.25 + ...
    assert!(fractal_noise3(p, 4).abs() < 2.0);
}

#[test]
fn fractal_noise_is_continuous() {
    let p = Vec3::new(2.0 - EPS, 0.5, 0.5);
    let q = Vec3::new(2.0 + EPS, 0.5, 0.5);
    assert!((fractal_noise3(p, 4) - fractal_noise3(q, 4)).abs() < CONTINUITY_TOL);
}

#[test]
fn cell_distance_is_non_negative_and_bounded() {
    for ix in -5..5 {
        for iy in -5..5 {
            let p = Vec3::new(ix as f32 * 0.61, iy as f32 * 0.93, 0.0);
            let d = cell_distance(p);
            assert!(d >= 0.0);
            // The nearest feature point is never farther than a cell diagonal
            // plus jitter in a 3x3 neighbourhood.
            assert!(d < 2.0, "unexpectedly far feature at {:?}: {}", p, d);
        }
    }
}

#[test]
fn cell_distance_ignores_z() {
    // The cell pattern is a 2D projection.
    let a = cell_distance(Vec3::new(0.4, 0.8, 0.0));
    let b = cell_distance(Vec3::new(0.4, 0.8, 7.3));
    assert_eq!(a, b);
}
