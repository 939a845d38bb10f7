// Host-side tests for the CPU mirror of the displacement shader.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod material {
        include!("../src/core/material.rs");
    }
}

use crate::core::material::{
    displace_vertex, displacement_at, gradient_color, DisplacementParams, NoiseMode,
};
use glam::Vec3;

fn params(mode: NoiseMode) -> DisplacementParams {
    DisplacementParams {
        time: 3.7,
        amplitude: 1.5,
        frequency: 5.0,
        skew: Vec3::new(1.0, 2.0, 0.5),
        inside_color: Vec3::new(0.1, 0.7, 0.3),
        outside_color: Vec3::new(0.0, 0.05, 0.02),
        color_steepness: 6.0,
        noise_mode: mode,
    }
}

#[test]
fn shader_index_mapping_is_stable() {
    // The WGSL branch selector depends on these exact values.
    assert_eq!(NoiseMode::Gradient.shader_index(), 0);
    assert_eq!(NoiseMode::Fractal.shader_index(), 1);
    assert_eq!(NoiseMode::Cell.shader_index(), 2);
}

#[test]
fn zero_amplitude_means_zero_displacement() {
    let mut p = params(NoiseMode::Gradient);
    p.amplitude = 0.0;
    assert_eq!(displacement_at(Vec3::new(0.3, -0.8, 0.5), &p), 0.0);
}

#[test]
fn displacement_is_bounded_by_scale_times_amplitude() {
    for mode in [NoiseMode::Gradient, NoiseMode::Fractal, NoiseMode::Cell] {
        let p = params(mode);
        for i in 0..64 {
            let a = i as f32 * 0.37;
            let v = Vec3::new(a.cos(), (a * 1.3).sin(), (a * 0.7).cos()).normalize();
            let d = displacement_at(v, &p);
            assert!(
                d.abs() <= 0.1 * p.amplitude + 1e-6,
                "{:?} exceeded bound at {:?}: {}",
                mode,
                v,
                d
            );
        }
    }
}

#[test]
fn displacement_is_radial_only() {
    let p = params(NoiseMode::Fractal);
    let v = Vec3::new(0.2, 0.9, -0.4).normalize();
    let (displaced, d) = displace_vertex(v, &p);
    // Displaced position stays on the original radial line.
    assert!(v.cross(displaced).length() < 1e-5);
    assert!((displaced.length() - (1.0 + d)).abs() < 1e-5);
}

#[test]
fn displace_vertex_handles_the_origin() {
    let p = params(NoiseMode::Gradient);
    let (displaced, _) = displace_vertex(Vec3::ZERO, &p);
    assert_eq!(displaced, Vec3::ZERO);
}

#[test]
fn gradient_color_endpoints() {
    let p = params(NoiseMode::Gradient);
    assert!(gradient_color(0.0, &p).abs_diff_eq(p.inside_color, 1e-6));
    // displacement * steepness == 1 lands exactly on the outside color.
    let d = 1.0 / p.color_steepness;
    assert!(gradient_color(d, &p).abs_diff_eq(p.outside_color, 1e-5));
}

#[test]
fn gradient_color_is_not_clamped() {
    let mut p = params(NoiseMode::Gradient);
    p.inside_color = Vec3::ZERO;
    p.outside_color = Vec3::ONE;
    p.color_steepness = 20.0;
    // k = 0.1 * 20 = 2.0: overshoot is preserved, not saturated.
    let c = gradient_color(0.1, &p);
    assert!(c.abs_diff_eq(Vec3::splat(2.0), 1e-5));

    // Negative displacement extrapolates below the inside color.
    let c = gradient_color(-0.05, &p);
    assert!(c.x < 0.0);
}

#[test]
fn time_drift_moves_the_field() {
    let mut a = params(NoiseMode::Gradient);
    let mut b = params(NoiseMode::Gradient);
    a.time = 0.0;
    b.time = 10.0;
    let v = Vec3::new(0.4, 0.2, -0.7);
    assert_ne!(displacement_at(v, &a), displacement_at(v, &b));
}
