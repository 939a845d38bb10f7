// Pure noise functions driving the sphere displacement. These mirror the
// WGSL implementations in `shaders/displacement.wgsl` so host-side tests
// (and any CPU-side sampling) agree with what the GPU draws.

use glam::{Vec2, Vec3};

/// GLSL/WGSL-style fract: always in [0, 1), unlike `f32::fract`.
#[inline(always)]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline(always)]
fn hash(n: f32) -> f32 {
    fract(n.sin() * 43758.5453)
}

/// Pseudo-random unit-cube gradient for a lattice point, components in [-1, 1].
#[inline(always)]
fn lattice_gradient(i: Vec3) -> Vec3 {
    let h = Vec3::new(
        hash(i.dot(Vec3::new(127.1, 311.7, 74.7))),
        hash(i.dot(Vec3::new(269.5, 183.3, 246.1))),
        hash(i.dot(Vec3::new(113.5, 271.9, 124.6))),
    );
    h * 2.0 - Vec3::ONE
}

/// Jittered feature point inside a 2D lattice cell, components in [0, 1).
#[inline(always)]
fn cell_jitter(i: Vec2) -> Vec2 {
    Vec2::new(
        hash(i.dot(Vec2::new(127.1, 311.7))),
        hash(i.dot(Vec2::new(269.5, 183.3))),
    )
}

/// Classic 3D gradient noise, approximately in [-1, 1].
///
/// Continuous across integer lattice boundaries: corner contributions are
/// dot products with the offset from each corner, blended with a cubic fade,
/// so the value at a boundary is shared by both cells.
pub fn gradient_noise3(p: Vec3) -> f32 {
    let i = p.floor();
    let f = p - i;
    // Cubic fade
    let u = f * f * (Vec3::splat(3.0) - f * 2.0);

    let dot_corner = |cx: f32, cy: f32, cz: f32| -> f32 {
        let corner = Vec3::new(cx, cy, cz);
        lattice_gradient(i + corner).dot(f - corner)
    };

    let n000 = dot_corner(0.0, 0.0, 0.0);
    let n100 = dot_corner(1.0, 0.0, 0.0);
    let n010 = dot_corner(0.0, 1.0, 0.0);
    let n110 = dot_corner(1.0, 1.0, 0.0);
    let n001 = dot_corner(0.0, 0.0, 1.0);
    let n101 = dot_corner(1.0, 0.0, 1.0);
    let n011 = dot_corner(0.0, 1.0, 1.0);
    let n111 = dot_corner(1.0, 1.0, 1.0);

    let x00 = n000 + (n100 - n000) * u.x;
    let x10 = n010 + (n110 - n010) * u.x;
    let x01 = n001 + (n101 - n001) * u.x;
    let x11 = n011 + (n111 - n011) * u.x;

    let y0 = x00 + (x10 - x00) * u.y;
    let y1 = x01 + (x11 - x01) * u.y;

    y0 + (y1 - y0) * u.z
}

/// Fractal Brownian motion: `octaves` layers of gradient noise at doubling
/// frequency and halving amplitude. Deterministic for a given input.
pub fn fractal_noise3(p: Vec3, octaves: u32) -> f32 {
    let mut value = 0.0_f32;
    let mut amplitude = 0.5_f32;
    let mut frequency = 1.0_f32;
    for _ in 0..octaves {
        value += amplitude * gradient_noise3(p * frequency);
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

/// Minimum Euclidean distance from the 2D projection of `p` to the nearest
/// jittered feature point in the surrounding 3x3 cell neighbourhood.
/// Produces the "cracked" displacement pattern; range roughly [0, ~1.4].
pub fn cell_distance(p: Vec3) -> f32 {
    let q = p.truncate();
    let i = q.floor();
    let f = q - i;

    let mut min_d = f32::MAX;
    for cy in -1..=1 {
        for cx in -1..=1 {
            let cell = Vec2::new(cx as f32, cy as f32);
            let feature = cell + cell_jitter(i + cell) - f;
            min_d = min_d.min(feature.length());
        }
    }
    min_d
}
