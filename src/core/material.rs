// Displacement material: the uniform set for the wavy-sphere shader and CPU
// mirrors of its vertex/fragment math. The GPU side lives in
// `shaders/displacement.wgsl`; both must stay in agreement.

use glam::Vec3;

use super::constants::{DISPLACEMENT_SCALE, NOISE_TIME_DRIFT};
use super::noise;

pub const FRACTAL_OCTAVES: u32 = 4;

/// Which noise field drives the radial displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseMode {
    Gradient,
    Fractal,
    Cell,
}

impl NoiseMode {
    /// Index used to select the branch inside the WGSL shader.
    pub fn shader_index(self) -> u32 {
        match self {
            NoiseMode::Gradient => 0,
            NoiseMode::Fractal => 1,
            NoiseMode::Cell => 2,
        }
    }
}

/// Live uniform values for one sphere's displacement shader. `time`
/// mutates every tick; the rest are either fixed at construction or
/// target-interpolated by the owning sphere's parameter tweens.
#[derive(Clone, Debug)]
pub struct DisplacementParams {
    pub time: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub skew: Vec3,
    pub inside_color: Vec3,
    pub outside_color: Vec3,
    pub color_steepness: f32,
    pub noise_mode: NoiseMode,
}

/// Scalar displacement for a local-space vertex position.
pub fn displacement_at(p: Vec3, params: &DisplacementParams) -> f32 {
    let q = p * params.skew + Vec3::splat(params.time * NOISE_TIME_DRIFT);
    let n = match params.noise_mode {
        NoiseMode::Gradient => noise::gradient_noise3(q),
        NoiseMode::Fractal => noise::fractal_noise3(q, FRACTAL_OCTAVES),
        NoiseMode::Cell => noise::cell_distance(q),
    };
    (n * params.frequency).sin() * DISPLACEMENT_SCALE * params.amplitude
}

/// Vertex stage: radial-only offset along the local normal. Tangential
/// structure is not perturbed. Returns the displaced position and the
/// scalar passed to the fragment stage.
pub fn displace_vertex(p: Vec3, params: &DisplacementParams) -> (Vec3, f32) {
    let d = displacement_at(p, params);
    (p + p.normalize_or_zero() * d, d)
}

/// Fragment stage: two-color gradient keyed on the displacement scalar.
/// The mix factor is deliberately not clamped; very large
/// `steepness * displacement` products overshoot and degrade visually
/// rather than erroring, matching the shader.
pub fn gradient_color(displacement: f32, params: &DisplacementParams) -> Vec3 {
    let k = displacement * params.color_steepness;
    params.inside_color + (params.outside_color - params.inside_color) * k
}
