use glam::Vec3;

use super::material::NoiseMode;

/// Static descriptor for one portfolio entry. Created once at startup;
/// immutable afterwards except through the owning sphere's animated
/// parameter updates. One-to-one with a WavySphere and a pick proxy.
#[derive(Clone, Debug)]
pub struct Project {
    /// Unique key; also the DOM id the caption elements live under.
    pub title: &'static str,
    pub size: f32,
    pub inside_color: Vec3,
    pub outside_color: Vec3,
    pub color_steepness: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub displacement_skew: Vec3,
    pub noise_mode: NoiseMode,
    /// Multiplier on the shared clock feeding the shader time uniform.
    pub speed: f32,
    /// Pick-proxy scale relative to `size`; keeps hit-testing generous.
    pub ray_size: f32,
}

/// Built-in catalog shown on the ring.
pub fn default_catalog() -> Vec<Project> {
    vec![
        Project {
            title: "SpotiFriend",
            size: 0.55,
            inside_color: Vec3::new(0.12, 0.75, 0.35),
            outside_color: Vec3::new(0.02, 0.08, 0.05),
            color_steepness: 6.0,
            amplitude: 1.4,
            frequency: 4.0,
            displacement_skew: Vec3::new(1.0, 1.0, 1.0),
            noise_mode: NoiseMode::Gradient,
            speed: 0.9,
            ray_size: 2.2,
        },
        Project {
            title: "LangLM",
            size: 0.5,
            inside_color: Vec3::new(0.85, 0.45, 0.1),
            outside_color: Vec3::new(0.1, 0.03, 0.0),
            color_steepness: 8.0,
            amplitude: 1.0,
            frequency: 6.0,
            displacement_skew: Vec3::new(2.0, 0.6, 1.0),
            noise_mode: NoiseMode::Fractal,
            speed: 1.2,
            ray_size: 2.4,
        },
        Project {
            title: "WaveLab",
            size: 0.6,
            inside_color: Vec3::new(0.2, 0.45, 0.95),
            outside_color: Vec3::new(0.01, 0.02, 0.1),
            color_steepness: 5.0,
            amplitude: 1.8,
            frequency: 3.0,
            displacement_skew: Vec3::new(1.0, 2.5, 1.0),
            noise_mode: NoiseMode::Gradient,
            speed: 0.7,
            ray_size: 2.0,
        },
        Project {
            title: "PixelForge",
            size: 0.45,
            inside_color: Vec3::new(0.9, 0.2, 0.55),
            outside_color: Vec3::new(0.12, 0.0, 0.08),
            color_steepness: 9.0,
            amplitude: 0.8,
            frequency: 9.0,
            displacement_skew: Vec3::new(3.0, 3.0, 0.5),
            noise_mode: NoiseMode::Cell,
            speed: 1.5,
            ray_size: 2.6,
        },
        Project {
            title: "DeepDrift",
            size: 0.65,
            inside_color: Vec3::new(0.1, 0.8, 0.8),
            outside_color: Vec3::new(0.0, 0.05, 0.07),
            color_steepness: 4.0,
            amplitude: 2.2,
            frequency: 2.0,
            displacement_skew: Vec3::new(0.8, 0.8, 0.8),
            noise_mode: NoiseMode::Fractal,
            speed: 0.5,
            ray_size: 1.9,
        },
        Project {
            title: "StarMapper",
            size: 0.5,
            inside_color: Vec3::new(0.95, 0.9, 0.4),
            outside_color: Vec3::new(0.08, 0.06, 0.0),
            color_steepness: 7.0,
            amplitude: 1.1,
            frequency: 5.0,
            displacement_skew: Vec3::new(1.5, 1.5, 1.5),
            noise_mode: NoiseMode::Cell,
            speed: 1.0,
            ray_size: 2.2,
        },
    ]
}
