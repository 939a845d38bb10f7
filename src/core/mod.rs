pub mod constants;
pub mod field;
pub mod focus;
pub mod material;
pub mod noise;
pub mod picker;
pub mod project;
pub mod sphere;
pub mod tween;

pub use constants::*;
pub use field::{SelectionChange, SphereField};
pub use focus::{CameraMode, FocusCamera};
pub use material::{DisplacementParams, NoiseMode};
pub use picker::{PickTarget, PointerPicker};
pub use project::{default_catalog, Project};
pub use sphere::{ParamUpdate, WavySphere};

// Shader bundled as a string constant
pub static DISPLACEMENT_WGSL: &str = include_str!("../../shaders/displacement.wgsl");
