use glam::Vec3;

// Shared layout/interaction tuning constants used by the core and the
// web frontend. Keeping them in one place keeps magic numbers out of the
// code and lets host-side tests include them directly.

// Ring layout
pub const RING_RADIUS: f32 = 2.5; // world-space radius of the project ring
pub const RING_ANGULAR_SPEED: f32 = 0.12; // shared co-rotation rate (rad/s)

// Per-sphere motion
pub const SELF_SPIN_RATE: f32 = 0.4; // base tumble rate, scaled by per-axis weights
pub const SPIN_WEIGHT_RANGE: f32 = 0.5; // weights drawn from [-0.5, 0.5]

// Slide animation (UI layout shift, independent of selection)
pub const SLIDE_OFFSET_X: f32 = -0.8;
pub const SLIDE_DURATION_SEC: f32 = 1.0;

// Displacement shader constants (mirrored in shaders/displacement.wgsl)
pub const DISPLACEMENT_SCALE: f32 = 0.1;
pub const NOISE_TIME_DRIFT: f32 = 0.2;

// Picking
pub const BOUNDARY_NAME: &str = "boundary";
pub const BOUNDARY_RADIUS: f32 = 40.0; // inward-facing sentinel around everything

// Camera
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const DEFAULT_ORBIT_RADIUS: f32 = 8.0;
pub const DEFAULT_ORBIT_YAW: f32 = std::f32::consts::FRAC_PI_2;
pub const DEFAULT_ORBIT_PITCH: f32 = 0.35;
pub const ORBIT_PITCH_LIMIT: f32 = 1.35; // keep the eye off the poles
pub const ORBIT_DRAG_SENSITIVITY: f32 = 2.4; // rad per normalized drag unit
pub const ORBIT_DAMPING_PER_SEC: f32 = 5.0; // exponential decay of drag velocity

// Focus transitions
pub const CAMERA_FOCUS_SCALE: f32 = 2.0; // eye lands "beyond" the target on the ring axis
pub const FOCUS_FLY_DURATION_SEC: f32 = 2.0;
pub const RETURN_FLY_DURATION_SEC: f32 = 1.0;
pub const FOCUS_LOOKAHEAD_SEC: f32 = 1.0; // lead the still-orbiting target

// Default world placement of the ring's centre.
pub const RING_CENTER: Vec3 = Vec3::ZERO;
