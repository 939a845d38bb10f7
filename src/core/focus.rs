use glam::Vec3;

use super::constants::{
    CAMERA_FOCUS_SCALE, DEFAULT_ORBIT_PITCH, DEFAULT_ORBIT_RADIUS, DEFAULT_ORBIT_YAW,
    FOCUS_FLY_DURATION_SEC, ORBIT_DAMPING_PER_SEC, ORBIT_DRAG_SENSITIVITY, ORBIT_PITCH_LIMIT,
    RETURN_FLY_DURATION_SEC,
};
use super::tween::{Easing, Tween3};

/// Camera mode. The restore point travels inside the `Locked` variant so a
/// stale restore can never outlive the selection that captured it.
#[derive(Clone, Copy, Debug)]
pub enum CameraMode {
    Orbit,
    Locked { index: usize, restore_point: Vec3 },
}

/// Perspective camera with a user orbit around the ring centre and an
/// animated focus mode. While locked, orbit input is frozen and the eye is
/// flown to, then pinned on, `(target.x * 2, 0, target.z * 2)` for the
/// selected sphere. Select/deselect supersede any in-flight fly tween;
/// repeated identical calls are no-ops.
pub struct FocusCamera {
    mode: CameraMode,
    eye: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
    yaw_vel: f32,
    pitch_vel: f32,
    fly: Option<Tween3>,
}

/// Where the eye lands for a focused world point.
pub fn focus_eye_for(target: Vec3) -> Vec3 {
    Vec3::new(
        target.x * CAMERA_FOCUS_SCALE,
        0.0,
        target.z * CAMERA_FOCUS_SCALE,
    )
}

fn orbit_eye(yaw: f32, pitch: f32, radius: f32) -> Vec3 {
    Vec3::new(
        radius * pitch.cos() * yaw.cos(),
        radius * pitch.sin(),
        radius * pitch.cos() * yaw.sin(),
    )
}

impl Default for FocusCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusCamera {
    pub fn new() -> Self {
        let yaw = DEFAULT_ORBIT_YAW;
        let pitch = DEFAULT_ORBIT_PITCH;
        let radius = DEFAULT_ORBIT_RADIUS;
        Self {
            mode: CameraMode::Orbit,
            eye: orbit_eye(yaw, pitch, radius),
            yaw,
            pitch,
            radius,
            yaw_vel: 0.0,
            pitch_vel: 0.0,
            fly: None,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn orbit_enabled(&self) -> bool {
        matches!(self.mode, CameraMode::Orbit)
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.mode {
            CameraMode::Locked { index, .. } => Some(index),
            CameraMode::Orbit => None,
        }
    }

    pub fn restore_point(&self) -> Option<Vec3> {
        match self.mode {
            CameraMode::Locked { restore_point, .. } => Some(restore_point),
            CameraMode::Orbit => None,
        }
    }

    /// Feed a pointer drag (normalized canvas units). Ignored while locked.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        if !self.orbit_enabled() {
            return;
        }
        self.yaw_vel += dx * ORBIT_DRAG_SENSITIVITY;
        self.pitch_vel += dy * ORBIT_DRAG_SENSITIVITY;
    }

    /// Lock onto `target` (a world point): capture the restore point, freeze
    /// orbit input and start the eased fly-to. No-op while already locked.
    pub fn select_object(&mut self, index: usize, target: Vec3, now: f32) {
        if let CameraMode::Locked { .. } = self.mode {
            return;
        }
        // Restore point is the eye before anything else happens, including
        // before a still-running return tween is superseded.
        let restore_point = self.eye;
        self.mode = CameraMode::Locked {
            index,
            restore_point,
        };
        self.yaw_vel = 0.0;
        self.pitch_vel = 0.0;
        self.fly = Some(Tween3::new(
            self.eye,
            focus_eye_for(target),
            now,
            FOCUS_FLY_DURATION_SEC,
            Easing::CubicInOut,
        ));
    }

    /// Fly back to the restore point and re-enable orbit input. No-op while
    /// orbit is already enabled.
    pub fn deselect_object(&mut self, now: f32) {
        let restore_point = match self.mode {
            CameraMode::Locked { restore_point, .. } => restore_point,
            CameraMode::Orbit => return,
        };
        self.mode = CameraMode::Orbit;
        // Re-seat the orbit angles on the restore point so integration
        // resumes from there once the return tween settles.
        self.radius = restore_point.length().max(1e-3);
        self.yaw = restore_point.z.atan2(restore_point.x);
        self.pitch = (restore_point.y / self.radius).clamp(-1.0, 1.0).asin();
        self.yaw_vel = 0.0;
        self.pitch_vel = 0.0;
        self.fly = Some(Tween3::new(
            self.eye,
            restore_point,
            now,
            RETURN_FLY_DURATION_SEC,
            Easing::CubicOut,
        ));
    }

    /// Per-tick update. `selected_pos` is the selected sphere's same-tick
    /// position, if any. While locked, the fly tween is re-targeted at the
    /// moving pin point each tick so the animation and the pin converge
    /// rather than fight; once the tween settles the eye tracks the pin
    /// directly.
    pub fn update(&mut self, now: f32, dt: f32, selected_pos: Option<Vec3>) {
        if let (CameraMode::Locked { .. }, Some(pos)) = (self.mode, selected_pos) {
            if let Some(fly) = &mut self.fly {
                fly.to = focus_eye_for(pos);
            }
        }

        if let Some(fly) = &self.fly {
            self.eye = fly.sample(now);
            if fly.finished(now) {
                self.fly = None;
            }
            return;
        }

        match self.mode {
            CameraMode::Locked { .. } => {
                if let Some(pos) = selected_pos {
                    self.eye = focus_eye_for(pos);
                }
            }
            CameraMode::Orbit => {
                self.yaw += self.yaw_vel * dt;
                self.pitch = (self.pitch + self.pitch_vel * dt)
                    .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
                let decay = (-dt * ORBIT_DAMPING_PER_SEC).exp();
                self.yaw_vel *= decay;
                self.pitch_vel *= decay;
                self.eye = orbit_eye(self.yaw, self.pitch, self.radius);
            }
        }
    }
}
