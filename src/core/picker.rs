// Pointer picking: ray construction from the live camera, ray/sphere
// intersection against the invisible pick proxies, and press/move/release
// bookkeeping that suppresses clicks produced by orbit drags.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::constants::{CAMERA_FOV_Y, CAMERA_ZFAR, CAMERA_ZNEAR, RING_CENTER};

/// An invisible sphere registered for hit-testing. Proxies are larger than
/// the visible geometry so hits stay generous under displacement; the
/// boundary sentinel is one of these with a very large radius.
#[derive(Clone, Debug)]
pub struct PickTarget {
    pub name: &'static str,
    pub center: Vec3,
    pub radius: f32,
}

/// Nearest non-negative ray parameter for a ray/sphere intersection, or
/// `None` on a miss. When the origin is inside the sphere the far root is
/// returned, so the inward-facing boundary sentinel is still hittable.
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sqrt_disc;
    (t_far >= 0.0).then_some(t_far)
}

/// First hit along the ray, ordered by ray-parameter distance.
pub fn nearest_hit<'a>(
    targets: &'a [PickTarget],
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<&'a PickTarget> {
    let mut best: Option<(&PickTarget, f32)> = None;
    for target in targets {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, target.center, target.radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((target, t)),
            }
        }
    }
    best.map(|(target, _)| target)
}

/// World-space ray through a canvas pixel for a camera at `eye` looking at
/// the ring centre. `sx`, `sy` are backing-store pixel coordinates.
pub fn screen_ray(width: f32, height: f32, sx: f32, sy: f32, eye: Vec3) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(eye, RING_CENTER, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    (eye, (p_far - eye).normalize())
}

/// Tracks the pointer between press and release. Any movement observed
/// while pressed marks the gesture as a drag, which suppresses the click on
/// release; this is the sole mechanism keeping orbit drags from being
/// misread as selections.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerPicker {
    pub pos: Vec2,
    down: bool,
    dragged: bool,
}

impl PointerPicker {
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pos = pos;
        self.down = true;
        self.dragged = false;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pos = pos;
        if self.down {
            self.dragged = true;
        }
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Resolve a pointer-up into a named target, or `None` when the gesture
    /// was a drag or nothing was hit.
    pub fn resolve_click<'a>(
        &mut self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        targets: &'a [PickTarget],
    ) -> Option<&'a str> {
        let was_drag = self.dragged;
        self.down = false;
        self.dragged = false;
        if was_drag {
            return None;
        }
        nearest_hit(targets, ray_origin, ray_dir).map(|t| t.name)
    }
}
