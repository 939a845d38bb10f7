use glam::Vec3;
use web_sys as web;

use crate::core::picker;

/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `canvas`: target canvas to derive dimensions/aspect
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
/// - `eye`: current camera eye (the camera always looks at the ring centre)
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    eye: Vec3,
) -> (Vec3, Vec3) {
    picker::screen_ray(canvas.width() as f32, canvas.height() as f32, sx, sy, eye)
}
