// Host-side tests for ray construction, ray/sphere intersection and the
// drag-vs-click gesture bookkeeping.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod picker {
        include!("../src/core/picker.rs");
    }
}

use crate::core::picker::{nearest_hit, ray_sphere, screen_ray, PickTarget, PointerPicker};
use glam::{Vec2, Vec3};

#[test]
fn ray_sphere_direct_hit_returns_near_root() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
    assert_eq!(t, Some(4.0));
}

#[test]
fn ray_sphere_miss_returns_none() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::Y, Vec3::ZERO, 1.0);
    assert_eq!(t, None);
}

#[test]
fn ray_sphere_tangent_grazes() {
    let t = ray_sphere(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0)
        .expect("tangent ray should hit");
    assert!((t - 5.0).abs() < 1e-3);
}

#[test]
fn ray_sphere_behind_origin_is_a_miss() {
    // Sphere entirely behind the ray origin relative to its direction.
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::new(0.0, 0.0, 10.0), 1.0);
    assert_eq!(t, None);
}

#[test]
fn ray_sphere_from_inside_returns_far_root() {
    // The boundary sentinel surrounds the camera, so hits from inside must
    // resolve to the exit point.
    let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 2.0);
    assert_eq!(t, Some(2.0));
}

#[test]
fn nearest_hit_prefers_the_closer_target() {
    let targets = [
        PickTarget {
            name: "far",
            center: Vec3::new(0.0, 0.0, -6.0),
            radius: 0.5,
        },
        PickTarget {
            name: "near",
            center: Vec3::new(0.0, 0.0, -2.0),
            radius: 0.5,
        },
    ];
    let hit = nearest_hit(&targets, Vec3::ZERO, Vec3::NEG_Z).expect("hit");
    assert_eq!(hit.name, "near");
}

#[test]
fn small_proxy_beats_enclosing_sentinel() {
    // A project proxy in front of the camera must win over the huge sentinel
    // the camera sits inside of.
    let targets = [
        PickTarget {
            name: "boundary",
            center: Vec3::ZERO,
            radius: 40.0,
        },
        PickTarget {
            name: "project",
            center: Vec3::new(0.0, 0.0, 3.0),
            radius: 1.0,
        },
    ];
    let hit = nearest_hit(&targets, Vec3::new(0.0, 0.0, 8.0), Vec3::NEG_Z).expect("hit");
    assert_eq!(hit.name, "project");
}

#[test]
fn sentinel_catches_rays_that_miss_everything_else() {
    let targets = [
        PickTarget {
            name: "boundary",
            center: Vec3::ZERO,
            radius: 40.0,
        },
        PickTarget {
            name: "project",
            center: Vec3::new(0.0, 0.0, 3.0),
            radius: 1.0,
        },
    ];
    let hit = nearest_hit(&targets, Vec3::new(0.0, 0.0, 8.0), Vec3::Y).expect("hit");
    assert_eq!(hit.name, "boundary");
}

#[test]
fn screen_ray_through_canvas_center_points_at_ring_center() {
    let eye = Vec3::new(0.0, 0.0, 8.0);
    let (ro, rd) = screen_ray(800.0, 800.0, 400.0, 400.0, eye);
    assert_eq!(ro, eye);
    assert!(rd.z < -0.999, "unexpected direction {:?}", rd);
    assert!(rd.x.abs() < 1e-3 && rd.y.abs() < 1e-3);
}

#[test]
fn screen_ray_left_pixel_bends_left() {
    let eye = Vec3::new(0.0, 0.0, 8.0);
    let (_, rd) = screen_ray(800.0, 600.0, 100.0, 300.0, eye);
    // Camera looks down -z from +z, so screen-left is world -x.
    assert!(rd.x < 0.0);
    assert!(rd.z < 0.0);
}

#[test]
fn clean_press_release_resolves_a_click() {
    let targets = [PickTarget {
        name: "project",
        center: Vec3::new(0.0, 0.0, -4.0),
        radius: 1.0,
    }];
    let mut picker = PointerPicker::default();
    picker.pointer_down(Vec2::new(10.0, 10.0));
    assert!(picker.is_down());
    let hit = picker.resolve_click(Vec3::ZERO, Vec3::NEG_Z, &targets);
    assert_eq!(hit, Some("project"));
    assert!(!picker.is_down());
}

#[test]
fn movement_while_pressed_suppresses_the_click() {
    let targets = [PickTarget {
        name: "project",
        center: Vec3::new(0.0, 0.0, -4.0),
        radius: 1.0,
    }];
    let mut picker = PointerPicker::default();
    picker.pointer_down(Vec2::new(10.0, 10.0));
    picker.pointer_moved(Vec2::new(11.0, 10.0));
    let hit = picker.resolve_click(Vec3::ZERO, Vec3::NEG_Z, &targets);
    assert_eq!(hit, None);
}

#[test]
fn movement_before_press_does_not_poison_the_next_click() {
    let targets = [PickTarget {
        name: "project",
        center: Vec3::new(0.0, 0.0, -4.0),
        radius: 1.0,
    }];
    let mut picker = PointerPicker::default();
    picker.pointer_moved(Vec2::new(50.0, 50.0));
    picker.pointer_down(Vec2::new(10.0, 10.0));
    let hit = picker.resolve_click(Vec3::ZERO, Vec3::NEG_Z, &targets);
    assert_eq!(hit, Some("project"));
}

#[test]
fn drag_flag_resets_after_resolution() {
    let targets = [PickTarget {
        name: "project",
        center: Vec3::new(0.0, 0.0, -4.0),
        radius: 1.0,
    }];
    let mut picker = PointerPicker::default();
    picker.pointer_down(Vec2::ZERO);
    picker.pointer_moved(Vec2::ONE);
    assert_eq!(picker.resolve_click(Vec3::ZERO, Vec3::NEG_Z, &targets), None);

    picker.pointer_down(Vec2::ZERO);
    assert_eq!(
        picker.resolve_click(Vec3::ZERO, Vec3::NEG_Z, &targets),
        Some("project")
    );
}
