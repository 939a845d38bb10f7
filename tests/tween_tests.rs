// Host-side tests for the tween primitives.

#![allow(dead_code)]
mod core {
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::tween::{Easing, Tween, Tween3};
use glam::Vec3;

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn easing_hits_both_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert!(approx(easing.apply(1.0), 1.0, 1e-6), "{:?} at 1", easing);
    }
}

#[test]
fn easing_clamps_outside_unit_interval() {
    assert_eq!(Easing::CubicInOut.apply(-2.0), 0.0);
    assert!(approx(Easing::CubicInOut.apply(3.0), 1.0, 1e-6));
}

#[test]
fn cubic_in_out_is_symmetric_at_midpoint() {
    assert!(approx(Easing::CubicInOut.apply(0.5), 0.5, 1e-6));
}

#[test]
fn sample_holds_from_before_start_and_to_after_end() {
    let t = Tween::new(2.0, 6.0, 10.0, 4.0, Easing::CubicInOut);
    assert_eq!(t.sample(9.0), 2.0);
    assert!(approx(t.sample(14.0), 6.0, 1e-5));
    assert!(approx(t.sample(100.0), 6.0, 1e-5));
}

#[test]
fn sample_is_monotonic_for_increasing_time() {
    let t = Tween::new(0.0, 1.0, 0.0, 2.0, Easing::CubicInOut);
    let mut prev = t.sample(0.0);
    let mut now = 0.0;
    while now <= 2.0 {
        let v = t.sample(now);
        assert!(v >= prev - 1e-6, "regressed at {}: {} < {}", now, v, prev);
        prev = v;
        now += 0.05;
    }
}

#[test]
fn finished_flips_exactly_at_duration() {
    let t = Tween::new(0.0, 1.0, 5.0, 1.0, Easing::Linear);
    assert!(!t.finished(5.99));
    assert!(t.finished(6.0));
}

#[test]
fn zero_duration_degenerates_to_an_instant_jump() {
    let t = Tween::new(0.0, 1.0, 3.0, 0.0, Easing::Linear);
    assert!(t.finished(3.001));
    assert!(approx(t.sample(3.001), 1.0, 1e-6));
}

#[test]
fn tween3_interpolates_per_component() {
    let t = Tween3::new(
        Vec3::new(0.0, 10.0, -4.0),
        Vec3::new(2.0, 0.0, 4.0),
        0.0,
        2.0,
        Easing::Linear,
    );
    let mid = t.sample(1.0);
    assert!(mid.abs_diff_eq(Vec3::new(1.0, 5.0, 0.0), 1e-5));
    assert!(t.sample(2.5).abs_diff_eq(Vec3::new(2.0, 0.0, 4.0), 1e-5));
}

#[test]
fn retargeting_to_mutates_the_path() {
    // Holders re-aim an in-flight tween by writing `to`; the sample must
    // follow the new target from the original `from`.
    let mut t = Tween3::new(Vec3::ZERO, Vec3::X, 0.0, 1.0, Easing::Linear);
    t.to = Vec3::Y * 2.0;
    assert!(t.sample(0.5).abs_diff_eq(Vec3::Y, 1e-5));
    assert!(t.sample(1.0).abs_diff_eq(Vec3::Y * 2.0, 1e-5));
}
