// Minimal eased-interpolation support. Tweens are plain values sampled
// against the shared elapsed-seconds clock each frame; holders replace a
// tween to supersede it, so a new request always wins over an in-flight one.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicIn,
    CubicOut,
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Scalar interpolation from `from` to `to` over `duration` seconds,
/// anchored at `start` on the shared clock.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(1e-6),
            easing,
        }
    }

    pub fn progress(&self, now: f32) -> f32 {
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f32) -> f32 {
        let k = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * k
    }

    pub fn finished(&self, now: f32) -> bool {
        now - self.start >= self.duration
    }
}

/// Vector interpolation with the same timeline semantics as [`Tween`];
/// used for colors (per-channel linear under the eased factor) and for
/// camera fly paths.
#[derive(Clone, Copy, Debug)]
pub struct Tween3 {
    pub from: Vec3,
    pub to: Vec3,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl Tween3 {
    pub fn new(from: Vec3, to: Vec3, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(1e-6),
            easing,
        }
    }

    pub fn progress(&self, now: f32) -> f32 {
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f32) -> Vec3 {
        let k = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * k
    }

    pub fn finished(&self, now: f32) -> bool {
        now - self.start >= self.duration
    }
}
