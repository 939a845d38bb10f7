use glam::Vec3;
use rand::prelude::*;

use super::constants::{SELF_SPIN_RATE, SLIDE_DURATION_SEC, SLIDE_OFFSET_X, SPIN_WEIGHT_RANGE};
use super::material::DisplacementParams;
use super::project::Project;
use super::tween::{Easing, Tween, Tween3};

/// Partial parameter update; every field optional, applied field-by-field.
#[derive(Clone, Debug, Default)]
pub struct ParamUpdate {
    pub amplitude: Option<f32>,
    pub frequency: Option<f32>,
    pub inside_color: Option<Vec3>,
    pub outside_color: Option<Vec3>,
    pub color_steepness: Option<f32>,
}

/// In-flight parameter tweens, one slot per animatable uniform. A new
/// request for a slot replaces whatever was running there, so the latest
/// target always wins.
#[derive(Clone, Debug, Default)]
struct ParamTweens {
    amplitude: Option<Tween>,
    frequency: Option<Tween>,
    inside_color: Option<Tween3>,
    outside_color: Option<Tween3>,
    color_steepness: Option<Tween>,
}

/// One project sphere on the ring: owns its displacement uniforms, a fixed
/// random tumble axis, and its slide/parameter animations. Ring position is
/// written by the field each tick; `position` already includes the slide
/// offset when one is active.
pub struct WavySphere {
    pub title: &'static str,
    pub size: f32,
    pub speed: f32,
    pub position: Vec3,
    /// Local euler rotation, recomputed from elapsed time each tick.
    pub rotation: Vec3,
    pub params: DisplacementParams,
    spin_weights: Vec3,
    tweens: ParamTweens,
    slide_left: bool,
    slide: Option<Tween>,
    slide_offset: f32,
}

impl WavySphere {
    pub fn new(project: &Project, position: Vec3, rng: &mut StdRng) -> Self {
        let mut w = || rng.gen_range(-SPIN_WEIGHT_RANGE..=SPIN_WEIGHT_RANGE);
        let spin_weights = Vec3::new(w(), w(), w());
        Self {
            title: project.title,
            size: project.size,
            speed: project.speed,
            position,
            rotation: Vec3::ZERO,
            params: DisplacementParams {
                time: 0.0,
                amplitude: project.amplitude,
                frequency: project.frequency,
                skew: project.displacement_skew,
                inside_color: project.inside_color,
                outside_color: project.outside_color,
                color_steepness: project.color_steepness,
                noise_mode: project.noise_mode,
            },
            spin_weights,
            tweens: ParamTweens::default(),
            slide_left: false,
            slide: None,
            slide_offset: 0.0,
        }
    }

    pub fn spin_weights(&self) -> Vec3 {
        self.spin_weights
    }

    pub fn slide_offset(&self) -> f32 {
        self.slide_offset
    }

    /// Advance the shader clock, the self-rotation and any running tweens.
    pub fn update(&mut self, elapsed: f32) {
        self.params.time = elapsed * self.speed;
        self.rotation = self.spin_weights * (SELF_SPIN_RATE * elapsed);

        if let Some(t) = &self.slide {
            self.slide_offset = t.sample(elapsed);
            if t.finished(elapsed) {
                self.slide = None;
            }
        }
        self.apply_param_tweens(elapsed);
    }

    /// Smoothly interpolate any subset of the animatable uniforms toward new
    /// targets over `duration` seconds. Calling again for the same field
    /// supersedes the in-flight tween for that field.
    pub fn update_parameters(&mut self, update: ParamUpdate, duration: f32, now: f32) {
        let easing = Easing::CubicInOut;
        if let Some(to) = update.amplitude {
            self.tweens.amplitude =
                Some(Tween::new(self.params.amplitude, to, now, duration, easing));
        }
        if let Some(to) = update.frequency {
            self.tweens.frequency =
                Some(Tween::new(self.params.frequency, to, now, duration, easing));
        }
        if let Some(to) = update.inside_color {
            self.tweens.inside_color = Some(Tween3::new(
                self.params.inside_color,
                to,
                now,
                duration,
                easing,
            ));
        }
        if let Some(to) = update.outside_color {
            self.tweens.outside_color = Some(Tween3::new(
                self.params.outside_color,
                to,
                now,
                duration,
                easing,
            ));
        }
        if let Some(to) = update.color_steepness {
            self.tweens.color_steepness = Some(Tween::new(
                self.params.color_steepness,
                to,
                now,
                duration,
                easing,
            ));
        }
    }

    /// Toggle the local x slide between 0 and the fixed offset over one
    /// second; used for a layout shift independent of selection.
    pub fn animate_slide(&mut self, now: f32) {
        self.slide_left = !self.slide_left;
        let to = if self.slide_left { SLIDE_OFFSET_X } else { 0.0 };
        self.slide = Some(Tween::new(
            self.slide_offset,
            to,
            now,
            SLIDE_DURATION_SEC,
            Easing::CubicOut,
        ));
    }

    fn apply_param_tweens(&mut self, now: f32) {
        if let Some(t) = &self.tweens.amplitude {
            self.params.amplitude = t.sample(now);
            if t.finished(now) {
                self.tweens.amplitude = None;
            }
        }
        if let Some(t) = &self.tweens.frequency {
            self.params.frequency = t.sample(now);
            if t.finished(now) {
                self.tweens.frequency = None;
            }
        }
        if let Some(t) = &self.tweens.inside_color {
            self.params.inside_color = t.sample(now);
            if t.finished(now) {
                self.tweens.inside_color = None;
            }
        }
        if let Some(t) = &self.tweens.outside_color {
            self.params.outside_color = t.sample(now);
            if t.finished(now) {
                self.tweens.outside_color = None;
            }
        }
        if let Some(t) = &self.tweens.color_steepness {
            self.params.color_steepness = t.sample(now);
            if t.finished(now) {
                self.tweens.color_steepness = None;
            }
        }
    }
}
