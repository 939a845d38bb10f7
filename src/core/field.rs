use glam::Vec3;
use rand::prelude::*;

use super::constants::{
    BOUNDARY_NAME, BOUNDARY_RADIUS, FOCUS_LOOKAHEAD_SEC, RING_ANGULAR_SPEED,
};
use super::focus::FocusCamera;
use super::picker::PickTarget;
use super::project::Project;
use super::sphere::WavySphere;

/// Outcome of a resolved click, for the caller to mirror into the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Focused { index: usize, title: &'static str },
    Defocused { index: usize, title: &'static str },
}

/// The orchestrator: N (WavySphere, pick proxy) pairs co-rotating on a ring,
/// the boundary sentinel, the focus camera and the Idle/Locked selection
/// machine. At most one project is focused at a time.
pub struct SphereField {
    pub spheres: Vec<WavySphere>,
    /// Pick targets; `targets[i]` mirrors `spheres[i]`, the boundary
    /// sentinel sits last.
    targets: Vec<PickTarget>,
    pub camera: FocusCamera,
    selected: Option<usize>,
    ring_radius: f32,
}

impl SphereField {
    /// Lay the projects out on a ring of `ring_radius`; project `i` of `n`
    /// starts at angle `i/n * 2π`. Spin weights are seeded per index from
    /// `seed` so a given catalog always tumbles the same way.
    pub fn new(projects: &[Project], ring_radius: f32, seed: u64) -> Self {
        let n = projects.len();
        let mut spheres = Vec::with_capacity(n);
        let mut targets = Vec::with_capacity(n + 1);
        for (i, project) in projects.iter().enumerate() {
            let pos = ring_point(ring_radius, 0.0, i, n);
            let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let mut rng = StdRng::seed_from_u64(mix);
            spheres.push(WavySphere::new(project, pos, &mut rng));
            targets.push(PickTarget {
                name: project.title,
                center: pos,
                radius: project.size * project.ray_size,
            });
        }
        targets.push(PickTarget {
            name: BOUNDARY_NAME,
            center: Vec3::ZERO,
            radius: BOUNDARY_RADIUS,
        });
        Self {
            spheres,
            targets,
            camera: FocusCamera::new(),
            selected: None,
            ring_radius,
        }
    }

    /// All pickable targets, proxies first, boundary sentinel last.
    pub fn pick_targets(&self) -> &[PickTarget] {
        &self.targets
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Current ring position for project `index` at `elapsed` seconds.
    pub fn ring_position(&self, index: usize, elapsed: f32) -> Vec3 {
        ring_point(
            self.ring_radius,
            elapsed * RING_ANGULAR_SPEED,
            index,
            self.spheres.len(),
        )
    }

    /// Resolve a clicked target name and drive the selection machine.
    ///
    /// Idle + valid project: lock on it (camera fly-to aimed slightly ahead
    /// of the orbiting target) and report `Focused`. Locked + boundary (or
    /// any unrecognized name): fly back and report `Defocused`. Everything
    /// else — clicking another project while locked, or the boundary while
    /// idle — is a deliberate no-op.
    pub fn select_project(&mut self, name: &str, elapsed: f32) -> Option<SelectionChange> {
        let index = self.spheres.iter().position(|s| s.title == name);
        match (self.selected, index) {
            (None, Some(i)) => {
                let target = self.ring_position(i, elapsed + FOCUS_LOOKAHEAD_SEC);
                self.camera.select_object(i, target, elapsed);
                self.selected = Some(i);
                Some(SelectionChange::Focused {
                    index: i,
                    title: self.spheres[i].title,
                })
            }
            (Some(prev), None) => {
                self.camera.deselect_object(elapsed);
                self.selected = None;
                Some(SelectionChange::Defocused {
                    index: prev,
                    title: self.spheres[prev].title,
                })
            }
            _ => None,
        }
    }

    /// Per-tick: advance every sphere, recompute its ring position and copy
    /// x/z onto its proxy, then update the camera with the same-tick
    /// position of the selected sphere. The proxy copy must happen here,
    /// after the sphere moves, or hit-testing goes stale.
    pub fn update(&mut self, elapsed: f32, dt: f32) {
        let n = self.spheres.len();
        for i in 0..n {
            let ring = ring_point(self.ring_radius, elapsed * RING_ANGULAR_SPEED, i, n);
            let sphere = &mut self.spheres[i];
            sphere.update(elapsed);
            sphere.position = Vec3::new(ring.x + sphere.slide_offset(), 0.0, ring.z);
            self.targets[i].center.x = sphere.position.x;
            self.targets[i].center.z = sphere.position.z;
        }
        let selected_pos = self.selected.map(|i| self.spheres[i].position);
        self.camera.update(elapsed, dt, selected_pos);
    }
}

fn ring_point(radius: f32, spin: f32, index: usize, count: usize) -> Vec3 {
    let angle = spin + index as f32 / count.max(1) as f32 * std::f32::consts::TAU;
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}
