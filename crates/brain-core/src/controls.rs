//! Orbit-style camera controls with optional damping.
//!
//! Pointer input only accumulates pending deltas; [`OrbitControls::update`]
//! is called once per frame and moves the camera. With damping enabled each
//! update applies a fraction of the pending rotation and pan and keeps the
//! rest, so the camera glides to a stop after the pointer is released.

use crate::constants::*;
use crate::state::Camera;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
    radius: f32,
    /// Azimuth around +Y, measured from +Z towards +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn new(camera: &Camera) -> Self {
        Self {
            target: camera.target,
            ..Self::default()
        }
    }

    pub fn with_damping(mut self, enabled: bool) -> Self {
        self.enable_damping = enabled;
        self
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height: u32) {
        let h = viewport_height.max(1) as f32;
        self.delta_theta -= TAU * dx_px / h * self.rotate_speed;
        self.delta_phi -= TAU * dy_px / h * self.rotate_speed;
    }

    /// Queue a dolly step from a wheel event; negative deltas move closer.
    pub fn dolly(&mut self, wheel_delta_y: f32) {
        let zoom = ORBIT_ZOOM_BASE.powf(self.zoom_speed);
        if wheel_delta_y < 0.0 {
            self.scale *= zoom;
        } else if wheel_delta_y > 0.0 {
            self.scale /= zoom;
        }
    }

    /// Queue a screen-space pan so the point under the pointer follows it.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, camera: &Camera, viewport_height: u32) {
        let h = viewport_height.max(1) as f32;
        let target_distance =
            (camera.eye - self.target).length() * (camera.fovy_radians * 0.5).tan();
        let forward = camera.forward();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let left_dist = 2.0 * dx_px * self.pan_speed * target_distance / h;
        let up_dist = 2.0 * dy_px * self.pan_speed * target_distance / h;
        self.pan_offset += -right * left_dist + up * up_dist;
    }

    pub fn apply_drag(&mut self, mode: DragMode, delta: Vec2, camera: &Camera, viewport_height: u32) {
        match mode {
            DragMode::Rotate => self.rotate(delta.x, delta.y, viewport_height),
            DragMode::Pan => self.pan(delta.x, delta.y, camera, viewport_height),
            // dragging down moves away, like scrolling down
            DragMode::Dolly => self.dolly(delta.y),
        }
    }

    pub fn has_pending_motion(&self) -> bool {
        self.delta_theta.abs() > 1e-6
            || self.delta_phi.abs() > 1e-6
            || self.pan_offset.length_squared() > 1e-12
            || (self.scale - 1.0).abs() > 1e-6
    }

    /// Advance one step. Returns true when the camera eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut s = Spherical::from_offset(camera.eye - self.target);
        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        s.theta += self.delta_theta * step;
        s.phi += self.delta_phi * step;
        s.phi = s.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * step;

        let eye = self.target + s.to_offset();
        let moved = eye.distance_squared(camera.eye) > 1e-10;
        camera.eye = eye;
        camera.target = self.target;

        let keep = 1.0 - step;
        self.delta_theta *= keep;
        self.delta_phi *= keep;
        self.pan_offset *= keep;
        // dolly is applied in full each step
        self.scale = 1.0;
        moved
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
    Dolly,
}

/// Tracks an in-progress pointer drag and turns positions into deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerDrag {
    mode: Option<DragMode>,
    last: Vec2,
}

impl PointerDrag {
    pub fn begin(&mut self, mode: DragMode, pos: Vec2) {
        self.mode = Some(mode);
        self.last = pos;
    }

    pub fn moved(&mut self, pos: Vec2) -> Option<(DragMode, Vec2)> {
        let mode = self.mode?;
        let delta = pos - self.last;
        self.last = pos;
        Some((mode, delta))
    }

    pub fn end(&mut self) {
        self.mode = None;
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_round_trip_of_start_eye() {
        let s = Spherical::from_offset(Vec3::new(0.0, 0.0, 5.0));
        assert!((s.radius - 5.0).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);
        assert!((s.phi - PI / 2.0).abs() < 1e-6);
        assert!((s.to_offset() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn drag_reports_deltas_only_while_active() {
        let mut drag = PointerDrag::default();
        assert_eq!(drag.moved(Vec2::new(3.0, 4.0)), None);
        drag.begin(DragMode::Rotate, Vec2::new(10.0, 10.0));
        assert_eq!(
            drag.moved(Vec2::new(15.0, 8.0)),
            Some((DragMode::Rotate, Vec2::new(5.0, -2.0)))
        );
        assert_eq!(
            drag.moved(Vec2::new(15.0, 9.0)),
            Some((DragMode::Rotate, Vec2::new(0.0, 1.0)))
        );
        drag.end();
        assert!(!drag.is_active());
        assert_eq!(drag.moved(Vec2::new(0.0, 0.0)), None);
    }
}
