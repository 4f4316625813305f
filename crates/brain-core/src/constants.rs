use glam::Vec3;

// Shared scene/camera tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 5.0; // eye distance along +Z, looking at the origin

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.25; // fraction of the pending delta applied per frame
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // dolly scale per wheel notch at zoom speed 1
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Materials
pub const MARKER_DEFAULT_OPACITY: f32 = 0.85;
pub const SHELL_RADIUS: f32 = 1.5;
pub const SHELL_SCALE: [f32; 3] = [1.0, 0.8, 1.2];
pub const SHELL_COLOR: u32 = 0xeeeeee;
pub const SHELL_OPACITY: f32 = 0.2;

// Tessellation (width segments, height segments)
pub const MARKER_SEGMENTS: (u32, u32) = (32, 16);
pub const SHELL_SEGMENTS: (u32, u32) = (32, 32);

// Lighting
pub const BACKGROUND_COLOR: u32 = 0xf0f0f0;
pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 1.5;
pub const DIRECTIONAL_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [1.0, 1.0, 1.0];

#[inline]
pub fn shell_radii() -> Vec3 {
    Vec3::from(SHELL_SCALE) * SHELL_RADIUS
}

#[inline]
pub fn camera_start_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_START_Z)
}
