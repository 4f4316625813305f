// Host-side tests for orbit controls: damping, dolly, pan and polar limits.

use brain_core::*;
use glam::{Vec2, Vec3};

fn controls_without_damping(camera: &Camera) -> OrbitControls {
    OrbitControls::new(camera).with_damping(false)
}

#[test]
fn undamped_rotation_is_applied_in_one_step() {
    let mut camera = Camera::default();
    let mut controls = controls_without_damping(&camera);
    // a quarter of the viewport height turns a quarter circle
    controls.rotate(150.0, 0.0, 600);
    assert!(controls.update(&mut camera));
    assert!((camera.eye - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-4);
    assert!(!controls.has_pending_motion());
    assert!(!controls.update(&mut camera));
}

#[test]
fn damped_rotation_glides_to_the_same_place() {
    let mut camera = Camera::default();
    let mut controls = OrbitControls::new(&camera);
    controls.rotate(150.0, 0.0, 600);

    controls.update(&mut camera);
    // first step covers only the damping fraction of the turn
    let first_angle = camera.eye.x.atan2(camera.eye.z);
    assert!((first_angle + std::f32::consts::FRAC_PI_2 * ORBIT_DAMPING_FACTOR).abs() < 1e-4);
    assert!(controls.has_pending_motion());

    for _ in 0..200 {
        controls.update(&mut camera);
    }
    assert!((camera.eye - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-3);
    assert!((camera.eye.length() - 5.0).abs() < 1e-4);
}

#[test]
fn dolly_scales_distance_immediately() {
    let mut camera = Camera::default();
    let mut controls = OrbitControls::new(&camera);
    controls.dolly(-100.0);
    controls.update(&mut camera);
    assert!((camera.eye.z - 5.0 * ORBIT_ZOOM_BASE).abs() < 1e-4);

    controls.dolly(100.0);
    controls.update(&mut camera);
    assert!((camera.eye.z - 5.0).abs() < 1e-4);
}

#[test]
fn dolly_respects_distance_limits() {
    let mut camera = Camera::default();
    let mut controls = controls_without_damping(&camera);
    for _ in 0..500 {
        controls.dolly(-1.0);
        controls.update(&mut camera);
    }
    assert!((camera.eye.length() - ORBIT_MIN_DISTANCE).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut camera = Camera::default();
    let mut controls = controls_without_damping(&camera);
    // a long downward drag lifts the camera over the top; it stops at +Y
    controls.rotate(0.0, 5000.0, 600);
    controls.update(&mut camera);
    assert!(camera.eye.y > 4.99);
    assert!(camera.eye.y <= 5.0 + 1e-4);
}

#[test]
fn pan_moves_target_and_eye_together() {
    let mut camera = Camera::default();
    let mut controls = controls_without_damping(&camera);
    controls.apply_drag(DragMode::Pan, Vec2::new(100.0, 0.0), &camera, 600);
    controls.update(&mut camera);
    assert!(camera.target.x < 0.0);
    assert!((camera.eye.x - camera.target.x).abs() < 1e-5);
    assert!((camera.eye.z - 5.0).abs() < 1e-4);
}

#[test]
fn damping_can_be_switched_off_after_construction() {
    let camera = Camera::default();
    assert!(OrbitControls::new(&camera).enable_damping);
    assert!(!OrbitControls::new(&camera).with_damping(false).enable_damping);
}

#[test]
fn vertical_dolly_drag_matches_wheel_direction() {
    let mut camera = Camera::default();
    let mut controls = controls_without_damping(&camera);
    controls.apply_drag(DragMode::Dolly, Vec2::new(0.0, 10.0), &camera, 600);
    controls.update(&mut camera);
    assert!((camera.eye.z - 5.0 / ORBIT_ZOOM_BASE).abs() < 1e-4);

    controls.apply_drag(DragMode::Dolly, Vec2::new(0.0, -10.0), &camera, 600);
    controls.update(&mut camera);
    assert!((camera.eye.z - 5.0).abs() < 1e-4);

    // horizontal motion alone does not dolly
    controls.apply_drag(DragMode::Dolly, Vec2::new(25.0, 0.0), &camera, 600);
    assert!(!controls.update(&mut camera));
}
