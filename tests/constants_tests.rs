// Host-side tests for constants and the host page contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use brain_core::{
    camera_start_eye, shell_radii, CAMERA_FAR, CAMERA_NEAR, MARKER_DEFAULT_OPACITY,
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, SHELL_OPACITY,
};
use constants::*;

#[test]
fn mount_point_ids_match_host_page() {
    assert_eq!(CONTAINER_ID, "brain-container");
    assert_eq!(INFO_PANEL_ID, "region-info");
    assert_eq!(INFO_TEXT_ID, "region-name");
    assert_eq!(LABEL_CLASS, "label");
}

#[test]
fn hover_styles_toggle_between_distinct_values() {
    assert_ne!(CURSOR_HOVER, CURSOR_DEFAULT);
    assert_ne!(PANEL_SHOWN, PANEL_HIDDEN);
    assert_eq!(PANEL_HIDDEN, "none");
}

#[test]
fn labels_never_intercept_the_pointer() {
    assert!(LABEL_BASE_STYLE.contains("position:absolute"));
    assert!(LABEL_BASE_STYLE.contains("pointer-events:none"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_orbit_constants_are_consistent() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR <= 1.0);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    let start = camera_start_eye().length();
    assert!(start >= ORBIT_MIN_DISTANCE && start <= ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shell_is_fainter_than_markers_and_camera_starts_outside_it() {
    assert!(SHELL_OPACITY < MARKER_DEFAULT_OPACITY);
    let r = shell_radii();
    assert!(r.min_element() > 0.0);
    // the camera starts outside the shell
    assert!(camera_start_eye().length() > r.max_element());
}
