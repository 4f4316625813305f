use brain_core::DragMode;
use glam::Vec2;
use web_sys as web;

// MouseEvent.button values
const PRIMARY: i16 = 0;
const MIDDLE: i16 = 1;
const SECONDARY: i16 = 2;

// ---------------- Pointer helpers ----------------
/// Pointer position in CSS pixels relative to the window, matching the
/// viewport the app context is sized with.
#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Orbit drag started by a button press: primary rotates (pans with Shift),
/// middle dollies, secondary pans, anything else is ignored.
#[inline]
pub fn drag_mode_for(button: i16, shift: bool) -> Option<DragMode> {
    match button {
        PRIMARY if shift => Some(DragMode::Pan),
        PRIMARY => Some(DragMode::Rotate),
        MIDDLE => Some(DragMode::Dolly),
        SECONDARY => Some(DragMode::Pan),
        _ => None,
    }
}

/// Normalize a wheel delta to pixels; line and page modes report much
/// smaller numbers for the same gesture.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => 16.0,  // DOM_DELTA_LINE
        2 => 800.0, // DOM_DELTA_PAGE
        _ => 1.0,
    };
    (delta_y * scale) as f32
}
