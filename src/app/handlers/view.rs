//! Handler für Ansicht und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Verschiebt die Ansicht um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: Vec2) {
    use_cases::viewport::pan(state, delta_px);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport(state: &mut AppState, size: [f32; 2], element_offset: Vec2) {
    use_cases::viewport::resize(state, size, element_offset);
}

/// Setzt den Editor nach dem Laden eines Grundrisses zurück.
pub fn reset_after_load(state: &mut AppState, viewport_size: [f32; 2]) {
    use_cases::viewport::reset_after_load(state, viewport_size);
}
