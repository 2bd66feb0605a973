//! Handler für Pointer- und Tastatur-Zustand.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Beginnt eine Pointer-Geste.
pub fn press(state: &mut AppState, screen_pos: Vec2) {
    use_cases::input::press(state, screen_pos);
}

/// Aktualisiert die Pointer-Position.
pub fn move_to(state: &mut AppState, screen_pos: Vec2) {
    use_cases::input::move_to(state, screen_pos);
}

/// Beendet eine Pointer-Geste.
pub fn release(state: &mut AppState) {
    use_cases::input::release(state);
}

/// Berechnet das Snap-Ziel neu.
pub fn update_snap_target(state: &mut AppState) {
    use_cases::drawing::update_snap_target(state);
}

/// Hit-Test unter dem Pointer.
pub fn update_hover(state: &mut AppState) {
    use_cases::hover::update_hover(state);
}

/// Meldet einen Klick ins Leere.
pub fn notify_nothing_clicked(state: &mut AppState) {
    use_cases::input::notify_nothing_clicked(state);
}

/// Shift gedrückt.
pub fn hold_shift(state: &mut AppState) {
    use_cases::input::hold_shift(state);
}

/// Shift losgelassen.
pub fn release_shift(state: &mut AppState) {
    use_cases::input::release_shift(state);
}
