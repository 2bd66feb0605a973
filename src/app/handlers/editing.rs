//! Handler für Zeichnen, Ziehen, Löschen und Modus-Wechsel.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CornerId, WallId};
use crate::shared::EditorMode;
use glam::Vec2;

/// Wechselt den Editor-Modus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::drawing::set_mode(state, mode);
}

/// Setzt eine Ecke im Zeichenmodus.
pub fn place_corner(state: &mut AppState) {
    use_cases::drawing::place_corner(state);
}

/// Zieht eine Ecke zum Pointer.
pub fn drag_corner(state: &mut AppState, corner: CornerId) {
    use_cases::editing::drag_corner(state, corner);
}

/// Verschiebt eine Wand.
pub fn drag_wall(state: &mut AppState, wall: WallId, delta_px: Vec2) {
    use_cases::editing::drag_wall(state, wall, delta_px);
}

/// Schließt ein Ziehen ab.
pub fn finish_drag(state: &mut AppState) {
    use_cases::editing::finish_drag(state);
}

/// Löscht die aktive Ecke oder Wand.
pub fn delete_active(state: &mut AppState) {
    use_cases::editing::delete_active(state);
}
