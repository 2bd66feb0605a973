//! Use-Case-Funktionen für Hover-Erkennung unter dem Pointer.

use crate::app::{AppState, EditorEvent};
use crate::core::Selection;

/// Hit-Test an der aktuellen Pointer-Position.
pub fn update_hover(state: &mut AppState) {
    let tolerance = state.options.pick_tolerance(&state.view.transform);
    let selection = state.floorplan.pick(state.input.world, &tolerance);
    apply_selection(state, selection);
}

/// Setzt die Selektion und meldet Hover-Wechsel je Entitäts-Art.
///
/// Unveränderte Selektion erzeugt keine Events.
pub fn apply_selection(state: &mut AppState, selection: Selection) {
    let previous = state.selection;
    if previous == selection {
        return;
    }

    if previous.corner() != selection.corner() {
        state.emit(EditorEvent::CornerHover(selection.corner()));
    }
    if previous.wall() != selection.wall() {
        state.emit(EditorEvent::WallHover(selection.wall()));
    }
    if previous.room() != selection.room() {
        state.emit(EditorEvent::RoomHover(selection.room()));
    }

    log::debug!("Selektion: {:?} → {:?}", previous, selection);
    state.selection = selection;
    state.request_redraw();
}
