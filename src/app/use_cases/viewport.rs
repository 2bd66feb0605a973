//! Use-Case-Funktionen für Ansicht und Viewport-Zustand.

use super::drawing::set_mode;
use crate::app::AppState;
use crate::core::Selection;
use crate::shared::EditorMode;
use glam::Vec2;

/// Verschiebt den Ursprung um ein Pixel-Delta und merkt das aktuelle Sample.
pub fn pan(state: &mut AppState, delta_px: Vec2) {
    state.view.transform.pan(delta_px);
    state.input.last_sample = state.input.screen;
    state.request_redraw();
}

/// Aktualisiert Viewport-Größe und Position der Zeichenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2], element_offset: Vec2) {
    state.view.viewport_size = size;
    state.view.transform.element_offset = element_offset;
    state.request_redraw();
}

/// Setzt Selektion, Wandzug und Modus zurück und zentriert die Ansicht auf den Grundriss.
pub fn reset_after_load(state: &mut AppState, viewport_size: [f32; 2]) {
    state.selection = Selection::None;
    state.input.pressed = false;
    state.view.viewport_size = viewport_size;
    set_mode(state, EditorMode::Move);

    let center = state.floorplan.center().unwrap_or(Vec2::ZERO);
    state
        .view
        .transform
        .reset_origin(center, Vec2::from(viewport_size));
    log::info!(
        "Grundriss geladen: {} Ecken, {} Wände, {} Räume",
        state.floorplan.corner_count(),
        state.floorplan.wall_count(),
        state.floorplan.room_count()
    );
    state.request_redraw();
}
