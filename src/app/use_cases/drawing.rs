//! Use-Case-Funktionen für den Zeichenmodus und Modus-Wechsel.

use crate::app::{AppState, EditorEvent};
use crate::shared::EditorMode;
use glam::Vec2;

/// Berechnet das Snap-Ziel aus der Pointer-Position.
///
/// Im Zeichenmodus mit laufendem Wandzug rastet jede Achse einzeln auf die
/// Koordinate der letzten Ecke ein, wenn sie näher als die Snap-Toleranz liegt.
pub fn update_snap_target(state: &mut AppState) {
    let pointer = state.input.world;
    let anchor = if state.editor.mode == EditorMode::Draw {
        state
            .editor
            .last_corner
            .and_then(|id| state.floorplan.corner_position(id))
    } else {
        None
    };

    state.editor.snap_target = match anchor {
        Some(anchor) => {
            let tolerance = state.options.snap_tolerance;
            let snap = |pointer: f32, anchor: f32| {
                if (pointer - anchor).abs() < tolerance {
                    anchor
                } else {
                    pointer
                }
            };
            Vec2::new(snap(pointer.x, anchor.x), snap(pointer.y, anchor.y))
        }
        None => pointer,
    };
    state.request_redraw();
}

/// Setzt eine Ecke am Snap-Ziel und führt den Wandzug fort.
///
/// Mit Vorgänger wird eine Wand angelegt und an Kreuzungen geteilt. Verschmilzt
/// die neue Ecke danach mit bestehender Geometrie, endet der Wandzug und der
/// Editor wechselt in den Verschieben-Modus.
pub fn place_corner(state: &mut AppState) {
    let target = state.editor.snap_target;
    let predecessor = state
        .editor
        .last_corner
        .filter(|id| state.floorplan.corner(*id).is_some());

    let floorplan = &mut state.floorplan;
    let corner = floorplan.new_corner(target);
    if let Some(previous) = predecessor {
        floorplan.new_wall(previous, corner);
        floorplan.new_walls_for_intersections(previous, corner);
    }
    let merged = floorplan.merge_with_intersected(corner);
    log::info!(
        "Ecke {} bei ({:.1}, {:.1}) gesetzt",
        merged.unwrap_or(corner),
        target.x,
        target.y
    );

    if merged.is_some() && predecessor.is_some() {
        set_mode(state, EditorMode::Move);
    } else {
        state.editor.last_corner = Some(merged.unwrap_or(corner));
    }
    state.request_redraw();
}

/// Wechselt den Modus, beendet einen laufenden Wandzug und meldet `ModeReset`.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    state.editor.mode = mode;
    state.editor.last_corner = None;
    update_snap_target(state);
    state.emit(EditorEvent::ModeReset { mode });
    log::info!("Editor-Modus: {}", mode);
}
