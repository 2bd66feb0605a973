//! Use-Case-Funktionen für Ziehen und Löschen von Ecken und Wänden.

use super::hover::apply_selection;
use crate::app::AppState;
use crate::core::{CornerId, Selection, Wall, WallId};
use glam::Vec2;

/// Zieht eine Ecke zur Pointer-Position.
///
/// Mit Grid-Snap bleibt jede Achse innerhalb der Snap-Toleranz auf dem aktuellen
/// Wert, sonst wird auf ganze Zentimeter gerundet. Mit Shift folgt ein Achsen-Snap.
pub fn drag_corner(state: &mut AppState, corner: CornerId) {
    let Some(current) = state.floorplan.corner_position(corner) else {
        log::debug!("Ecke {} existiert nicht mehr, Ziehen ignoriert", corner);
        return;
    };
    let pointer = state.input.world;
    let tolerance = state.options.snap_tolerance;

    let target = if state.input.grid_snap {
        let keep = |pointer: f32, current: f32| {
            if (pointer - current).abs() < tolerance {
                current
            } else {
                pointer
            }
        };
        Vec2::new(
            keep(pointer.x, current.x).round(),
            keep(pointer.y, current.y).round(),
        )
    } else {
        pointer
    };

    state.floorplan.move_corner(corner, target);
    if state.input.shift {
        state.floorplan.snap_corner_to_axis(corner, tolerance);
    }
    state.request_redraw();
}

/// Verschiebt eine Wand um das Pixel-Delta seit dem letzten Sample.
pub fn drag_wall(state: &mut AppState, wall: WallId, delta_px: Vec2) {
    let delta_world = delta_px * state.view.transform.cm_per_pixel();
    if !state.floorplan.relative_move_wall(wall, delta_world) {
        log::debug!("Wand {} existiert nicht mehr, Ziehen ignoriert", wall);
        return;
    }
    if state.input.grid_snap {
        state
            .floorplan
            .snap_wall_to_axis(wall, state.options.snap_tolerance);
    }
    state.input.last_sample = state.input.screen;
    state.request_redraw();
}

/// Schließt ein Ziehen ab: verschmilzt die gezogene Geometrie und leitet die Räume neu ab.
///
/// Landet eine Ecke (auch durch Achsen-Snap) auf einer anderen Ecke oder Wand,
/// wird sie wie beim Zeichnen verschmolzen. Die Selektion folgt der überlebenden Ecke.
pub fn finish_drag(state: &mut AppState) {
    match state.selection {
        Selection::Corner(corner) => match state.floorplan.merge_with_intersected(corner) {
            Some(survivor) if survivor != corner => {
                apply_selection(state, Selection::Corner(survivor));
            }
            Some(_) => {}
            None => state.floorplan.update_attached_rooms_of_corner(corner),
        },
        Selection::Wall(wall) => {
            let Some((start, end)) = state.floorplan.wall(wall).map(Wall::endpoints) else {
                return;
            };
            let merged_start = state.floorplan.merge_with_intersected(start);
            let merged_end = state.floorplan.merge_with_intersected(end);
            if merged_start.is_none() && merged_end.is_none() {
                state.floorplan.update_attached_rooms_of_wall(wall);
            } else if state.floorplan.wall(wall).is_none() {
                log::debug!("Wand {} beim Verschmelzen aufgelöst", wall);
                apply_selection(state, Selection::None);
            }
        }
        Selection::Room(_) | Selection::None => return,
    }
    state.request_redraw();
}

/// Löscht die aktive Ecke (inkl. Wände) oder Wand und leert die Selektion.
pub fn delete_active(state: &mut AppState) {
    let removed = match state.selection {
        Selection::Corner(corner) => {
            let removed = state.floorplan.remove_corner(corner);
            if removed {
                log::info!("Ecke {} gelöscht", corner);
            }
            removed
        }
        Selection::Wall(wall) => {
            let removed = state.floorplan.remove_wall(wall);
            if removed {
                log::info!("Wand {} gelöscht", wall);
            }
            removed
        }
        Selection::Room(_) | Selection::None => false,
    };

    if removed {
        apply_selection(state, Selection::None);
        state.request_redraw();
    }
}
