//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::Selection;
use crate::shared::{EditorMode, RenderCorner, RenderRoom, RenderScene, RenderWall};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let floorplan = &state.floorplan;
    let selection = state.selection;

    let corners = floorplan
        .corners()
        .map(|corner| RenderCorner {
            id: corner.id,
            position: corner.position,
            elevation: corner.elevation,
            highlighted: selection == Selection::Corner(corner.id),
        })
        .collect();

    let walls = floorplan
        .walls()
        .filter_map(|wall| {
            let (start, end) = floorplan.wall_segment(wall.id)?;
            Some(RenderWall {
                id: wall.id,
                start,
                end,
                width: wall.width,
                highlighted: selection == Selection::Wall(wall.id),
            })
        })
        .collect();

    let rooms = floorplan
        .rooms()
        .filter_map(|room| {
            Some(RenderRoom {
                id: room.id,
                polygon: floorplan.room_polygon(room.id)?,
                name: room.name.clone(),
                area: floorplan.room_area(room.id)?,
                highlighted: selection == Selection::Room(room.id),
            })
        })
        .collect();

    let drawing = state.editor.mode == EditorMode::Draw;
    let snap_target = drawing.then_some(state.editor.snap_target);
    let draw_preview = if drawing {
        state
            .editor
            .last_corner
            .and_then(|id| floorplan.corner_position(id))
            .map(|tail| (tail, state.editor.snap_target))
    } else {
        None
    };

    RenderScene {
        corners,
        walls,
        rooms,
        mode: state.editor.mode,
        selection,
        snap_target,
        draw_preview,
        transform: state.view.transform,
        viewport_size: state.view.viewport_size,
    }
}
