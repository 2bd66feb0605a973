//! Use-Case-Funktionen für Doppelklick-Bearbeitung (Eckhöhe, Raumname).

use crate::app::collaborators::{Prompt, PromptRequest, UnitFormat};
use crate::app::{AppState, EditorEvent};
use crate::core::{CornerId, RoomId, Selection};

/// Meldet den Doppelklick auf die aktive Entität und öffnet ggf. den Eingabedialog.
pub fn double_click_active(state: &mut AppState, prompt: &mut dyn Prompt, units: &dyn UnitFormat) {
    match state.selection {
        Selection::Corner(corner) => {
            state.emit(EditorEvent::CornerDoubleClicked(corner));
            edit_corner_elevation(state, corner, prompt, units);
        }
        Selection::Wall(wall) => state.emit(EditorEvent::WallDoubleClicked(wall)),
        Selection::Room(room) => {
            state.emit(EditorEvent::RoomDoubleClicked(room));
            edit_room_name(state, room, prompt);
        }
        Selection::None => {}
    }
}

/// Fragt eine neue Eckhöhe ab und übernimmt sie nach Prüfung.
pub fn edit_corner_elevation(
    state: &mut AppState,
    corner: CornerId,
    prompt: &mut dyn Prompt,
    units: &dyn UnitFormat,
) {
    let Some(current) = state.floorplan.corner(corner).map(|c| c.elevation) else {
        return;
    };
    let request = PromptRequest::CornerElevation {
        corner,
        current: units.format_cm(current),
        unit_label: units.unit_label().to_string(),
    };
    let Some(answer) = ask(prompt, &request) else {
        return;
    };

    match parse_elevation(state, &answer, units) {
        Some(elevation) => {
            state.floorplan.set_corner_elevation(corner, elevation);
            log::info!("Höhe von Ecke {} auf {} cm gesetzt", corner, elevation);
            state.request_redraw();
        }
        None => log::warn!("Ungültige Höhe '{}' für Ecke {} verworfen", answer, corner),
    }
}

/// Fragt einen neuen Raumnamen ab und übernimmt ihn (getrimmt).
pub fn edit_room_name(state: &mut AppState, room: RoomId, prompt: &mut dyn Prompt) {
    let Some(current) = state.floorplan.room(room).map(|r| r.name.clone()) else {
        return;
    };
    let request = PromptRequest::RoomName { room, current };
    let Some(answer) = ask(prompt, &request) else {
        return;
    };

    let name = answer.trim();
    state.floorplan.set_room_name(room, name);
    log::info!("Raum {} umbenannt in '{}'", room, name);
    state.request_redraw();
}

fn ask(prompt: &mut dyn Prompt, request: &PromptRequest) -> Option<String> {
    log::debug!(
        "Eingabe: {} (Vorgabe '{}')",
        request.message(),
        request.default_text()
    );
    let answer = prompt.request(request);
    if answer.is_none() {
        log::debug!("Eingabe abgebrochen");
    }
    answer
}

/// Parst eine Höhen-Eingabe. Nicht-numerische und nicht-endliche Werte werden
/// abgelehnt, gültige auf den erlaubten Bereich begrenzt.
fn parse_elevation(state: &AppState, text: &str, units: &dyn UnitFormat) -> Option<f32> {
    let value = units.parse_to_cm(text.trim())?;
    if !value.is_finite() {
        return None;
    }
    Some(state.options.clamp_elevation(value))
}
