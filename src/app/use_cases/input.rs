//! Use-Case-Funktionen für Pointer- und Tastaturzustand.

use crate::app::{AppState, EditorEvent};
use glam::Vec2;

/// Beginnt eine Geste: merkt die Startposition für Pan- und Wand-Deltas.
pub fn press(state: &mut AppState, screen_pos: Vec2) {
    state.input.pressed = true;
    state.input.moved = false;
    state.input.last_sample = screen_pos;
}

/// Aktualisiert Bildschirm- und Welt-Position des Pointers.
pub fn move_to(state: &mut AppState, screen_pos: Vec2) {
    state.input.screen = screen_pos;
    state.input.world = state.view.transform.screen_to_world(screen_pos);
    state.input.moved = true;
}

/// Beendet eine Geste (Taste losgelassen oder Zeichenfläche verlassen).
pub fn release(state: &mut AppState) {
    state.input.pressed = false;
}

/// Meldet einen Klick, unter dem nichts adressiert war.
pub fn notify_nothing_clicked(state: &mut AppState) {
    state.emit(EditorEvent::NothingClicked);
}

/// Shift gedrückt: Achsen-Snap und Grid-Snap aktivieren.
pub fn hold_shift(state: &mut AppState) {
    state.input.shift = true;
    state.input.grid_snap = true;
}

/// Shift losgelassen: Achsen-Snap und Grid-Snap deaktivieren.
pub fn release_shift(state: &mut AppState) {
    state.input.shift = false;
    state.input.grid_snap = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;
    use approx::assert_relative_eq;

    #[test]
    fn move_to_converts_to_world() {
        let mut state = AppState::with_options(EditorOptions {
            cm_per_pixel: 2.0,
            ..EditorOptions::default()
        });

        move_to(&mut state, Vec2::new(30.0, 40.0));

        assert_relative_eq!(state.input.world.x, 60.0);
        assert_relative_eq!(state.input.world.y, 80.0);
        assert!(state.input.moved);
    }

    #[test]
    fn press_resets_moved_flag() {
        let mut state = AppState::new();
        move_to(&mut state, Vec2::new(1.0, 1.0));

        press(&mut state, Vec2::new(5.0, 6.0));

        assert!(state.input.pressed);
        assert!(!state.input.moved);
        assert_eq!(state.input.last_sample, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn shift_toggles_grid_snap() {
        let mut state = AppState::new();
        hold_shift(&mut state);
        assert!(state.input.shift && state.input.grid_snap);

        release_shift(&mut state);
        assert!(!state.input.shift && !state.input.grid_snap);
    }
}
