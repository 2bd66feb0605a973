//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Alle Bedingungen werden gegen den Zustand *vor* dem Intent ausgewertet.

use super::events::Key;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::EditorMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.editor.mode;

    match intent {
        AppIntent::PointerDown { screen_pos } => {
            let mut commands = vec![AppCommand::PressPointer { screen_pos }];
            let addresses_geometry =
                state.selection.corner().is_some() || state.selection.wall().is_some();
            if mode == EditorMode::Delete && addresses_geometry {
                commands.push(AppCommand::DeleteActive);
            }
            if state.selection.is_none() {
                commands.push(AppCommand::NotifyNothingClicked);
            }
            commands
        }
        AppIntent::PointerMoved { screen_pos } => {
            let pressed = state.input.pressed;
            let mut commands = vec![AppCommand::MovePointer { screen_pos }];

            if mode == EditorMode::Draw || (mode == EditorMode::Move && pressed) {
                commands.push(AppCommand::UpdateSnapTarget);
            }
            if mode != EditorMode::Draw && !pressed {
                commands.push(AppCommand::UpdateHover);
            }

            let active_corner = state.selection.corner();
            let active_wall = state.selection.wall();
            if pressed && active_corner.is_none() && active_wall.is_none() {
                commands.push(AppCommand::PanView {
                    delta_px: state.input.last_sample - screen_pos,
                });
            }
            if mode == EditorMode::Move && pressed {
                if let Some(corner) = active_corner {
                    commands.push(AppCommand::DragCorner { corner });
                } else if let Some(wall) = active_wall {
                    commands.push(AppCommand::DragWall {
                        wall,
                        delta_px: screen_pos - state.input.last_sample,
                    });
                }
            }
            commands
        }
        AppIntent::PointerUp => {
            if mode == EditorMode::Draw && !state.input.moved {
                vec![AppCommand::ReleasePointer, AppCommand::PlaceCorner]
            } else {
                vec![AppCommand::ReleasePointer, AppCommand::FinishDrag]
            }
        }
        AppIntent::PointerLeft => vec![AppCommand::ReleasePointer],
        AppIntent::DoubleClicked => vec![AppCommand::DoubleClickActive],
        AppIntent::KeyPressed { key } => match key {
            Key::Escape => vec![AppCommand::SetMode {
                mode: EditorMode::Move,
            }],
            Key::Shift => vec![AppCommand::HoldShift],
            Key::Other => Vec::new(),
        },
        AppIntent::KeyReleased { key } => {
            if key == Key::Shift || state.options.clear_grid_snap_on_any_key_up {
                vec![AppCommand::ReleaseShift]
            } else {
                Vec::new()
            }
        }
        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::FloorplanLoaded { viewport_size } => {
            vec![AppCommand::ResetAfterLoad { viewport_size }]
        }
        AppIntent::ViewportResized {
            size,
            element_offset,
        } => vec![AppCommand::SetViewport {
            size,
            element_offset,
        }],
    }
}
