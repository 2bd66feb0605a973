//! Application Controller für zentrale Event-Verarbeitung.

use super::collaborators::{Centimeters, NoPrompt, Prompt, UnitFormat};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState, EditorEvent, EditorListener};
use crate::core::Floorplan;
use crate::shared::RenderScene;

/// Orchestriert Eingabe-Intents und Use-Cases auf den AppState
/// und liefert die dabei entstandenen Events an alle Listener aus.
pub struct AppController {
    listeners: Vec<Box<dyn EditorListener>>,
    prompt: Box<dyn Prompt>,
    units: Box<dyn UnitFormat>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller ohne Listener, ohne Dialog und mit Zentimetern.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            prompt: Box::new(NoPrompt),
            units: Box::new(Centimeters),
        }
    }

    /// Setzt den modalen Eingabedialog.
    pub fn with_prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    /// Setzt die Einheiten-Formatierung.
    pub fn with_units(mut self, units: impl UnitFormat + 'static) -> Self {
        self.units = Box::new(units);
        self
    }

    /// Registriert einen Listener für `EditorEvent`s.
    pub fn subscribe(&mut self, listener: impl EditorListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach allen Commands werden die gesammelten Events ausgeliefert, gefolgt
    /// von höchstens einem `RedrawRequested`.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        self.dispatch_events(state);
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer & Tastatur ===
            AppCommand::PressPointer { screen_pos } => handlers::input::press(state, screen_pos),
            AppCommand::MovePointer { screen_pos } => handlers::input::move_to(state, screen_pos),
            AppCommand::ReleasePointer => handlers::input::release(state),
            AppCommand::UpdateSnapTarget => handlers::input::update_snap_target(state),
            AppCommand::UpdateHover => handlers::input::update_hover(state),
            AppCommand::NotifyNothingClicked => handlers::input::notify_nothing_clicked(state),
            AppCommand::HoldShift => handlers::input::hold_shift(state),
            AppCommand::ReleaseShift => handlers::input::release_shift(state),

            // === Ansicht ===
            AppCommand::PanView { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::SetViewport {
                size,
                element_offset,
            } => handlers::view::set_viewport(state, size, element_offset),
            AppCommand::ResetAfterLoad { viewport_size } => {
                handlers::view::reset_after_load(state, viewport_size)
            }

            // === Bearbeitung ===
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::PlaceCorner => handlers::editing::place_corner(state),
            AppCommand::DragCorner { corner } => handlers::editing::drag_corner(state, corner),
            AppCommand::DragWall { wall, delta_px } => {
                handlers::editing::drag_wall(state, wall, delta_px)
            }
            AppCommand::FinishDrag => handlers::editing::finish_drag(state),
            AppCommand::DeleteActive => handlers::editing::delete_active(state),

            // === Dialoge ===
            AppCommand::DoubleClickActive => handlers::dialog::double_click_active(
                state,
                self.prompt.as_mut(),
                self.units.as_ref(),
            ),
        }

        Ok(())
    }

    /// Ersetzt den Grundriss und setzt Ansicht und Modus zurück.
    pub fn load_floorplan(
        &mut self,
        state: &mut AppState,
        floorplan: Floorplan,
        viewport_size: [f32; 2],
    ) -> anyhow::Result<()> {
        state.replace_floorplan(floorplan);
        self.handle_intent(state, AppIntent::FloorplanLoaded { viewport_size })
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    fn dispatch_events(&mut self, state: &mut AppState) {
        let mut events = std::mem::take(&mut state.pending_events);
        if std::mem::take(&mut state.redraw_requested) {
            events.push(EditorEvent::RedrawRequested);
        }

        for event in &events {
            log::debug!("Event: {:?}", event);
            for listener in &mut self.listeners {
                listener.on_event(event);
            }
        }
    }
}
