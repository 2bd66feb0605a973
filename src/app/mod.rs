//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand des Editors (Grundriss, Ansicht, Modus, Eingabe).
pub mod state;
pub mod use_cases;

pub use collaborators::{Centimeters, Meters, NoPrompt, Prompt, PromptRequest, UnitFormat};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorEvent, EditorListener, Key};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorState, InputState, ViewState};
