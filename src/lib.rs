//! Floorplanner Library.
//! Interaktiver 2D-Grundriss-Editor: Ecken, Wände, abgeleitete Räume und die
//! Modus-Zustandsmaschine für Pointer- und Tastatureingaben.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Centimeters, EditorEvent, EditorListener,
    Key, Meters, NoPrompt, Prompt, PromptRequest, UnitFormat,
};
pub use core::{
    AxisSnap, Corner, CornerId, Floorplan, PickTolerance, Room, RoomId, Selection, SpatialIndex,
    SpatialMatch, ViewTransform, Wall, WallId,
};
pub use shared::{EditorMode, EditorOptions, RenderScene};
