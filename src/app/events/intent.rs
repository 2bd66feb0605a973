use crate::shared::EditorMode;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tasten, auf die der Editor reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Shift,
    /// Jede andere Taste
    Other,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppIntent {
    /// Pointer-Taste gedrückt (Client-Pixel)
    PointerDown { screen_pos: Vec2 },
    /// Pointer bewegt (Client-Pixel)
    PointerMoved { screen_pos: Vec2 },
    /// Pointer-Taste losgelassen
    PointerUp,
    /// Pointer hat die Zeichenfläche verlassen
    PointerLeft,
    /// Doppelklick auf die aktuell adressierte Entität
    DoubleClicked,
    /// Taste gedrückt
    KeyPressed { key: Key },
    /// Taste losgelassen
    KeyReleased { key: Key },
    /// Modus-Wechsel aus der UI (Toolbar)
    SetModeRequested { mode: EditorMode },
    /// Ein Grundriss wurde geladen oder zurückgesetzt
    FloorplanLoaded { viewport_size: [f32; 2] },
    /// Viewport-Größe oder Position der Zeichenfläche hat sich geändert
    ViewportResized {
        size: [f32; 2],
        #[serde(default)]
        element_offset: Vec2,
    },
}
