use crate::core::CornerId;
use crate::shared::EditorMode;
use glam::Vec2;

/// Zustand der Modus-Zustandsmaschine
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Letzte Ecke des aktuellen Wandzugs (nur im Zeichenmodus relevant)
    pub last_corner: Option<CornerId>,
    /// Gesnappte Pointer-Position in Welt-Koordinaten
    pub snap_target: Vec2,
}

impl EditorState {
    /// Erstellt den Standardzustand (Verschieben-Modus, kein Wandzug).
    pub fn new() -> Self {
        Self::default()
    }
}
