//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use super::EditorMode;
use crate::core::{CornerId, RoomId, Selection, ViewTransform, WallId};
use glam::Vec2;

/// Eine Ecke in Welt-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCorner {
    pub id: CornerId,
    pub position: Vec2,
    pub elevation: f32,
    /// Unter dem Pointer oder aktiv gezogen
    pub highlighted: bool,
}

/// Ein Wandsegment in Welt-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWall {
    pub id: WallId,
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub highlighted: bool,
}

/// Ein Raum als Polygon in Welt-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRoom {
    pub id: RoomId,
    pub polygon: Vec<Vec2>,
    pub name: String,
    /// Fläche in cm²
    pub area: f32,
    pub highlighted: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    pub corners: Vec<RenderCorner>,
    pub walls: Vec<RenderWall>,
    pub rooms: Vec<RenderRoom>,
    /// Aktiver Editor-Modus
    pub mode: EditorMode,
    /// Aktuell adressierte Entität
    pub selection: Selection,
    /// Snap-Ziel des Pointers (nur im Zeichenmodus)
    pub snap_target: Option<Vec2>,
    /// Vorschau-Segment vom Ende des Wandzugs zum Snap-Ziel
    pub draw_preview: Option<(Vec2, Vec2)>,
    /// Transformation für diesen Frame
    pub transform: ViewTransform,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Geometrie vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}
