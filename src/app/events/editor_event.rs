use crate::core::{CornerId, RoomId, WallId};
use crate::shared::EditorMode;

/// Semantische Events für Renderer und Eigenschafts-Panels.
///
/// Hover-Events tragen `None`, wenn der Pointer eine Entität dieser Art verlässt.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    CornerHover(Option<CornerId>),
    WallHover(Option<WallId>),
    RoomHover(Option<RoomId>),
    CornerDoubleClicked(CornerId),
    WallDoubleClicked(WallId),
    RoomDoubleClicked(RoomId),
    /// Pointer-Taste gedrückt, ohne dass etwas adressiert war
    NothingClicked,
    /// Modus wurde (neu) gesetzt
    ModeReset { mode: EditorMode },
    /// Darstellung hat sich geändert (höchstens einmal pro Intent)
    RedrawRequested,
}

/// Empfänger für `EditorEvent`s.
pub trait EditorListener {
    fn on_event(&mut self, event: &EditorEvent);
}

impl<F> EditorListener for F
where
    F: FnMut(&EditorEvent),
{
    fn on_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
