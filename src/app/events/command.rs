use crate::core::{CornerId, WallId};
use crate::shared::EditorMode;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Pointer ===
    /// Taste gedrückt: Geste beginnt an dieser Position
    PressPointer { screen_pos: Vec2 },
    /// Pointer-Position aktualisieren (Bildschirm + Welt)
    MovePointer { screen_pos: Vec2 },
    /// Taste losgelassen
    ReleasePointer,
    /// Snap-Ziel aus der aktuellen Pointer-Position neu berechnen
    UpdateSnapTarget,
    /// Hit-Test unter dem Pointer und Hover-Events
    UpdateHover,

    // === Ansicht ===
    /// Ursprung um ein Pixel-Delta verschieben
    PanView { delta_px: Vec2 },
    /// Viewport-Größe und Position der Zeichenfläche setzen
    SetViewport { size: [f32; 2], element_offset: Vec2 },
    /// Zustand nach dem Laden eines Grundrisses zurücksetzen
    ResetAfterLoad { viewport_size: [f32; 2] },

    // === Bearbeitung ===
    /// Ecke zum Pointer ziehen
    DragCorner { corner: CornerId },
    /// Wand um ein Pixel-Delta verschieben
    DragWall { wall: WallId, delta_px: Vec2 },
    /// Ziehen abgeschlossen: Räume der aktiven Entität neu ableiten
    FinishDrag,
    /// Ecke am Snap-Ziel setzen und Wandzug fortführen
    PlaceCorner,
    /// Aktive Ecke oder Wand löschen
    DeleteActive,
    /// Klick ins Leere melden
    NotifyNothingClicked,
    /// Doppelklick auf die aktive Entität auswerten
    DoubleClickActive,

    // === Modus & Tastatur ===
    /// Modus wechseln
    SetMode { mode: EditorMode },
    /// Shift gedrückt: Achsen- und Grid-Snap an
    HoldShift,
    /// Shift losgelassen: Achsen- und Grid-Snap aus
    ReleaseShift,
}
