//! Repräsentiert eine Wand zwischen zwei Ecken.

use super::CornerId;
use std::fmt;

/// Stabile ID einer Wand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub u64);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Eine Wand zwischen zwei verschiedenen Ecken.
///
/// Die Geometrie wird immer aus den aktuellen Eckpositionen abgeleitet,
/// die Wand selbst hält keine Positionskopie.
#[derive(Debug, Clone)]
pub struct Wall {
    /// Eindeutige ID
    pub id: WallId,
    /// Start-Ecke
    pub start: CornerId,
    /// End-Ecke
    pub end: CornerId,
    /// Wandstärke in cm
    pub width: f32,
}

impl Wall {
    /// Standard-Wandstärke in cm.
    pub const DEFAULT_WIDTH: f32 = 10.0;

    /// Erstellt eine neue Wand
    pub fn new(id: WallId, start: CornerId, end: CornerId, width: f32) -> Self {
        Self {
            id,
            start,
            end,
            width,
        }
    }

    /// Prüft ob die Wand an der Ecke endet oder beginnt
    pub fn connects(&self, corner: CornerId) -> bool {
        self.start == corner || self.end == corner
    }

    /// Prüft ob die Wand genau diese beiden Ecken verbindet (richtungsunabhängig)
    pub fn joins(&self, a: CornerId, b: CornerId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Liefert die gegenüberliegende Ecke, falls `corner` ein Endpunkt ist
    pub fn other_end(&self, corner: CornerId) -> Option<CornerId> {
        if self.start == corner {
            Some(self.end)
        } else if self.end == corner {
            Some(self.start)
        } else {
            None
        }
    }

    /// Endpunkte als Tupel (start, end)
    pub fn endpoints(&self) -> (CornerId, CornerId) {
        (self.start, self.end)
    }
}
