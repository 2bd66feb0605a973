//! Repräsentiert eine Ecke (Eckpunkt) im Grundriss-Graphen.

use super::WallId;
use glam::Vec2;
use indexmap::IndexSet;
use std::fmt;

/// Stabile ID einer Ecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CornerId(pub u64);

impl fmt::Display for CornerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Ein Eckpunkt mit Position, Höhe und den angrenzenden Wänden
#[derive(Debug, Clone)]
pub struct Corner {
    /// Eindeutige ID
    pub id: CornerId,
    /// Position in Welt-Koordinaten (cm)
    pub position: Vec2,
    /// Höhe über Grund (cm)
    pub elevation: f32,
    /// Wände mit einem Endpunkt an dieser Ecke (wird ausschließlich vom Floorplan gepflegt)
    pub(crate) walls: IndexSet<WallId>,
}

impl Corner {
    /// Standard-Höhe neuer Ecken in cm.
    pub const DEFAULT_ELEVATION: f32 = 250.0;

    /// Erstellt eine neue Ecke ohne angrenzende Wände
    pub fn new(id: CornerId, position: Vec2) -> Self {
        Self {
            id,
            position,
            elevation: Self::DEFAULT_ELEVATION,
            walls: IndexSet::new(),
        }
    }

    /// X-Koordinate in Welt-Einheiten
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Y-Koordinate in Welt-Einheiten
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Iterator über alle angrenzenden Wände.
    pub fn walls(&self) -> impl Iterator<Item = WallId> + '_ {
        self.walls.iter().copied()
    }

    /// Anzahl der angrenzenden Wände
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Eine Ecke ohne Wände ist verwaist und darf entfernt werden.
    pub fn is_orphaned(&self) -> bool {
        self.walls.is_empty()
    }
}
