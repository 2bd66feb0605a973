//! Repräsentiert einen Raum als geschlossenen Zyklus von Ecken.

use super::CornerId;
use std::fmt;

/// Stabile ID eines Raums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Ein aus dem Wand-Graphen abgeleiteter Raum.
///
/// Räume werden nie direkt angelegt, sondern bei jeder Topologie-Änderung
/// aus den beschränkten Flächen des Wand-Graphen neu berechnet.
/// Nur der Name ist frei setzbar.
#[derive(Debug, Clone)]
pub struct Room {
    /// Eindeutige ID (bleibt erhalten, solange sich die Eckmenge nicht ändert)
    pub id: RoomId,
    /// Geordneter Zyklus der Begrenzungs-Ecken (ohne Wiederholung der ersten Ecke)
    pub corners: Vec<CornerId>,
    /// Vom Nutzer vergebener Name (Standard: leer)
    pub name: String,
}

impl Room {
    /// Erstellt einen neuen Raum ohne Namen
    pub fn new(id: RoomId, corners: Vec<CornerId>) -> Self {
        Self {
            id,
            corners,
            name: String::new(),
        }
    }

    /// Reihenfolge-unabhängiger Schlüssel der Eckmenge.
    ///
    /// Dient dazu, ID und Name über eine Neuberechnung hinweg zu erhalten.
    pub fn key(&self) -> Vec<CornerId> {
        corner_set_key(&self.corners)
    }

    /// Prüft ob die Ecke Teil der Raumgrenze ist
    pub fn contains_corner(&self, corner: CornerId) -> bool {
        self.corners.contains(&corner)
    }

    /// Iterator über die Begrenzungskanten als Eckpaare (inkl. Schlusskante).
    pub fn edges(&self) -> impl Iterator<Item = (CornerId, CornerId)> + '_ {
        let n = self.corners.len();
        (0..n).map(move |i| (self.corners[i], self.corners[(i + 1) % n]))
    }
}

/// Sortierte Kopie der Eckmenge.
pub(crate) fn corner_set_key(corners: &[CornerId]) -> Vec<CornerId> {
    let mut key = corners.to_vec();
    key.sort_unstable();
    key
}
