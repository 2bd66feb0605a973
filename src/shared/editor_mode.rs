//! Editor-Modi der Interaktions-Zustandsmaschine (shared zwischen App und Renderer).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aktiver Modus des Grundriss-Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Ecken und Wände ziehen, Ansicht verschieben
    #[default]
    Move,
    /// Wandzüge per Klick zeichnen
    Draw,
    /// Ecken oder Wände per Klick löschen
    Delete,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditorMode::Move => "Verschieben",
            EditorMode::Draw => "Zeichnen",
            EditorMode::Delete => "Löschen",
        };
        f.write_str(label)
    }
}
