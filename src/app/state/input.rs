use glam::Vec2;

/// Pointer- und Tastaturzustand zwischen zwei Intents
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Letzte Pointer-Position in Client-Pixeln
    pub screen: Vec2,
    /// Letzte Pointer-Position in Welt-Koordinaten
    pub world: Vec2,
    /// Pointer-Taste gedrückt
    pub pressed: bool,
    /// Seit dem letzten Drücken bewegt
    pub moved: bool,
    /// Referenz-Position (Client-Pixel) für Pan- und Wand-Deltas
    pub last_sample: Vec2,
    /// Shift gehalten
    pub shift: bool,
    /// Grid-Snap aktiv (wird mit Shift gesetzt)
    pub grid_snap: bool,
}

impl InputState {
    /// Erstellt einen leeren Eingabezustand.
    pub fn new() -> Self {
        Self::default()
    }
}
