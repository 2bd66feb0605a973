//! Koordinaten-Transformation zwischen Bildschirm-Pixeln und Welt-Einheiten (cm).

use glam::Vec2;

/// Pannbare Ansicht mit festem Maßstab.
///
/// Der Ursprung wird in Bildschirm-Pixeln geführt: Panning addiert das rohe
/// Pixel-Delta, erst die Umrechnung in Welt-Koordinaten multipliziert mit
/// `cm_per_pixel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pan-Ursprung in Bildschirm-Pixeln
    pub origin: Vec2,
    /// Position der Zeichenfläche im Client-Koordinatensystem
    pub element_offset: Vec2,
    cm_per_pixel: f32,
}

impl ViewTransform {
    /// Standard-Maßstab: 15 Pixel pro Fuß (30.48 cm).
    pub const DEFAULT_CM_PER_PIXEL: f32 = 30.48 / 15.0;

    /// Erstellt eine Transformation mit Ursprung (0, 0).
    ///
    /// Nicht-positive oder nicht-endliche Maßstäbe fallen auf den Standard zurück.
    pub fn new(cm_per_pixel: f32) -> Self {
        let cm_per_pixel = if cm_per_pixel.is_finite() && cm_per_pixel > 0.0 {
            cm_per_pixel
        } else {
            log::warn!(
                "Ungültiger Maßstab {} cm/px, verwende {}",
                cm_per_pixel,
                Self::DEFAULT_CM_PER_PIXEL
            );
            Self::DEFAULT_CM_PER_PIXEL
        };

        Self {
            origin: Vec2::ZERO,
            element_offset: Vec2::ZERO,
            cm_per_pixel,
        }
    }

    /// Welt-Einheiten pro Bildschirm-Pixel
    pub fn cm_per_pixel(&self) -> f32 {
        self.cm_per_pixel
    }

    /// Bildschirm-Pixel pro Welt-Einheit
    pub fn pixels_per_cm(&self) -> f32 {
        1.0 / self.cm_per_pixel
    }

    /// Konvertiert Client-Koordinaten (Pointer) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.element_offset) * self.cm_per_pixel + self.origin * self.cm_per_pixel
    }

    /// Exakte Umkehrung von [`Self::screen_to_world`].
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.world_to_canvas(world) + self.element_offset
    }

    /// Welt → lokale Zeichenflächen-Koordinaten (ohne Element-Offset), für den Renderer.
    pub fn world_to_canvas(&self, world: Vec2) -> Vec2 {
        world * self.pixels_per_cm() - self.origin
    }

    /// Rechnet eine Pixel-Länge in Welt-Einheiten um.
    pub fn pixels_to_world(&self, pixels: f32) -> f32 {
        pixels * self.cm_per_pixel
    }

    /// Verschiebt den Ursprung um ein rohes Pixel-Delta.
    pub fn pan(&mut self, delta_px: Vec2) {
        self.origin += delta_px;
    }

    /// Zentriert die Ansicht auf einen Welt-Punkt.
    pub fn reset_origin(&mut self, center_world: Vec2, viewport_size: Vec2) {
        self.origin = center_world * self.pixels_per_cm() - viewport_size * 0.5;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CM_PER_PIXEL)
    }
}
