//! Zentrale Konfiguration für den Floorplanner.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{PickTolerance, ViewTransform};
use serde::{Deserialize, Serialize};

// ── Maßstab ─────────────────────────────────────────────────────────

/// Standard-Maßstab in cm pro Bildschirm-Pixel (15 Pixel pro Fuß).
pub const CM_PER_PIXEL: f32 = ViewTransform::DEFAULT_CM_PER_PIXEL;

// ── Snapping ────────────────────────────────────────────────────────

/// Toleranz (cm) für Achsen- und Grid-Snap.
pub const SNAP_TOLERANCE: f32 = 25.0;
/// Toleranz (cm), unterhalb derer eine neue Ecke mit bestehender Geometrie verschmilzt.
pub const MERGE_TOLERANCE: f32 = 25.0;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Fangradius um Ecken in Screen-Pixeln.
pub const CORNER_PICK_RADIUS_PX: f32 = 10.0;
/// Zusätzlicher Fangrand um Wände in Screen-Pixeln.
pub const WALL_PICK_PADDING_PX: f32 = 3.0;

// ── Geometrie ───────────────────────────────────────────────────────

/// Wandstärke neuer Wände (cm).
pub const WALL_WIDTH: f32 = 10.0;
/// Untere Grenze für Eckhöhen (cm).
pub const ELEVATION_MIN_CM: f32 = 0.0;
/// Obere Grenze für Eckhöhen (cm).
pub const ELEVATION_MAX_CM: f32 = 2000.0;

/// Laufzeit-Optionen des Editors (persistiert als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Ansicht ─────────────────────────────────────────────────
    /// Maßstab in cm pro Bildschirm-Pixel
    pub cm_per_pixel: f32,

    // ── Snapping ────────────────────────────────────────────────
    /// Toleranz (cm) für Achsen- und Grid-Snap
    pub snap_tolerance: f32,
    /// Toleranz (cm) für das Verschmelzen neuer Ecken
    pub merge_tolerance: f32,
    /// Grid-Snap auch beim Loslassen beliebiger Tasten beenden (nicht nur Shift)
    pub clear_grid_snap_on_any_key_up: bool,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Fangradius um Ecken in Screen-Pixeln
    pub corner_pick_radius_px: f32,
    /// Zusätzlicher Fangrand um Wände in Screen-Pixeln
    pub wall_pick_padding_px: f32,

    // ── Geometrie ───────────────────────────────────────────────
    /// Wandstärke neuer Wände (cm)
    pub wall_width: f32,
    /// Untere Grenze für Eckhöhen (cm)
    pub elevation_min_cm: f32,
    /// Obere Grenze für Eckhöhen (cm)
    pub elevation_max_cm: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            cm_per_pixel: CM_PER_PIXEL,

            snap_tolerance: SNAP_TOLERANCE,
            merge_tolerance: MERGE_TOLERANCE,
            clear_grid_snap_on_any_key_up: false,

            corner_pick_radius_px: CORNER_PICK_RADIUS_PX,
            wall_pick_padding_px: WALL_PICK_PADDING_PX,

            wall_width: WALL_WIDTH,
            elevation_min_cm: ELEVATION_MIN_CM,
            elevation_max_cm: ELEVATION_MAX_CM,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::validated(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplanner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplanner.toml")
    }

    /// Rechnet die Pixel-Fangradien in Welt-Einheiten der aktuellen Ansicht um.
    pub fn pick_tolerance(&self, transform: &ViewTransform) -> PickTolerance {
        PickTolerance {
            corner_radius: transform.pixels_to_world(self.corner_pick_radius_px),
            wall_padding: transform.pixels_to_world(self.wall_pick_padding_px),
        }
    }

    /// Ersetzt unbrauchbare Werte aus der Optionen-Datei.
    ///
    /// Nicht-endliche oder negative Längen fallen auf den Standard zurück,
    /// vertauschte Höhengrenzen werden getauscht.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let lengths = [
            ("snap_tolerance", &mut self.snap_tolerance, defaults.snap_tolerance),
            ("merge_tolerance", &mut self.merge_tolerance, defaults.merge_tolerance),
            (
                "corner_pick_radius_px",
                &mut self.corner_pick_radius_px,
                defaults.corner_pick_radius_px,
            ),
            (
                "wall_pick_padding_px",
                &mut self.wall_pick_padding_px,
                defaults.wall_pick_padding_px,
            ),
            ("wall_width", &mut self.wall_width, defaults.wall_width),
            ("elevation_min_cm", &mut self.elevation_min_cm, defaults.elevation_min_cm),
            ("elevation_max_cm", &mut self.elevation_max_cm, defaults.elevation_max_cm),
        ];
        for (name, value, default) in lengths {
            if !value.is_finite() || value.is_sign_negative() {
                log::warn!("Ungültiger Wert {} = {}, verwende {}", name, value, default);
                *value = default;
            }
        }

        if self.elevation_min_cm > self.elevation_max_cm {
            log::warn!(
                "Höhengrenzen vertauscht ({} > {}), tausche",
                self.elevation_min_cm,
                self.elevation_max_cm
            );
            std::mem::swap(&mut self.elevation_min_cm, &mut self.elevation_max_cm);
        }
        self
    }

    /// Begrenzt eine Höhe auf den erlaubten Bereich.
    ///
    /// Panikfrei auch bei ungeprüften Grenzen: erst die Untergrenze, dann die Obergrenze.
    pub fn clamp_elevation(&self, elevation_cm: f32) -> f32 {
        elevation_cm.max(self.elevation_min_cm).min(self.elevation_max_cm)
    }
}
