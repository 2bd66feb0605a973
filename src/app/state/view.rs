use crate::core::ViewTransform;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Transformation Bildschirm ↔ Welt
    pub transform: ViewTransform,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand für einen Maßstab.
    pub fn new(cm_per_pixel: f32) -> Self {
        Self {
            transform: ViewTransform::new(cm_per_pixel),
            viewport_size: [0.0, 0.0],
        }
    }
}
