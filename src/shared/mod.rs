//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod editor_mode;
pub mod options;
mod render_scene;

pub use editor_mode::EditorMode;
pub use options::EditorOptions;
pub use options::{MERGE_TOLERANCE, SNAP_TOLERANCE};
pub use render_scene::{RenderCorner, RenderRoom, RenderScene, RenderWall};
