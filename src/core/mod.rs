//! Core-Domänentypen: Ecken, Wände, Räume, Grundriss, Transformation, Spatial-Index.

pub mod corner;
/// Grundriss-Container und alle strukturellen Operationen
///
/// Der Floorplan besitzt alle Entitäten:
/// - Corner: Eckpunkt mit Position und Höhe
/// - Wall: Verbindung zwischen zwei Ecken
/// - Room: aus geschlossenen Wand-Zyklen abgeleitete Fläche
pub mod floorplan;
pub mod geometry;
pub mod room;
pub mod spatial;
pub mod transform;
pub mod wall;

pub use corner::{Corner, CornerId};
pub use floorplan::{AxisSnap, Floorplan};
pub use hit_test::{PickTolerance, Selection};
pub use room::{Room, RoomId};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use transform::ViewTransform;
pub use wall::{Wall, WallId};
