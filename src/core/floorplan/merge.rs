//! Verschmelzen neuer Ecken mit bestehender Geometrie.

use super::Floorplan;
use crate::core::{geometry, CornerId, Wall, WallId};

impl Floorplan {
    /// Verschmilzt eine Ecke mit naheliegender Geometrie.
    ///
    /// Liegt eine andere Ecke innerhalb der Toleranz, überlebt diese und übernimmt
    /// alle Wände der übergebenen Ecke. Sonst wird die Ecke auf eine nahe, nicht
    /// angeschlossene Wand projiziert und diese dort geteilt.
    ///
    /// Gibt die überlebende Ecke zurück, wenn verschmolzen wurde.
    pub fn merge_with_intersected(&mut self, id: CornerId) -> Option<CornerId> {
        let position = self.corner_position(id)?;
        let tolerance = self.merge_tolerance;

        let target = self
            .spatial_index
            .merge_partner(id, position, tolerance)
            .map(|m| m.corner_id);

        if let Some(survivor) = target {
            self.combine_corners(survivor, id);
            self.rebuild_spatial_index();
            self.update_rooms();
            log::info!("Ecke {} mit {} verschmolzen", id, survivor);
            return Some(survivor);
        }

        let wall_id = self.nearest_unattached_wall(id, tolerance)?;
        let (start, end) = self.wall_segment(wall_id)?;
        let projected = geometry::closest_point_on_segment(position, start, end);
        if let Some(corner) = self.corners.get_mut(&id) {
            corner.position = projected;
        }
        self.split_wall(wall_id, id);
        self.rebuild_spatial_index();
        self.update_rooms();
        log::info!("Ecke {} auf Wand {} eingefügt", id, wall_id);
        Some(id)
    }

    /// Nächste Wand innerhalb der Toleranz, an der die Ecke nicht hängt.
    fn nearest_unattached_wall(&self, id: CornerId, tolerance: f32) -> Option<WallId> {
        let position = self.corner_position(id)?;
        self.walls
            .values()
            .filter(|wall| !wall.connects(id))
            .filter_map(|wall| {
                let (start, end) = self.wall_segment(wall.id)?;
                let distance = geometry::distance_to_segment(position, start, end);
                (distance < tolerance).then_some((wall.id, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(wall_id, _)| wall_id)
    }

    /// Hängt alle Wände von `absorbed` an `survivor` um und löscht `absorbed`.
    ///
    /// Dabei degenerierte oder doppelte Wände werden verworfen.
    pub(super) fn combine_corners(&mut self, survivor: CornerId, absorbed: CornerId) {
        if survivor == absorbed {
            return;
        }
        let Some(corner) = self.corners.get(&absorbed) else {
            return;
        };
        let walls: Vec<WallId> = corner.walls.iter().copied().collect();

        for wall_id in walls {
            let Some(mut wall) = self.detach_wall(wall_id) else {
                continue;
            };
            if wall.start == absorbed {
                wall.start = survivor;
            }
            if wall.end == absorbed {
                wall.end = survivor;
            }
            self.reattach_wall(wall);
        }

        self.corners.shift_remove(&absorbed);
    }

    /// Teilt eine Wand an einer Ecke: `S–E` wird zu `S–C` (alte ID) und `C–E`.
    ///
    /// Gibt die ID der zweiten Hälfte zurück.
    pub(super) fn split_wall(&mut self, wall_id: WallId, corner: CornerId) -> Option<WallId> {
        let wall = self.detach_wall(wall_id)?;
        let (start, end, width) = (wall.start, wall.end, wall.width);

        self.reattach_wall(Wall::new(wall_id, start, corner, width));
        self.connect(corner, end, width)
    }

    /// Verbindet zwei Ecken, sofern sie verschieden und noch nicht verbunden sind.
    pub(super) fn connect(&mut self, a: CornerId, b: CornerId, width: f32) -> Option<WallId> {
        if a == b {
            return None;
        }
        if let Some(existing) = self.wall_between(a, b) {
            return Some(existing);
        }
        Some(self.attach_new_wall(a, b, width))
    }
}
