//! Der zentrale Grundriss-Container mit Ecken, Wänden, Räumen und Spatial-Index.
//!
//! Der `Floorplan` ist die einzige Stelle, die Entitäten anlegt, entfernt oder
//! umverdrahtet. Ecken, Wände und Räume referenzieren sich gegenseitig nur über IDs.

mod intersections;
mod merge;
mod rooms;


use super::geometry;
use super::{Corner, CornerId, Room, RoomId, SpatialIndex, Wall, WallId};
use glam::Vec2;
use indexmap::IndexMap;

/// Ergebnis eines Achsen-Snaps: welche Koordinaten wurden angeglichen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSnap {
    /// X-Koordinate wurde auf eine Nachbar-Ecke gesetzt (vertikale Wand)
    pub x: bool,
    /// Y-Koordinate wurde auf eine Nachbar-Ecke gesetzt (horizontale Wand)
    pub y: bool,
}

impl AxisSnap {
    /// Prüft ob überhaupt gesnappt wurde
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    /// Kombiniert zwei Snap-Ergebnisse
    pub fn merge(self, other: AxisSnap) -> AxisSnap {
        AxisSnap {
            x: self.x || other.x,
            y: self.y || other.y,
        }
    }
}

/// Vollständiger Grundriss
#[derive(Debug, Clone)]
pub struct Floorplan {
    corners: IndexMap<CornerId, Corner>,
    walls: IndexMap<WallId, Wall>,
    rooms: IndexMap<RoomId, Room>,
    next_id: u64,
    /// Abstand (cm), unterhalb dessen eine neue Ecke mit bestehender Geometrie verschmilzt
    pub merge_tolerance: f32,
    /// Wandstärke (cm) für neu angelegte Wände
    pub default_wall_width: f32,
    spatial_index: SpatialIndex,
}

impl Floorplan {
    /// Standard-Verschmelzungstoleranz in cm.
    pub const DEFAULT_MERGE_TOLERANCE: f32 = 25.0;

    /// Erstellt einen leeren Grundriss
    pub fn new() -> Self {
        Self {
            corners: IndexMap::new(),
            walls: IndexMap::new(),
            rooms: IndexMap::new(),
            next_id: 1,
            merge_tolerance: Self::DEFAULT_MERGE_TOLERANCE,
            default_wall_width: Wall::DEFAULT_WIDTH,
            spatial_index: SpatialIndex::empty(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── Fabrik-Operationen ──────────────────────────────────────────

    /// Legt eine neue Ecke an der Weltposition an. Verschmilzt nicht.
    pub fn new_corner(&mut self, position: Vec2) -> CornerId {
        let id = CornerId(self.allocate_id());
        self.corners.insert(id, Corner::new(id, position));
        self.rebuild_spatial_index();
        id
    }

    /// Legt eine Wand zwischen zwei bestehenden Ecken an.
    ///
    /// `None` wenn `a == b` oder eine Ecke fehlt. Existiert bereits eine Wand
    /// zwischen beiden Ecken, wird diese zurückgegeben statt ein Duplikat anzulegen.
    pub fn new_wall(&mut self, a: CornerId, b: CornerId) -> Option<WallId> {
        if a == b {
            log::debug!("Wand von {} zu sich selbst verworfen", a);
            return None;
        }
        if !self.corners.contains_key(&a) || !self.corners.contains_key(&b) {
            log::warn!("Wand {}–{} verworfen: Ecke existiert nicht", a, b);
            return None;
        }
        if let Some(existing) = self.wall_between(a, b) {
            return Some(existing);
        }

        let width = self.default_wall_width;
        let id = self.attach_new_wall(a, b, width);
        self.update_rooms();
        Some(id)
    }

    /// Legt eine Wand ohne Prüfung und ohne Raum-Neuberechnung an.
    fn attach_new_wall(&mut self, start: CornerId, end: CornerId, width: f32) -> WallId {
        let id = WallId(self.allocate_id());
        self.attach_wall(Wall::new(id, start, end, width));
        id
    }

    /// Registriert eine Wand inklusive Rückverweis an beiden Ecken.
    fn attach_wall(&mut self, wall: Wall) {
        for corner_id in [wall.start, wall.end] {
            if let Some(corner) = self.corners.get_mut(&corner_id) {
                corner.walls.insert(wall.id);
            }
        }
        self.walls.insert(wall.id, wall);
    }

    /// Registriert eine (umverdrahtete) Wand erneut.
    ///
    /// Degenerierte Wände (start == end) und Duplikate werden verworfen.
    /// Liefert die ID der Wand, die das Eckpaar danach verbindet.
    fn reattach_wall(&mut self, wall: Wall) -> Option<WallId> {
        if wall.start == wall.end {
            log::debug!("Degenerierte Wand {} verworfen", wall.id);
            return None;
        }
        if let Some(existing) = self.wall_between(wall.start, wall.end) {
            log::debug!("Doppelte Wand {} verworfen (bereits {})", wall.id, existing);
            return Some(existing);
        }
        let id = wall.id;
        self.attach_wall(wall);
        Some(id)
    }

    /// Entfernt eine Wand aus Arena und Eck-Rückverweisen, ohne Folgeaktionen.
    fn detach_wall(&mut self, wall_id: WallId) -> Option<Wall> {
        let wall = self.walls.shift_remove(&wall_id)?;
        for corner_id in [wall.start, wall.end] {
            if let Some(corner) = self.corners.get_mut(&corner_id) {
                corner.walls.shift_remove(&wall_id);
            }
        }
        Some(wall)
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Liefert eine Ecke
    pub fn corner(&self, id: CornerId) -> Option<&Corner> {
        self.corners.get(&id)
    }

    /// Liefert eine Wand
    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.get(&id)
    }

    /// Liefert einen Raum
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Iterator über alle Ecken (in Anlage-Reihenfolge)
    pub fn corners(&self) -> impl Iterator<Item = &Corner> {
        self.corners.values()
    }

    /// Iterator über alle Wände (in Anlage-Reihenfolge)
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    /// Iterator über alle Räume
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Gibt die Anzahl der Ecken zurück
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Gibt die Anzahl der Wände zurück
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Gibt die Anzahl der Räume zurück
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Position einer Ecke
    pub fn corner_position(&self, id: CornerId) -> Option<Vec2> {
        self.corners.get(&id).map(|c| c.position)
    }

    /// Aus den Eckpositionen abgeleitetes Segment einer Wand
    pub fn wall_segment(&self, id: WallId) -> Option<(Vec2, Vec2)> {
        let wall = self.walls.get(&id)?;
        Some((
            self.corner_position(wall.start)?,
            self.corner_position(wall.end)?,
        ))
    }

    /// Findet die Wand zwischen zwei Ecken (richtungsunabhängig)
    pub fn wall_between(&self, a: CornerId, b: CornerId) -> Option<WallId> {
        let corner = self.corners.get(&a)?;
        corner
            .walls
            .iter()
            .copied()
            .find(|id| self.walls.get(id).is_some_and(|w| w.joins(a, b)))
    }

    /// Alle über eine Wand direkt verbundenen Nachbar-Ecken
    pub fn adjacent_corners(&self, id: CornerId) -> Vec<CornerId> {
        let Some(corner) = self.corners.get(&id) else {
            return Vec::new();
        };
        corner
            .walls
            .iter()
            .filter_map(|wall_id| self.walls.get(wall_id)?.other_end(id))
            .collect()
    }

    /// Polygon eines Raums in Welt-Koordinaten
    pub fn room_polygon(&self, id: RoomId) -> Option<Vec<Vec2>> {
        let room = self.rooms.get(&id)?;
        room.corners
            .iter()
            .map(|corner_id| self.corner_position(*corner_id))
            .collect()
    }

    /// Fläche eines Raums in cm²
    pub fn room_area(&self, id: RoomId) -> Option<f32> {
        self.room_polygon(id)
            .map(|polygon| geometry::signed_area(&polygon).abs())
    }

    /// Mittelpunkt der Bounding Box aller Ecken (`None` bei leerem Grundriss)
    pub fn center(&self) -> Option<Vec2> {
        geometry::bounding_center(self.corners.values().map(|c| c.position))
    }

    // ── Bewegung ────────────────────────────────────────────────────

    /// Verschiebt eine Ecke an eine neue Position.
    ///
    /// Räume referenzieren die Ecke und folgen implizit; die Topologie
    /// wird erst mit [`Self::update_attached_rooms_of_corner`] neu geprüft.
    pub fn move_corner(&mut self, id: CornerId, position: Vec2) -> bool {
        let Some(corner) = self.corners.get_mut(&id) else {
            return false;
        };
        if corner.position == position {
            return true;
        }
        corner.position = position;
        self.rebuild_spatial_index();
        true
    }

    /// Verschiebt beide Endpunkte einer Wand um ein Delta.
    pub fn relative_move_wall(&mut self, id: WallId, delta: Vec2) -> bool {
        let Some((start, end)) = self.walls.get(&id).map(Wall::endpoints) else {
            return false;
        };
        for corner_id in [start, end] {
            if let Some(corner) = self.corners.get_mut(&corner_id) {
                corner.position += delta;
            }
        }
        self.rebuild_spatial_index();
        true
    }

    /// Richtet die Wände einer Ecke achsparallel aus, wenn sie bereits fast achsparallel sind.
    ///
    /// Für jede Nachbar-Ecke, deren x (bzw. y) weniger als `tolerance` abweicht,
    /// wird die Koordinate exakt übernommen.
    pub fn snap_corner_to_axis(&mut self, id: CornerId, tolerance: f32) -> AxisSnap {
        let Some(mut position) = self.corner_position(id) else {
            return AxisSnap::default();
        };

        let mut snapped = AxisSnap::default();
        for neighbour in self.adjacent_corners(id) {
            let Some(other) = self.corner_position(neighbour) else {
                continue;
            };
            if (other.x - position.x).abs() < tolerance {
                position.x = other.x;
                snapped.x = true;
            }
            if (other.y - position.y).abs() < tolerance {
                position.y = other.y;
                snapped.y = true;
            }
        }

        if snapped.any() {
            self.move_corner(id, position);
        }
        snapped
    }

    /// Achsen-Snap für beide Endpunkte einer Wand.
    pub fn snap_wall_to_axis(&mut self, id: WallId, tolerance: f32) -> AxisSnap {
        let Some((start, end)) = self.walls.get(&id).map(Wall::endpoints) else {
            return AxisSnap::default();
        };
        let first = self.snap_corner_to_axis(start, tolerance);
        let second = self.snap_corner_to_axis(end, tolerance);
        first.merge(second)
    }

    // ── Attribute ───────────────────────────────────────────────────

    /// Setzt die Höhe einer Ecke (cm)
    pub fn set_corner_elevation(&mut self, id: CornerId, elevation: f32) -> bool {
        match self.corners.get_mut(&id) {
            Some(corner) => {
                corner.elevation = elevation;
                true
            }
            None => false,
        }
    }

    /// Setzt den Namen eines Raums
    pub fn set_room_name(&mut self, id: RoomId, name: impl Into<String>) -> bool {
        match self.rooms.get_mut(&id) {
            Some(room) => {
                room.name = name.into();
                true
            }
            None => false,
        }
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Entfernt eine Wand. Dadurch verwaiste Endpunkte werden mit entfernt.
    pub fn remove_wall(&mut self, id: WallId) -> bool {
        let Some(wall) = self.detach_wall(id) else {
            return false;
        };
        self.remove_if_orphaned(wall.start);
        self.remove_if_orphaned(wall.end);
        self.rebuild_spatial_index();
        self.update_rooms();
        true
    }

    /// Entfernt eine Ecke samt aller angrenzenden Wände (kaskadierend).
    ///
    /// Nachbar-Ecken, die dadurch keine Wand mehr haben, werden ebenfalls entfernt.
    pub fn remove_corner(&mut self, id: CornerId) -> bool {
        let Some(corner) = self.corners.get(&id) else {
            return false;
        };
        let walls: Vec<WallId> = corner.walls.iter().copied().collect();
        for wall_id in walls {
            if let Some(wall) = self.detach_wall(wall_id) {
                if let Some(other) = wall.other_end(id) {
                    self.remove_if_orphaned(other);
                }
            }
        }
        self.corners.shift_remove(&id);
        self.rebuild_spatial_index();
        self.update_rooms();
        true
    }

    fn remove_if_orphaned(&mut self, id: CornerId) {
        if self.corners.get(&id).is_some_and(Corner::is_orphaned) {
            self.corners.shift_remove(&id);
            log::debug!("Verwaiste Ecke {} entfernt", id);
        }
    }

    // ── Räume ───────────────────────────────────────────────────────

    /// Leitet die Räume nach abgeschlossenem Ziehen einer Ecke neu ab.
    pub fn update_attached_rooms_of_corner(&mut self, id: CornerId) {
        if self.corners.contains_key(&id) {
            self.update_rooms();
        }
    }

    /// Leitet die Räume nach abgeschlossenem Ziehen einer Wand neu ab.
    pub fn update_attached_rooms_of_wall(&mut self, id: WallId) {
        if self.walls.contains_key(&id) {
            self.update_rooms();
        }
    }

    // ── Spatial-Index ───────────────────────────────────────────────

    /// Baut den persistenten Spatial-Index aus den aktuellen Ecken neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_corners(&self.corners);
    }

    /// Read-only Zugriff auf den Spatial-Index.
    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.spatial_index
    }
}

impl Default for Floorplan {
    fn default() -> Self {
        Self::new()
    }
}
