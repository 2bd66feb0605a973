//! Ableitung der Räume aus den beschränkten Flächen des Wand-Graphen.

use super::Floorplan;
use crate::core::room::corner_set_key;
use crate::core::{geometry, CornerId, Room, RoomId};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Mindestfläche (cm²) einer Fläche, um als Raum zu gelten.
const MIN_ROOM_AREA: f32 = 1e-3;

impl Floorplan {
    /// Berechnet alle Räume neu.
    ///
    /// Ein Raum, dessen Eckmenge unverändert geblieben ist, behält ID und Namen.
    pub(crate) fn update_rooms(&mut self) {
        let faces = self.bounded_faces();

        let mut previous: HashMap<Vec<CornerId>, Room> = self
            .rooms
            .drain(..)
            .map(|(_, room)| (room.key(), room))
            .collect();

        let mut rooms = IndexMap::with_capacity(faces.len());
        for cycle in faces {
            let room = match previous.remove(&corner_set_key(&cycle)) {
                Some(mut room) => {
                    room.corners = cycle;
                    room
                }
                None => Room::new(RoomId(self.allocate_id()), cycle),
            };
            rooms.insert(room.id, room);
        }

        if !previous.is_empty() {
            log::debug!("{} Raum/Räume aufgelöst", previous.len());
        }
        self.rooms = rooms;
    }

    /// Findet alle beschränkten Flächen als Ecken-Zyklen (positiver Umlaufsinn).
    fn bounded_faces(&self) -> Vec<Vec<CornerId>> {
        let mut adjacency = self.pruned_adjacency();

        for (corner_id, neighbours) in adjacency.iter_mut() {
            let Some(origin) = self.corner_position(*corner_id) else {
                continue;
            };
            let angle = |id: &CornerId| {
                let dir = self.corner_position(*id).unwrap_or(origin) - origin;
                dir.y.atan2(dir.x)
            };
            neighbours.sort_by(|x, y| angle(x).total_cmp(&angle(y)));
        }

        let half_edge_count: usize = adjacency.values().map(Vec::len).sum();
        let mut visited: HashSet<(CornerId, CornerId)> = HashSet::with_capacity(half_edge_count);
        let mut faces = Vec::new();

        for (&start, neighbours) in &adjacency {
            for &first in neighbours {
                if visited.contains(&(start, first)) {
                    continue;
                }
                if let Some(face) = walk_face(&adjacency, &mut visited, start, first) {
                    if self.is_room_face(&face) {
                        faces.push(face);
                    }
                }
            }
        }
        faces
    }

    /// Nachbarschaftsliste ohne Sackgassen (Ecken mit Grad ≤ 1 iterativ entfernt).
    fn pruned_adjacency(&self) -> IndexMap<CornerId, Vec<CornerId>> {
        let mut adjacency: IndexMap<CornerId, Vec<CornerId>> = IndexMap::new();
        for wall in self.walls.values() {
            adjacency.entry(wall.start).or_default().push(wall.end);
            adjacency.entry(wall.end).or_default().push(wall.start);
        }

        loop {
            let dangling: Vec<CornerId> = adjacency
                .iter()
                .filter(|(_, neighbours)| neighbours.len() <= 1)
                .map(|(id, _)| *id)
                .collect();
            if dangling.is_empty() {
                break;
            }
            for id in dangling {
                let Some(neighbours) = adjacency.shift_remove(&id) else {
                    continue;
                };
                for neighbour in neighbours {
                    if let Some(list) = adjacency.get_mut(&neighbour) {
                        list.retain(|c| *c != id);
                    }
                }
            }
        }
        adjacency
    }

    fn is_room_face(&self, face: &[CornerId]) -> bool {
        if face.len() < 3 {
            return false;
        }
        let unique: HashSet<&CornerId> = face.iter().collect();
        if unique.len() != face.len() {
            return false;
        }
        let polygon: Option<Vec<Vec2>> = face.iter().map(|id| self.corner_position(*id)).collect();
        polygon.is_some_and(|polygon| geometry::signed_area(&polygon) > MIN_ROOM_AREA)
    }
}

/// Läuft eine Fläche ab, beginnend mit der Halbkante `start → first`.
///
/// An jeder Ecke wird der im Winkel vorherige Nachbar der Herkunft gewählt.
/// `None`, wenn der Umlauf nicht zur Start-Halbkante zurückführt.
fn walk_face(
    adjacency: &IndexMap<CornerId, Vec<CornerId>>,
    visited: &mut HashSet<(CornerId, CornerId)>,
    start: CornerId,
    first: CornerId,
) -> Option<Vec<CornerId>> {
    let mut face = Vec::new();
    let (mut from, mut to) = (start, first);

    loop {
        if !visited.insert((from, to)) {
            return None;
        }
        face.push(from);

        let neighbours = adjacency.get(&to)?;
        let idx = neighbours.iter().position(|c| *c == from)?;
        let next = neighbours[(idx + neighbours.len() - 1) % neighbours.len()];

        from = to;
        to = next;
        if (from, to) == (start, first) {
            return Some(face);
        }
    }
}
