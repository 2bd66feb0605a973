//! Spatial-Index (KD-Tree) über den Eckpositionen eines Grundrisses.
//!
//! Die Ecken werden in Anlage-Reihenfolge des Floorplans indexiert. Der
//! Tree-Index eines Eintrags ist damit zugleich sein Alter: bei gleicher
//! Distanz gewinnt die ältere Ecke, z.B. beim Verschmelzen.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::{Corner, CornerId};

/// Treffer einer Distanzabfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    pub corner_id: CornerId,
    /// Euklidische Distanz zum Suchpunkt (cm)
    pub distance: f32,
}

/// Read-only Snapshot der Eckpositionen. Wird nach jeder Geometrie-Änderung
/// vom Floorplan neu aufgebaut.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    /// Tree-Index → Ecke, in Anlage-Reihenfolge
    corner_ids: Vec<CornerId>,
}

impl SpatialIndex {
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            corner_ids: Vec::new(),
        }
    }

    /// Baut den Index aus der Ecken-Arena des Floorplans.
    pub fn from_corners(corners: &IndexMap<CornerId, Corner>) -> Self {
        let entries: Vec<[f64; 2]> = corners
            .values()
            .map(|corner| to_point(corner.position))
            .collect();

        Self {
            tree: (&entries).into(),
            corner_ids: corners.keys().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.corner_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corner_ids.is_empty()
    }

    /// Nächste Ecke zur Weltposition (Basis des Eck-Hit-Tests).
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&to_point(query));
        self.to_match(result.item, result.distance)
    }

    /// Alle Ecken im Radius, aufsteigend nach Distanz, bei Gleichstand die ältere zuerst.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || !radius.is_finite() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut hits: Vec<(u64, SpatialMatch)> = self
            .tree
            .within::<SquaredEuclidean>(&to_point(query), (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| Some((entry.item, self.to_match(entry.item, entry.distance)?)))
            .collect();

        hits.sort_by(|(ia, a), (ib, b)| a.distance.total_cmp(&b.distance).then(ia.cmp(ib)));
        hits.into_iter().map(|(_, m)| m).collect()
    }

    /// Nächste *andere* Ecke echt innerhalb der Toleranz (Verschmelzungs-Partner).
    pub fn merge_partner(
        &self,
        corner: CornerId,
        position: Vec2,
        tolerance: f32,
    ) -> Option<SpatialMatch> {
        self.within_radius(position, tolerance)
            .into_iter()
            .find(|m| m.corner_id != corner && m.distance < tolerance)
    }

    fn to_match(&self, item: u64, squared_distance: f64) -> Option<SpatialMatch> {
        let corner_id = *self.corner_ids.get(item as usize)?;
        Some(SpatialMatch {
            corner_id,
            distance: (squared_distance as f32).sqrt(),
        })
    }
}

fn to_point(position: Vec2) -> [f64; 2] {
    [position.x as f64, position.y as f64]
}
