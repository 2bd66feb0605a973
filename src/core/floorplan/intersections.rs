//! Auflösen von Wand-Kreuzungen nach dem Anlegen einer neuen Wand.

use super::Floorplan;
use crate::core::{geometry, Corner, CornerId, Wall, WallId};
use glam::Vec2;

/// Parameter-Toleranz entlang eines Segments (Endpunkte gelten als getroffen).
const PARAM_EPSILON: f32 = 1e-4;
/// Abstand (cm), ab dem eine bestehende Ecke als "auf dem Segment" gilt.
const ON_SEGMENT_TOLERANCE: f32 = 0.01;

/// Ein Teilungspunkt auf der neuen Wand.
#[derive(Debug, Clone, Copy)]
enum SplitPoint {
    /// Bestehende Ecke liegt auf dem Segment
    Existing(CornerId),
    /// Echte Kreuzung mit einer Wand, Ecke muss noch angelegt werden
    Crossing { wall: WallId, point: Vec2 },
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    t: f32,
    split: SplitPoint,
}

impl Floorplan {
    /// Teilt die Wand `a–b` und alle von ihr gekreuzten Wände an den Schnittpunkten.
    ///
    /// Die Wand `a–b` wird durch eine Kette kürzerer Wände ersetzt, geordnet entlang
    /// `a → b`. Bestehende Ecken auf dem Segment werden ebenfalls als Teilungspunkte
    /// genutzt. Gibt `true` zurück, wenn geteilt wurde.
    pub fn new_walls_for_intersections(&mut self, a: CornerId, b: CornerId) -> bool {
        let (Some(pa), Some(pb)) = (self.corner_position(a), self.corner_position(b)) else {
            return false;
        };
        if pa.distance_squared(pb) <= f32::EPSILON {
            return false;
        }
        let Some(new_wall) = self.wall_between(a, b) else {
            log::debug!("Keine Wand zwischen {} und {}, nichts zu teilen", a, b);
            return false;
        };

        let candidates = self.split_candidates(new_wall, a, b, pa, pb);
        if candidates.is_empty() {
            return false;
        }

        let mut chain = Vec::with_capacity(candidates.len() + 2);
        chain.push(a);
        for candidate in candidates {
            let corner = match candidate.split {
                SplitPoint::Existing(corner) => corner,
                SplitPoint::Crossing { wall, point } => {
                    let id = CornerId(self.allocate_id());
                    self.corners.insert(id, Corner::new(id, point));
                    self.split_wall(wall, id);
                    id
                }
            };
            if chain.last() != Some(&corner) {
                chain.push(corner);
            }
        }
        chain.push(b);

        let Some(original) = self.detach_wall(new_wall) else {
            return false;
        };
        let width = original.width;
        self.reattach_wall(Wall::new(original.id, chain[0], chain[1], width));
        for pair in chain[1..].windows(2) {
            self.connect(pair[0], pair[1], width);
        }

        self.rebuild_spatial_index();
        self.update_rooms();
        log::info!(
            "Wand {}–{} an {} Punkt(en) geteilt",
            a,
            b,
            chain.len() - 2
        );
        true
    }

    /// Sammelt alle Teilungspunkte auf `a–b`, sortiert nach Parameter und dedupliziert.
    fn split_candidates(
        &self,
        new_wall: WallId,
        a: CornerId,
        b: CornerId,
        pa: Vec2,
        pb: Vec2,
    ) -> Vec<SplitCandidate> {
        let interior = |t: f32| t > PARAM_EPSILON && t < 1.0 - PARAM_EPSILON;
        let mut candidates = Vec::new();

        for wall in self.walls.values() {
            if wall.id == new_wall || wall.connects(a) || wall.connects(b) {
                continue;
            }
            let Some((ws, we)) = self.wall_segment(wall.id) else {
                continue;
            };
            let Some(hit) = geometry::segment_intersection(pa, pb, ws, we) else {
                continue;
            };
            if !interior(hit.t) {
                continue;
            }
            let split = if hit.u <= PARAM_EPSILON {
                SplitPoint::Existing(wall.start)
            } else if hit.u >= 1.0 - PARAM_EPSILON {
                SplitPoint::Existing(wall.end)
            } else {
                SplitPoint::Crossing {
                    wall: wall.id,
                    point: hit.point,
                }
            };
            candidates.push(SplitCandidate { t: hit.t, split });
        }

        for corner in self.corners.values() {
            if corner.id == a || corner.id == b {
                continue;
            }
            if geometry::distance_to_segment(corner.position, pa, pb) > ON_SEGMENT_TOLERANCE {
                continue;
            }
            let t = geometry::segment_param(corner.position, pa, pb);
            if interior(t) {
                candidates.push(SplitCandidate {
                    t,
                    split: SplitPoint::Existing(corner.id),
                });
            }
        }

        candidates.sort_by(|x, y| x.t.total_cmp(&y.t));

        // Gleicher Punkt mehrfach gefunden: bestehende Ecke hat Vorrang
        let mut deduped: Vec<SplitCandidate> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match deduped.last_mut() {
                Some(last) if (candidate.t - last.t).abs() <= PARAM_EPSILON => {
                    if matches!(candidate.split, SplitPoint::Existing(_)) {
                        *last = candidate;
                    }
                }
                _ => deduped.push(candidate),
            }
        }
        deduped
    }
}
