//! Reine 2D-Geometrie-Hilfsfunktionen (Segmente, Polygone).

use glam::Vec2;

/// Schnittpunkt zweier Segmente mit den Parametern entlang beider Segmente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Schnittpunkt in Welt-Koordinaten
    pub point: Vec2,
    /// Parameter entlang des ersten Segments (0 = Start, 1 = Ende)
    pub t: f32,
    /// Parameter entlang des zweiten Segments (0 = Start, 1 = Ende)
    pub u: f32,
}

/// Berechnet den Schnittpunkt der Segmente `a1-a2` und `b1-b2`.
///
/// Parallele oder kollineare Segmente liefern `None`.
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<SegmentHit> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = r.perp_dot(s);
    if denom.abs() <= f32::EPSILON * r.length() * s.length() {
        return None;
    }

    let q = b1 - a1;
    let t = q.perp_dot(s) / denom;
    let u = q.perp_dot(r) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(SegmentHit {
        point: a1 + r * t,
        t,
        u,
    })
}

/// Projektionsparameter von `point` auf die Gerade durch `a` und `b` (unbegrenzt).
pub fn segment_param(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    (point - a).dot(ab) / len_sq
}

/// Nächster Punkt auf dem Segment `a-b` zu `point`.
pub fn closest_point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let t = segment_param(point, a, b).clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Abstand von `point` zum Segment `a-b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    point.distance(closest_point_on_segment(point, a, b))
}

/// Vorzeichenbehaftete Fläche (Shoelace).
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let twice: f32 = (0..n)
        .map(|i| polygon[i].perp_dot(polygon[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// Punkt-in-Polygon-Test (Ray-Casting, Ränder nicht garantiert).
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Mittelpunkt der Bounding Box aller Punkte, `None` bei leerer Eingabe.
pub fn bounding_center(points: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    Some((min + max) * 0.5)
}
