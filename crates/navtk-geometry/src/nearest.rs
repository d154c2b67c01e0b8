//! Nearest-point queries.
//!
//! The segment and triangle routines deliberately exclude endpoints from
//! the interior-only queries; callers that need the closed shape use
//! [`nearest_point_on_triangle_including_bounds`], which falls back to
//! edges and then vertices.

use glam::Vec3;

use crate::{triangle_normal, DEGENERATE_EPSILON};

/// Side-test tolerance for [`is_point_inside_bound`]. Points this far
/// outside an edge still count as inside.
pub const BOUND_EPSILON: f32 = -0.00001;

/// Projection of `point` onto the open segment `v1..v2`.
///
/// Returns `None` when the projection falls at or beyond either endpoint,
/// or when the segment has zero length.
pub fn nearest_point_on_segment(v1: Vec3, v2: Vec3, point: Vec3) -> Option<Vec3> {
    let dir = v2 - v1;
    let len_sq = dir.length_squared();
    if len_sq <= DEGENERATE_EPSILON {
        return None;
    }
    let t = (point - v1).dot(dir) / len_sq;
    if t <= 0.0 || t >= 1.0 {
        return None;
    }
    Some(v1 + dir * t)
}

/// Whether `point` lies on the inner side of edge `a -> b` of a triangle
/// with normal `normal` (as produced by [`triangle_normal`] with the same
/// winding).
///
/// Uses [`BOUND_EPSILON`], so points on the edge line count as inside.
#[inline]
pub fn is_point_inside_bound(a: Vec3, b: Vec3, normal: Vec3, point: Vec3) -> bool {
    let inward = normal.cross(b - a);
    inward.dot(point - a) > BOUND_EPSILON
}

/// Projection of `point` onto the plane of triangle `(v1, v2, v3)`, if the
/// projection lies inside the triangle.
///
/// Returns `None` for projections outside any edge and for zero-area
/// triangles.
pub fn nearest_point_on_triangle(v1: Vec3, v2: Vec3, v3: Vec3, point: Vec3) -> Option<Vec3> {
    let normal = triangle_normal(v1, v2, v3);
    let len_sq = normal.length_squared();
    if len_sq <= DEGENERATE_EPSILON {
        return None;
    }
    let unit = normal / len_sq.sqrt();
    let projected = point - unit * unit.dot(point - v1);
    let inside = is_point_inside_bound(v1, v2, unit, projected)
        && is_point_inside_bound(v2, v3, unit, projected)
        && is_point_inside_bound(v3, v1, unit, projected);
    inside.then_some(projected)
}

/// Nearest point on the closed triangle `(v1, v2, v3)` to `point`.
///
/// Tries the interior first, then each edge, then only those vertices
/// whose two adjacent edges both had no interior projection. A vertex
/// next to an edge that did produce a point can never be closer than
/// that point.
pub fn nearest_point_on_triangle_including_bounds(
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
    point: Vec3,
) -> Vec3 {
    if let Some(p) = nearest_point_on_triangle(v1, v2, v3, point) {
        return p;
    }

    let verts = [v1, v2, v3];
    // edge i runs from verts[i] to verts[(i + 1) % 3]
    let mut edge_hit = [false; 3];
    let mut best = None::<(Vec3, f32)>;
    let consider = |candidate: Vec3, best: &mut Option<(Vec3, f32)>| {
        let d = candidate.distance_squared(point);
        if best.is_none_or(|(_, bd)| d < bd) {
            *best = Some((candidate, d));
        }
    };

    for i in 0..3 {
        if let Some(p) = nearest_point_on_segment(verts[i], verts[(i + 1) % 3], point) {
            edge_hit[i] = true;
            consider(p, &mut best);
        }
    }
    for i in 0..3 {
        // vertex i is shared by edge i and edge i-1
        let prev_edge = (i + 2) % 3;
        if !edge_hit[i] && !edge_hit[prev_edge] {
            consider(verts[i], &mut best);
        }
    }

    best.map_or(v1, |(p, _)| p)
}

/// Closest approach between two infinite lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineApproach {
    /// Parameter along the first line: `point_a = origin_a + dir_a * t_a`.
    pub t_a: f32,
    /// Parameter along the second line.
    pub t_b: f32,
    /// Closest point on the first line.
    pub point_a: Vec3,
    /// Closest point on the second line.
    pub point_b: Vec3,
}

/// Closest points between lines `origin_a + s * dir_a` and
/// `origin_b + t * dir_b`.
///
/// Returns `None` when either parameter is NaN or infinite, which is the
/// case for parallel or zero-length directions.
pub fn nearest_point_on_lines(
    origin_a: Vec3,
    dir_a: Vec3,
    origin_b: Vec3,
    dir_b: Vec3,
) -> Option<LineApproach> {
    let r = origin_a - origin_b;
    let a = dir_a.dot(dir_a);
    let b = dir_a.dot(dir_b);
    let c = dir_b.dot(dir_b);
    let d = dir_a.dot(r);
    let e = dir_b.dot(r);
    let denom = a * c - b * b;
    let t_a = (b * e - c * d) / denom;
    let t_b = (a * e - b * d) / denom;
    if !t_a.is_finite() || !t_b.is_finite() {
        return None;
    }
    Some(LineApproach {
        t_a,
        t_b,
        point_a: origin_a + dir_a * t_a,
        point_b: origin_b + dir_b * t_b,
    })
}
