//! Segment/triangle intersection.

use glam::Vec3;

/// Möller–Trumbore intersection of segment `start..end` with triangle
/// `(v1, v2, v3)`.
///
/// Returns the hit parameter `t` along the segment (`start + (end - start) * t`),
/// restricted to the open interval `(0, 1)`: hits exactly at either end of
/// the segment do not count. Triangles edge-on to the segment
/// (`|det| < f32::EPSILON`) never intersect. Both windings are hit.
pub fn segment_intersects_triangle(
    start: Vec3,
    end: Vec3,
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
) -> Option<f32> {
    let dir = end - start;
    let e1 = v2 - v1;
    let e2 = v3 - v1;
    let pvec = dir.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() < f32::EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = start - v1;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let qvec = tvec.cross(e1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(qvec) * inv_det;
    if t <= 0.0 || t >= 1.0 {
        return None;
    }
    Some(t)
}
