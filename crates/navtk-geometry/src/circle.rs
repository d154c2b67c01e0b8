//! Circles through and around triangles.

use glam::Vec3;

use crate::DEGENERATE_EPSILON;

/// A circle in 3D space, given by center and radius. Its plane is implied
/// by the points that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
}

/// The circle through all three vertices of triangle `(a, b, c)`.
///
/// `None` for collinear or coincident vertices.
pub fn circumscribe(a: Vec3, b: Vec3, c: Vec3) -> Option<Circle> {
    let ab = b - a;
    let ac = c - a;
    let n = ab.cross(ac);
    let n_sq = n.length_squared();
    if n_sq <= DEGENERATE_EPSILON {
        return None;
    }
    let offset = (n.cross(ab) * ac.length_squared() + ac.cross(n) * ab.length_squared()) / (2.0 * n_sq);
    let center = a + offset;
    if !center.is_finite() {
        return None;
    }
    Some(Circle {
        center,
        radius: offset.length(),
    })
}

/// An enclosing circle for triangle `(a, b, c)`.
///
/// This is the circumscribed circle for every triangle. For obtuse
/// triangles the circle on the longest side is smaller, but callers rely
/// on the result passing through all three vertices.
pub fn smallest_enclosing_circle(a: Vec3, b: Vec3, c: Vec3) -> Option<Circle> {
    circumscribe(a, b, c)
}
