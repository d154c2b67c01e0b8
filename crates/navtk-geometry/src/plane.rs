//! Oriented planes.

use glam::Vec3;

use crate::{triangle_normal, DEGENERATE_EPSILON};

/// The plane `normal · p + distance = 0` with a unit `normal`.
///
/// Points with positive signed distance are *in front*. Volume regions use
/// planes facing outward, so a point is inside a region when it is behind
/// or on every one of the region's planes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset from the origin along `-normal`.
    pub distance: f32,
}

impl Plane {
    /// Plane through `point` facing `normal`. `None` if `normal` is zero.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Option<Self> {
        let len_sq = normal.length_squared();
        if len_sq <= DEGENERATE_EPSILON || !len_sq.is_finite() {
            return None;
        }
        let normal = normal / len_sq.sqrt();
        Some(Self {
            normal,
            distance: -normal.dot(point),
        })
    }

    /// Plane of triangle `(a, b, c)`, facing along its winding normal.
    /// `None` for zero-area triangles.
    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        Self::from_point_normal(a, triangle_normal(a, b, c))
    }

    /// Signed distance from the plane to `point`.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Whether `point` is strictly in front of the plane.
    #[inline]
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// The same plane facing the other way.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Whether two planes coincide, facing the same way, within `epsilon`.
    pub fn approx_eq(&self, other: &Plane, epsilon: f32) -> bool {
        self.normal.abs_diff_eq(other.normal, epsilon)
            && (self.distance - other.distance).abs() <= epsilon
    }
}
