//! Geometry kernels for navigation data.
//!
//! Pure functions over `glam` vectors with no hidden state:
//!
//! - [`nearest`]: nearest points on segments, triangles and between lines
//! - [`intersect`]: segment/triangle intersection
//! - [`plane`]: oriented planes used as region bounds
//! - [`circle`]: circumscribed circles of triangles
//! - [`marching_cubes`]: region-membership case indices and edge vertices
//!
//! Degenerate input (parallel lines, zero-area triangles, NaN results) is
//! reported the same way as "no geometric answer": `None`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod intersect;
pub mod marching_cubes;
pub mod nearest;
pub mod plane;

pub use circle::{circumscribe, smallest_enclosing_circle, Circle};
pub use intersect::segment_intersects_triangle;
pub use marching_cubes::{
    active_edges, marching_cubes_index, marching_cubes_index_either, marching_cubes_vertex,
    normal_aligned_vector, RegionLattice,
};
pub use nearest::{
    is_point_inside_bound, nearest_point_on_lines, nearest_point_on_segment,
    nearest_point_on_triangle, nearest_point_on_triangle_including_bounds, LineApproach,
};
pub use plane::Plane;

use glam::Vec3;

/// Tolerance below which a squared length or area counts as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Unnormalised normal of triangle `(a, b, c)`; its direction follows the
/// winding and its length is twice the triangle's area.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Area of triangle `(a, b, c)`.
#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    triangle_normal(a, b, c).length() * 0.5
}

/// Project `v` onto the plane through the origin with unit normal `normal`.
#[inline]
pub fn project_onto_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}
