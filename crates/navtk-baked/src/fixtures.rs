//! Hand-built areas shared by this crate's unit tests.

use glam::{Mat4, Vec3};

use navtk_core::{AreaId, Bounds, Layer, RegionId, Span};
use navtk_geometry::Plane;

use crate::link::InternalLink;
use crate::region::{SurfaceRegion, VolumeRegion};
use crate::surface::SurfaceParts;
use crate::volume::VolumeParts;

/// Two unit cubes side by side along x, sharing the face at x = 1.
pub(crate) fn two_cell_parts() -> VolumeParts {
    let mut vertices = Vec::new();
    for x in 0..3 {
        for (y, z) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
            vertices.push(Vec3::new(x as f32, y as f32, z as f32));
        }
    }
    // Vertex 4 * x + k sits at x with (y, z) from the list above.
    let quad = |a: u32, b: u32, c: u32, d: u32| [a, b, c, a, c, d];
    let cube = |x: u32| {
        let l = 4 * x;
        let r = 4 * (x + 1);
        [
            quad(l, l + 1, r + 1, r),         // z = 0
            quad(l + 3, r + 3, r + 2, l + 2), // z = 1
            quad(l, r, r + 3, l + 3),         // y = 0
            quad(l + 1, l + 2, r + 2, r + 1), // y = 1
        ]
    };
    let left_wall = quad(0, 3, 2, 1);
    let right_wall = quad(8, 9, 10, 11);
    let shared = quad(4, 5, 6, 7);

    let mut blocking = Vec::new();
    for x in 0..2 {
        for q in cube(x) {
            blocking.extend_from_slice(&q);
        }
    }
    blocking.extend_from_slice(&left_wall);
    blocking.extend_from_slice(&right_wall);
    let blocking_index_count = blocking.len() as u32;

    let mut triangle_indices = blocking;
    let left_start = triangle_indices.len() as u32;
    for q in cube(0) {
        triangle_indices.extend_from_slice(&q);
    }
    triangle_indices.extend_from_slice(&left_wall);
    triangle_indices.extend_from_slice(&shared);
    let right_start = triangle_indices.len() as u32;
    for q in cube(1) {
        triangle_indices.extend_from_slice(&q);
    }
    triangle_indices.extend_from_slice(&right_wall);
    triangle_indices.extend_from_slice(&shared);
    let region_len = right_start - left_start;

    let cell_planes = |x: f32| {
        [
            Plane::from_point_normal(Vec3::new(x, 0.0, 0.0), -Vec3::X),
            Plane::from_point_normal(Vec3::new(x + 1.0, 0.0, 0.0), Vec3::X),
            Plane::from_point_normal(Vec3::ZERO, -Vec3::Y),
            Plane::from_point_normal(Vec3::Y, Vec3::Y),
            Plane::from_point_normal(Vec3::ZERO, -Vec3::Z),
            Plane::from_point_normal(Vec3::Z, Vec3::Z),
        ]
        .map(|p| p.unwrap())
    };
    let mut bound_planes = cell_planes(0.0).to_vec();
    bound_planes.extend_from_slice(&cell_planes(1.0));

    let region = |id: i32, x: f32, triangles: Span, planes: Span, link: u32| VolumeRegion {
        id: RegionId(id),
        bounds: Bounds::new(Vec3::new(x, 0.0, 0.0), Vec3::new(x + 1.0, 1.0, 1.0)),
        triangles,
        planes,
        internal_links: Span::new(link, 1),
        external_links: Span::EMPTY,
    };
    let link = |to: u32| InternalLink {
        to_region: to,
        vertices: Span::new(0, 4),
        edges: Span::new(0, 8),
        triangles: Span::new(0, 6),
    };

    VolumeParts {
        id: AreaId(1),
        layer: Layer(0),
        transform: Mat4::IDENTITY,
        local_bounds: Bounds::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0)),
        vertices,
        triangle_indices,
        blocking_index_count,
        bound_planes,
        regions: vec![
            region(10, 0.0, Span::new(left_start, region_len), Span::new(0, 6), 0),
            region(11, 1.0, Span::new(right_start, region_len), Span::new(6, 6), 1),
        ],
        internal_links: vec![link(1), link(0)],
        external_links: Vec::new(),
        link_vertices: vec![4, 5, 6, 7],
        link_edges: vec![4, 5, 5, 6, 6, 7, 7, 4],
        link_triangles: shared.to_vec(),
    }
}


/// A strip of two square regions along x. Region 0 lies flat at y = 0;
/// region 1 rises by `rise` over its length, so its normal differs from
/// region 0's whenever `rise` is non-zero.
pub(crate) fn strip_parts(rise: f32) -> SurfaceParts {
    let vertices = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(2.0, rise, 0.0),
        Vec3::new(2.0, rise, 1.0),
    ];
    let triangle_indices = vec![0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4];
    let tilted = Vec3::new(-rise, 1.0, 0.0).normalize();
    let region = |id: i32, x: f32, top: f32, start: u32, link: u32, normal: Vec3| SurfaceRegion {
        id: RegionId(id),
        bounds: Bounds::new(Vec3::new(x, 0.0, 0.0), Vec3::new(x + 1.0, top, 1.0)),
        triangles: Span::new(start, 6),
        internal_links: Span::new(link, 1),
        external_links: Span::EMPTY,
        up: normal,
        normal,
        island: 0,
    };
    let link = |to: u32| InternalLink {
        to_region: to,
        vertices: Span::new(0, 2),
        edges: Span::new(0, 2),
        triangles: Span::EMPTY,
    };
    SurfaceParts {
        id: AreaId(3),
        layer: Layer(1),
        transform: Mat4::IDENTITY,
        local_bounds: Bounds::new(Vec3::ZERO, Vec3::new(2.0, rise.max(0.0), 1.0)),
        vertices,
        triangle_indices,
        regions: vec![
            region(20, 0.0, 0.0, 0, 0, Vec3::Y),
            region(21, 1.0, rise.max(0.0), 6, 1, tilted),
        ],
        internal_links: vec![link(1), link(0)],
        external_links: Vec::new(),
        link_vertices: vec![2, 3],
        link_edges: vec![2, 3],
        link_triangles: Vec::new(),
    }
}
