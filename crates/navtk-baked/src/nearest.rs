//! Nearest points on baked regions.

use glam::Vec3;

use navtk_geometry::nearest_point_on_triangle_including_bounds;

use crate::area::NavAreaData;
use crate::surface::NavSurface;
use crate::volume::NavVolume;

/// A point on a region, as found by the nearest-point queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionPoint {
    /// Index of the region within its area.
    pub region: usize,
    /// The point, in local space.
    pub point: Vec3,
    /// Distance from the query point.
    pub distance: f32,
}

/// Nearest point to `point` over the triangles of `indices`, boundaries
/// included. `None` when `indices` is empty.
pub fn nearest_point_on_triangles(vertices: &[Vec3], indices: &[u32], point: Vec3) -> Option<Vec3> {
    indices
        .chunks_exact(3)
        .map(|tri| {
            nearest_point_on_triangle_including_bounds(
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
                point,
            )
        })
        .min_by(|a, b| a.distance_squared(point).total_cmp(&b.distance_squared(point)))
}

/// Nearest point to local-space `point` on the boundary of volume region
/// `region`.
#[track_caller]
pub fn nearest_point_on_volume_region(volume: &NavVolume, region: usize, point: Vec3) -> Option<Vec3> {
    nearest_point_on_triangles(volume.vertices(), volume.region_triangle_indices(region), point)
}

/// Nearest point to local-space `point` on surface region `region`.
#[track_caller]
pub fn nearest_point_on_surface_region(
    surface: &NavSurface,
    region: usize,
    point: Vec3,
) -> Option<Vec3> {
    nearest_point_on_triangles(surface.vertices(), surface.region_triangle_indices(region), point)
}

fn nearest_over_regions(
    region_count: usize,
    point: Vec3,
    mut on_region: impl FnMut(usize) -> Option<Vec3>,
) -> Option<RegionPoint> {
    let mut best: Option<RegionPoint> = None;
    for region in 0..region_count {
        let Some(p) = on_region(region) else {
            continue;
        };
        let distance = p.distance(point);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(RegionPoint {
                region,
                point: p,
                distance,
            });
        }
    }
    best
}

/// Nearest point to local-space `point` over every region boundary of
/// `volume`. Ties go to the lower region index.
pub fn nearest_point_on_volume(volume: &NavVolume, point: Vec3) -> Option<RegionPoint> {
    nearest_over_regions(volume.region_count(), point, |r| {
        nearest_point_on_volume_region(volume, r, point)
    })
}

/// Nearest point to local-space `point` over every region of `surface`.
/// Ties go to the lower region index.
pub fn nearest_point_on_surface(surface: &NavSurface, point: Vec3) -> Option<RegionPoint> {
    nearest_over_regions(surface.region_count(), point, |r| {
        nearest_point_on_surface_region(surface, r, point)
    })
}
