//! Baking navigation volumes.

use glam::Vec3;
use indexmap::IndexMap;
use smallvec::SmallVec;

use navtk_baked::{NavVolume, VolumeParts, VolumeRegion};
use navtk_core::{CancelFlag, RegionId, Span};
use navtk_geometry::{triangle_area, triangle_normal, Plane};

use crate::assemble::{indexed_bounds, outline_edges, poll_cancel, span, LinkBuilder};
use crate::config::BakeConfig;
use crate::error::BakeError;
use crate::mesh_info::VolumeMeshInfo;
use crate::source::SourceMesh;

/// Regions a source triangle borders: one for a blocking face, two for a
/// face shared between neighbouring regions.
pub type TriangleRegions = SmallVec<[RegionId; 2]>;

/// Bound planes of one region closer than this are merged.
pub const PLANE_MERGE_EPSILON: f32 = 1e-4;

/// Bake the boundary mesh `mesh` into a [`NavVolume`], with
/// `regions_of(t)` naming the regions source triangle `t` borders.
///
/// Triangles bordering one region are blocking. Triangles bordering two
/// regions are portals between them and become internal links in both
/// directions, with the portal outline as the link's shared edges. Each
/// region's bound planes are the distinct planes of its triangles, facing
/// away from the region's centroid, so regions are expected to be convex.
pub fn bake_volume(
    mesh: &SourceMesh,
    mut regions_of: impl FnMut(usize) -> TriangleRegions,
    config: &BakeConfig,
    cancel: &CancelFlag,
) -> Result<NavVolume, BakeError> {
    config.validate()?;
    mesh.validate()?;

    let mut info = VolumeMeshInfo::new(mesh.vertices.len());
    let mut region_triangles: IndexMap<RegionId, Vec<u32>> = IndexMap::new();
    for t in 0..mesh.triangle_count() {
        poll_cancel(t, config, cancel)?;
        let mut regions = regions_of(t);
        regions.dedup();
        if regions.is_empty() {
            return Err(BakeError::InvalidMesh {
                reason: format!("triangle {t} borders no region"),
            });
        }
        let [a, b, c] = mesh.triangle_positions(t);
        if triangle_area(a, b, c) <= config.degenerate_area_epsilon {
            log::warn!("area {}: skipped degenerate triangle {t}", config.area_id);
            continue;
        }

        let kept = info.add_triangle(mesh.triangle(t), triangle_normal(a, b, c).normalize());
        for region in regions {
            let list = region_triangles.entry(region).or_default();
            info.associate(kept, region, list.len() as u32)
                .map_err(|e| match e {
                    BakeError::TooManyRegions { region, .. } => {
                        BakeError::TooManyRegions { triangle: t, region }
                    }
                    other => other,
                })?;
            list.push(kept);
        }
    }

    let topo = info.topology();
    let mut triangle_indices = Vec::with_capacity(topo.triangle_indices().len() * 2);
    for t in 0..topo.triangle_count() as u32 {
        let tri = topo.triangle(t);
        if info.regions_of(tri).len() == 1 {
            triangle_indices.extend_from_slice(&tri);
        }
    }
    let blocking_index_count = triangle_indices.len();

    let mut bound_planes: Vec<Plane> = Vec::new();
    let mut links = LinkBuilder::default();
    let mut regions = Vec::with_capacity(region_triangles.len());
    for (r, (&id, tris)) in region_triangles.iter().enumerate() {
        poll_cancel(r, config, cancel)?;

        let tri_start = triangle_indices.len();
        let mut centroid = Vec3::ZERO;
        for &t in tris {
            let tri = topo.triangle(t);
            triangle_indices.extend_from_slice(&tri);
            centroid += tri.map(|v| mesh.vertices[v as usize]).iter().sum::<Vec3>() / 3.0;
        }
        centroid /= tris.len() as f32;

        let plane_start = bound_planes.len();
        for &t in tris {
            let [a, b, c] = topo.triangle(t).map(|v| mesh.vertices[v as usize]);
            let Some(mut plane) = Plane::from_triangle(a, b, c) else {
                continue;
            };
            if plane.is_in_front(centroid) {
                plane = plane.flipped();
            }
            let region_planes = &bound_planes[plane_start..];
            if !region_planes
                .iter()
                .any(|p| p.approx_eq(&plane, PLANE_MERGE_EPSILON))
            {
                bound_planes.push(plane);
            }
        }

        // Portal triangles grouped by the region on their far side.
        let mut portals: IndexMap<usize, Vec<[u32; 3]>> = IndexMap::new();
        for &t in tris {
            let tri = topo.triangle(t);
            let Some(&(other, _)) = info.regions_of(tri).iter().find(|(o, _)| *o != id) else {
                continue;
            };
            if let Some(to) = region_triangles.get_index_of(&other) {
                portals.entry(to).or_default().push(tri);
            }
        }
        let link_start = links.links.len();
        for (&to, shared) in &portals {
            links.push(to, &outline_edges(shared), shared)?;
        }

        regions.push(VolumeRegion {
            id,
            bounds: indexed_bounds(&mesh.vertices, &triangle_indices[tri_start..]),
            triangles: span(tri_start, triangle_indices.len())?,
            planes: span(plane_start, bound_planes.len())?,
            internal_links: span(link_start, links.links.len())?,
            external_links: Span::EMPTY,
        });
        log::trace!(
            "area {}: volume region {id} has {} triangles, {} planes, {} links",
            config.area_id,
            tris.len(),
            bound_planes.len() - plane_start,
            portals.len()
        );
    }

    log::debug!(
        "area {}: baked volume with {} regions, {} blocking triangles, {} internal links",
        config.area_id,
        regions.len(),
        blocking_index_count / 3,
        links.links.len()
    );

    NavVolume::from_parts(VolumeParts {
        id: config.area_id,
        layer: config.layer,
        transform: config.transform,
        local_bounds: mesh.bounds(),
        vertices: mesh.vertices.clone(),
        triangle_indices,
        blocking_index_count: blocking_index_count as u32,
        bound_planes,
        regions,
        internal_links: links.links,
        external_links: Vec::new(),
        link_vertices: links.vertices,
        link_edges: links.edges,
        link_triangles: links.triangles,
    })
    .map_err(BakeError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtk_baked::{volume_region_containing, NavAreaData};
    use smallvec::smallvec;

    /// A unit tetrahedron, all faces blocking.
    fn tetrahedron() -> SourceMesh {
        SourceMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
            vec![0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3],
        )
    }

    #[test]
    fn single_region_is_all_blocking() {
        let volume = bake_volume(
            &tetrahedron(),
            |_| smallvec![RegionId(4)],
            &BakeConfig::default(),
            &CancelFlag::new(),
        )
        .unwrap();
        assert_eq!(volume.region_count(), 1);
        assert_eq!(volume.blocking_index_count(), 12);
        assert_eq!(volume.region_triangle_indices(0).len(), 12);
        assert_eq!(volume.region_planes(0).len(), 4);
        assert_eq!(volume_region_containing(&volume, Vec3::splat(0.2)), Some(0));
        assert_eq!(volume_region_containing(&volume, Vec3::splat(0.5)), None);
    }

    #[test]
    fn planes_face_away_from_the_centroid() {
        let volume = bake_volume(
            &tetrahedron(),
            |_| smallvec![RegionId(0)],
            &BakeConfig::default(),
            &CancelFlag::new(),
        )
        .unwrap();
        let centroid = Vec3::splat(0.25);
        for plane in volume.region_planes(0) {
            assert!(plane.signed_distance(centroid) < 0.0);
        }
    }

    #[test]
    fn triangle_without_region_is_rejected() {
        let result = bake_volume(
            &tetrahedron(),
            |_| SmallVec::new(),
            &BakeConfig::default(),
            &CancelFlag::new(),
        );
        assert!(matches!(result, Err(BakeError::InvalidMesh { .. })));
    }

    #[test]
    fn duplicate_region_counts_once() {
        let volume = bake_volume(
            &tetrahedron(),
            |_| smallvec![RegionId(1), RegionId(1)],
            &BakeConfig::default(),
            &CancelFlag::new(),
        )
        .unwrap();
        assert_eq!(volume.blocking_index_count(), 12);
        assert!(volume.internal_links().is_empty());
    }

    #[test]
    fn cancelled_bake_returns_cancelled() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let result = bake_volume(
            &tetrahedron(),
            |_| smallvec![RegionId(0)],
            &BakeConfig::default(),
            &cancel,
        );
        assert_eq!(result.unwrap_err(), BakeError::Cancelled);
    }
}
