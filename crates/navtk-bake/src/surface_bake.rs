//! Baking walkable surfaces.

use std::collections::VecDeque;

use glam::Vec3;
use indexmap::IndexMap;

use navtk_baked::{NavSurface, SurfaceParts, SurfaceRegion};
use navtk_core::{CancelFlag, RegionId, Span};
use navtk_geometry::{triangle_area, triangle_normal};

use crate::assemble::{indexed_bounds, poll_cancel, span, sorted_edge, LinkBuilder};
use crate::config::BakeConfig;
use crate::error::BakeError;
use crate::mesh_info::SurfaceMeshInfo;
use crate::source::SourceMesh;

/// Bake `mesh` into a [`NavSurface`], with `region_of(t)` naming the region
/// of source triangle `t`.
///
/// Regions are ordered by first appearance. Each region's normal is the
/// area-weighted average of its triangle normals and its up direction is
/// that normal, or the configured up for regions whose normals cancel.
/// Regions touching along an edge are linked, and islands are the
/// connected components of the link graph. Triangles with area at or below
/// the configured epsilon are skipped.
pub fn bake_surface(
    mesh: &SourceMesh,
    mut region_of: impl FnMut(usize) -> RegionId,
    config: &BakeConfig,
    cancel: &CancelFlag,
) -> Result<NavSurface, BakeError> {
    config.validate()?;
    mesh.validate()?;
    let local_up = config.local_up();

    let mut info = SurfaceMeshInfo::new(mesh.vertices.len());
    let mut region_triangles: IndexMap<RegionId, Vec<u32>> = IndexMap::new();
    let mut skipped: Vec<(usize, RegionId)> = Vec::new();
    for t in 0..mesh.triangle_count() {
        poll_cancel(t, config, cancel)?;
        let region = region_of(t);
        let [a, b, c] = mesh.triangle_positions(t);
        if triangle_area(a, b, c) <= config.degenerate_area_epsilon {
            skipped.push((t, region));
            continue;
        }
        let normal = triangle_normal(a, b, c).normalize();
        let kept = info.add_triangle(mesh.triangle(t), normal, local_up);
        region_triangles.entry(region).or_default().push(kept);
    }
    for (t, region) in &skipped {
        log::warn!("area {}: skipped degenerate triangle {t}", config.area_id);
        if !region_triangles.contains_key(region) {
            log::warn!("area {}: region {region} has no usable triangles", config.area_id);
        }
    }

    let topo = info.topology();
    let mut region_index_of_triangle = vec![0usize; topo.triangle_count()];
    for (r, tris) in region_triangles.values().enumerate() {
        for &t in tris {
            region_index_of_triangle[t as usize] = r;
        }
    }

    let mut triangle_indices = Vec::with_capacity(topo.triangle_indices().len());
    let mut links = LinkBuilder::default();
    let mut regions = Vec::with_capacity(region_triangles.len());
    let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(region_triangles.len());
    for (r, (&id, tris)) in region_triangles.iter().enumerate() {
        poll_cancel(r, config, cancel)?;

        let tri_start = triangle_indices.len();
        let mut weighted = Vec3::ZERO;
        for &t in tris {
            let tri = topo.triangle(t);
            triangle_indices.extend_from_slice(&tri);
            let [a, b, c] = tri.map(|v| mesh.vertices[v as usize]);
            weighted += triangle_normal(a, b, c);
        }
        let normal = weighted.normalize_or(local_up);

        // Edges this region shares with each neighbouring region.
        let mut shared: IndexMap<usize, Vec<[u32; 2]>> = IndexMap::new();
        for &t in tris {
            let tri = topo.triangle(t);
            for i in 0..3 {
                let (a, b) = (tri[i], tri[(i + 1) % 3]);
                for other in topo.shared_edge_triangles(a, b) {
                    let to = region_index_of_triangle[other as usize];
                    if to == r {
                        continue;
                    }
                    let edges = shared.entry(to).or_default();
                    let edge = sorted_edge(a, b);
                    if !edges.contains(&edge) {
                        edges.push(edge);
                    }
                }
            }
        }
        let link_start = links.links.len();
        for (&to, edges) in &shared {
            links.push(to, edges, &[])?;
        }
        adjacency.push(shared.keys().copied().collect());

        let region_indices = &triangle_indices[tri_start..];
        regions.push(SurfaceRegion {
            id,
            bounds: indexed_bounds(&mesh.vertices, region_indices),
            triangles: span(tri_start, triangle_indices.len())?,
            internal_links: span(link_start, links.links.len())?,
            external_links: Span::EMPTY,
            up: normal,
            normal,
            island: 0,
        });
        log::trace!(
            "area {}: surface region {id} has {} triangles and {} links",
            config.area_id,
            tris.len(),
            shared.len()
        );
    }

    let island_count = assign_islands(&adjacency, &mut regions);
    log::debug!(
        "area {}: baked surface with {} regions, {} triangles, {} internal links, {} islands",
        config.area_id,
        regions.len(),
        triangle_indices.len() / 3,
        links.links.len(),
        island_count
    );

    NavSurface::from_parts(SurfaceParts {
        id: config.area_id,
        layer: config.layer,
        transform: config.transform,
        local_bounds: mesh.bounds(),
        vertices: mesh.vertices.clone(),
        triangle_indices,
        regions,
        internal_links: links.links,
        external_links: Vec::new(),
        link_vertices: links.vertices,
        link_edges: links.edges,
        link_triangles: links.triangles,
    })
    .map_err(BakeError::from)
}

/// Number each connected component of the region graph and store it in
/// the regions' `island` field. Returns the island count.
fn assign_islands(adjacency: &[Vec<usize>], regions: &mut [SurfaceRegion]) -> u32 {
    let mut island_of = vec![None::<u32>; regions.len()];
    let mut next = 0u32;
    let mut queue = VecDeque::new();
    for seed in 0..regions.len() {
        if island_of[seed].is_some() {
            continue;
        }
        island_of[seed] = Some(next);
        queue.push_back(seed);
        while let Some(r) = queue.pop_front() {
            for &n in &adjacency[r] {
                if island_of[n].is_none() {
                    island_of[n] = Some(next);
                    queue.push_back(n);
                }
            }
        }
        next += 1;
    }
    for (region, island) in regions.iter_mut().zip(island_of) {
        region.island = island.unwrap_or(0);
    }
    next
}
