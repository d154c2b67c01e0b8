//! Helpers shared by the surface and volume bakes.

use glam::Vec3;
use indexmap::{IndexMap, IndexSet};

use navtk_baked::InternalLink;
use navtk_core::{Bounds, CancelFlag, Span};

use crate::config::BakeConfig;
use crate::error::BakeError;

/// Check `cancel` once every `config.cancel_poll_interval` steps.
pub(crate) fn poll_cancel(
    step: usize,
    config: &BakeConfig,
    cancel: &CancelFlag,
) -> Result<(), BakeError> {
    if step % config.cancel_poll_interval == 0 && cancel.is_cancelled() {
        log::debug!("bake of area {} cancelled at step {step}", config.area_id);
        return Err(BakeError::Cancelled);
    }
    Ok(())
}

/// Span covering `start..end` of a baked array.
pub(crate) fn span(start: usize, end: usize) -> Result<Span, BakeError> {
    Span::from_range(start..end).map_err(BakeError::from)
}

/// Bounds of the vertices referenced by `indices`.
pub(crate) fn indexed_bounds(vertices: &[Vec3], indices: &[u32]) -> Bounds {
    Bounds::from_points(indices.iter().map(|&i| vertices[i as usize]))
}

/// Accumulates internal links and their link-support arrays.
#[derive(Debug, Default)]
pub(crate) struct LinkBuilder {
    pub links: Vec<InternalLink>,
    pub vertices: Vec<u32>,
    pub edges: Vec<u32>,
    pub triangles: Vec<u32>,
}

impl LinkBuilder {
    /// Append a link to region index `to_region` sharing `edges` and
    /// `triangles`. Shared vertices are the distinct endpoints of both.
    pub fn push(
        &mut self,
        to_region: usize,
        edges: &[[u32; 2]],
        triangles: &[[u32; 3]],
    ) -> Result<(), BakeError> {
        let shared: IndexSet<u32> = edges
            .iter()
            .flatten()
            .chain(triangles.iter().flatten())
            .copied()
            .collect();

        let vertex_start = self.vertices.len();
        self.vertices.extend(shared);
        let edge_start = self.edges.len();
        self.edges.extend(edges.iter().flatten());
        let triangle_start = self.triangles.len();
        self.triangles.extend(triangles.iter().flatten());

        self.links.push(InternalLink {
            to_region: to_region as u32,
            vertices: span(vertex_start, self.vertices.len())?,
            edges: span(edge_start, self.edges.len())?,
            triangles: span(triangle_start, self.triangles.len())?,
        });
        Ok(())
    }
}

/// Edges of `triangles` used by exactly one of them, i.e. the outline of
/// the patch they form. Each edge is returned with its vertices sorted.
pub(crate) fn outline_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut uses: IndexMap<[u32; 2], u32> = IndexMap::new();
    for tri in triangles {
        for i in 0..3 {
            *uses.entry(sorted_edge(tri[i], tri[(i + 1) % 3])).or_default() += 1;
        }
    }
    uses.into_iter()
        .filter(|&(_, n)| n == 1)
        .map(|(edge, _)| edge)
        .collect()
}

/// `[a, b]` with the smaller index first.
pub(crate) fn sorted_edge(a: u32, b: u32) -> [u32; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}
