//! Baked navigation surfaces.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use navtk_core::{AreaId, AreaKind, Bounds, Layer, Span};

use crate::area::{
    check_internal_links, check_region_spans, check_stride, check_vertex_indices, relink_regions,
    AreaFrame, LinkSupport, NavAreaData,
};
use crate::error::BakedDataError;
use crate::link::{ExternalLink, InternalLink};
use crate::region::SurfaceRegion;

/// Owned, unvalidated contents of a [`NavSurface`].
///
/// Each region's triangles are one contiguous run of the triangle index
/// array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceParts {
    /// Area id.
    pub id: AreaId,
    /// Layer tag.
    pub layer: Layer,
    /// Local-to-world transform. Must be invertible.
    pub transform: Mat4,
    /// Local-space bounds of the whole surface.
    pub local_bounds: Bounds,
    /// Vertex positions in local space.
    pub vertices: Vec<Vec3>,
    /// Triangle vertex indices, grouped by region.
    pub triangle_indices: Vec<u32>,
    /// Region records.
    pub regions: Vec<SurfaceRegion>,
    /// Internal links, grouped by region.
    pub internal_links: Vec<InternalLink>,
    /// External links, grouped by region.
    pub external_links: Vec<ExternalLink>,
    /// Vertex indices shared across internal links.
    pub link_vertices: Vec<u32>,
    /// Vertex index pairs of edges shared across internal links.
    pub link_edges: Vec<u32>,
    /// Vertex index triples of triangles shared across internal links.
    pub link_triangles: Vec<u32>,
}

#[derive(Debug)]
struct SurfaceGeometry {
    vertices: Vec<Vec3>,
    triangle_indices: Vec<u32>,
    internal_links: Vec<InternalLink>,
    link_vertices: Vec<u32>,
    link_edges: Vec<u32>,
    link_triangles: Vec<u32>,
}

/// A baked walkable surface, partitioned into regions that each carry an
/// up direction.
///
/// Shares the ownership model of [`NavVolume`](crate::NavVolume).
#[derive(Clone, Debug)]
pub struct NavSurface {
    frame: AreaFrame,
    geometry: Arc<SurfaceGeometry>,
    regions: Arc<[SurfaceRegion]>,
    external_links: Arc<[ExternalLink]>,
}

impl NavSurface {
    /// Validate `parts` and assemble a surface.
    pub fn from_parts(parts: SurfaceParts) -> Result<Self, BakedDataError> {
        let frame = AreaFrame::new(parts.id, parts.layer, parts.transform, parts.local_bounds)?;

        check_stride("triangle index", parts.triangle_indices.len(), 3)?;
        check_vertex_indices(&parts.triangle_indices, parts.vertices.len())?;
        check_region_spans(
            &parts.regions,
            parts.triangle_indices.len(),
            parts.internal_links.len(),
            parts.external_links.len(),
        )?;
        check_internal_links(
            &parts.regions,
            &parts.internal_links,
            LinkSupport {
                vertices: &parts.link_vertices,
                edges: &parts.link_edges,
                triangles: &parts.link_triangles,
            },
            parts.vertices.len(),
        )?;

        Ok(Self {
            frame,
            geometry: Arc::new(SurfaceGeometry {
                vertices: parts.vertices,
                triangle_indices: parts.triangle_indices,
                internal_links: parts.internal_links,
                link_vertices: parts.link_vertices,
                link_edges: parts.link_edges,
                link_triangles: parts.link_triangles,
            }),
            regions: parts.regions.into(),
            external_links: parts.external_links.into(),
        })
    }

    /// Copy the surface's contents back out.
    pub fn to_parts(&self) -> SurfaceParts {
        let g = &*self.geometry;
        SurfaceParts {
            id: self.frame.id,
            layer: self.frame.layer,
            transform: self.frame.transform,
            local_bounds: self.frame.local_bounds,
            vertices: g.vertices.clone(),
            triangle_indices: g.triangle_indices.clone(),
            regions: self.regions.to_vec(),
            internal_links: g.internal_links.clone(),
            external_links: self.external_links.to_vec(),
            link_vertices: g.link_vertices.clone(),
            link_edges: g.link_edges.clone(),
            link_triangles: g.link_triangles.clone(),
        }
    }

    /// Vertex positions in local space.
    pub fn vertices(&self) -> &[Vec3] {
        &self.geometry.vertices
    }

    /// The whole triangle index array.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.geometry.triangle_indices
    }

    /// All internal links.
    pub fn internal_links(&self) -> &[InternalLink] {
        &self.geometry.internal_links
    }

    /// Triangle indices of the region at `index`.
    #[track_caller]
    pub fn region_triangle_indices(&self, index: usize) -> &[u32] {
        self.region(index).triangles.slice(&self.geometry.triangle_indices)
    }

    /// Internal links leaving the region at `index`.
    #[track_caller]
    pub fn region_internal_links(&self, index: usize) -> &[InternalLink] {
        self.region(index)
            .internal_links
            .slice(&self.geometry.internal_links)
    }

    /// Vertex indices shared by `link`.
    pub fn link_vertices(&self, link: &InternalLink) -> &[u32] {
        link.vertices.slice(&self.geometry.link_vertices)
    }

    /// Vertex index pairs of the edges shared by `link`.
    pub fn link_edges(&self, link: &InternalLink) -> &[u32] {
        link.edges.slice(&self.geometry.link_edges)
    }

    /// Vertex index triples of the triangles shared by `link`.
    pub fn link_triangles(&self, link: &InternalLink) -> &[u32] {
        link.triangles.slice(&self.geometry.link_triangles)
    }

    /// Whether `self` and `other` share the same geometry allocation.
    pub fn shares_geometry_with(&self, other: &NavSurface) -> bool {
        Arc::ptr_eq(&self.geometry, &other.geometry)
    }
}

impl NavAreaData for NavSurface {
    type Region = SurfaceRegion;

    const KIND: AreaKind = AreaKind::Surface;

    fn area_id(&self) -> AreaId {
        self.frame.id
    }

    fn layer(&self) -> Layer {
        self.frame.layer
    }

    fn local_bounds(&self) -> Bounds {
        self.frame.local_bounds
    }

    fn transform(&self) -> &Mat4 {
        &self.frame.transform
    }

    fn inverse_transform(&self) -> &Mat4 {
        &self.frame.inverse
    }

    fn regions(&self) -> &[SurfaceRegion] {
        &self.regions
    }

    fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    fn with_external_links(
        &self,
        links: Vec<ExternalLink>,
        ranges: &[Span],
    ) -> Result<Self, BakedDataError> {
        let regions = relink_regions(&self.regions, links.len(), ranges)?;
        log::debug!(
            "surface {}: replaced {} external links with {}",
            self.frame.id,
            self.external_links.len(),
            links.len()
        );
        Ok(Self {
            frame: self.frame,
            geometry: Arc::clone(&self.geometry),
            regions,
            external_links: links.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::strip_parts;
    use crate::link::ExternalLinkSet;
    use navtk_core::RegionId;

    fn link_to(region: i32) -> ExternalLink {
        ExternalLink {
            to_area: AreaId(2),
            to_kind: AreaKind::Volume,
            to_region: RegionId(region),
            from_position: Vec3::ZERO,
            to_position: Vec3::ZERO,
            cost: 2.5,
        }
    }

    #[test]
    fn regions_carry_up_and_island() {
        let surface = NavSurface::from_parts(strip_parts(1.0)).unwrap();
        assert_eq!(surface.kind(), AreaKind::Surface);
        assert_eq!(surface.region(0).up, Vec3::Y);
        assert!(surface.region(1).up.dot(Vec3::Y) < 0.99);
        assert_eq!(surface.region(1).island, 0);
        assert_eq!(surface.region_triangle_indices(1).len(), 6);
        assert_eq!(surface.link_edges(&surface.region_internal_links(0)[0]), &[2, 3]);
    }

    #[test]
    fn external_link_replacement_is_copy_on_write() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();

        let mut set = ExternalLinkSet::new();
        set.push_link(link_to(7));
        set.finish_region();
        set.push_link(link_to(8));
        set.push_link(link_to(9));
        set.finish_region();
        let (links, ranges) = set.into_parts();

        let relinked = surface.with_external_links(links, &ranges).unwrap();
        assert!(relinked.shares_geometry_with(&surface));
        assert_eq!(relinked.external_link_range(1), Span::new(1, 2));
        assert_eq!(relinked.region_external_links(1)[1].to_region, RegionId(9));
        assert_eq!(relinked.external_link(0).cost, 2.5);

        assert!(surface.external_links().is_empty());
        assert_eq!(surface.external_link_range(1), Span::EMPTY);
    }

    #[test]
    fn replacement_rejects_wrong_range_count() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let err = surface
            .with_external_links(vec![link_to(1)], &[Span::new(0, 1)])
            .unwrap_err();
        assert_eq!(
            err,
            BakedDataError::RegionCountMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(surface.external_links().is_empty());
    }

    #[test]
    fn replacement_rejects_range_past_end() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let err = surface
            .with_external_links(vec![link_to(1)], &[Span::new(0, 1), Span::new(1, 1)])
            .unwrap_err();
        assert!(matches!(err, BakedDataError::SpanOutOfRange { owner: 1, .. }));
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let mut parts = strip_parts(0.0);
        parts.triangle_indices[0] = 99;
        assert_eq!(
            NavSurface::from_parts(parts).unwrap_err(),
            BakedDataError::VertexOutOfRange {
                vertex: 99,
                vertex_count: 6
            }
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn region_index_past_end_panics_when_checked() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let _ = surface.region_bounds(2);
    }
}
