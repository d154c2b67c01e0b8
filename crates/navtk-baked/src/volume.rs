//! Baked navigation volumes.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use navtk_core::{AreaId, AreaKind, Bounds, Layer, Span};
use navtk_geometry::Plane;

use crate::area::{
    check_internal_links, check_region_spans, check_stride, check_vertex_indices, relink_regions,
    AreaFrame, LinkSupport, NavAreaData,
};
use crate::error::{check_span, BakedDataError};
use crate::link::{ExternalLink, InternalLink};
use crate::region::VolumeRegion;

/// Owned, unvalidated contents of a [`NavVolume`].
///
/// The triangle index array holds three vertex indices per triangle. Its
/// first `blocking_index_count` entries are the blocking triangles, each
/// listed once, which raycasts test against. The rest is the region
/// section: each region's full boundary, blocking and shared triangles
/// alike, as one contiguous run that the region's `triangles` span covers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeParts {
    /// Area id.
    pub id: AreaId,
    /// Layer tag.
    pub layer: Layer,
    /// Local-to-world transform. Must be invertible.
    pub transform: Mat4,
    /// Local-space bounds of the whole volume.
    pub local_bounds: Bounds,
    /// Vertex positions in local space.
    pub vertices: Vec<Vec3>,
    /// Triangle vertex indices, blocking prefix first.
    pub triangle_indices: Vec<u32>,
    /// Length of the blocking prefix of `triangle_indices`.
    pub blocking_index_count: u32,
    /// Region bound planes, grouped by region.
    pub bound_planes: Vec<Plane>,
    /// Region records.
    pub regions: Vec<VolumeRegion>,
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
struct VolumeGeometry {
    vertices: Vec<Vec3>,
    triangle_indices: Vec<u32>,
    blocking_index_count: usize,
    bound_planes: Vec<Plane>,
    internal_links: Vec<InternalLink>,
    link_vertices: Vec<u32>,
    link_edges: Vec<u32>,
    link_triangles: Vec<u32>,
}

/// A baked 3D navigable space, partitioned into convex regions.
///
/// Immutable once built. Cloning is cheap: the geometry, regions and
/// external links are reference counted. Replacing the external links
/// with [`NavAreaData::with_external_links`] returns a new volume that
/// shares this one's geometry.
#[derive(Clone, Debug)]
pub struct NavVolume {
    frame: AreaFrame,
    geometry: Arc<VolumeGeometry>,
    regions: Arc<[VolumeRegion]>,
    external_links: Arc<[ExternalLink]>,
}

impl NavVolume {
    /// Validate `parts` and assemble a volume.
    ///
    /// Checks array strides, vertex indices, and that every span fits the
    /// array it indexes. Does not check that spans are disjoint.
    pub fn from_parts(parts: VolumeParts) -> Result<Self, BakedDataError> {
        let frame = AreaFrame::new(parts.id, parts.layer, parts.transform, parts.local_bounds)?;

        let index_count = parts.triangle_indices.len();
        check_stride("triangle index", index_count, 3)?;
        check_vertex_indices(&parts.triangle_indices, parts.vertices.len())?;
        let blocking = parts.blocking_index_count as usize;
        if blocking > index_count || blocking % 3 != 0 {
            return Err(BakedDataError::InvalidGeometry {
                reason: format!(
                    "blocking index count {blocking} is not a whole prefix of {index_count} indices"
                ),
            });
        }

        check_region_spans(
            &parts.regions,
            index_count,
            parts.internal_links.len(),
            parts.external_links.len(),
        )?;
        for (i, region) in parts.regions.iter().enumerate() {
            check_span("bound plane", i, region.planes, parts.bound_planes.len())?;
        }
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
            geometry: Arc::new(VolumeGeometry {
                vertices: parts.vertices,
                triangle_indices: parts.triangle_indices,
                blocking_index_count: blocking,
                bound_planes: parts.bound_planes,
                internal_links: parts.internal_links,
                link_vertices: parts.link_vertices,
                link_edges: parts.link_edges,
                link_triangles: parts.link_triangles,
            }),
            regions: parts.regions.into(),
            external_links: parts.external_links.into(),
        })
    }

    /// Copy the volume's contents back out.
    pub fn to_parts(&self) -> VolumeParts {
        let g = &*self.geometry;
        VolumeParts {
            id: self.frame.id,
            layer: self.frame.layer,
            transform: self.frame.transform,
            local_bounds: self.frame.local_bounds,
            vertices: g.vertices.clone(),
            triangle_indices: g.triangle_indices.clone(),
            blocking_index_count: g.blocking_index_count as u32,
            bound_planes: g.bound_planes.clone(),
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

    /// Length of the blocking prefix of the triangle index array.
    pub fn blocking_index_count(&self) -> usize {
        self.geometry.blocking_index_count
    }

    /// Triangle indices of the blocking triangles.
    pub fn blocking_indices(&self) -> &[u32] {
        &self.geometry.triangle_indices[..self.geometry.blocking_index_count]
    }

    /// All bound planes.
    pub fn bound_planes(&self) -> &[Plane] {
        &self.geometry.bound_planes
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

    /// Bound planes of the region at `index`.
    #[track_caller]
    pub fn region_planes(&self, index: usize) -> &[Plane] {
        self.region(index).planes.slice(&self.geometry.bound_planes)
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
    pub fn shares_geometry_with(&self, other: &NavVolume) -> bool {
        Arc::ptr_eq(&self.geometry, &other.geometry)
    }
}

impl NavAreaData for NavVolume {
    type Region = VolumeRegion;

    const KIND: AreaKind = AreaKind::Volume;

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

    fn regions(&self) -> &[VolumeRegion] {
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
            "volume {}: replaced {} external links with {}",
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
