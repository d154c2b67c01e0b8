//! The capability set shared by volumes and surfaces.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use navtk_core::check::check_index;
use navtk_core::{AreaId, AreaKind, Bounds, Layer, RegionId, Span};

use crate::error::{check_span, BakedDataError};
use crate::link::{ExternalLink, InternalLink};
use crate::region::RegionData;

/// Read-only access to a baked area, plus the one copy-on-write mutation.
///
/// Link resolution and query code is written against this trait so it can
/// treat volumes and surfaces alike. Region arguments are indices into the
/// area's region array, not region ids; use
/// [`region_index_of`](Self::region_index_of) to translate.
///
/// Region and link indices are caller contracts: they are checked when
/// checks are compiled in, and otherwise only by slice bounds.
pub trait NavAreaData: Sized {
    /// The region record type.
    type Region: RegionData;

    /// Whether this is a volume or a surface.
    const KIND: AreaKind;

    /// Area id.
    fn area_id(&self) -> AreaId;

    /// Layer tag.
    fn layer(&self) -> Layer;

    /// Local-space bounds of the whole area.
    fn local_bounds(&self) -> Bounds;

    /// Local-to-world transform.
    fn transform(&self) -> &Mat4;

    /// World-to-local transform.
    fn inverse_transform(&self) -> &Mat4;

    /// All region records.
    fn regions(&self) -> &[Self::Region];

    /// All external links, grouped by region.
    fn external_links(&self) -> &[ExternalLink];

    /// A new area with `links` as the external-link array and `ranges[i]`
    /// as region `i`'s external-link range. The receiver is unchanged and
    /// all other data is shared with it.
    ///
    /// Fails if `ranges` does not hold exactly one span per region or a
    /// span does not fit in `links`.
    fn with_external_links(
        &self,
        links: Vec<ExternalLink>,
        ranges: &[Span],
    ) -> Result<Self, BakedDataError>;

    /// Volume or surface.
    fn kind(&self) -> AreaKind {
        Self::KIND
    }

    /// Number of regions.
    fn region_count(&self) -> usize {
        self.regions().len()
    }

    /// Region record at `index`.
    #[track_caller]
    fn region(&self, index: usize) -> &Self::Region {
        check_index(index, self.region_count());
        &self.regions()[index]
    }

    /// Id of the region at `index`.
    #[track_caller]
    fn region_id(&self, index: usize) -> RegionId {
        self.region(index).id()
    }

    /// Local-space bounds of the region at `index`.
    #[track_caller]
    fn region_bounds(&self, index: usize) -> Bounds {
        self.region(index).bounds()
    }

    /// Index of the region with id `id`.
    fn region_index_of(&self, id: RegionId) -> Option<usize> {
        self.regions().iter().position(|r| r.id() == id)
    }

    /// External-link range of the region at `index`.
    #[track_caller]
    fn external_link_range(&self, index: usize) -> Span {
        self.region(index).external_links()
    }

    /// External link at `index` in the area's link array.
    #[track_caller]
    fn external_link(&self, index: usize) -> &ExternalLink {
        check_index(index, self.external_links().len());
        &self.external_links()[index]
    }

    /// External links leaving the region at `index`.
    #[track_caller]
    fn region_external_links(&self, index: usize) -> &[ExternalLink] {
        self.external_link_range(index).slice(self.external_links())
    }

    /// World-space point to local space.
    fn to_local(&self, point: Vec3) -> Vec3 {
        self.inverse_transform().transform_point3(point)
    }

    /// Local-space point to world space.
    fn to_world(&self, point: Vec3) -> Vec3 {
        self.transform().transform_point3(point)
    }

    /// World-space bounds of the whole area.
    fn world_bounds(&self) -> Bounds {
        self.local_bounds().transformed(self.transform())
    }
}

/// Identity and placement shared by both area kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AreaFrame {
    pub id: AreaId,
    pub layer: Layer,
    pub transform: Mat4,
    pub inverse: Mat4,
    pub local_bounds: Bounds,
}

impl AreaFrame {
    pub fn new(
        id: AreaId,
        layer: Layer,
        transform: Mat4,
        local_bounds: Bounds,
    ) -> Result<Self, BakedDataError> {
        let det = transform.determinant();
        if !transform.is_finite() || det.abs() <= f32::EPSILON {
            return Err(BakedDataError::InvalidGeometry {
                reason: format!("transform is not invertible (determinant {det})"),
            });
        }
        Ok(Self {
            id,
            layer,
            transform,
            inverse: transform.inverse(),
            local_bounds,
        })
    }
}

/// Rewrite every region's external-link range for a replacement link array.
pub(crate) fn relink_regions<R: RegionData>(
    regions: &[R],
    link_count: usize,
    ranges: &[Span],
) -> Result<Arc<[R]>, BakedDataError> {
    if ranges.len() != regions.len() {
        return Err(BakedDataError::RegionCountMismatch {
            expected: regions.len(),
            actual: ranges.len(),
        });
    }
    for (i, range) in ranges.iter().enumerate() {
        check_span("external link", i, *range, link_count)?;
    }
    Ok(regions
        .iter()
        .zip(ranges)
        .map(|(region, range)| region.with_external_links(*range))
        .collect())
}

/// Check that every index in `indices` names an existing vertex.
pub(crate) fn check_vertex_indices(
    indices: &[u32],
    vertex_count: usize,
) -> Result<(), BakedDataError> {
    match indices.iter().find(|&&v| v as usize >= vertex_count) {
        Some(&vertex) => Err(BakedDataError::VertexOutOfRange {
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Check that `len` is a whole number of `stride`-sized records.
pub(crate) fn check_stride(
    array: &str,
    len: usize,
    stride: usize,
) -> Result<(), BakedDataError> {
    if len % stride == 0 {
        Ok(())
    } else {
        Err(BakedDataError::InvalidGeometry {
            reason: format!("{array} array length {len} is not a multiple of {stride}"),
        })
    }
}

/// Check the spans shared by both region kinds.
pub(crate) fn check_region_spans<R: RegionData>(
    regions: &[R],
    triangle_index_count: usize,
    internal_link_count: usize,
    external_link_count: usize,
) -> Result<(), BakedDataError> {
    for (i, region) in regions.iter().enumerate() {
        check_span("triangle", i, region.triangles(), triangle_index_count)?;
        check_span("internal link", i, region.internal_links(), internal_link_count)?;
        check_span("external link", i, region.external_links(), external_link_count)?;
    }
    Ok(())
}

/// Check internal links and the link-support arrays they index.
pub(crate) fn check_internal_links<R: RegionData>(
    regions: &[R],
    links: &[InternalLink],
    support: LinkSupport<'_>,
    vertex_count: usize,
) -> Result<(), BakedDataError> {
    check_stride("link edge", support.edges.len(), 2)?;
    check_stride("link triangle", support.triangles.len(), 3)?;
    check_vertex_indices(support.vertices, vertex_count)?;
    check_vertex_indices(support.edges, vertex_count)?;
    check_vertex_indices(support.triangles, vertex_count)?;

    for region in regions {
        for link in region.internal_links().slice(links) {
            if link.to_region as usize >= regions.len() {
                return Err(BakedDataError::UnknownRegion {
                    from: region.id(),
                    to_index: link.to_region,
                });
            }
        }
    }
    for (i, link) in links.iter().enumerate() {
        check_span("link vertex", i, link.vertices, support.vertices.len())?;
        check_span("link edge", i, link.edges, support.edges.len())?;
        check_span("link triangle", i, link.triangles, support.triangles.len())?;
    }
    Ok(())
}

/// Borrowed link-support arrays of an area.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LinkSupport<'a> {
    pub vertices: &'a [u32],
    pub edges: &'a [u32],
    pub triangles: &'a [u32],
}
