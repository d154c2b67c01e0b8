//! Per-region records of a baked area.

use glam::Vec3;

use navtk_core::{Bounds, RegionId, Span};

/// Accessors shared by volume and surface regions.
pub trait RegionData: Copy {
    /// Region id, unique within its area.
    fn id(&self) -> RegionId;
    /// Local-space bounds of the region's triangles.
    fn bounds(&self) -> Bounds;
    /// Range of the region's entries in the area's triangle index array.
    fn triangles(&self) -> Span;
    /// Range of the region's internal links.
    fn internal_links(&self) -> Span;
    /// Range of the region's external links.
    fn external_links(&self) -> Span;
    /// A copy of this region with its external-link range replaced.
    fn with_external_links(self, range: Span) -> Self;
}

/// A convex cell of a [`NavVolume`](crate::NavVolume).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeRegion {
    /// Region id.
    pub id: RegionId,
    /// Local-space bounds.
    pub bounds: Bounds,
    /// Boundary triangles, indexing the region section of the triangle
    /// index array.
    pub triangles: Span,
    /// Outward-facing bound planes.
    pub planes: Span,
    /// Internal links.
    pub internal_links: Span,
    /// External links.
    pub external_links: Span,
}

/// A walkable patch of a [`NavSurface`](crate::NavSurface).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceRegion {
    /// Region id.
    pub id: RegionId,
    /// Local-space bounds.
    pub bounds: Bounds,
    /// Triangles, indexing the triangle index array.
    pub triangles: Span,
    /// Internal links.
    pub internal_links: Span,
    /// External links.
    pub external_links: Span,
    /// Upright direction for agents standing on the region.
    pub up: Vec3,
    /// Area-weighted average normal of the region's triangles.
    pub normal: Vec3,
    /// Connected component of the surface this region belongs to.
    pub island: u32,
}

macro_rules! impl_region_data {
    ($ty:ty) => {
        impl RegionData for $ty {
            fn id(&self) -> RegionId {
                self.id
            }
            fn bounds(&self) -> Bounds {
                self.bounds
            }
            fn triangles(&self) -> Span {
                self.triangles
            }
            fn internal_links(&self) -> Span {
                self.internal_links
            }
            fn external_links(&self) -> Span {
                self.external_links
            }
            fn with_external_links(self, range: Span) -> Self {
                Self {
                    external_links: range,
                    ..self
                }
            }
        }
    };
}

impl_region_data!(VolumeRegion);
impl_region_data!(SurfaceRegion);
