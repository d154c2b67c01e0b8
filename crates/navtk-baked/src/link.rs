//! Connections between regions.

use glam::Vec3;

use navtk_core::{AreaId, AreaKind, RegionId, Span};

/// A connection from one region to another region of the same area.
///
/// The shared boundary is stored in the area's link-support arrays: the
/// `vertices` span indexes the link vertex array, `edges` the link edge
/// array (two vertex indices per edge) and `triangles` the link triangle
/// array (three vertex indices per triangle). All three hold indices into
/// the area's vertex positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalLink {
    /// Index of the destination region within the area.
    pub to_region: u32,
    /// Shared vertices.
    pub vertices: Span,
    /// Shared edges, in link edge array entries (two per edge).
    pub edges: Span,
    /// Shared triangles, in link triangle array entries (three per triangle).
    pub triangles: Span,
}

/// A connection from a region to a region of a different area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalLink {
    /// Destination area.
    pub to_area: AreaId,
    /// Whether the destination is a volume or a surface.
    pub to_kind: AreaKind,
    /// Destination region id within `to_area`.
    pub to_region: RegionId,
    /// Departure point, in the source area's local space.
    pub from_position: Vec3,
    /// Arrival point, in the destination area's local space.
    pub to_position: Vec3,
    /// Precomputed traversal cost.
    pub cost: f32,
}

/// Builds the `(links, ranges)` pair accepted by
/// [`NavAreaData::with_external_links`](crate::NavAreaData::with_external_links),
/// one region at a time.
///
/// Regions are visited in index order: call [`push_link`](Self::push_link)
/// for the current region's links, then [`finish_region`](Self::finish_region).
#[derive(Clone, Debug, Default)]
pub struct ExternalLinkSet {
    links: Vec<ExternalLink>,
    ranges: Vec<Span>,
    region_start: usize,
}

impl ExternalLinkSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link leaving the current region.
    pub fn push_link(&mut self, link: ExternalLink) {
        self.links.push(link);
    }

    /// Close the current region's range and move on to the next region.
    pub fn finish_region(&mut self) {
        let len = self.links.len() - self.region_start;
        self.ranges
            .push(Span::new(self.region_start as u32, len as u32));
        self.region_start = self.links.len();
    }

    /// Number of regions finished so far.
    pub fn region_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total links pushed so far.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The assembled links and per-region ranges.
    ///
    /// Links pushed after the last [`finish_region`](Self::finish_region)
    /// are discarded.
    pub fn into_parts(mut self) -> (Vec<ExternalLink>, Vec<Span>) {
        self.links.truncate(self.region_start);
        (self.links, self.ranges)
    }
}
