//! Baked navigation data and the runtime queries over it.
//!
//! A bake produces one immutable area per navigable space:
//!
//! - [`NavVolume`]: a 3D space split into convex regions bounded by
//!   triangles and planes. Triangles bordering empty space are *blocking*
//!   and are what raycasts hit.
//! - [`NavSurface`]: a walkable mesh split into regions, each with an up
//!   direction and island index.
//!
//! Each area owns its vertices, triangles, planes and links in flat arrays.
//! Regions and links refer into those arrays with [`Span`](navtk_core::Span)
//! ranges. The arrays sit behind an `Arc`, so areas are cheap to clone and
//! share across threads.
//!
//! Both area types implement [`NavAreaData`], the accessor set used by link
//! resolution. Resolving external links against neighbouring areas goes
//! through [`NavAreaData::with_external_links`], which returns a new area
//! and leaves the old one untouched.
//!
//! All query positions are in the area's local space unless a method says
//! otherwise.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod error;
pub mod link;
pub mod locate;
pub mod nearest;
pub mod path;
pub mod raycast;
pub mod region;
pub mod surface;
pub mod volume;

#[cfg(test)]
mod fixtures;

pub use area::NavAreaData;
pub use error::BakedDataError;
pub use link::{ExternalLink, ExternalLinkSet, InternalLink};
pub use locate::volume_region_containing;
pub use nearest::{
    nearest_point_on_surface, nearest_point_on_surface_region, nearest_point_on_triangles,
    nearest_point_on_volume, nearest_point_on_volume_region, RegionPoint,
};
pub use path::surface_path_check;
pub use raycast::{
    raycast_triangles, surface_raycast, volume_raycast, RaycastHit, RaycastMode, MIN_HIT_T,
};
pub use region::{RegionData, SurfaceRegion, VolumeRegion};
pub use surface::{NavSurface, SurfaceParts};
pub use volume::{NavVolume, VolumeParts};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn areas_are_shareable_across_threads() {
        assert_send_sync::<NavVolume>();
        assert_send_sync::<NavSurface>();
    }
}
