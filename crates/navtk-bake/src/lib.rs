//! Baking source meshes into navtk areas.
//!
//! A bake walks a [`SourceMesh`] once, building scratch topology
//! ([`SurfaceMeshInfo`] or [`VolumeMeshInfo`]), then lays the result out as
//! an immutable [`NavSurface`](navtk_baked::NavSurface) or
//! [`NavVolume`](navtk_baked::NavVolume). The caller supplies the region
//! assignment per triangle; region discovery is not part of this crate.
//!
//! Bakes are synchronous and single-threaded. They poll a
//! [`CancelFlag`](navtk_core::CancelFlag) every
//! [`BakeConfig::cancel_poll_interval`] triangles and stop with
//! [`BakeError::Cancelled`] once it is set.
//!
//! Progress is reported through the `log` facade: a `debug!` summary per
//! bake, `trace!` per region, and `warn!` for skipped degenerate triangles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod assemble;
pub mod config;
pub mod error;
pub mod mesh_info;
pub mod source;
pub mod surface_bake;
pub mod volume_bake;

pub use config::BakeConfig;
pub use error::BakeError;
pub use mesh_info::{
    MeshTopology, RegionAssociation, SurfaceMeshInfo, TriangleKey, VolumeMeshInfo,
    VERTEX_LIST_CAPACITY,
};
pub use source::SourceMesh;
pub use surface_bake::bake_surface;
pub use volume_bake::{bake_volume, TriangleRegions, PLANE_MERGE_EPSILON};
