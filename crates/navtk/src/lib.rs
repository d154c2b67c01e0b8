//! navtk: navigation-mesh data structures, baking and spatial queries.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all navtk sub-crates. For most users, adding `navtk` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use navtk::prelude::*;
//!
//! // Two unit squares in the y = 0 plane, one region each.
//! let mesh = SourceMesh::new(
//!     vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(0.0, 0.0, 1.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 1.0),
//!         Vec3::new(2.0, 0.0, 0.0),
//!         Vec3::new(2.0, 0.0, 1.0),
//!     ],
//!     vec![0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4],
//! );
//! let surface = bake_surface(
//!     &mesh,
//!     |t| RegionId(t as i32 / 2),
//!     &BakeConfig::default(),
//!     &CancelFlag::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(surface.region_count(), 2);
//! assert!(surface_path_check(
//!     &surface,
//!     0,
//!     Vec3::new(0.5, 0.0, 0.5),
//!     RegionId(1),
//!     Vec3::new(1.5, 0.0, 0.5),
//!     0.9,
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `navtk-core` | Ids, spans, bounds, check switch, cancellation |
//! | [`collections`] | `navtk-collections` | Hybrid lists, spin lock, bounded queue |
//! | [`geometry`] | `navtk-geometry` | Geometry kernel and Marching Cubes indexer |
//! | [`baked`] | `navtk-baked` | Baked volumes and surfaces, runtime queries |
//! | [`bake`] | `navtk-bake` | Bake configuration, mesh intermediates, bake routines |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, ranges and switches (`navtk-core`).
///
/// Contains [`types::AreaId`], [`types::RegionId`], [`types::Span`],
/// [`types::Bounds`] and the [`types::CancelFlag`] observed by bakes.
pub use navtk_core as types;

/// Inline-first lists and the concurrent bounded queue (`navtk-collections`).
///
/// [`collections::HybridIndexList`] is the scratch list used by bakes;
/// [`collections::BoundedQueue`] can be shared across worker threads.
pub use navtk_collections as collections;

/// Pure geometry routines (`navtk-geometry`).
///
/// Nearest-point, intersection, plane and circle helpers, plus the
/// Marching Cubes case indexer over a [`geometry::RegionLattice`].
pub use navtk_geometry as geometry;

/// Baked areas and runtime queries (`navtk-baked`).
///
/// [`baked::NavVolume`] and [`baked::NavSurface`] share the
/// [`baked::NavAreaData`] accessor trait.
pub use navtk_baked as baked;

/// Bake routines (`navtk-bake`).
///
/// [`bake::bake_surface`] and [`bake::bake_volume`] turn a
/// [`bake::SourceMesh`] into a baked area.
pub use navtk_bake as bake;

/// The `glam` version navtk's public API is written against.
pub use glam;

/// Common imports for typical navtk usage.
///
/// ```rust
/// use navtk::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use glam::{Mat4, Vec3};

    // Core types
    pub use navtk_core::{AreaId, AreaKind, Bounds, CancelFlag, Layer, RegionId, Span};

    // Collections
    pub use navtk_collections::{BoundedQueue, HybridIndexList, HybridListArray};

    // Geometry
    pub use navtk_geometry::Plane;

    // Baked data and queries
    pub use navtk_baked::{
        nearest_point_on_surface, nearest_point_on_volume, surface_path_check, surface_raycast,
        volume_raycast, volume_region_containing, ExternalLink, ExternalLinkSet, NavAreaData,
        NavSurface, NavVolume, RaycastHit, RaycastMode,
    };

    // Baking
    pub use navtk_bake::{bake_surface, bake_volume, BakeConfig, SourceMesh};

    // Errors
    pub use navtk_bake::BakeError;
    pub use navtk_baked::BakedDataError;
    pub use navtk_core::CoreError;
}
