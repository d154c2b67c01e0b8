//! Benchmark profiles for navtk.
//!
//! Provides pre-baked areas for the query benchmarks:
//!
//! - [`reference_surface`]: a 32x32 grid surface with one region per row
//! - [`reference_volume`]: two unit cells sharing a face

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use navtk_bake::{bake_surface, bake_volume, BakeConfig, BakeError};
use navtk_baked::{NavSurface, NavVolume};
use navtk_core::{AreaId, CancelFlag};
use navtk_test_utils::{flat_grid, two_cell_box};

/// Grid size of [`reference_surface`].
pub const REFERENCE_GRID: u32 = 32;

/// Bake the reference surface: a [`REFERENCE_GRID`]-square grid in the
/// y = 0 plane, one region per row.
pub fn reference_surface() -> Result<NavSurface, BakeError> {
    let fixture = flat_grid(REFERENCE_GRID);
    bake_surface(
        &fixture.mesh,
        |t| fixture.region_of(t),
        &BakeConfig::default().with_area_id(AreaId(1)),
        &CancelFlag::new(),
    )
}

/// Bake the reference volume: two unit cells along x.
pub fn reference_volume() -> Result<NavVolume, BakeError> {
    let fixture = two_cell_box();
    bake_volume(
        &fixture.mesh,
        |t| fixture.regions_of(t),
        &BakeConfig::default().with_area_id(AreaId(2)),
        &CancelFlag::new(),
    )
}
