//! Sample meshes and region assignments for navtk tests and benchmarks.
//!
//! Each fixture pairs a [`SourceMesh`](navtk_bake::SourceMesh) with the
//! per-triangle region assignment the bake routines expect.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    bent_strip, flat_grid, flat_strip, two_cell_box, unit_cube, SurfaceFixture, VolumeFixture,
};
