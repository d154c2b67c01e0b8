//! Integration test: bakes stop when their cancel flag is raised.

use std::cell::Cell;

use navtk_bake::{bake_surface, bake_volume, BakeConfig, BakeError};
use navtk_core::CancelFlag;
use navtk_test_utils::{flat_grid, two_cell_box};

#[test]
fn pre_cancelled_bakes_fail_immediately() {
    let cancel = CancelFlag::new();
    cancel.cancel();

    let grid = flat_grid(3);
    let surface = bake_surface(&grid.mesh, |t| grid.region_of(t), &BakeConfig::default(), &cancel);
    assert!(matches!(surface, Err(BakeError::Cancelled)));

    let cells = two_cell_box();
    let volume = bake_volume(&cells.mesh, |t| cells.regions_of(t), &BakeConfig::default(), &cancel);
    assert!(matches!(volume, Err(BakeError::Cancelled)));
}

#[test]
fn cancelling_mid_bake_stops_at_the_next_poll() {
    let cancel = CancelFlag::new();
    let seen = Cell::new(0usize);
    let grid = flat_grid(4);
    let config = BakeConfig::default().with_cancel_poll_interval(1);

    let result = bake_surface(
        &grid.mesh,
        |t| {
            seen.set(seen.get() + 1);
            if t == 2 {
                cancel.cancel();
            }
            grid.region_of(t)
        },
        &config,
        &cancel,
    );
    assert!(matches!(result, Err(BakeError::Cancelled)));
    assert_eq!(seen.get(), 3);
}

#[test]
fn reset_flag_allows_a_fresh_bake() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    cancel.reset();
    let grid = flat_grid(2);
    let surface = bake_surface(&grid.mesh, |t| grid.region_of(t), &BakeConfig::default(), &cancel)
        .unwrap();
    assert_eq!(surface.triangle_indices().len(), grid.mesh.indices.len());
}
