//! Straight-line walkability checks across surface regions.

use glam::Vec3;

use navtk_core::RegionId;
use navtk_geometry::{nearest_point_on_lines, project_onto_plane};

use crate::area::NavAreaData;
use crate::surface::NavSurface;

/// Whether the straight path from `start` to `goal` can be walked across
/// `surface`'s regions, starting in region index `start_region` and ending
/// in the region with id `goal_region`. Positions are in local space.
///
/// The walk follows internal links. A link is taken only if the
/// destination region's up direction is within `angle_limit_dot` of the
/// start region's (`up_next · up_start >= angle_limit_dot`) and the path
/// crosses one of the link's shared edges at a path parameter strictly
/// between the current progress and 1. Of the usable crossings the one
/// with the smallest parameter is taken, so progress only increases. The
/// check fails when no link qualifies before the goal region is reached.
///
/// Crossings are computed after projecting the path and the edges onto
/// the plane perpendicular to the start region's up direction.
#[track_caller]
pub fn surface_path_check(
    surface: &NavSurface,
    start_region: usize,
    start: Vec3,
    goal_region: RegionId,
    goal: Vec3,
    angle_limit_dot: f32,
) -> bool {
    let up = surface.region(start_region).up.normalize_or_zero();
    let path_origin = project_onto_plane(start, up);
    let path_dir = project_onto_plane(goal - start, up);
    let vertices = surface.vertices();

    let mut current = start_region;
    let mut progress = 0.0f32;
    loop {
        if surface.region_id(current) == goal_region {
            return true;
        }

        let mut next: Option<(f32, usize)> = None;
        for link in surface.region_internal_links(current) {
            let to = link.to_region as usize;
            if surface.region(to).up.dot(up) < angle_limit_dot {
                continue;
            }
            for edge in surface.link_edges(link).chunks_exact(2) {
                let a = vertices[edge[0] as usize];
                let b = vertices[edge[1] as usize];
                let Some(approach) = nearest_point_on_lines(
                    path_origin,
                    path_dir,
                    project_onto_plane(a, up),
                    project_onto_plane(b - a, up),
                ) else {
                    continue;
                };
                let s = approach.t_a;
                let on_edge = (0.0..=1.0).contains(&approach.t_b);
                if on_edge && s > progress && s < 1.0 && next.is_none_or(|(best, _)| s < best) {
                    next = Some((s, to));
                }
            }
        }

        match next {
            Some((s, to)) => {
                progress = s;
                current = to;
            }
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::strip_parts;

    const START: Vec3 = Vec3::new(0.5, 0.0, 0.5);

    #[test]
    fn crossing_a_shared_edge_reaches_the_goal() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let goal = Vec3::new(1.5, 0.0, 0.4);
        assert!(surface_path_check(&surface, 0, START, RegionId(21), goal, 0.9));
    }

    #[test]
    fn start_region_is_already_the_goal() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let goal = Vec3::new(0.9, 0.0, 0.1);
        assert!(surface_path_check(&surface, 0, START, RegionId(20), goal, 1.0));
    }

    #[test]
    fn angle_limit_blocks_tilted_region() {
        let surface = NavSurface::from_parts(strip_parts(1.0)).unwrap();
        let goal = Vec3::new(1.5, 0.5, 0.5);
        assert!(!surface_path_check(&surface, 0, START, RegionId(21), goal, 1.0));
        assert!(surface_path_check(&surface, 0, START, RegionId(21), goal, 0.5));
    }

    #[test]
    fn path_missing_the_shared_edge_fails() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        // Leaves region 0 through its z = 1 side, away from the shared edge.
        let goal = Vec3::new(1.5, 0.0, 3.0);
        assert!(!surface_path_check(&surface, 0, START, RegionId(21), goal, 0.0));
    }

    #[test]
    fn goal_short_of_the_edge_fails() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let goal = Vec3::new(0.8, 0.0, 0.5);
        assert!(!surface_path_check(&surface, 0, START, RegionId(21), goal, 0.0));
    }

    #[test]
    fn unknown_goal_id_fails() {
        let surface = NavSurface::from_parts(strip_parts(0.0)).unwrap();
        let goal = Vec3::new(1.5, 0.0, 0.5);
        assert!(!surface_path_check(&surface, 0, START, RegionId(99), goal, 0.0));
    }
}
