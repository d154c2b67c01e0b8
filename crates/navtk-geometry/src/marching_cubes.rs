//! Marching Cubes case indexing over a region lattice.
//!
//! Corner and edge numbering:
//!
//! ```text
//!        7 ──────── 6          corner i sits at origin + CORNER_OFFSETS[i]
//!       /|         /|          edge e joins EDGE_CORNERS[e].0 -> .1
//!      4 ──────── 5 |
//!      | 3 ───────|─ 2         y
//!      |/         |/           | z
//!      0 ──────── 1            |/__ x
//! ```
//!
//! A case index has bit `i` set when corner `i` belongs to the target
//! region. Corners outside the lattice are never set.

use glam::{IVec3, UVec3, Vec3, Vec4};

use navtk_core::check::check_index;
use navtk_core::RegionId;

/// Offsets of the eight cube corners from the cube origin.
pub const CORNER_OFFSETS: [IVec3; 8] = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(1, 0, 1),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 1, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(1, 1, 1),
    IVec3::new(0, 1, 1),
];

/// Corner pairs joined by each of the twelve cube edges.
pub const EDGE_CORNERS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A dense 3D grid of region ids sampled at integer lattice points.
#[derive(Clone, Debug)]
pub struct RegionLattice {
    size: UVec3,
    regions: Vec<RegionId>,
}

impl RegionLattice {
    /// A lattice of `size` points, all assigned `fill`.
    pub fn new(size: UVec3, fill: RegionId) -> Self {
        let len = (size.x as usize) * (size.y as usize) * (size.z as usize);
        Self {
            size,
            regions: vec![fill; len],
        }
    }

    /// A lattice whose region at each point is `f(point)`.
    pub fn from_fn(size: UVec3, mut f: impl FnMut(IVec3) -> RegionId) -> Self {
        let mut lattice = Self::new(size, RegionId(0));
        for z in 0..size.z as i32 {
            for y in 0..size.y as i32 {
                for x in 0..size.x as i32 {
                    let p = IVec3::new(x, y, z);
                    let i = lattice.linear_index(p);
                    lattice.regions[i] = f(p);
                }
            }
        }
        lattice
    }

    /// Lattice dimensions in points.
    pub fn size(&self) -> UVec3 {
        self.size
    }

    /// Whether `p` lies inside the lattice, checked per axis.
    pub fn in_bounds(&self, p: IVec3) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.z >= 0
            && (p.x as u32) < self.size.x
            && (p.y as u32) < self.size.y
            && (p.z as u32) < self.size.z
    }

    /// The region at `p`, or `None` outside the lattice.
    pub fn get(&self, p: IVec3) -> Option<RegionId> {
        self.in_bounds(p).then(|| self.regions[self.linear_index(p)])
    }

    /// Assign `region` to point `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the lattice.
    pub fn set(&mut self, p: IVec3, region: RegionId) {
        assert!(self.in_bounds(p), "lattice point {p} outside size {}", self.size);
        let i = self.linear_index(p);
        self.regions[i] = region;
    }

    fn linear_index(&self, p: IVec3) -> usize {
        let (sx, sy) = (self.size.x as usize, self.size.y as usize);
        (p.z as usize * sy + p.y as usize) * sx + p.x as usize
    }
}

fn case_index(lattice: &RegionLattice, origin: IVec3, matches: impl Fn(RegionId) -> bool) -> u8 {
    CORNER_OFFSETS
        .iter()
        .enumerate()
        .fold(0u8, |case, (bit, offset)| match lattice.get(origin + *offset) {
            Some(r) if matches(r) => case | (1 << bit),
            _ => case,
        })
}

/// Case index of the cube at `origin` for membership in `region`.
pub fn marching_cubes_index(lattice: &RegionLattice, origin: IVec3, region: RegionId) -> u8 {
    case_index(lattice, origin, |r| r == region)
}

/// Case index of the cube at `origin` for membership in either `a` or `b`.
pub fn marching_cubes_index_either(
    lattice: &RegionLattice,
    origin: IVec3,
    a: RegionId,
    b: RegionId,
) -> u8 {
    case_index(lattice, origin, |r| r == a || r == b)
}

/// Bit mask of the edges crossing the region boundary in `case`: bit `e`
/// is set when the two corners of edge `e` differ in membership.
pub fn active_edges(case: u8) -> u16 {
    EDGE_CORNERS
        .iter()
        .enumerate()
        .fold(0u16, |mask, (e, &(c0, c1))| {
            let in0 = case & (1 << c0) != 0;
            let in1 = case & (1 << c1) != 0;
            if in0 != in1 {
                mask | (1 << e)
            } else {
                mask
            }
        })
}

/// The vertex on edge `edge` of the cube at `origin` for `case`.
///
/// `xyz` is the edge midpoint in lattice coordinates. `w` is `+1` when the
/// edge runs from an outside corner into the region and `-1` when it runs
/// out of it. Returns `None` when the edge is not active in `case`.
///
/// # Panics
///
/// Panics if `edge >= 12` in checked builds.
pub fn marching_cubes_vertex(origin: IVec3, case: u8, edge: usize) -> Option<Vec4> {
    check_index(edge, EDGE_CORNERS.len());
    let &(c0, c1) = EDGE_CORNERS.get(edge)?;
    let in0 = case & (1 << c0) != 0;
    let in1 = case & (1 << c1) != 0;
    if in0 == in1 {
        return None;
    }
    let mid = origin.as_vec3() + (CORNER_OFFSETS[c0] + CORNER_OFFSETS[c1]).as_vec3() * 0.5;
    let sign = if in1 { 1.0 } else { -1.0 };
    Some(mid.extend(sign))
}

/// Unit axis that the edge of a Marching Cubes vertex runs along, scaled
/// by the vertex's sign.
///
/// The edge axis is the one coordinate of the vertex that sits halfway
/// between lattice points. Returns zero if no coordinate does.
pub fn normal_aligned_vector(vertex: Vec4) -> Vec3 {
    let pos = vertex.truncate();
    for (axis, unit) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().enumerate() {
        let c = pos[axis];
        if ((c - c.floor()) - 0.5).abs() < 1e-3 {
            return unit * vertex.w;
        }
    }
    Vec3::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const IN: RegionId = RegionId(1);
    const OUT: RegionId = RegionId(0);

    #[test]
    fn all_corners_in_region_is_255() {
        let lattice = RegionLattice::new(UVec3::splat(2), IN);
        assert_eq!(marching_cubes_index(&lattice, IVec3::ZERO, IN), 255);
    }

    #[test]
    fn all_corners_out_is_0() {
        let lattice = RegionLattice::new(UVec3::splat(2), OUT);
        assert_eq!(marching_cubes_index(&lattice, IVec3::ZERO, IN), 0);
    }

    #[test]
    fn out_of_bounds_corners_are_off() {
        let lattice = RegionLattice::new(UVec3::splat(2), IN);
        // Cube at (1,1,1) only has corner 0 inside the lattice.
        assert_eq!(marching_cubes_index(&lattice, IVec3::ONE, IN), 0b0000_0001);
        assert_eq!(marching_cubes_index(&lattice, IVec3::splat(-1), IN), 0b0100_0000);
    }

    #[test]
    fn either_overload_matches_both_regions() {
        let lattice = RegionLattice::from_fn(UVec3::splat(2), |p| RegionId(p.x + 1));
        assert_eq!(marching_cubes_index(&lattice, IVec3::ZERO, RegionId(1)), 0b1001_1001);
        assert_eq!(
            marching_cubes_index_either(&lattice, IVec3::ZERO, RegionId(1), RegionId(2)),
            255
        );
    }

    #[test]
    fn active_edges_of_single_corner() {
        // Corner 0 touches edges 0, 3 and 8.
        assert_eq!(active_edges(0b0000_0001), (1 << 0) | (1 << 3) | (1 << 8));
        assert_eq!(active_edges(0), 0);
        assert_eq!(active_edges(255), 0);
    }

    #[test]
    fn vertex_sign_follows_edge_direction() {
        // Only corner 1 is inside: edge 0 runs 0 -> 1, into the region.
        let v = marching_cubes_vertex(IVec3::new(2, 3, 4), 0b0000_0010, 0).unwrap();
        assert_eq!(v, Vec4::new(2.5, 3.0, 4.0, 1.0));
        // Edge 1 runs 1 -> 2, out of the region.
        let v = marching_cubes_vertex(IVec3::ZERO, 0b0000_0010, 1).unwrap();
        assert_eq!(v, Vec4::new(1.0, 0.0, 0.5, -1.0));
        // Edge 4 is inactive.
        assert!(marching_cubes_vertex(IVec3::ZERO, 0b0000_0010, 4).is_none());
    }

    #[test]
    fn normal_aligned_vector_picks_edge_axis() {
        assert_eq!(normal_aligned_vector(Vec4::new(2.5, 3.0, 4.0, 1.0)), Vec3::X);
        assert_eq!(normal_aligned_vector(Vec4::new(1.0, 0.0, 0.5, -1.0)), -Vec3::Z);
        assert_eq!(normal_aligned_vector(Vec4::new(0.0, 1.5, 0.0, -1.0)), -Vec3::Y);
        assert_eq!(normal_aligned_vector(Vec4::new(1.0, 1.0, 1.0, 1.0)), Vec3::ZERO);
    }

    #[test]
    fn every_active_edge_yields_a_vertex() {
        for case in 0..=255u8 {
            let mask = active_edges(case);
            for edge in 0..12 {
                let vertex = marching_cubes_vertex(IVec3::ZERO, case, edge);
                assert_eq!(vertex.is_some(), mask & (1 << edge) != 0);
                if let Some(v) = vertex {
                    assert_eq!(normal_aligned_vector(v).length(), 1.0);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn flipping_one_corner_flips_one_bit(
            membership in any::<u8>(),
            corner in 0usize..8,
        ) {
            let mut lattice = RegionLattice::new(UVec3::splat(2), OUT);
            for (bit, offset) in CORNER_OFFSETS.iter().enumerate() {
                if membership & (1 << bit) != 0 {
                    lattice.set(*offset, IN);
                }
            }
            let before = marching_cubes_index(&lattice, IVec3::ZERO, IN);
            prop_assert_eq!(before, membership);

            let p = CORNER_OFFSETS[corner];
            let flipped = if lattice.get(p) == Some(IN) { OUT } else { IN };
            lattice.set(p, flipped);
            let after = marching_cubes_index(&lattice, IVec3::ZERO, IN);
            prop_assert_eq!((before ^ after).count_ones(), 1);
            prop_assert_eq!(before ^ after, 1u8 << corner);
        }
    }
}
