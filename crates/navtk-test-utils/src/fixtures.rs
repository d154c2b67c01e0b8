//! Fixture meshes.
//!
//! - [`flat_strip`]: a row of unit squares, one region per square.
//! - [`bent_strip`]: two squares whose second half rises, so the two
//!   regions have different normals.
//! - [`flat_grid`]: an `n x n` grid of squares, one region per row.
//! - [`unit_cube`]: a single-region volume.
//! - [`two_cell_box`]: two cubes sharing a face, one region each.

use glam::Vec3;
use smallvec::smallvec;

use navtk_bake::{SourceMesh, TriangleRegions};
use navtk_core::RegionId;

/// A surface mesh with one region per triangle.
#[derive(Clone, Debug)]
pub struct SurfaceFixture {
    pub mesh: SourceMesh,
    pub regions: Vec<RegionId>,
}

impl SurfaceFixture {
    /// Region of source triangle `t`.
    pub fn region_of(&self, t: usize) -> RegionId {
        self.regions[t]
    }
}

/// A volume boundary mesh with one or two regions per triangle.
#[derive(Clone, Debug)]
pub struct VolumeFixture {
    pub mesh: SourceMesh,
    pub regions: Vec<TriangleRegions>,
}

impl VolumeFixture {
    /// Regions bordered by source triangle `t`.
    pub fn regions_of(&self, t: usize) -> TriangleRegions {
        self.regions[t].clone()
    }
}

/// `squares` unit squares along +x in the y = 0 plane, facing +y.
/// Square `i` is region `i`.
pub fn flat_strip(squares: u32) -> SurfaceFixture {
    let mut vertices = Vec::new();
    for x in 0..=squares {
        vertices.push(Vec3::new(x as f32, 0.0, 0.0));
        vertices.push(Vec3::new(x as f32, 0.0, 1.0));
    }
    let mut indices = Vec::new();
    let mut regions = Vec::new();
    for x in 0..squares {
        let (a, b, c, d) = (2 * x, 2 * x + 1, 2 * x + 3, 2 * x + 2);
        indices.extend_from_slice(&[a, b, c, a, c, d]);
        regions.extend([RegionId(x as i32); 2]);
    }
    SurfaceFixture {
        mesh: SourceMesh::new(vertices, indices),
        regions,
    }
}

/// Two unit squares along +x. The first lies at y = 0; the second rises
/// from y = 0 at x = 1 to y = `rise` at x = 2. Regions 0 and 1.
pub fn bent_strip(rise: f32) -> SurfaceFixture {
    let mut fixture = flat_strip(2);
    fixture.mesh.vertices[4].y = rise;
    fixture.mesh.vertices[5].y = rise;
    fixture
}

/// An `n x n` grid of unit squares in the y = 0 plane. Row `z` is region
/// `z`.
pub fn flat_grid(n: u32) -> SurfaceFixture {
    let stride = n + 1;
    let mut vertices = Vec::new();
    for z in 0..=n {
        for x in 0..=n {
            vertices.push(Vec3::new(x as f32, 0.0, z as f32));
        }
    }
    let mut indices = Vec::new();
    let mut regions = Vec::new();
    for z in 0..n {
        for x in 0..n {
            let a = z * stride + x;
            let b = a + stride;
            let c = b + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
            regions.extend([RegionId(z as i32); 2]);
        }
    }
    SurfaceFixture {
        mesh: SourceMesh::new(vertices, indices),
        regions,
    }
}

/// Corners of `cells` unit cubes in a row along x. Vertex `4 * x + k`
/// lies on the plane at `x`.
fn box_vertices(cells: u32) -> Vec<Vec3> {
    let mut vertices = Vec::new();
    for x in 0..=cells {
        for (y, z) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            vertices.push(Vec3::new(x as f32, y, z));
        }
    }
    vertices
}

/// Outward-wound side faces (y and z) of cell `x` of a box from
/// [`box_vertices`].
fn cell_sides(x: u32) -> [[u32; 6]; 4] {
    let quad = |a: u32, b: u32, c: u32, d: u32| [a, b, c, a, c, d];
    let l = 4 * x;
    let r = l + 4;
    [
        quad(l, l + 1, r + 1, r),
        quad(l + 3, r + 3, r + 2, l + 2),
        quad(l, r, r + 3, l + 3),
        quad(l + 1, l + 2, r + 2, r + 1),
    ]
}

/// The x = `x` face of a box from [`box_vertices`], wound to face `-x`.
fn x_face(x: u32) -> [u32; 6] {
    let l = 4 * x;
    [l, l + 3, l + 2, l, l + 2, l + 1]
}

/// The unit cube `[0, 1]^3` as region 0.
pub fn unit_cube() -> VolumeFixture {
    let mut indices: Vec<u32> = cell_sides(0).into_iter().flatten().collect();
    indices.extend_from_slice(&x_face(0));
    // x = 1 faces +x
    let right = x_face(1);
    indices.extend_from_slice(&[right[0], right[2], right[1], right[3], right[5], right[4]]);
    let regions = vec![smallvec![RegionId(0)]; indices.len() / 3];
    VolumeFixture {
        mesh: SourceMesh::new(box_vertices(1), indices),
        regions,
    }
}

/// Two unit cubes `[0, 1]^3` and `[1, 2] x [0, 1]^2`, regions 0 and 1,
/// sharing the face at x = 1.
pub fn two_cell_box() -> VolumeFixture {
    let mut indices = Vec::new();
    let mut regions: Vec<TriangleRegions> = Vec::new();
    for (cell, region) in [(0u32, RegionId(0)), (1, RegionId(1))] {
        for quad in cell_sides(cell) {
            indices.extend_from_slice(&quad);
            regions.extend([smallvec![region], smallvec![region]]);
        }
    }
    indices.extend_from_slice(&x_face(0));
    regions.extend([smallvec![RegionId(0)], smallvec![RegionId(0)]]);
    let far = x_face(2);
    indices.extend_from_slice(&[far[0], far[2], far[1], far[3], far[5], far[4]]);
    regions.extend([smallvec![RegionId(1)], smallvec![RegionId(1)]]);
    indices.extend_from_slice(&x_face(1));
    regions.extend([
        smallvec![RegionId(0), RegionId(1)],
        smallvec![RegionId(0), RegionId(1)],
    ]);
    VolumeFixture {
        mesh: SourceMesh::new(box_vertices(2), indices),
        regions,
    }
}
