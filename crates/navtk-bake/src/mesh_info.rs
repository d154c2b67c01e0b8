//! Scratch mesh topology built while baking.
//!
//! These structures live for one bake pass: the bake routine fills them
//! while walking the source mesh, reads them back to assemble the baked
//! area, and drops them. Per-vertex lists are [`HybridIndexList`]s held in
//! a [`HybridListArray`], so dropping the info releases every list.

use glam::Vec3;
use indexmap::IndexMap;
use smallvec::SmallVec;

use navtk_collections::{HybridIndexList, HybridListArray};
use navtk_core::RegionId;

use crate::error::BakeError;

/// Inline capacity of the per-vertex lists. Typical manifold meshes have
/// six neighbours per vertex.
pub const VERTEX_LIST_CAPACITY: usize = 8;

/// Per-vertex adjacency and triangle membership of a triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshTopology {
    adjacency: HybridListArray<u32, VERTEX_LIST_CAPACITY>,
    vertex_triangles: HybridListArray<u32, VERTEX_LIST_CAPACITY>,
    triangle_indices: Vec<u32>,
    normals: Vec<Vec3>,
}

impl MeshTopology {
    /// Empty topology over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: HybridListArray::with_len(vertex_count),
            vertex_triangles: HybridListArray::with_len(vertex_count),
            triangle_indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of triangles added.
    pub fn triangle_count(&self) -> usize {
        self.normals.len()
    }

    /// Record triangle `tri` with unit normal `normal`, connecting its
    /// edges. Returns the new triangle's index.
    pub fn add_triangle(&mut self, tri: [u32; 3], normal: Vec3) -> u32 {
        let index = self.normals.len() as u32;
        self.triangle_indices.extend_from_slice(&tri);
        self.normals.push(normal);
        for (i, &v) in tri.iter().enumerate() {
            self.vertex_triangles.get_mut(v as usize).push(index);
            self.connect(v, tri[(i + 1) % 3]);
        }
        index
    }

    /// Mark `a` and `b` as neighbours. Repeated calls are no-ops.
    pub fn connect(&mut self, a: u32, b: u32) {
        self.adjacency.get_mut(a as usize).push_unique(b);
        self.adjacency.get_mut(b as usize).push_unique(a);
    }

    /// Neighbours of `vertex`.
    pub fn neighbors(&self, vertex: u32) -> &HybridIndexList<VERTEX_LIST_CAPACITY> {
        self.adjacency.get(vertex as usize)
    }

    /// Triangles that use `vertex`.
    pub fn triangles_of(&self, vertex: u32) -> &HybridIndexList<VERTEX_LIST_CAPACITY> {
        self.vertex_triangles.get(vertex as usize)
    }

    /// Vertex indices of `triangle`.
    pub fn triangle(&self, triangle: u32) -> [u32; 3] {
        let i = triangle as usize * 3;
        [
            self.triangle_indices[i],
            self.triangle_indices[i + 1],
            self.triangle_indices[i + 2],
        ]
    }

    /// Unit normal of `triangle`.
    pub fn normal(&self, triangle: u32) -> Vec3 {
        self.normals[triangle as usize]
    }

    /// All triangle vertex indices, three per triangle.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    /// Triangles that use both `a` and `b`, in insertion order.
    pub fn shared_edge_triangles(&self, a: u32, b: u32) -> SmallVec<[u32; 2]> {
        let with_b = self.triangles_of(b);
        self.triangles_of(a)
            .iter()
            .filter(|&t| with_b.contains(t))
            .collect()
    }
}

/// Topology of a surface mesh, plus each triangle's upright direction.
#[derive(Clone, Debug, Default)]
pub struct SurfaceMeshInfo {
    topology: MeshTopology,
    upright: Vec<Vec3>,
}

impl SurfaceMeshInfo {
    /// Empty info over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            topology: MeshTopology::new(vertex_count),
            upright: Vec::new(),
        }
    }

    /// Record a triangle with its normal and upright direction.
    pub fn add_triangle(&mut self, tri: [u32; 3], normal: Vec3, upright: Vec3) -> u32 {
        self.upright.push(upright);
        self.topology.add_triangle(tri, normal)
    }

    /// Upright direction of `triangle`.
    pub fn upright(&self, triangle: u32) -> Vec3 {
        self.upright[triangle as usize]
    }

    /// Shared adjacency and membership lists.
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }
}

/// Order-independent identity of a triangle: its vertex indices, sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleKey([u32; 3]);

impl TriangleKey {
    /// The key of triangle `tri`, in any winding.
    pub fn new(mut tri: [u32; 3]) -> Self {
        tri.sort_unstable();
        Self(tri)
    }

    /// The sorted vertex indices.
    pub fn vertices(&self) -> [u32; 3] {
        self.0
    }
}

/// Regions bordering a triangle, with the triangle's position in each
/// region's triangle list. A triangle borders at most two regions.
pub type RegionAssociation = SmallVec<[(RegionId, u32); 2]>;

/// Topology of a volume boundary mesh, plus which regions each triangle
/// borders.
#[derive(Clone, Debug, Default)]
pub struct VolumeMeshInfo {
    topology: MeshTopology,
    regions: IndexMap<TriangleKey, RegionAssociation>,
}

impl VolumeMeshInfo {
    /// Empty info over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            topology: MeshTopology::new(vertex_count),
            regions: IndexMap::new(),
        }
    }

    /// Record a triangle with its normal.
    pub fn add_triangle(&mut self, tri: [u32; 3], normal: Vec3) -> u32 {
        self.topology.add_triangle(tri, normal)
    }

    /// Record that `triangle` borders `region` and sits at
    /// `index_in_region` in that region's triangle list.
    ///
    /// Re-associating the same region updates its index. A third distinct
    /// region is rejected.
    pub fn associate(
        &mut self,
        triangle: u32,
        region: RegionId,
        index_in_region: u32,
    ) -> Result<(), BakeError> {
        let key = TriangleKey::new(self.topology.triangle(triangle));
        let entry = self.regions.entry(key).or_default();
        if let Some(existing) = entry.iter_mut().find(|(r, _)| *r == region) {
            existing.1 = index_in_region;
            return Ok(());
        }
        if entry.len() == 2 {
            return Err(BakeError::TooManyRegions {
                triangle: triangle as usize,
                region,
            });
        }
        entry.push((region, index_in_region));
        Ok(())
    }

    /// Regions bordering the triangle with vertices `tri`, in any winding.
    pub fn regions_of(&self, tri: [u32; 3]) -> &[(RegionId, u32)] {
        self.regions
            .get(&TriangleKey::new(tri))
            .map(|assoc| assoc.as_slice())
            .unwrap_or(&[])
    }

    /// Every associated triangle, in first-association order.
    pub fn associations(&self) -> impl Iterator<Item = (TriangleKey, &[(RegionId, u32)])> + '_ {
        self.regions.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Shared adjacency and membership lists.
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }
}
