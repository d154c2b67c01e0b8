//! Input meshes.

use glam::Vec3;

use navtk_core::Bounds;

use crate::error::BakeError;

/// An indexed triangle mesh in the area's local space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Three vertex indices per triangle.
    pub indices: Vec<u32>,
}

impl SourceMesh {
    /// A mesh from raw parts. Call [`validate`](Self::validate) before use.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `triangle`.
    pub fn triangle(&self, triangle: usize) -> [u32; 3] {
        let i = triangle * 3;
        [self.indices[i], self.indices[i + 1], self.indices[i + 2]]
    }

    /// Vertex positions of triangle `triangle`.
    pub fn triangle_positions(&self, triangle: usize) -> [Vec3; 3] {
        self.triangle(triangle).map(|v| self.vertices[v as usize])
    }

    /// Bounds of every vertex.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.vertices.iter().copied())
    }

    /// Check that the mesh can be baked.
    pub fn validate(&self) -> Result<(), BakeError> {
        if self.indices.len() % 3 != 0 {
            return Err(BakeError::InvalidMesh {
                reason: format!("index count {} is not a multiple of 3", self.indices.len()),
            });
        }
        if u32::try_from(self.vertices.len()).is_err() {
            return Err(BakeError::InvalidMesh {
                reason: format!("{} vertices exceed the u32 index range", self.vertices.len()),
            });
        }
        if let Some(v) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(BakeError::InvalidMesh {
                reason: format!("vertex {v} is not finite"),
            });
        }
        if let Some(i) = self
            .indices
            .iter()
            .position(|&i| i as usize >= self.vertices.len())
        {
            return Err(BakeError::InvalidMesh {
                reason: format!(
                    "index {} at position {i} out of range for {} vertices",
                    self.indices[i],
                    self.vertices.len()
                ),
            });
        }
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(BakeError::InvalidMesh {
                    reason: format!("triangle {t} repeats a vertex"),
                });
            }
        }
        Ok(())
    }
}
