//! Triangle mesh and collision geometry carried by scene nodes.
//!
//! Meshes are plain indexed triangle lists. Normals are not authored; they are
//! recomputed from the triangles after UV edits so generated surfaces always
//! shade consistently with their winding.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh with per-vertex UVs and normals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    /// Flat index list, three entries per triangle.
    pub triangles: Vec<u32>,
    #[serde(default)]
    pub uv: Vec<Vec2>,
    #[serde(default)]
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<u32>, uv: Vec<Vec2>) -> Self {
        let mut mesh = Mesh {
            vertices,
            triangles,
            uv,
            normals: Vec::new(),
        };
        mesh.recalculate_normals();
        mesh
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.triangles.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Multiply every UV coordinate componentwise.
    pub fn scale_uv(&mut self, factor: Vec2) {
        for uv in &mut self.uv {
            *uv *= factor;
        }
    }

    /// Add `offset` to every UV coordinate.
    pub fn offset_uv(&mut self, offset: Vec2) {
        for uv in &mut self.uv {
            *uv += offset;
        }
    }

    /// Rebuild per-vertex normals from triangle winding.
    ///
    /// Face normals are accumulated per vertex and normalized, so vertices
    /// shared between coplanar triangles get the face normal exactly.
    pub fn recalculate_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);

        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if a >= self.vertices.len() || b >= self.vertices.len() || c >= self.vertices.len() {
                continue;
            }
            let normal = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a]);
            self.normals[a] += normal;
            self.normals[b] += normal;
            self.normals[c] += normal;
        }

        for normal in &mut self.normals {
            *normal = normal.normalize_or_zero();
        }
    }
}

/// Triangle-soup collision shape.
///
/// Always derived from a render mesh so physics and visuals can never drift
/// apart; there is deliberately no way to author one independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

impl Collider {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Collider {
            vertices: mesh.vertices.clone(),
            triangles: mesh.triangles.clone(),
        }
    }
}
