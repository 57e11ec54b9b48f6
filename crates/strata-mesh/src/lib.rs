//! Mesh data model: deduplicated vertex/face lists, polygon triangulation
//! and ASCII PLY output.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use strata_geom::Vec3;

pub mod ply;
mod triangulate;

pub use triangulate::{TriangulateError, divide_polygon};

/// Three points in winding order; the output primitive.
pub type Triangle = [Vec3; 3];

/// Closed loop of edge-crossing points in connectivity order.
pub type Polygon = Vec<Vec3>;

/// Unique vertex list plus faces referencing it by index.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Accumulates triangles into a mesh, merging coordinate-equal vertices.
#[derive(Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    index: HashMap<[u32; 3], u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `p`, appending it on first occurrence.
    ///
    /// Keyed on the raw f32 bit patterns. Every coordinate the extractor
    /// emits is a non-negative half-integer lattice value plus an integer
    /// offset, so bitwise equality coincides with value equality and no
    /// +0.0/-0.0 split can occur.
    pub fn insert_vertex(&mut self, p: Vec3) -> u32 {
        let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.vertices.len() as u32;
        self.vertices.push(p);
        self.index.insert(key, i);
        i
    }

    pub fn insert_triangle(&mut self, tri: &Triangle) {
        let face = [
            self.insert_vertex(tri[0]),
            self.insert_vertex(tri[1]),
            self.insert_vertex(tri[2]),
        ];
        self.faces.push(face);
    }

    /// Triangulates `poly` and inserts the resulting triangles.
    pub fn insert_polygon(&mut self, poly: &[Vec3]) -> Result<(), TriangulateError> {
        for tri in divide_polygon(poly)? {
            self.insert_triangle(&tri);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.index.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Snapshot of the mesh built so far.
    pub fn mesh(&self) -> Mesh {
        Mesh {
            vertices: self.vertices.clone(),
            faces: self.faces.clone(),
        }
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            faces: self.faces,
        }
    }
}
