//! Outward-normal correction, the 256-slot per-pattern mesh cache and the
//! per-cube extraction driver.

use log::debug;
use strata_geom::{Vec3, triple_product};
use strata_mesh::{Mesh, MeshBuilder, Triangle, TriangulateError};
use thiserror::Error;

use crate::Cube;
use crate::polygons::cube_polygons;
use crate::tables::{CORNER_POINTS, EDGE_POINTS, edge_point_index};

#[derive(Debug, Error, PartialEq)]
pub enum CubeMeshError {
    #[error(transparent)]
    Triangulate(#[from] TriangulateError),
    /// Every triangulated vertex must be one of the 12 edge midpoints;
    /// anything else means the extractor produced foreign geometry.
    #[error("vertex {0:?} is not a cube edge midpoint")]
    NotAnEdgePoint(Vec3),
}

/// Local (cube-relative) triangles of one pattern, as edge-midpoint indices.
pub type LocalTriangles = Vec<[u8; 3]>;

/// Direction from `p` toward the nearest empty cube corner, or `None` when
/// every corner is filled.
fn toward_nearest_empty(cube: Cube, p: Vec3) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;

    for (corner, &cp) in CORNER_POINTS.iter().enumerate() {
        if cube.filled(corner as u8) {
            continue;
        }
        let dist = (p - cp).length_squared();
        if best.is_none_or(|(d, _)| dist < d) {
            best = Some((dist, cp));
        }
    }

    best.map(|(_, cp)| cp - p)
}

/// Reorders each triangle of a local cube mesh so its normal points away
/// from the filled region.
///
/// Per-triangle local correction, independent across triangles, idempotent.
/// A fully filled cube has no empty corner to orient against; such
/// triangles are left untouched (the pattern also has no crossed edges, so
/// extraction never reaches this case).
pub fn fix_normals(cube: Cube, mesh: &mut Mesh) {
    for face in &mut mesh.faces {
        let p0 = mesh.vertices[face[0] as usize];
        let e1 = mesh.vertices[face[1] as usize] - p0;
        let e2 = mesh.vertices[face[2] as usize] - p0;
        let Some(outward) = toward_nearest_empty(cube, p0) else {
            continue;
        };
        if triple_product(e1, e2, outward) < 0.0 {
            face.swap(1, 2);
        }
    }
}

fn compute_local_triangles(cube: Cube) -> Result<LocalTriangles, CubeMeshError> {
    let mut mb = MeshBuilder::new();
    for poly in cube_polygons(cube) {
        mb.insert_polygon(&poly)?;
    }

    let mut mesh = mb.into_mesh();
    fix_normals(cube, &mut mesh);

    mesh.faces
        .iter()
        .map(|face| {
            let mut tri = [0u8; 3];
            for (slot, &vi) in tri.iter_mut().zip(face) {
                let p = mesh.vertices[vi as usize];
                *slot = edge_point_index(p).ok_or(CubeMeshError::NotAnEdgePoint(p))?;
            }
            Ok(tri)
        })
        .collect()
}

/// Memoizes the local triangle list per occupancy pattern so the
/// classify/extract/triangulate/orient pipeline runs at most once for each
/// of the 256 patterns. Populated on demand, never evicted.
pub struct CubeMesher {
    patterns: [Option<LocalTriangles>; 256],
}

impl Default for CubeMesher {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeMesher {
    pub fn new() -> Self {
        Self {
            patterns: [const { None }; 256],
        }
    }

    /// Cached local triangles for `cube`, computed on first use.
    pub fn local_triangles(&mut self, cube: Cube) -> Result<&[[u8; 3]], CubeMeshError> {
        let slot = cube.index();
        if self.patterns[slot].is_none() {
            let tris = compute_local_triangles(cube)?;
            debug!("pattern {:#010b}: {} local triangles", cube.0, tris.len());
            self.patterns[slot] = Some(tris);
        }
        Ok(self.patterns[slot].as_deref().unwrap_or(&[]))
    }

    /// World-space triangles for one grid cube translated to `offset`.
    pub fn triangles(&mut self, cube: Cube, offset: Vec3) -> Result<Vec<Triangle>, CubeMeshError> {
        let tris = self.local_triangles(cube)?;
        Ok(tris
            .iter()
            .map(|t| {
                [
                    EDGE_POINTS[t[0] as usize] + offset,
                    EDGE_POINTS[t[1] as usize] + offset,
                    EDGE_POINTS[t[2] as usize] + offset,
                ]
            })
            .collect())
    }
}

/// Runs the whole extraction over a cube stream in input order, merging
/// every translated triangle into one deduplicated mesh.
///
/// Input order is significant only for vertex numbering: the mesh shape is
/// the same for any order, but indices follow first insertion.
pub fn build_mesh<I>(cubes: I) -> Result<Mesh, CubeMeshError>
where
    I: IntoIterator<Item = (Cube, Vec3)>,
{
    let mut mesher = CubeMesher::new();
    let mut mb = MeshBuilder::new();
    let mut cube_count = 0usize;

    for (cube, offset) in cubes {
        cube_count += 1;
        for tri in mesher.triangles(cube, offset)? {
            mb.insert_triangle(&tri);
        }
    }

    debug!(
        "meshed {} cubes into {} vertices, {} faces",
        cube_count,
        mb.vertex_count(),
        mb.face_count()
    );
    Ok(mb.into_mesh())
}
