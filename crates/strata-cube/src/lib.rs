//! Per-cube surface topology: classifies an 8-corner occupancy pattern,
//! extracts the closed crossing-point loops, triangulates them with
//! pattern-specific rules, orients windings outward and caches the result
//! per pattern.
#![forbid(unsafe_code)]

mod mesher;
mod polygons;
mod tables;

pub use mesher::{CubeMeshError, CubeMesher, LocalTriangles, build_mesh, fix_normals};
pub use polygons::{crossed_edges, cube_polygons};
pub use tables::{EDGE_COUNT, corner_point, edge_corners, edge_point};

/// 8-bit corner occupancy pattern; bit `i` set means corner `i` is filled.
///
/// The corner numbering is the fixed convention shared by every table in
/// this crate: corners 0..=3 ring the y = 0 face counter-clockwise starting
/// at the origin, corners 4..=7 the y = 2 face directly above them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cube(pub u8);

impl Cube {
    pub const EMPTY: Cube = Cube(0);
    pub const FULL: Cube = Cube(0xff);

    #[inline]
    pub fn filled(self, corner: u8) -> bool {
        (self.0 >> corner) & 1 == 1
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for Cube {
    #[inline]
    fn from(bits: u8) -> Self {
        Cube(bits)
    }
}
