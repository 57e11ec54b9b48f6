//! Fixed adjacency tables for the unit cube on the doubled lattice.
//!
//! Corner, edge and face numbering must agree across every table here and
//! with the grid sampler's corner extraction; all geometry below derives
//! from the corner convention documented on [`crate::Cube`].

use strata_geom::Vec3;

pub const EDGE_COUNT: usize = 12;

/// Corner positions. Coordinates are doubled so edge midpoints land on
/// whole integers.
pub(crate) const CORNER_POINTS: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 2.0),
    Vec3::new(0.0, 0.0, 2.0),
    Vec3::new(0.0, 2.0, 0.0),
    Vec3::new(2.0, 2.0, 0.0),
    Vec3::new(2.0, 2.0, 2.0),
    Vec3::new(0.0, 2.0, 2.0),
];

/// Midpoint of each edge; the only points the extractor ever emits.
pub(crate) const EDGE_POINTS: [Vec3; EDGE_COUNT] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 2.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 2.0, 0.0),
    Vec3::new(2.0, 2.0, 1.0),
    Vec3::new(1.0, 2.0, 2.0),
    Vec3::new(0.0, 2.0, 1.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(2.0, 1.0, 0.0),
    Vec3::new(2.0, 1.0, 2.0),
    Vec3::new(0.0, 1.0, 2.0),
];

/// Corner pair bounding each edge.
pub(crate) const EDGE_CORNERS: [(u8, u8); EDGE_COUNT] = [
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

/// Corner quad of each face, in ring order.
pub(crate) const FACE_CORNERS: [[u8; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [4, 5, 6, 7],
];

/// The two faces incident to each edge.
pub(crate) const EDGE_FACES: [(u8, u8); EDGE_COUNT] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (5, 1),
    (5, 2),
    (5, 3),
    (5, 4),
    (4, 1),
    (1, 2),
    (2, 3),
    (3, 4),
];

/// Midpoint of edge `edge` in local cube coordinates.
#[inline]
pub fn edge_point(edge: u8) -> Vec3 {
    EDGE_POINTS[edge as usize]
}

/// Corner position `corner` in local cube coordinates.
#[inline]
pub fn corner_point(corner: u8) -> Vec3 {
    CORNER_POINTS[corner as usize]
}

/// Corner pair bounding edge `edge`.
#[inline]
pub fn edge_corners(edge: u8) -> (u8, u8) {
    EDGE_CORNERS[edge as usize]
}

/// Face shared by two edges, if any.
pub(crate) fn common_face(e1: u8, e2: u8) -> Option<u8> {
    let (f11, f12) = EDGE_FACES[e1 as usize];
    let (f21, f22) = EDGE_FACES[e2 as usize];

    if f11 == f21 || f11 == f22 {
        Some(f11)
    } else if f12 == f21 || f12 == f22 {
        Some(f12)
    } else {
        None
    }
}

/// Corner shared by two edges, if any.
pub(crate) fn common_corner(e1: u8, e2: u8) -> Option<u8> {
    let (c11, c12) = EDGE_CORNERS[e1 as usize];
    let (c21, c22) = EDGE_CORNERS[e2 as usize];

    if c11 == c21 || c11 == c22 {
        Some(c11)
    } else if c12 == c21 || c12 == c22 {
        Some(c12)
    } else {
        None
    }
}

/// Inverse of [`edge_point`] by exact coordinate match.
pub(crate) fn edge_point_index(p: Vec3) -> Option<u8> {
    EDGE_POINTS.iter().position(|&ep| ep == p).map(|i| i as u8)
}
