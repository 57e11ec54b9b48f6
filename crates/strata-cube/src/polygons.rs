//! Crossed-edge classification and polygon-loop extraction.

use strata_mesh::Polygon;

use crate::Cube;
use crate::tables::{EDGE_CORNERS, EDGE_POINTS, FACE_CORNERS, common_corner, common_face};

/// Indices of the edges whose endpoint corners differ in occupancy.
pub fn crossed_edges(cube: Cube) -> Vec<u8> {
    EDGE_CORNERS
        .iter()
        .enumerate()
        .filter(|&(_, &(a, b))| cube.filled(a) != cube.filled(b))
        .map(|(i, _)| i as u8)
        .collect()
}

/// Occupancy of a face's four corners as a 4-bit ring pattern.
fn face_layout(cube: Cube, face: u8) -> u8 {
    let mut layout = 0u8;
    for (i, &corner) in FACE_CORNERS[face as usize].iter().enumerate() {
        layout |= (cube.filled(corner) as u8) << i;
    }
    layout
}

/// Whether the surface may continue from edge `from` to edge `to` across
/// their shared face.
///
/// A face with two filled corners is ambiguous: when the edges meet in a
/// corner the continuation is valid only if that corner is filled; when
/// they sit on opposite sides, the diagonal ("checkerboard") layout means
/// two disjoint surface sheets that must not be joined.
fn valid_continuation(from: u8, to: u8, face: u8, cube: Cube) -> bool {
    match face_layout(cube, face).count_ones() {
        1 | 3 => true,
        2 => match common_corner(from, to) {
            Some(corner) => cube.filled(corner),
            None => !matches!(face_layout(cube, face), 0b0101 | 0b1010),
        },
        _ => false,
    }
}

/// Assembles the crossed edges of `cube` into closed polygon loops, each
/// crossing point appearing in exactly one loop.
///
/// Fixed-point walk: starting from the lowest unprocessed edge, every round
/// sweeps the remaining edges in ascending index order and appends each
/// valid continuation of the current tail; the loop is closed once a full
/// round adds nothing.
pub fn cube_polygons(cube: Cube) -> Vec<Polygon> {
    let edges = crossed_edges(cube);
    let mut polys: Vec<Polygon> = Vec::new();
    let mut processed = vec![false; edges.len()];
    let mut remaining = edges.len();

    while remaining > 0 {
        let Some(start) = processed.iter().position(|&done| !done) else {
            break;
        };
        processed[start] = true;
        remaining -= 1;

        let mut poly: Polygon = vec![EDGE_POINTS[edges[start] as usize]];
        let mut cur = start;

        loop {
            let mut added = 0;
            for i in 0..edges.len() {
                if processed[i] {
                    continue;
                }
                let Some(face) = common_face(edges[cur], edges[i]) else {
                    continue;
                };
                if valid_continuation(edges[cur], edges[i], face, cube) {
                    poly.push(EDGE_POINTS[edges[i] as usize]);
                    processed[i] = true;
                    remaining -= 1;
                    added += 1;
                    cur = i;
                }
            }
            if added == 0 {
                break;
            }
        }

        polys.push(poly);
    }

    polys
}
