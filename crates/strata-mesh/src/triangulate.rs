//! Splits the closed polygon loops coming out of cube extraction (3 to 7
//! vertices) into triangles with degree-specific rules.

use strata_geom::{Vec3, coplanar};
use thiserror::Error;

use crate::Triangle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriangulateError {
    /// Cube extraction only ever produces loops of 3 to 7 vertices; anything
    /// else means an upstream consistency bug.
    #[error("polygon has {0} vertices, expected 3 to 7")]
    InvalidDegree(usize),
    #[error("pentagon has no non-coplanar vertex")]
    NoPentagonApex,
    #[error("heptagon has no single mid-plane tip vertex")]
    NoHeptagonTip,
}

/// Wraps an index that stepped at most one polygon length out of range.
#[inline]
fn wrap(i: i32, len: i32) -> usize {
    i.rem_euclid(len) as usize
}

/// Finds the one pentagon vertex whose four remaining neighbors are
/// coplanar. Tries each exclusion in a fixed rotation order so the result
/// is deterministic when the pentagon is degenerate-flat.
fn pentagon_apex(poly: &[Vec3]) -> Option<usize> {
    const EXCLUDED: [usize; 5] = [4, 0, 1, 2, 3];
    let mut quad = [poly[0], poly[1], poly[2], poly[3]];

    for (i, &out) in EXCLUDED.iter().enumerate() {
        if coplanar(&quad) {
            return Some(out);
        }
        if i < 4 {
            quad[i] = poly[out];
        }
    }

    None
}

/// Finds the heptagon "tip": for exactly one axis, exactly one of the seven
/// local points sits on the cube's mid plane (coordinate == 1); that point
/// is the fan apex.
fn heptagon_tip(poly: &[Vec3]) -> Option<usize> {
    let coord = |p: &Vec3, axis: usize| match axis {
        0 => p.x,
        1 => p.y,
        _ => p.z,
    };

    let mut mid_counts = [0usize; 3];
    for p in poly {
        for (axis, count) in mid_counts.iter_mut().enumerate() {
            *count += (coord(p, axis) == 1.0) as usize;
        }
    }

    for (axis, &count) in mid_counts.iter().enumerate() {
        if count == 1 {
            return poly.iter().position(|p| coord(p, axis) == 1.0);
        }
    }

    None
}

/// Splits a closed polygon into `len - 2` triangles covering it exactly,
/// using only the polygon's own vertices.
pub fn divide_polygon(poly: &[Vec3]) -> Result<Vec<Triangle>, TriangulateError> {
    let at = |i: i32| poly[wrap(i, poly.len() as i32)];

    match poly.len() {
        3 => Ok(vec![[poly[0], poly[1], poly[2]]]),
        4 => Ok(vec![
            [poly[0], poly[1], poly[2]],
            [poly[2], poly[3], poly[0]],
        ]),
        5 => {
            let apex = pentagon_apex(poly).ok_or(TriangulateError::NoPentagonApex)? as i32;
            Ok(vec![
                [at(apex), at(apex + 1), at(apex - 1)],
                [at(apex + 1), at(apex + 2), at(apex - 2)],
                [at(apex + 1), at(apex - 2), at(apex - 1)],
            ])
        }
        // Structural split; hexagon loops from cube extraction always admit it.
        6 => Ok(vec![
            [poly[0], poly[1], poly[2]],
            [poly[3], poly[4], poly[5]],
            [poly[0], poly[3], poly[5]],
            [poly[0], poly[2], poly[3]],
        ]),
        7 => {
            let tip = heptagon_tip(poly).ok_or(TriangulateError::NoHeptagonTip)? as i32;
            Ok(vec![
                [at(tip), at(tip - 1), at(tip + 1)],
                [at(tip - 1), at(tip + 2), at(tip + 1)],
                [at(tip - 1), at(tip - 2), at(tip + 2)],
                [at(tip - 2), at(tip - 3), at(tip + 2)],
                [at(tip - 3), at(tip + 3), at(tip + 2)],
            ])
        }
        n => Err(TriangulateError::InvalidDegree(n)),
    }
}
