//! Binary cube stream codec.
//!
//! Format: three little-endian i64 cube counts (x, y, z), then one
//! occupancy pattern byte per cube, z-major with x fastest.
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};

use log::debug;
use strata_cube::Cube;
use strata_geom::Vec3;
use strata_grid::OccupancyGrid;
use thiserror::Error;

/// World-space length of one cube edge on the doubled lattice.
pub const CUBE_EDGE: f32 = 2.0;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Negative or overflowing cube counts in the header.
    #[error("cube stream header declares invalid cube count {0}")]
    BadDimensions(i64),
}

/// World offset of grid cube `(x, y, z)`.
///
/// The y axis flips against the cube count because slice rows grow
/// downward while mesh +y points up.
#[inline]
pub fn cube_offset(x: i64, y: i64, z: i64, count_y: i64) -> Vec3 {
    Vec3::new(
        x as f32 * CUBE_EDGE,
        (count_y - y - 1) as f32 * CUBE_EDGE,
        z as f32 * CUBE_EDGE,
    )
}

fn read_i64<R: Read>(r: &mut R) -> io::Result<i64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}

/// Decodes a cube stream into `(pattern, world offset)` records in stream
/// order. Truncated input surfaces as an unexpected-EOF io error.
pub fn read_cubes<R: Read>(r: &mut R) -> Result<Vec<(Cube, Vec3)>, ReadError> {
    let count_x = read_i64(r)?;
    let count_y = read_i64(r)?;
    let count_z = read_i64(r)?;

    let total = [count_x, count_y, count_z]
        .into_iter()
        .try_fold(1i64, |acc, n| {
            if n < 0 {
                return Err(ReadError::BadDimensions(n));
            }
            acc.checked_mul(n)
                .ok_or(ReadError::BadDimensions(i64::MAX))
        })?;

    // Cap the preallocation so a hostile header cannot force a huge
    // up-front reservation; the payload read still bounds the real size.
    let mut cubes = Vec::with_capacity((total as usize).min(1 << 20));
    let mut byte = [0u8; 1];

    for z in 0..count_z {
        for y in 0..count_y {
            for x in 0..count_x {
                r.read_exact(&mut byte)?;
                cubes.push((Cube(byte[0]), cube_offset(x, y, z, count_y)));
            }
        }
    }

    debug!("read {} cubes ({count_x} x {count_y} x {count_z})", cubes.len());
    Ok(cubes)
}

/// Encodes `grid` as a cube stream.
pub fn write_cubes<W: Write>(w: &mut W, grid: &OccupancyGrid) -> io::Result<()> {
    let counts = grid.cube_count();
    for count in counts {
        w.write_all(&(count as i64).to_le_bytes())?;
    }
    for cube in grid.cubes() {
        w.write_all(&[cube.0])?;
    }

    debug!(
        "wrote {} cubes ({} x {} x {})",
        counts.iter().product::<usize>(),
        counts[0],
        counts[1],
        counts[2]
    );
    Ok(())
}
