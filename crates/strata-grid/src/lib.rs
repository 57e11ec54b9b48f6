//! Occupancy grid: lattice-point storage, strided sampling with boundary
//! duplication, and per-cell cube pattern extraction.
#![forbid(unsafe_code)]

use strata_cube::Cube;

/// Number of grid points one sampled source dimension collapses to.
///
/// A source axis of `n` points sampled every `spacing - 1` steps keeps its
/// two boundary points plus the interior samples.
#[inline]
fn real_dimension(source: usize, spacing: usize) -> usize {
    (source - 2) / (spacing - 1) + 2
}

/// Whether the stride misses the source's last layer, which then has to be
/// duplicated from its neighbor.
#[inline]
fn duplicated(source: usize, spacing: usize) -> bool {
    (source - 1) % (spacing - 1) != 0
}

/// Regular 3-D grid of filled/empty lattice points.
///
/// Axis convention follows the source image stack: x runs along a slice
/// row, y down a slice, z across slices. The cube stream encoder flips y
/// when assigning world offsets so that meshing's +y points up.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    w: usize,
    h: usize,
    d: usize,
    data: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(w: usize, h: usize, d: usize) -> Self {
        Self {
            w,
            h,
            d,
            data: vec![false; w * h * d],
        }
    }

    pub fn from_fn(
        w: usize,
        h: usize,
        d: usize,
        mut filled: impl FnMut(usize, usize, usize) -> bool,
    ) -> Self {
        let mut grid = Self::new(w, h, d);
        for z in 0..d {
            for y in 0..h {
                for x in 0..w {
                    let i = grid.idx(x, y, z);
                    grid.data[i] = filled(x, y, z);
                }
            }
        }
        grid
    }

    /// Builds a grid by sampling a `source`-sized point volume every
    /// `spacing - 1` steps, duplicating the last layer on axes where the
    /// stride misses it. Returns `None` when `spacing < 2` or any source
    /// axis is smaller than `spacing`.
    pub fn sampled(
        source: [usize; 3],
        spacing: usize,
        sample: impl Fn(usize, usize, usize) -> bool,
    ) -> Option<Self> {
        let [sw, sh, sd] = source;
        if spacing < 2 || sw < spacing || sh < spacing || sd < spacing {
            return None;
        }

        let mut grid = Self::new(
            real_dimension(sw, spacing),
            real_dimension(sh, spacing),
            real_dimension(sd, spacing),
        );
        let dup_x = duplicated(sw, spacing);
        let dup_y = duplicated(sh, spacing);
        let dup_z = duplicated(sd, spacing);
        let stride = spacing - 1;

        for z in 0..grid.d - dup_z as usize {
            for y in 0..grid.h - dup_y as usize {
                for x in 0..grid.w - dup_x as usize {
                    let i = grid.idx(x, y, z);
                    grid.data[i] = sample(x * stride, y * stride, z * stride);
                }
            }
        }

        grid.duplicate_boundaries([dup_x, dup_y, dup_z]);
        Some(grid)
    }

    /// Copies the second-to-last layer into the last one on each flagged
    /// axis, in x then y then z order so later passes see the earlier fills.
    fn duplicate_boundaries(&mut self, dup: [bool; 3]) {
        if dup[0] {
            for z in 0..self.d - dup[2] as usize {
                for y in 0..self.h - dup[1] as usize {
                    let src = self.idx(self.w - 2, y, z);
                    let dst = self.idx(self.w - 1, y, z);
                    self.data[dst] = self.data[src];
                }
            }
        }

        if dup[1] {
            for z in 0..self.d - dup[2] as usize {
                for x in 0..self.w {
                    let src = self.idx(x, self.h - 2, z);
                    let dst = self.idx(x, self.h - 1, z);
                    self.data[dst] = self.data[src];
                }
            }
        }

        if dup[2] {
            for y in 0..self.h {
                for x in 0..self.w {
                    let src = self.idx(x, y, self.d - 2);
                    let dst = self.idx(x, y, self.d - 1);
                    self.data[dst] = self.data[src];
                }
            }
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.w * (y + self.h * z)
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize, z: usize) -> bool {
        self.data[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, filled: bool) {
        let i = self.idx(x, y, z);
        self.data[i] = filled;
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.w, self.h, self.d]
    }

    /// Cubes per axis: one less than grid points per axis.
    #[inline]
    pub fn cube_count(&self) -> [usize; 3] {
        [self.w - 1, self.h - 1, self.d - 1]
    }

    /// Occupancy pattern of the cube whose lowest-index corner is (x,y,z).
    ///
    /// The grid's y axis points down (image rows), the cube convention's y
    /// points up, so corners 0..=3 read from grid row y+1.
    pub fn cube_at(&self, x: usize, y: usize, z: usize) -> Cube {
        let corners = [
            self.at(x, y + 1, z),
            self.at(x + 1, y + 1, z),
            self.at(x + 1, y + 1, z + 1),
            self.at(x, y + 1, z + 1),
            self.at(x, y, z),
            self.at(x + 1, y, z),
            self.at(x + 1, y, z + 1),
            self.at(x, y, z + 1),
        ];

        let mut bits = 0u8;
        for (i, &filled) in corners.iter().enumerate() {
            bits |= (filled as u8) << i;
        }
        Cube(bits)
    }

    /// All cube patterns in stream order: z-major, then y, x fastest.
    pub fn cubes(&self) -> Vec<Cube> {
        let [cx, cy, cz] = self.cube_count();
        let mut cubes = Vec::with_capacity(cx * cy * cz);

        for z in 0..cz {
            for y in 0..cy {
                for x in 0..cx {
                    cubes.push(self.cube_at(x, y, z));
                }
            }
        }

        cubes
    }
}
