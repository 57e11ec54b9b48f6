use strata_cube::Cube;
use strata_grid::OccupancyGrid;

#[test]
fn set_and_at_round_trip() {
    let mut grid = OccupancyGrid::new(3, 4, 5);
    assert!(!grid.at(1, 2, 3));
    grid.set(1, 2, 3, true);
    assert!(grid.at(1, 2, 3));
    assert!(!grid.at(1, 2, 2));
    assert_eq!(grid.dims(), [3, 4, 5]);
}

#[test]
fn cube_count_is_dims_minus_one() {
    let grid = OccupancyGrid::new(3, 4, 5);
    assert_eq!(grid.cube_count(), [2, 3, 4]);
}

#[test]
fn cube_corner_bits_follow_the_image_convention() {
    // Corner 4 is the cube's (x, y, z) grid point; corners 0..=3 sit one
    // grid row below in image space (y + 1).
    let mut grid = OccupancyGrid::new(2, 2, 2);
    grid.set(0, 0, 0, true);
    assert_eq!(grid.cube_at(0, 0, 0), Cube(1 << 4));

    let mut grid = OccupancyGrid::new(2, 2, 2);
    grid.set(0, 1, 0, true);
    assert_eq!(grid.cube_at(0, 0, 0), Cube(1 << 0));

    let mut grid = OccupancyGrid::new(2, 2, 2);
    grid.set(1, 1, 1, true);
    assert_eq!(grid.cube_at(0, 0, 0), Cube(1 << 2));

    let mut grid = OccupancyGrid::new(2, 2, 2);
    grid.set(1, 0, 1, true);
    assert_eq!(grid.cube_at(0, 0, 0), Cube(1 << 6));
}

#[test]
fn cubes_stream_in_z_y_x_order() {
    // 3x2x2 points -> 2x1x1 cubes; mark distinct corners to tell them apart.
    let grid = OccupancyGrid::from_fn(3, 2, 2, |x, y, z| x == 0 && y == 0 && z == 0);
    let cubes = grid.cubes();
    assert_eq!(cubes.len(), 2);
    // The filled point (0,0,0) is corner 4 of cube 0 and no corner of cube 1.
    assert_eq!(cubes[0], Cube(1 << 4));
    assert_eq!(cubes[1], Cube(0));
}

#[test]
fn identity_sampling_with_spacing_two() {
    let grid = OccupancyGrid::sampled([3, 3, 3], 2, |x, y, z| x + y + z == 3).unwrap();
    assert_eq!(grid.dims(), [3, 3, 3]);
    for z in 0..3 {
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(grid.at(x, y, z), x + y + z == 3);
            }
        }
    }
}

#[test]
fn strided_sampling_hits_every_other_point() {
    // Source 5 points, spacing 3: samples at 0, 2, 4; divides exactly.
    let grid = OccupancyGrid::sampled([5, 5, 5], 3, |x, y, z| x == 2 && y == 0 && z == 0).unwrap();
    assert_eq!(grid.dims(), [3, 3, 3]);
    assert!(grid.at(1, 0, 0));
    assert!(!grid.at(0, 0, 0));
    assert!(!grid.at(2, 0, 0));
}

#[test]
fn non_divisible_axis_duplicates_its_last_layer() {
    // Source 6 points, spacing 3: stride 2 misses index 5, so the grid gets
    // an extra x layer copied from its neighbor.
    let grid = OccupancyGrid::sampled([6, 5, 5], 3, |x, _, _| x == 4).unwrap();
    assert_eq!(grid.dims(), [4, 3, 3]);
    for z in 0..3 {
        for y in 0..3 {
            assert!(grid.at(2, y, z), "sampled layer");
            assert!(grid.at(3, y, z), "duplicated layer");
            assert!(!grid.at(0, y, z));
            assert!(!grid.at(1, y, z));
        }
    }
}

#[test]
fn source_smaller_than_spacing_is_rejected() {
    assert!(OccupancyGrid::sampled([2, 5, 5], 3, |_, _, _| true).is_none());
    assert!(OccupancyGrid::sampled([5, 5, 2], 3, |_, _, _| true).is_none());
    assert!(OccupancyGrid::sampled([3, 3, 3], 2, |_, _, _| true).is_some());
}

#[test]
fn degenerate_spacing_is_rejected() {
    // A stride of spacing - 1 needs spacing >= 2 to advance at all.
    assert!(OccupancyGrid::sampled([3, 3, 3], 0, |_, _, _| true).is_none());
    assert!(OccupancyGrid::sampled([3, 3, 3], 1, |_, _, _| true).is_none());
}
