use proptest::prelude::*;
use strata_cube::{Cube, build_mesh, crossed_edges, cube_polygons};
use strata_geom::Vec3;

fn arb_offset() -> impl Strategy<Value = Vec3> {
    // Integer world offsets on the doubled lattice, as the cube stream
    // decoder produces them.
    (0i32..=32, 0i32..=32, 0i32..=32)
        .prop_map(|(x, y, z)| Vec3::new((2 * x) as f32, (2 * y) as f32, (2 * z) as f32))
}

proptest! {
    // Loop degrees sum to the crossed-edge count for every pattern.
    #[test]
    fn degrees_sum_to_crossings(pattern in any::<u8>()) {
        let cube = Cube(pattern);
        let total: usize = cube_polygons(cube).iter().map(|p| p.len()).sum();
        prop_assert_eq!(total, crossed_edges(cube).len());
    }

    // A single translated cube always produces a well-formed mesh: one
    // vertex per distinct crossing point, all face indices in range.
    #[test]
    fn single_cube_mesh_is_well_formed(pattern in any::<u8>(), offset in arb_offset()) {
        let mesh = build_mesh([(Cube(pattern), offset)]).unwrap();

        let expected_faces: usize =
            cube_polygons(Cube(pattern)).iter().map(|p| p.len() - 2).sum();
        prop_assert_eq!(mesh.faces.len(), expected_faces);

        for f in &mesh.faces {
            for &i in f {
                prop_assert!((i as usize) < mesh.vertices.len());
            }
        }
        for (i, v) in mesh.vertices.iter().enumerate() {
            for w in &mesh.vertices[i + 1..] {
                prop_assert_ne!(v, w);
            }
        }
    }

    // Translating a cube translates its mesh and nothing else.
    #[test]
    fn mesh_translates_with_offset(pattern in any::<u8>(), offset in arb_offset()) {
        let base = build_mesh([(Cube(pattern), Vec3::ZERO)]).unwrap();
        let moved = build_mesh([(Cube(pattern), offset)]).unwrap();

        prop_assert_eq!(&base.faces, &moved.faces);
        prop_assert_eq!(base.vertices.len(), moved.vertices.len());
        for (v, w) in base.vertices.iter().zip(&moved.vertices) {
            prop_assert_eq!(*v + offset, *w);
        }
    }
}
