use proptest::prelude::*;
use strata_geom::{Vec3, triple_product};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn lattice_f32() -> impl Strategy<Value = f32> {
    // Half-integer lattice values, the only coordinates the mesher emits.
    (-64i32..=64).prop_map(|v| v as f32 * 0.5)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (lattice_f32(), lattice_f32(), lattice_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a + b == b + a
    #[test]
    fn add_commutes(a in arb_vec3(), b in arb_vec3()) {
        prop_assert_eq!(a + b, b + a);
    }

    // (a + b) - b == a exactly on the lattice
    #[test]
    fn sub_inverts_add(a in arb_vec3(), b in arb_vec3()) {
        prop_assert_eq!((a + b) - b, a);
    }

    // cross(a, b) is orthogonal to both inputs
    #[test]
    fn cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        prop_assert!(approx(c.dot(a), 0.0, 1e-2));
        prop_assert!(approx(c.dot(b), 0.0, 1e-2));
    }

    // Triple product is antisymmetric in its first two arguments
    #[test]
    fn triple_antisymmetric(a in arb_vec3(), b in arb_vec3(), c in arb_vec3()) {
        prop_assert!(approx(triple_product(a, b, c), -triple_product(b, a, c), 1e-2));
    }

    // length_squared is non-negative and zero only for the zero vector
    #[test]
    fn length_squared_positive(a in arb_vec3()) {
        let l = a.length_squared();
        prop_assert!(l >= 0.0);
        prop_assert_eq!(l == 0.0, a == Vec3::ZERO);
    }
}
