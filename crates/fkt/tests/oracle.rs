//! Property-based cross-checks of the FKT pipeline against exhaustive search.
//!
//! Random connected planar graphs come from `random_planar` (subgraphs of a
//! triangulated grid that keep a spanning tree), so every case is a valid
//! input. Properties:
//! - the count equals the brute-force count
//! - faces satisfy Euler's formula and cover every half-edge once
//! - every processed face ends up with an odd clockwise count
//! - exact and floating-point Pfaffians agree

use fkt::api::*;
use proptest::prelude::*;

fn planar_case() -> impl Strategy<Value = Graph> {
    (1usize..=4, 1usize..=4, 0.0f64..=1.0, any::<u64>())
        .prop_map(|(rows, cols, keep, seed)| random_planar(rows, cols, keep, seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn count_matches_brute_force(g in planar_case()) {
        let fkt = count_perfect_matchings(&g);
        prop_assert_eq!(fkt, Ok(count_perfect_matchings_brute(&g)));
    }

    #[test]
    fn faces_follow_euler(g in planar_case()) {
        let emb = PathAddition.embed(&g).unwrap();
        let faces = extract_faces(&g, &emb).unwrap();
        if g.edge_count() > 0 {
            prop_assert_eq!(faces.len() + g.vertex_count(), g.edge_count() + 2);
        }
        let walked: usize = faces.faces.iter().map(Face::len).sum();
        prop_assert_eq!(walked, 2 * g.edge_count());
    }

    #[test]
    fn processed_faces_are_odd(g in planar_case()) {
        let run = run_fkt(&g, &PathAddition, FktCfg::default()).unwrap();
        let o = &run.orientation;
        prop_assert!(o.oriented.is_complete());
        for &f in &o.processed {
            prop_assert_eq!(clockwise_count(&o.faces.faces[f], &o.oriented) % 2, 1);
        }
        prop_assert!(run.matrix.is_skew_symmetric());
    }

    #[test]
    fn float_lu_agrees_with_exact(g in planar_case()) {
        let exact = run_fkt(&g, &PathAddition, FktCfg::default()).unwrap().count;
        let float = run_fkt(&g, &PathAddition, FktCfg::float_lu()).unwrap().count;
        prop_assert_eq!(exact, float);
    }
}
