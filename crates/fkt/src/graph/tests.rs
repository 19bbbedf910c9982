use super::generators::*;
use super::*;
use crate::error::FktError;

#[test]
fn add_edge_rejects_loops_parallels_and_out_of_range() {
    let mut g = Graph::new(3);
    assert_eq!(g.add_edge(0, 1), Ok(0));
    assert_eq!(g.add_edge(1, 1), Err(GraphError::SelfLoop { v: 1 }));
    assert_eq!(g.add_edge(1, 0), Err(GraphError::ParallelEdge { u: 1, v: 0 }));
    assert_eq!(
        g.add_edge(2, 7),
        Err(GraphError::VertexOutOfRange { v: 7, n: 3 })
    );
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_between(1, 0), Some(0));
    assert_eq!(g.edge_between(1, 2), None);
}

#[test]
fn labeled_edges_intern_in_first_appearance_order() {
    let g = Graph::from_labeled_edges(
        [("a", "b"), ("b", "c"), ("c", "a")],
        &["z"],
    )
    .unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.label(0), "a");
    assert_eq!(g.label(2), "c");
    assert_eq!(g.label(3), "z");
    assert_eq!(g.degree(3), 0);
    assert_eq!(g.component_count(), 2);
}

#[test]
fn generators_match_networkx_shapes() {
    let g = grid(4, 4);
    assert_eq!((g.vertex_count(), g.edge_count()), (16, 24));
    let k4 = complete(4);
    assert_eq!(k4.edge_count(), 6);
    let c6 = cycle(6);
    assert!((0..6).all(|v| c6.degree(v) == 2));
    let s = star(5);
    assert_eq!((s.vertex_count(), s.degree(0)), (6, 5));
    let b = barbell(4, 4);
    assert_eq!((b.vertex_count(), b.edge_count()), (12, 6 + 3 + 6 + 2));
    let l = lollipop(4, 6);
    assert_eq!((l.vertex_count(), l.edge_count()), (10, 6 + 5 + 1));
    let w = wheel(6);
    assert_eq!((w.degree(0), w.edge_count()), (5, 10));
    for (_, g) in sample_graphs() {
        assert_eq!(g.component_count(), 1);
    }
}

#[test]
fn spanning_tree_covers_connected_graph() {
    let g = grid(3, 3);
    let t = spanning_tree(&g).unwrap();
    assert_eq!(t.edges.len(), 8);
    assert_eq!(t.in_tree.iter().filter(|&&b| b).count(), 8);
}

#[test]
fn spanning_tree_reports_components() {
    let g = Graph::from_edges(5, &[(0, 1), (2, 3)]).unwrap();
    assert_eq!(
        spanning_tree(&g).unwrap_err(),
        FktError::NotConnected { components: 3 }
    );
}

#[test]
fn random_planar_is_reproducible_and_connected() {
    let a = random_planar(3, 4, 0.5, 7);
    let b = random_planar(3, 4, 0.5, 7);
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.component_count(), 1);
    assert!(a.edge_count() >= 11);
}

#[test]
fn random_planar_tolerates_out_of_range_keep() {
    let nan = random_planar(3, 3, f64::NAN, 1);
    assert_eq!(nan.edges(), random_planar(3, 3, 0.0, 1).edges());
    assert_eq!(nan.edge_count(), 8);
    let all = random_planar(3, 3, f64::INFINITY, 1);
    assert_eq!(all.edges(), random_planar(3, 3, 1.0, 1).edges());
    assert_eq!(all.edge_count(), 16);
    assert_eq!(random_planar(0, 4, 0.5, 1).vertex_count(), 0);
}
