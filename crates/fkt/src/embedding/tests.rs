//! Embedding construction, face-walk step, and planarity rejection.

use nalgebra::Point2;

use super::*;
use crate::graph::generators::{barbell, complete, cycle, grid, random_planar, star, wheel};
use crate::matching::extract_faces;

fn k33() -> Graph {
    let edges: Vec<(usize, usize)> = (0..3)
        .flat_map(|a| (3..6).map(move |b| (a, b)))
        .collect();
    Graph::from_edges(6, &edges).unwrap()
}

fn petersen() -> Graph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5)); // outer 5-cycle
        edges.push((i, i + 5)); // spokes
        edges.push((5 + i, 5 + (i + 2) % 5)); // inner pentagram
    }
    Graph::from_edges(10, &edges).unwrap()
}

fn grid_positions(rows: usize, cols: usize) -> Vec<Point2<f64>> {
    (0..rows * cols)
        .map(|v| Point2::new((v % cols) as f64, (v / cols) as f64))
        .collect()
}

#[test]
fn triangle_walk_closes_after_three_steps() {
    let g = cycle(3);
    let emb = PathAddition.embed(&g).unwrap();
    let start = (0, 1);
    let mut cur = start;
    for _ in 0..3 {
        cur = emb.next_half_edge(cur.0, cur.1).unwrap();
    }
    assert_eq!(cur, start);
    assert_eq!(emb.next_half_edge(0, 0), None);
}

#[test]
fn twin_and_next_are_permutations() {
    let g = grid(3, 4);
    let emb = PathAddition.embed(&g).unwrap();
    let total = emb.half_edge_count();
    assert_eq!(total, 2 * g.edge_count());
    let mut hit = vec![false; total];
    for h in 0..total {
        assert_eq!(emb.twin(emb.twin(h)), h);
        assert_eq!(emb.tail(emb.twin(h)), emb.head(h));
        assert_eq!(emb.tail(emb.next(h)), emb.head(h));
        hit[emb.next(h)] = true;
    }
    assert!(hit.into_iter().all(|b| b));
}

#[test]
fn from_rotations_rejects_foreign_neighbours() {
    let g = cycle(4);
    let bad = vec![vec![1, 2], vec![0, 2], vec![1, 3], vec![2, 0]];
    assert!(matches!(
        Embedding::from_rotations(&g, bad),
        Err(FktError::MalformedEmbedding { .. })
    ));
    let short = vec![vec![1, 3], vec![0, 2]];
    assert!(matches!(
        Embedding::from_rotations(&g, short),
        Err(FktError::MalformedEmbedding { .. })
    ));
}

#[test]
fn path_addition_embeds_planar_families() {
    let graphs = [
        complete(4),
        grid(4, 5),
        wheel(8),
        barbell(4, 3),
        star(6),
        random_planar(4, 4, 0.8, 11),
        random_planar(3, 5, 0.3, 12),
    ];
    for g in &graphs {
        let emb = PathAddition.embed(g).unwrap();
        let faces = extract_faces(g, &emb).unwrap();
        assert_eq!(faces.len() + g.vertex_count(), g.edge_count() + 2);
    }
}

#[test]
fn path_addition_rejects_kuratowski_graphs() {
    assert_eq!(PathAddition.embed(&complete(5)).unwrap_err(), FktError::NotPlanar);
    assert_eq!(PathAddition.embed(&k33()).unwrap_err(), FktError::NotPlanar);
    assert_eq!(PathAddition.embed(&petersen()).unwrap_err(), FktError::NotPlanar);
}

#[test]
fn straight_line_grid_drawing_is_planar() {
    let g = grid(3, 4);
    let pos = grid_positions(3, 4);
    let emb = StraightLine { positions: &pos }.embed(&g).unwrap();
    let faces = extract_faces(&g, &emb).unwrap();
    // 6 unit squares plus the outer face.
    assert_eq!(faces.len(), 7);
    assert!(faces.faces.iter().filter(|f| f.len() == 4).count() == 6);
}

#[test]
fn straight_line_drawing_with_crossings_is_rejected() {
    // K4 drawn on a square: the two diagonals cross.
    let g = complete(4);
    let pos = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let emb = StraightLine { positions: &pos }.embed(&g).unwrap();
    assert!(matches!(
        extract_faces(&g, &emb),
        Err(FktError::MalformedEmbedding { .. })
    ));
}

#[test]
fn straight_line_requires_one_position_per_vertex() {
    let g = cycle(4);
    let pos = grid_positions(1, 3);
    assert!(StraightLine { positions: &pos }.embed(&g).is_err());
}
