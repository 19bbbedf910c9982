//! Biconnected components (blocks) by iterative Tarjan DFS.

use crate::graph::Graph;

const UNSET: usize = usize::MAX;

/// Edge ids of every block. Bridges come out as single-edge blocks;
/// isolated vertices belong to no block.
pub(crate) fn biconnected_blocks(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut disc = vec![UNSET; n];
    let mut low = vec![0; n];
    let mut timer = 0;
    let mut blocks = Vec::new();
    let mut edge_stack: Vec<usize> = Vec::new();
    // (vertex, edge to DFS parent, next incident slot)
    let mut frames: Vec<(usize, usize, usize)> = Vec::new();

    for root in 0..n {
        if disc[root] != UNSET || graph.degree(root) == 0 {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        frames.push((root, UNSET, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, parent_edge, slot) = *frame;
            if let Some(&(w, e)) = graph.incident(v).get(slot) {
                frame.2 += 1;
                if e == parent_edge {
                    continue;
                }
                if disc[w] == UNSET {
                    edge_stack.push(e);
                    disc[w] = timer;
                    low[w] = timer;
                    timer += 1;
                    frames.push((w, e, 0));
                } else if disc[w] < disc[v] {
                    // Back edge to an ancestor.
                    edge_stack.push(e);
                    low[v] = low[v].min(disc[w]);
                }
                continue;
            }

            frames.pop();
            let Some(&(p, _, _)) = frames.last() else {
                continue;
            };
            low[p] = low[p].min(low[v]);
            if low[v] >= disc[p] {
                // `p` separates the subtree of `v`: pop its block.
                let mut block = Vec::new();
                while let Some(f) = edge_stack.pop() {
                    block.push(f);
                    if f == parent_edge {
                        break;
                    }
                }
                blocks.push(block);
            }
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{barbell, cycle, grid, star};

    fn sorted_sizes(g: &Graph) -> Vec<usize> {
        let mut sizes: Vec<usize> = biconnected_blocks(g).iter().map(Vec::len).collect();
        sizes.sort_unstable();
        sizes
    }

    #[test]
    fn cycle_and_grid_are_single_blocks() {
        assert_eq!(sorted_sizes(&cycle(6)), vec![6]);
        assert_eq!(sorted_sizes(&grid(3, 3)), vec![12]);
    }

    #[test]
    fn star_edges_are_bridges() {
        assert_eq!(sorted_sizes(&star(5)), vec![1; 5]);
    }

    #[test]
    fn barbell_splits_into_cliques_and_bridges() {
        // Two K4 blocks plus the five bridges along the handle.
        assert_eq!(sorted_sizes(&barbell(4, 4)), vec![1, 1, 1, 1, 1, 6, 6]);
    }

    #[test]
    fn every_edge_lands_in_exactly_one_block() {
        let g = barbell(3, 2);
        let mut seen = vec![0; g.edge_count()];
        for block in biconnected_blocks(&g) {
            for e in block {
                seen[e] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1));
    }
}
