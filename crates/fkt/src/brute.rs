//! Exhaustive perfect-matching count, used as a correctness oracle.

use crate::graph::Graph;

/// Count perfect matchings by matching the lowest free vertex in every
/// possible way. Exponential; intended for graphs with a few dozen edges.
pub fn count_perfect_matchings_brute(graph: &Graph) -> u128 {
    let n = graph.vertex_count();
    if n % 2 == 1 {
        return 0;
    }
    let mut matched = vec![false; n];
    extend(graph, &mut matched, 0)
}

fn extend(graph: &Graph, matched: &mut [bool], from: usize) -> u128 {
    let Some(v) = (from..matched.len()).find(|&v| !matched[v]) else {
        return 1;
    };
    matched[v] = true;
    let mut total = 0;
    for w in graph.neighbors(v) {
        if !matched[w] {
            matched[w] = true;
            total += extend(graph, matched, v + 1);
            matched[w] = false;
        }
    }
    matched[v] = false;
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{complete, cycle, grid, star};

    #[test]
    fn known_counts() {
        assert_eq!(count_perfect_matchings_brute(&Graph::new(0)), 1);
        assert_eq!(count_perfect_matchings_brute(&grid(2, 2)), 2);
        assert_eq!(count_perfect_matchings_brute(&grid(4, 4)), 36);
        assert_eq!(count_perfect_matchings_brute(&complete(4)), 3);
        assert_eq!(count_perfect_matchings_brute(&complete(6)), 15);
        assert_eq!(count_perfect_matchings_brute(&cycle(6)), 2);
        assert_eq!(count_perfect_matchings_brute(&star(5)), 0);
        assert_eq!(count_perfect_matchings_brute(&star(1)), 1);
    }
}
