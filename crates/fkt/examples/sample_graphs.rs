//! Perfect-matching counts for the built-in sample graphs.
//!
//! Prints one line per graph with the FKT count and the brute-force count,
//! then the oriented adjacency matrix of the 2x2 grid.
//!
//! Run:
//! `cargo run -p fkt --example sample_graphs`

use fkt::api::*;

fn main() {
    for (name, g) in sample_graphs() {
        match count_perfect_matchings(&g) {
            Ok(count) => println!(
                "{name:<12} |V|={:<3} |E|={:<3} matchings={count:<6} brute={}",
                g.vertex_count(),
                g.edge_count(),
                count_perfect_matchings_brute(&g)
            ),
            Err(err) => println!("{name:<12} error: {err}"),
        }
    }

    let square = grid(2, 2);
    let run = run_fkt(&square, &PathAddition, FktCfg::default())
        .expect("2x2 grid is planar and connected");
    println!("\norientation matrix of grid2x2 (|Pf| = {}):", run.count);
    print!("{}", run.matrix);
}
