use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fkt::api::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod graph_file;
mod provenance;

/// Largest vertex count `--verify` will brute-force.
const VERIFY_MAX_VERTICES: usize = 30;

#[derive(Parser)]
#[command(name = "fkt-cli")]
#[command(about = "Count perfect matchings of planar graphs (FKT)")]
#[command(version = fkt::VERSION)]
struct Cmd {
    /// Log verbosity: -v for stage events, -vv for per-face events
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Count matchings of the built-in sample graphs
    Samples {
        #[arg(long, value_enum, default_value_t = Method::Exact)]
        method: Method,
        /// Cross-check every count by exhaustive search
        #[arg(long)]
        verify: bool,
    },
    /// Count matchings of one graph
    Count {
        /// Generated graph, e.g. `grid:4x4`, `barbell:4,4`, `random:4x4,0.6,7`
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        graph: Option<String>,
        /// JSON file `{ "vertices": [..], "edges": [[a, b], ..] }`
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Method::Exact)]
        method: Method,
        /// Print the oriented skew-symmetric adjacency matrix
        #[arg(long)]
        show_matrix: bool,
        /// Write an SVG drawing of the Pfaffian orientation
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Cross-check the count by exhaustive search
        #[arg(long)]
        verify: bool,
        /// Write a JSON result plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Exact modular Pfaffian
    Exact,
    /// Floating-point LU with rounding
    FloatLu,
}

impl Method {
    fn cfg(self) -> FktCfg {
        match self {
            Method::Exact => FktCfg::default(),
            Method::FloatLu => FktCfg::float_lu(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Samples { method, verify } => samples(method, verify),
        Action::Count {
            graph,
            input,
            method,
            show_matrix,
            svg,
            verify,
            out,
        } => {
            let (source, g) = match (graph, input) {
                (Some(spec), _) => {
                    let g = graph_file::parse_spec(&spec)?;
                    (spec, g)
                }
                (None, Some(path)) => {
                    let g = graph_file::load(&path)?;
                    (path.display().to_string(), g)
                }
                (None, None) => bail!("one of --graph or --input is required"),
            };
            count(CountArgs {
                source,
                graph: g,
                method,
                show_matrix,
                svg,
                verify,
                out,
            })
        }
    }
}

fn samples(method: Method, verify: bool) -> Result<()> {
    tracing::info!(method = ?method, verify, "samples");
    for (name, g) in sample_graphs() {
        let run = run_fkt(&g, &PathAddition, method.cfg())
            .with_context(|| format!("sample {name}"))?;
        print!(
            "{name:<12} |V|={:<3} |E|={:<3} faces={:<3} matchings={}",
            g.vertex_count(),
            g.edge_count(),
            run.orientation.faces.len(),
            run.count
        );
        if verify {
            check_brute(name, &g, run.count)?;
            print!("  (verified)");
        }
        println!();
    }
    Ok(())
}

struct CountArgs {
    source: String,
    graph: Graph,
    method: Method,
    show_matrix: bool,
    svg: Option<PathBuf>,
    verify: bool,
    out: Option<PathBuf>,
}

fn count(args: CountArgs) -> Result<()> {
    let g = &args.graph;
    tracing::info!(
        source = %args.source,
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        "count"
    );
    let cfg = args.method.cfg();
    let run = match &args.svg {
        Some(path) => {
            let mut vis = SvgVisualizer::default();
            let run = run_fkt_with_visualizer(g, &PathAddition, cfg, &mut vis)
                .with_context(|| format!("counting matchings of {}", args.source))?;
            provenance::ensure_parent(path)?;
            std::fs::write(path, vis.svg.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "svg_written");
            run
        }
        None => run_fkt(g, &PathAddition, cfg)
            .with_context(|| format!("counting matchings of {}", args.source))?,
    };

    println!("matchings: {}", run.count);
    if args.show_matrix {
        print!("{}", run.matrix);
    }
    if args.verify {
        check_brute(&args.source, g, run.count)?;
        println!("verified by exhaustive search");
    }
    if let Some(out) = &args.out {
        write_result(out, &args, &run)?;
    }
    Ok(())
}

fn check_brute(name: &str, g: &Graph, count: u128) -> Result<()> {
    if g.vertex_count() > VERIFY_MAX_VERTICES {
        tracing::warn!(
            name,
            vertices = g.vertex_count(),
            limit = VERIFY_MAX_VERTICES,
            "verify_skipped"
        );
        return Ok(());
    }
    let brute = count_perfect_matchings_brute(g);
    if brute != count {
        bail!("{name}: FKT count {count} differs from exhaustive count {brute}");
    }
    Ok(())
}

fn write_result(out: &Path, args: &CountArgs, run: &FktRun) -> Result<()> {
    let g = &args.graph;
    let doc = serde_json::json!({
        "source": args.source,
        "vertices": g.vertex_count(),
        "edges": g.edge_count(),
        "faces": run.orientation.faces.len(),
        // u128 does not fit JSON numbers in general
        "matchings": run.count.to_string(),
        "arcs": run
            .orientation
            .oriented
            .arcs()
            .map(|(u, v)| [g.label(u), g.label(v)])
            .collect::<Vec<_>>(),
    });
    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(
        "count",
        serde_json::json!({
            "source": args.source,
            "method": format!("{:?}", args.method),
            "verify": args.verify,
        }),
    );
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "result_written");
    Ok(())
}
