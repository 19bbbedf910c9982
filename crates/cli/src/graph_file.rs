//! Graph inputs for the CLI: JSON files and `kind:params` specs.
//!
//! JSON shape: `{ "vertices": [..labels], "edges": [[a, b], ..] }`. Labels are
//! strings or integers; `vertices` is optional and only fixes the order (and
//! adds isolated vertices). Edge endpoints not listed there are appended in
//! order of first appearance.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use fkt::api::{
    barbell, complete, cycle, grid, lollipop, path, random_planar, sample_graphs, star, wheel,
};
use fkt::Graph;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(u64),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Index(i) => write!(f, "{i}"),
            Label::Name(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub vertices: Vec<Label>,
    pub edges: Vec<(Label, Label)>,
}

impl GraphFile {
    pub fn into_graph(self) -> Result<Graph> {
        let mut g = Graph::new(0);
        let mut ids: HashMap<Label, usize> = HashMap::new();
        for label in self.vertices {
            if ids.contains_key(&label) {
                bail!("vertex {label} listed twice");
            }
            let v = g.add_vertex(label.to_string());
            ids.insert(label, v);
        }
        for (a, b) in self.edges {
            let u = intern(&mut g, &mut ids, a);
            let v = intern(&mut g, &mut ids, b);
            g.add_edge(u, v)
                .with_context(|| format!("edge {} - {}", g.label(u), g.label(v)))?;
        }
        Ok(g)
    }
}

fn intern(g: &mut Graph, ids: &mut HashMap<Label, usize>, label: Label) -> usize {
    if let Some(&v) = ids.get(&label) {
        return v;
    }
    let v = g.add_vertex(label.to_string());
    ids.insert(label, v);
    v
}

/// Read a JSON graph file.
pub fn load(path: &Path) -> Result<Graph> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: GraphFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    file.into_graph()
        .with_context(|| format!("building graph from {}", path.display()))
}

/// Build a generated graph from `kind:params`.
///
/// Kinds: `grid:RxC`, `complete:N`, `cycle:N`, `path:N`, `star:LEAVES`,
/// `wheel:N`, `barbell:BELL,BRIDGE`, `lollipop:HEAD,TAIL`,
/// `random:RxC,KEEP,SEED`, `sample:NAME`.
pub fn parse_spec(spec: &str) -> Result<Graph> {
    let (kind, params) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("graph spec {spec:?} is not of the form kind:params"))?;
    let g = match kind {
        "grid" => {
            let (r, c) = dims(params)?;
            grid(r, c)
        }
        "complete" => complete(num(params)?),
        "cycle" => cycle(num(params)?),
        "path" => path(num(params)?),
        "star" => star(num(params)?),
        "wheel" => wheel(num(params)?),
        "barbell" => {
            let [a, b] = pair(params)?;
            barbell(a, b)
        }
        "lollipop" => {
            let [a, b] = pair(params)?;
            lollipop(a, b)
        }
        "random" => {
            let mut parts = params.split(',');
            let (r, c) = dims(parts.next().unwrap_or_default())?;
            let keep: f64 = parts
                .next()
                .unwrap_or("0.5")
                .trim()
                .parse()
                .context("random keep probability")?;
            if !(0.0..=1.0).contains(&keep) {
                bail!("keep probability {keep} outside [0, 1]");
            }
            let seed: u64 = parts
                .next()
                .unwrap_or("0")
                .trim()
                .parse()
                .context("random seed")?;
            random_planar(r, c, keep, seed)
        }
        "sample" => sample_graphs()
            .into_iter()
            .find(|(name, _)| *name == params)
            .map(|(_, g)| g)
            .ok_or_else(|| anyhow!("unknown sample graph {params:?}"))?,
        other => bail!("unknown graph kind {other:?}"),
    };
    Ok(g)
}

fn num(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .with_context(|| format!("expected a count, got {s:?}"))
}

fn dims(s: &str) -> Result<(usize, usize)> {
    let (r, c) = s
        .split_once('x')
        .ok_or_else(|| anyhow!("expected ROWSxCOLS, got {s:?}"))?;
    Ok((num(r)?, num(c)?))
}

fn pair(s: &str) -> Result<[usize; 2]> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two counts A,B, got {s:?}"))?;
    Ok([num(a)?, num(b)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn specs_build_the_named_families() {
        let g = parse_spec("grid:3x2").unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (6, 7));
        assert_eq!(parse_spec("barbell:4,4").unwrap().vertex_count(), 12);
        assert_eq!(parse_spec("sample:grid4x4").unwrap().vertex_count(), 16);
        assert!(parse_spec("random:3x3,0.5,7").unwrap().component_count() == 1);
    }

    #[test]
    fn bad_specs_are_rejected() {
        assert!(parse_spec("grid").is_err());
        assert!(parse_spec("grid:3").is_err());
        assert!(parse_spec("hypercube:3").is_err());
        assert!(parse_spec("random:2x2,1.5,0").is_err());
        assert!(parse_spec("sample:nope").is_err());
    }

    #[test]
    fn json_file_keeps_vertex_order_and_isolated_vertices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.json");
        fs::write(
            &path,
            r#"{"vertices": ["z", 1], "edges": [["a", "b"], ["b", 1], [1, "a"]]}"#,
        )
        .unwrap();
        let g = load(&path).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.label(0), "z");
        assert_eq!(g.label(1), "1");
        assert_eq!(g.degree(0), 0);
    }

    #[test]
    fn json_self_loop_is_an_error() {
        let file: GraphFile = serde_json::from_str(r#"{"edges": [["a", "a"]]}"#).unwrap();
        assert!(file.into_graph().is_err());
    }
}
