//! Graphviz view of the kept-edge subgraph of one case.
//!
//! Nodes are named `e{u}_{v}` after their endpoints; cube edges are bold.
//! Cut labels and every adjacency touching them are omitted.

use std::fmt::Write as _;

use crate::case_eval::Mark;
use crate::edge_graph::{EdgeGraph, EdgeId};

/// Graphviz node name of an edge.
pub fn node_name(edge: EdgeId) -> String {
  let (u, v) = edge.endpoints();
  format!("e{}_{}", u, v)
}

/// Render the kept subgraph as a `strict graph`.
pub fn render(graph: &EdgeGraph, marks: &[Mark]) -> String {
  debug_assert_eq!(marks.len(), graph.len());

  let mut out = String::from("strict graph cube {\n");
  for label in (0..graph.len()).filter(|&l| !marks[l].is_cut()) {
    let edge = graph.edge(label);
    let name = node_name(edge);
    if edge.is_cube_edge() {
      let _ = writeln!(out, "{} [style = bold];", name);
    }
    let _ = write!(out, "{} -- {{", name);
    for &neighbor in graph.neighbors(label) {
      if marks[neighbor].is_cut() {
        continue;
      }
      let _ = write!(out, "{} ", node_name(graph.edge(neighbor)));
    }
    out.push_str("}\n");
  }
  out.push_str("}\n");
  out
}
