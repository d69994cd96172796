//! Connected components of the kept-edge subgraph.
//!
//! Each strategy reports, per label, the lowest label of its component
//! (`None` for dropped labels). Numbering is done by the caller.
//!
//! # Module Structure
//!
//! - [`union_find`]: linear disjoint-set pass (default)
//! - [`closure`]: boolean reachability closure by repeated squaring

pub mod closure;
pub(crate) mod union_find;

pub use closure::{ReachMatrix, MAX_CLOSURE_LABELS};

use crate::config::ComponentStrategy;
use crate::edge_graph::{EdgeGraph, Label};
use crate::error::CaseTableError;
use union_find::UnionFind;

/// Lowest label of each kept label's component.
pub fn component_roots(
  graph: &EdgeGraph,
  kept: &[bool],
  strategy: ComponentStrategy,
) -> Result<Vec<Option<Label>>, CaseTableError> {
  debug_assert_eq!(kept.len(), graph.len());
  match strategy {
    ComponentStrategy::UnionFind => Ok(roots_by_union_find(graph, kept)),
    ComponentStrategy::BooleanClosure => roots_by_closure(graph, kept),
  }
}

fn roots_by_union_find(graph: &EdgeGraph, kept: &[bool]) -> Vec<Option<Label>> {
  let mut uf = UnionFind::new(graph.len());
  for u in (0..graph.len()).filter(|&u| kept[u]) {
    for &v in graph.neighbors(u).iter().filter(|&&v| kept[v]) {
      uf.union_keep_min(u as u32, v as u32);
    }
  }

  (0..graph.len())
    .map(|u| kept[u].then(|| uf.find(u as u32) as Label))
    .collect()
}

fn roots_by_closure(graph: &EdgeGraph, kept: &[bool]) -> Result<Vec<Option<Label>>, CaseTableError> {
  let closure = ReachMatrix::build(graph.len(), kept, |u| graph.neighbors(u))?.into_closure();
  Ok((0..graph.len()).map(|u| closure.lowest_reachable(u)).collect())
}
