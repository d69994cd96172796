//! Edge labels and tetrahedron-sharing adjacency.
//!
//! Every distinct edge of the decomposition gets a dense label in discovery
//! order (tetrahedra in order, pairs in [`Tetrahedron::edge_pairs`] order).
//! Two labels are adjacent when their edges lie in a common tetrahedron,
//! including opposite (vertex-disjoint) edges of that tetrahedron.

use std::collections::HashMap;

use crate::constants::{is_corner, EXPECTED_EDGE_COUNT};
use crate::error::CaseTableError;
use crate::geometry::Tetrahedron;

/// Dense edge label in `0..EdgeGraph::len()`.
pub type Label = usize;

/// Canonical id of an unordered point pair: `min * 100 + max`.
///
/// Point indices are below 100, so the id is collision-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u16);

impl EdgeId {
  #[inline]
  pub fn new(u: usize, v: usize) -> Self {
    debug_assert!(u < 100 && v < 100);
    Self((u.min(v) * 100 + u.max(v)) as u16)
  }

  /// Raw id value.
  #[inline]
  pub fn raw(self) -> u16 {
    self.0
  }

  /// Endpoints as `(min, max)`.
  #[inline]
  pub fn endpoints(self) -> (usize, usize) {
    ((self.0 / 100) as usize, (self.0 % 100) as usize)
  }

  /// Whether both endpoints are cube corners.
  #[inline]
  pub fn is_cube_edge(self) -> bool {
    let (u, v) = self.endpoints();
    is_corner(u) && is_corner(v)
  }
}

/// Immutable edge graph shared by every case evaluation.
#[derive(Clone, Debug)]
pub struct EdgeGraph {
  label_of: HashMap<EdgeId, Label>,
  edges: Vec<EdgeId>,
  adjacency: Vec<Vec<Label>>,
}

impl EdgeGraph {
  /// Number of labels.
  #[inline]
  pub fn len(&self) -> usize {
    self.edges.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }

  /// Label of an edge, if it belongs to the decomposition.
  #[inline]
  pub fn label_of(&self, edge: EdgeId) -> Option<Label> {
    self.label_of.get(&edge).copied()
  }

  /// Edge behind a label.
  #[inline]
  pub fn edge(&self, label: Label) -> EdgeId {
    self.edges[label]
  }

  /// All edges in label order.
  #[inline]
  pub fn edges(&self) -> &[EdgeId] {
    &self.edges
  }

  /// Neighbors of a label, sorted ascending.
  #[inline]
  pub fn neighbors(&self, label: Label) -> &[Label] {
    &self.adjacency[label]
  }

  /// Labels of the cube's own edges, ascending.
  pub fn cube_edge_labels(&self) -> impl Iterator<Item = Label> + '_ {
    self
      .edges
      .iter()
      .enumerate()
      .filter(|(_, edge)| edge.is_cube_edge())
      .map(|(label, _)| label)
  }
}

/// Label every edge of `tetrahedra` and connect edges sharing a tetrahedron.
///
/// Fails if the decomposition does not yield [`EXPECTED_EDGE_COUNT`] labels.
pub fn build_edges(tetrahedra: &[Tetrahedron]) -> Result<EdgeGraph, CaseTableError> {
  let mut label_of: HashMap<EdgeId, Label> = HashMap::new();
  let mut edges: Vec<EdgeId> = Vec::new();

  for tet in tetrahedra {
    for (u, v) in tet.edge_pairs() {
      let id = EdgeId::new(u, v);
      label_of.entry(id).or_insert_with(|| {
        edges.push(id);
        edges.len() - 1
      });
    }
  }

  if edges.len() != EXPECTED_EDGE_COUNT {
    return Err(CaseTableError::EdgeCountMismatch {
      expected: EXPECTED_EDGE_COUNT,
      found: edges.len(),
    });
  }

  let mut adjacency: Vec<Vec<Label>> = vec![Vec::new(); edges.len()];
  for tet in tetrahedra {
    let labels = tet.edge_pairs().map(|(u, v)| label_of[&EdgeId::new(u, v)]);
    for (k, &a) in labels.iter().enumerate() {
      for &b in &labels[k + 1..] {
        adjacency[a].push(b);
        adjacency[b].push(a);
      }
    }
  }

  for neighbors in &mut adjacency {
    neighbors.sort_unstable();
    neighbors.dedup();
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(labels = edges.len(), "built edge graph");

  Ok(EdgeGraph {
    label_of,
    edges,
    adjacency,
  })
}

#[cfg(test)]
#[path = "edge_graph_test.rs"]
mod edge_graph_test;
