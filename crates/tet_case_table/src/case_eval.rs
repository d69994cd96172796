//! Per-case evaluation: sample values, cut edges and patch labeling.
//!
//! A case is an 8-bit corner mask. Corner `k` samples 1.0 when bit `k` is
//! set and 0.0 otherwise; face centers and the body center take the mean of
//! their corners. An edge is cut when exactly one endpoint lies strictly
//! above the threshold. Cut edges are dropped, and the remaining edges are
//! grouped into patches numbered lowest-label-first starting at 1.

use crate::components::component_roots;
use crate::config::GeneratorConfig;
use crate::constants::{face_center, BODY_CENTER, CORNER_COUNT, CUBE_FACES, POINT_COUNT};
use crate::edge_graph::{EdgeGraph, Label};
use crate::error::CaseTableError;

/// Per-label state after evaluating a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
  /// Edge straddles the isosurface and takes no part in grouping.
  Cut,
  /// Kept edge not yet assigned to a patch.
  Unlabeled,
  /// Kept edge in patch `n` (n >= 1).
  Component(u32),
}

impl Mark {
  #[inline]
  pub fn is_cut(self) -> bool {
    matches!(self, Mark::Cut)
  }

  /// Patch id, if labeled.
  #[inline]
  pub fn component(self) -> Option<u32> {
    match self {
      Mark::Component(n) => Some(n),
      _ => None,
    }
  }
}

/// Result of evaluating one corner mask.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseEvaluation {
  pub case_mask: u8,
  /// Sample value of every point.
  pub values: [f64; POINT_COUNT],
  /// Mark of every edge label.
  pub marks: Vec<Mark>,
  /// Number of disjoint patches.
  pub component_count: u32,
}

impl CaseEvaluation {
  /// Number of cut labels.
  pub fn cut_count(&self) -> usize {
    self.marks.iter().filter(|m| m.is_cut()).count()
  }

  #[inline]
  pub fn mark(&self, label: Label) -> Mark {
    self.marks[label]
  }
}

/// Sample values of all 15 points for `case_mask`.
pub fn sample_values(case_mask: u8) -> [f64; POINT_COUNT] {
  let mut values = [0.0; POINT_COUNT];

  for (k, value) in values.iter_mut().enumerate().take(CORNER_COUNT) {
    *value = if case_mask & (1 << k) != 0 { 1.0 } else { 0.0 };
  }

  values[BODY_CENTER] = values[..CORNER_COUNT].iter().sum::<f64>() * 0.125;

  for (face, corners) in CUBE_FACES.iter().enumerate() {
    let sum: f64 = corners.iter().map(|&c| values[c]).sum();
    values[face_center(face)] = sum * 0.25;
  }

  values
}

/// Exactly one of `a`, `b` lies strictly above `threshold`.
#[inline]
pub fn straddles(a: f64, b: f64, threshold: f64) -> bool {
  (a > threshold) ^ (b > threshold)
}

/// Evaluate one case against the shared edge graph.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(case = case_mask)))]
pub fn evaluate(
  case_mask: u8,
  graph: &EdgeGraph,
  config: &GeneratorConfig,
) -> Result<CaseEvaluation, CaseTableError> {
  let values = sample_values(case_mask);

  let mut marks: Vec<Mark> = graph
    .edges()
    .iter()
    .map(|edge| {
      let (u, v) = edge.endpoints();
      if straddles(values[u], values[v], config.threshold) {
        Mark::Cut
      } else {
        Mark::Unlabeled
      }
    })
    .collect();

  let kept: Vec<bool> = marks.iter().map(|m| !m.is_cut()).collect();
  let roots = component_roots(graph, &kept, config.strategy)?;

  // Scanning in label order meets each component's root first.
  let mut ids: Vec<Option<u32>> = vec![None; graph.len()];
  let mut next_id = 1u32;
  for label in 0..graph.len() {
    let Some(root) = roots[label] else {
      continue;
    };
    let id = *ids[root].get_or_insert_with(|| {
      next_id += 1;
      next_id - 1
    });
    marks[label] = Mark::Component(id);
  }

  if let Some(label) = marks.iter().position(|m| *m == Mark::Unlabeled) {
    return Err(CaseTableError::UnlabeledEdge { case_mask, label });
  }

  let component_count = next_id - 1;

  #[cfg(feature = "tracing")]
  tracing::debug!(
    case_mask,
    component_count,
    cut = marks.iter().filter(|m| m.is_cut()).count(),
    "evaluated case"
  );

  Ok(CaseEvaluation {
    case_mask,
    values,
    marks,
    component_count,
  })
}

#[cfg(test)]
#[path = "case_eval_test.rs"]
mod case_eval_test;
